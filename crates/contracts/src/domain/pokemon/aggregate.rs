use serde::{Deserialize, Serialize};

// ============================================================================
// List endpoint
// ============================================================================

/// Ответ `GET /pokemon/?limit=..&offset=..`
///
/// `count`, `next` and `previous` are part of the payload but the list view
/// only consumes `results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonListResponse {
    pub results: Vec<PokemonSummary>,
}

/// Minimal listing record: name plus the URL of the detail resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    pub url: String,
}

impl PokemonSummary {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Numeric id encoded as the last non-empty path segment of `url`.
    ///
    /// `https://pokeapi.co/api/v2/pokemon/25/` -> `Some(25)`
    pub fn id(&self) -> Option<u32> {
        self.url
            .split('/')
            .filter(|segment| !segment.is_empty())
            .last()
            .and_then(|segment| segment.parse().ok())
    }
}

// ============================================================================
// Detail endpoint
// ============================================================================

/// Ответ `GET /pokemon/{id}/`
///
/// Only `sprites` is required; the remaining fields are used by the detail
/// page and default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: String,
    pub sprites: PokemonSprites,
    /// Decimetres
    #[serde(default)]
    pub height: u32,
    /// Hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
}

impl PokemonDetail {
    /// Type names ordered by slot.
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.into_iter().map(|s| s.kind.name.clone()).collect()
    }

    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

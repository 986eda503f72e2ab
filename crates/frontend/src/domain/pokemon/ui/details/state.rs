use contracts::domain::pokemon::PokemonDetail;

use crate::domain::pokemon::api::LoadFailure;

pub const INVALID_ID_MESSAGE: &str = "Ese pokémon no existe.";

/// Route parameter to pokémon id. Zero and non-numeric ids are rejected.
pub fn parse_route_id(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|id| *id > 0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct PokemonDetailView {
    pub number: String,
    pub name: String,
    pub image: String,
    pub shiny_image: Option<String>,
    pub types: Vec<String>,
    pub height: String,
    pub weight: String,
}

impl PokemonDetailView {
    pub fn from_detail(id: u32, detail: PokemonDetail) -> Self {
        let name = if detail.name.is_empty() {
            format!("#{}", id)
        } else {
            detail.name.clone()
        };
        Self {
            number: id.to_string(),
            name,
            types: detail.type_names(),
            height: format!("{:.1} m", detail.height_m()),
            weight: format!("{:.1} kg", detail.weight_kg()),
            image: detail.sprites.front_default.unwrap_or_default(),
            shiny_image: detail.sprites.front_shiny,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailsState {
    pub detail: Option<PokemonDetailView>,
    pub is_loading: bool,
    pub error_message: String,
}

impl DetailsState {
    pub fn begin_load(&mut self) {
        self.detail = None;
        self.is_loading = true;
        self.error_message.clear();
    }

    pub fn finish(&mut self, id: u32, result: Result<PokemonDetail, LoadFailure>) {
        self.is_loading = false;
        match result {
            Ok(detail) => {
                self.detail = Some(PokemonDetailView::from_detail(id, detail));
                self.error_message.clear();
            }
            Err(e) => {
                self.detail = None;
                self.error_message = e.user_message().to_string();
            }
        }
    }

    pub fn reject_id(&mut self) {
        self.detail = None;
        self.is_loading = false;
        self.error_message = INVALID_ID_MESSAGE.to_string();
    }
}

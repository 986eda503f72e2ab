use async_trait::async_trait;
use contracts::domain::pokemon::{PokemonDetail, PokemonListResponse, PokemonSummary};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::PokedexConfig;

/// The only message the user ever sees for a failed load.
pub const LOAD_FAILURE_MESSAGE: &str =
    "No se pudieron cargar los pokémon. Inténtalo de nuevo más tarde.";

/// Any failure of a fetch cycle. Variants are kept apart for logging only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadFailure {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("no numeric id in url '{0}'")]
    MalformedUrl(String),
}

impl LoadFailure {
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}

/// Remote source of the pokémon list and of per-item details.
#[async_trait(?Send)]
pub trait PokemonApi {
    async fn fetch_list(&self) -> Result<Vec<PokemonSummary>, LoadFailure>;

    async fn fetch_detail(&self, id: u32) -> Result<PokemonDetail, LoadFailure>;
}

/// [`PokemonApi`] over browser `fetch`.
#[derive(Debug, Clone)]
pub struct HttpPokemonApi {
    config: PokedexConfig,
}

impl HttpPokemonApi {
    pub fn new(config: PokedexConfig) -> Self {
        Self { config }
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadFailure> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| LoadFailure::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(LoadFailure::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| LoadFailure::Parse(e.to_string()))
}

#[async_trait(?Send)]
impl PokemonApi for HttpPokemonApi {
    async fn fetch_list(&self) -> Result<Vec<PokemonSummary>, LoadFailure> {
        let url = self.config.list_url();
        log::debug!("GET {}", url);
        let list: PokemonListResponse = get_json(&url).await?;
        Ok(list.results)
    }

    async fn fetch_detail(&self, id: u32) -> Result<PokemonDetail, LoadFailure> {
        get_json(&self.config.detail_url(id)).await
    }
}

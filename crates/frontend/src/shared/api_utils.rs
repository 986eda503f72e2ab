//! API configuration for the remote Pokémon REST service
//!
//! Defaults point at the public PokeAPI. Any field can be overridden through
//! the page query string, e.g. `/?api=http://localhost:8000/api/v2&limit=20`.

use contracts::shared::endpoints::{
    detail_url, list_url, DEFAULT_BASE_URL, DEFAULT_PAGE_LIMIT,
};
use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokedexConfig {
    pub base_url: String,
    pub page_limit: u32,
    pub offset: u32,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

/// Raw query values, kept as strings so one malformed value does not
/// discard the others.
#[derive(Debug, Default, Deserialize)]
struct ConfigQuery {
    api: Option<String>,
    limit: Option<String>,
    offset: Option<String>,
}

impl PokedexConfig {
    /// Build config from a query string (with or without the leading `?`)
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut config = Self::default();
        if query.is_empty() {
            return config;
        }

        let parsed: ConfigQuery = match serde_qs::from_str(query) {
            Ok(q) => q,
            Err(e) => {
                log::warn!("Ignoring malformed config query '{}': {}", query, e);
                return config;
            }
        };

        if let Some(api) = parsed.api.filter(|a| !a.trim().is_empty()) {
            config.base_url = api.trim().to_string();
        }
        if let Some(limit) = parsed
            .limit
            .and_then(|l| l.parse::<u32>().ok())
            .filter(|l| *l > 0)
        {
            config.page_limit = limit;
        }
        if let Some(offset) = parsed.offset.and_then(|o| o.parse::<u32>().ok()) {
            config.offset = offset;
        }
        config
    }

    /// Config for the current page. Falls back to defaults without a window.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    pub fn list_url(&self) -> String {
        list_url(&self.base_url, self.page_limit, self.offset)
    }

    pub fn detail_url(&self, id: u32) -> String {
        detail_url(&self.base_url, id)
    }
}

/// Config provided by `App`, or the default when rendered standalone.
pub fn use_pokedex_config() -> PokedexConfig {
    use_context::<PokedexConfig>().unwrap_or_default()
}

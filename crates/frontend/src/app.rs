use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::PokedexConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = PokedexConfig::from_location();
    log::info!("Using pokemon API at {}", config.base_url);
    provide_context(config);

    view! {
        <AppRoutes />
    }
}

pub mod state;

use self::state::{parse_route_id, DetailsState, PokemonDetailView};
use crate::domain::pokemon::api::{HttpPokemonApi, PokemonApi};
use crate::domain::pokemon::model::card_label;
use crate::shared::api_utils::use_pokedex_config;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// `/pokemon/:id`
#[component]
pub fn PokemonDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let api = StoredValue::new(HttpPokemonApi::new(use_pokedex_config()));
    let state = RwSignal::new(DetailsState::default());

    Effect::new(move |_| {
        let raw = params.with(|p| p.get("id")).unwrap_or_default();
        let Some(id) = parse_route_id(&raw) else {
            log::warn!("Invalid pokemon id in route: '{}'", raw);
            state.update(|s| s.reject_id());
            return;
        };

        state.update(|s| s.begin_load());
        let api = api.get_value();
        spawn_local(async move {
            let result = api.fetch_detail(id).await;
            if let Err(e) = &result {
                log::error!("Failed to load pokemon {}: {}", id, e);
            }
            if state.try_update(|s| s.finish(id, result)).is_none() {
                log::debug!("Details view disposed before pokemon {} resolved", id);
            }
        });
    });

    view! {
        <div class="content pokedex">
            <PageHeader title="Pokédex">
                <A href="/">"Volver"</A>
            </PageHeader>

            {move || state.with(|s| {
                if s.is_loading {
                    view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                            <Spinner />
                        </Flex>
                    }.into_any()
                } else if !s.error_message.is_empty() {
                    let message = s.error_message.clone();
                    view! {
                        <div class="error-state" role="alert">
                            <p class="error-state__message">{message}</p>
                        </div>
                    }.into_any()
                } else if let Some(detail) = s.detail.clone() {
                    view! { <DetailCard detail=detail /> }.into_any()
                } else {
                    view! { <div class="pokemon-detail pokemon-detail--empty"></div> }.into_any()
                }
            })}
        </div>
    }
}

#[component]
fn DetailCard(detail: PokemonDetailView) -> impl IntoView {
    let PokemonDetailView {
        number,
        name,
        image,
        shiny_image,
        types,
        height,
        weight,
    } = detail;
    let title = card_label(&number, &name);
    let shiny_alt = format!("{} shiny", name);

    view! {
        <CardAnimated style="max-width: 420px; margin: 0 auto;">
            <div class="pokemon-detail">
                <div class="pokemon-detail__sprites">
                    <img src=image alt=name />
                    {shiny_image.map(|src| view! { <img src=src alt=shiny_alt /> })}
                </div>
                <h2 class="pokemon-detail__title">{title}</h2>
                <div class="pokemon-detail__types">
                    {types.into_iter().map(|t| {
                        let class = format!("type-badge type-badge--{}", t);
                        view! { <span class=class>{t}</span> }
                    }).collect_view()}
                </div>
                <dl class="pokemon-detail__stats">
                    <dt>"Altura"</dt>
                    <dd>{height}</dd>
                    <dt>"Peso"</dt>
                    <dd>{weight}</dd>
                </dl>
            </div>
        </CardAnimated>
    }
}

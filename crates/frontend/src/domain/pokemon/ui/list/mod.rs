pub mod state;

use self::state::{create_state, Presentation};
use crate::domain::pokemon::api::HttpPokemonApi;
use crate::domain::pokemon::loader::load_pokemon_cards;
use crate::domain::pokemon::ui::card::PokemonBox;
use crate::shared::api_utils::use_pokedex_config;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Home page: every pokémon of the configured page as a card grid.
#[component]
pub fn HomeView() -> impl IntoView {
    let config = use_pokedex_config();
    let subtitle = format!(
        "#{} - #{}",
        config.offset.saturating_add(1),
        config.offset.saturating_add(config.page_limit)
    );
    let api = StoredValue::new(HttpPokemonApi::new(config));
    let state = create_state();
    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading));

    let load = move || {
        if state.try_update(|s| s.begin_load()).is_none() {
            return;
        }
        let api = api.get_value();
        spawn_local(async move {
            let result = load_pokemon_cards(&api).await;
            if let Err(e) = &result {
                log::error!("Failed to load pokemon list: {}", e);
            }
            // the view may be gone by now; a disposed signal drops the result
            if state.try_update(|s| s.finish(result)).is_none() {
                log::debug!("Home view disposed before the pokemon list resolved");
            }
        });
    };

    load();

    view! {
        <div class="content pokedex">
            <PageHeader title="Pokédex" subtitle=subtitle>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=is_loading
                >
                    "Recargar"
                </Button>
            </PageHeader>

            {move || state.with(|s| match s.presentation() {
                Presentation::Loading => view! {
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                        <Spinner />
                        <span>"Cargando pokémon..."</span>
                    </Flex>
                }.into_any(),
                Presentation::Error(message) => {
                    let message = message.to_string();
                    view! {
                        <div class="error-state" role="alert">
                            <p class="error-state__message">{message}</p>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| load()>
                                "Reintentar"
                            </Button>
                        </div>
                    }.into_any()
                }
                Presentation::Cards(items) => {
                    let cards = items.to_vec();
                    view! {
                        <div class="pokemon-grid">
                            {cards.into_iter().enumerate().map(|(index, card)| view! {
                                <PokemonBox
                                    number=card.number
                                    name=card.name
                                    img=card.image
                                    to=card.link_target
                                    delay_ms=stagger_delay(index)
                                />
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
                Presentation::Empty => view! { <div class="pokemon-grid"></div> }.into_any(),
            })}
        </div>
    }
}

use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::pokemon::model::card_label;
use crate::shared::components::card_animated::CardAnimated;

/// Clickable card of one pokémon: sprite, `"{number} {name}"`, link to `to`.
#[component]
pub fn PokemonBox(
    #[prop(into)] number: String,
    #[prop(into)] name: String,
    /// Sprite URL
    #[prop(into)]
    img: String,
    /// Detail route, `/pokemon/{number}`
    #[prop(into)]
    to: String,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let label = card_label(&number, &name);

    view! {
        <CardAnimated delay_ms=delay_ms>
            <div class="pokemon-box">
                <A href=to>
                    <img class="pokemon-box__sprite" src=img alt=name loading="lazy" />
                    <span class="pokemon-box__label">{label}</span>
                </A>
            </div>
        </CardAnimated>
    }
}

use crate::domain::pokemon::ui::{HomeView, PokemonDetailsPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="not-found">"Página no encontrada."</p> }>
                    <Route path=path!("/") view=HomeView />
                    <Route path=path!("/pokemon/:id") view=PokemonDetailsPage />
                </Routes>
            </main>
        </Router>
    }
}

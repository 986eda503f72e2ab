use leptos::prelude::*;

use crate::domain::pokemon::api::LoadFailure;
use crate::domain::pokemon::model::PokemonCard;

/// State of the home list for one mount.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub items: Vec<PokemonCard>,
    pub is_loading: bool,
    pub error_message: String,
}

/// What the list region shows, in precedence order.
#[derive(Debug, PartialEq, Eq)]
pub enum Presentation<'a> {
    Loading,
    Error(&'a str),
    Cards(&'a [PokemonCard]),
    Empty,
}

impl ViewState {
    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.error_message.clear();
        self.items.clear();
    }

    pub fn finish(&mut self, result: Result<Vec<PokemonCard>, LoadFailure>) {
        self.is_loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error_message.clear();
            }
            Err(e) => {
                self.items.clear();
                self.error_message = e.user_message().to_string();
            }
        }
    }

    pub fn presentation(&self) -> Presentation<'_> {
        if self.is_loading {
            Presentation::Loading
        } else if !self.error_message.is_empty() {
            Presentation::Error(&self.error_message)
        } else if !self.items.is_empty() {
            Presentation::Cards(&self.items)
        } else {
            Presentation::Empty
        }
    }

    /// Number of cards actually rendered.
    pub fn rendered_cards(&self) -> usize {
        match self.presentation() {
            Presentation::Cards(items) => items.len(),
            _ => 0,
        }
    }
}

pub fn create_state() -> RwSignal<ViewState> {
    RwSignal::new(ViewState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pokemon::api::LOAD_FAILURE_MESSAGE;

    fn cards() -> Vec<PokemonCard> {
        vec![
            PokemonCard::new(1, "bulbasaur", Some("bulbasaur.png".to_string())),
            PokemonCard::new(2, "ivysaur", Some("ivysaur.png".to_string())),
        ]
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = ViewState::default();
        assert_eq!(state.presentation(), Presentation::Empty);
        assert_eq!(state.rendered_cards(), 0);
    }

    #[test]
    fn test_loading_hides_everything_else() {
        let mut state = ViewState::default();
        state.begin_load();
        assert!(state.is_loading);
        assert_eq!(state.presentation(), Presentation::Loading);
        assert_eq!(state.rendered_cards(), 0);
    }

    #[test]
    fn test_success_populates_items() {
        let mut state = ViewState::default();
        state.begin_load();
        state.finish(Ok(cards()));
        assert!(!state.is_loading);
        assert!(state.error_message.is_empty());
        assert_eq!(state.rendered_cards(), 2);
        match state.presentation() {
            Presentation::Cards(items) => {
                assert_eq!(items[0].name, "bulbasaur");
                assert_eq!(items[1].image, "ivysaur.png");
            }
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_shows_only_error() {
        let mut state = ViewState::default();
        state.begin_load();
        state.finish(Err(LoadFailure::Transport("Error API fallida".to_string())));
        assert!(!state.is_loading);
        assert!(state.items.is_empty());
        assert_eq!(state.presentation(), Presentation::Error(LOAD_FAILURE_MESSAGE));
        assert_eq!(state.rendered_cards(), 0);
    }

    #[test]
    fn test_forced_empty_state() {
        let state = ViewState {
            items: Vec::new(),
            is_loading: false,
            error_message: String::new(),
        };
        assert_eq!(state.presentation(), Presentation::Empty);
        assert_eq!(state.rendered_cards(), 0);
    }

    #[test]
    fn test_reload_after_error_clears_message() {
        let mut state = ViewState::default();
        state.finish(Err(LoadFailure::Parse("bad json".to_string())));
        state.begin_load();
        assert!(state.error_message.is_empty());
        state.finish(Ok(cards()));
        assert_eq!(state.rendered_cards(), 2);
    }
}

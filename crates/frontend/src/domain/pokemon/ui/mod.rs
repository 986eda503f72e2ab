pub mod card;
pub mod details;
pub mod list;

pub use card::PokemonBox;
pub use details::PokemonDetailsPage;
pub use list::HomeView;

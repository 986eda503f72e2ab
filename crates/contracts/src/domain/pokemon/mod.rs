pub mod aggregate;

pub use aggregate::{
    NamedResource, PokemonDetail, PokemonListResponse, PokemonSprites, PokemonSummary,
    PokemonTypeSlot,
};

use futures::future::try_join_all;

use super::api::{LoadFailure, PokemonApi};
use super::model::PokemonCard;

/// One fetch cycle: the list, then every detail concurrently.
///
/// Cards come out in list order. The first failing request fails the cycle.
pub async fn load_pokemon_cards<A>(api: &A) -> Result<Vec<PokemonCard>, LoadFailure>
where
    A: PokemonApi + ?Sized,
{
    let summaries = api.fetch_list().await?;
    log::debug!("Pokemon list returned {} entries", summaries.len());

    let ids = summaries
        .iter()
        .map(|s| s.id().ok_or_else(|| LoadFailure::MalformedUrl(s.url.clone())))
        .collect::<Result<Vec<u32>, _>>()?;

    let details = try_join_all(ids.iter().map(|&id| api.fetch_detail(id))).await?;

    let cards = summaries
        .into_iter()
        .zip(ids)
        .zip(details)
        .map(|((summary, id), detail)| {
            PokemonCard::new(id, summary.name, detail.sprites.front_default)
        })
        .collect::<Vec<_>>();

    log::info!("Loaded {} pokemon cards", cards.len());
    Ok(cards)
}

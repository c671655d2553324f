use std::time::Instant;

use super::{
    Collection,
    DeckError,
    Match,
};
use crate::{
    config::Config,
    persistence::CacheStore,
    remote::{
        acquire_all,
        DeckApi,
        PageSource,
    },
    search::search,
};

/// Reads the deck from the cache, or fetches all of it and caches it on first use.
/// The cache is written only after every page has been fetched.
pub fn load_or_acquire<S: PageSource + ?Sized>(
    deck_id: &str,
    source: &S,
    store: &CacheStore,
    max_pages: usize,
    refresh: bool,
) -> Result<Collection, DeckError> {
    let cache_path = store.path_for(deck_id)?;

    if store.has(deck_id) && !refresh {
        tracing::info!("Cached file [{}] exists. Loading the content.", cache_path.display());
        return store.load(deck_id);
    }

    if refresh {
        tracing::info!("Refreshing cached file [{}] from the deck service.", cache_path.display());
    } else {
        tracing::info!(
            "Cached file [{}] does not exist. Using the deck service to create it.",
            cache_path.display()
        );
    }

    let start = Instant::now();
    let collection = acquire_all(source, deck_id, max_pages)?;
    tracing::info!(
        sets = collection.len(),
        cards = collection.card_count(),
        "Fetched deck in {:?}",
        start.elapsed()
    );

    store.save(deck_id, &collection)?;
    Ok(collection)
}

pub fn run(config: &Config) -> Result<Vec<Match>, DeckError> {
    config.validate()?;

    let api = DeckApi::new(&config.base_url, config.timeout())?;
    let store = CacheStore::new(config.cache_dir());
    let collection =
        load_or_acquire(&config.deck_id, &api, &store, config.max_pages, config.refresh)?;

    let matches = search(&collection, &config.query);
    tracing::info!("{} matches for \"{}\"", matches.len(), config.query);
    Ok(matches)
}

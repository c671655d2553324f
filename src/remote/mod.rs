pub mod api;

use serde::Deserialize;

pub use api::DeckApi;

use crate::core::{
    Card,
    Collection,
    DeckError,
    DeckSet,
};

/// Responses at or below this length mean there is no set at the requested page.
pub const END_OF_DATA_MAX_LEN: usize = 5;
/// Bytes of envelope that precede the JSON body of a page.
pub const ENVELOPE_PREFIX_LEN: usize = 3;

/// A set as it arrives from the deck service, before its page index is stamped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSet {
    pub name: String,
    pub cards: Vec<Card>,
}

impl RawSet {
    pub fn into_set(self, index: usize) -> DeckSet {
        DeckSet { name: self.name, cards: self.cards, index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Set(RawSet),
    EndOfData,
}

pub trait PageSource {
    fn fetch_page(&self, deck_id: &str, page_index: usize) -> Result<PageOutcome, DeckError>;
}

pub fn decode_page(body: &[u8]) -> Result<PageOutcome, DeckError> {
    if body.len() <= END_OF_DATA_MAX_LEN {
        return Ok(PageOutcome::EndOfData);
    }

    let set: RawSet = serde_json::from_slice(&body[ENVELOPE_PREFIX_LEN..])
        .map_err(|e| DeckError::decode("deck page payload", e))?;
    Ok(PageOutcome::Set(set))
}

/// Fetches pages 0, 1, 2, ... one at a time until the source reports end of data.
///
/// Any error aborts the whole acquisition and nothing fetched so far is returned.
/// `max_pages` bounds the loop for sources that never send the end-of-data response.
pub fn acquire_all<S: PageSource + ?Sized>(
    source: &S,
    deck_id: &str,
    max_pages: usize,
) -> Result<Collection, DeckError> {
    let mut sets = Vec::new();

    for page_index in 0..max_pages {
        match source.fetch_page(deck_id, page_index)? {
            PageOutcome::EndOfData => {
                tracing::debug!(deck_id, page_index, "end of data");
                return Ok(Collection::new(sets));
            }
            PageOutcome::Set(raw) => {
                tracing::info!("Loaded set [{}].", page_index + 1);
                sets.push(raw.into_set(page_index));
            }
        }
    }

    Err(DeckError::PageLimit(max_pages))
}

use std::time::Duration;

use reqwest::blocking::Client;

use super::{
    decode_page,
    PageOutcome,
    END_OF_DATA_MAX_LEN,
    PageSource,
};
use crate::core::{
    http::{
        ensure_success,
        http_client,
    },
    DeckError,
};

pub const DEFAULT_BASE_URL: &str = "https://www.tofulearn.com/papi/getDeckTemplate";

/// Deck service over HTTP: `GET <base>/<deck_id>/<page_index>`.
pub struct DeckApi {
    client: Client,
    base_url: String,
}

impl DeckApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DeckError> {
        Ok(DeckApi {
            client: http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn page_url(&self, deck_id: &str, page_index: usize) -> String {
        format!("{}/{}/{}", self.base_url, deck_id, page_index)
    }
}

impl PageSource for DeckApi {
    fn fetch_page(&self, deck_id: &str, page_index: usize) -> Result<PageOutcome, DeckError> {
        let url = self.page_url(deck_id, page_index);
        tracing::debug!(%url, "fetching deck page");

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        // Read the whole body so the connection is released before the next page.
        let body = resp.bytes()?;

        // A short body is end of data whatever the status; only a real payload must be 2xx.
        if body.len() > END_OF_DATA_MAX_LEN {
            ensure_success(status, &url)?;
        }
        decode_page(&body)
    }
}

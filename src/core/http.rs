use std::time::Duration;

use reqwest::{
    blocking::Client,
    StatusCode,
};

use crate::core::DeckError;

const USER_AGENT: &str = concat!("tofudeck/", env!("CARGO_PKG_VERSION"), " (+reqwest)");

pub fn http_client(timeout: Duration) -> Result<Client, DeckError> {
    Client::builder().user_agent(USER_AGENT).timeout(timeout).build().map_err(DeckError::from)
}

pub fn ensure_success(status: StatusCode, url: &str) -> Result<(), DeckError> {
    if !status.is_success() {
        return Err(DeckError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }
    Ok(())
}

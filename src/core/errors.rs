use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Transport error: {0}")]
    Transport(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {context}: {source}")]
    Encode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: Box<std::io::Error>,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Reached the limit of {0} pages without an end-of-data response")]
    PageLimit(usize),
}

impl DeckError {
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        DeckError::Io { path: path.into(), source: Box::new(error) }
    }

    pub fn decode(context: impl Into<String>, error: serde_json::Error) -> Self {
        DeckError::Decode { context: context.into(), source: error }
    }

    pub fn encode(context: impl Into<String>, error: serde_json::Error) -> Self {
        DeckError::Encode { context: context.into(), source: error }
    }

    /// True for failures that happened while talking to the remote deck service.
    pub fn is_transport(&self) -> bool {
        matches!(self, DeckError::Transport(_) | DeckError::HttpStatus { .. })
    }
}

impl From<reqwest::Error> for DeckError {
    fn from(error: reqwest::Error) -> Self {
        DeckError::Transport(Box::new(error))
    }
}

use std::{
    path::PathBuf,
    time::Duration,
};

use clap::{
    Parser,
    ValueEnum,
};

use crate::{
    core::DeckError,
    persistence::default_cache_dir,
    remote::api::DEFAULT_BASE_URL,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "tofudeck", about = "Search the words of a TofuLearn deck", version)]
pub struct Config {
    /// Deck to fetch
    #[arg(long, env = "TOFUDECK_DECK_ID", default_value = "57a5f40fe02107451d3d3c81")]
    pub deck_id: String,

    /// Substring to look for in card words (case-insensitive)
    #[arg(long, short, env = "TOFUDECK_QUERY", default_value = "je")]
    pub query: String,

    /// Where cached decks are stored
    #[arg(long, env = "TOFUDECK_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Deck service endpoint; pages are requested at <base-url>/<deck-id>/<page>
    #[arg(long, env = "TOFUDECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Give up if the deck has more pages than this
    #[arg(long, default_value_t = 1000)]
    pub max_pages: usize,

    /// Per-request timeout
    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    /// Fetch the whole deck again and replace the cached copy
    #[arg(long)]
    pub refresh: bool,

    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

impl Config {
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(default_cache_dir)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        if self.deck_id.trim().is_empty() {
            return Err(DeckError::Config("deck id must not be empty".to_string()));
        }
        if self.max_pages == 0 {
            return Err(DeckError::Config("max pages must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["tofudeck"]).unwrap();
        assert_eq!(config.deck_id, "57a5f40fe02107451d3d3c81");
        assert_eq!(config.query, "je");
        assert_eq!(config.max_pages, 1000);
        assert_eq!(config.format, OutputFormat::Plain);
        assert!(!config.refresh);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_and_validation() {
        let config = Config::try_parse_from([
            "tofudeck",
            "--deck-id",
            "abc",
            "-q",
            "Tu",
            "--cache-dir",
            "/tmp/decks",
            "--format",
            "json",
            "--refresh",
        ])
        .unwrap();
        assert_eq!(config.deck_id, "abc");
        assert_eq!(config.query, "Tu");
        assert_eq!(config.cache_dir(), PathBuf::from("/tmp/decks"));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.refresh);

        let bad = Config::try_parse_from(["tofudeck", "--max-pages", "0"]).unwrap();
        assert!(matches!(bad.validate(), Err(DeckError::Config(_))));
        let blank = Config::try_parse_from(["tofudeck", "--deck-id", " "]).unwrap();
        assert!(blank.validate().is_err());
    }
}

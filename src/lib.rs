pub mod config;
pub mod core;
pub mod persistence;
pub mod remote;
pub mod search;

pub use config::{
    Config,
    OutputFormat,
};
pub use crate::core::{
    pipeline::{
        load_or_acquire,
        run,
    },
    Card,
    Collection,
    DeckError,
    DeckSet,
    Match,
};
pub use persistence::CacheStore;
pub use remote::{
    acquire_all,
    DeckApi,
    PageOutcome,
    PageSource,
    RawSet,
};
pub use search::search;

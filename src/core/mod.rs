pub mod errors;
pub mod http;
pub mod models;
pub mod pipeline;

pub use errors::DeckError;
pub use models::{
    Card,
    Collection,
    DeckSet,
    Match,
};

use crate::core::{
    Collection,
    Match,
};

/// Every card whose word contains `query`, ignoring case, in set then card order.
/// An empty query matches every card.
pub fn search(collection: &Collection, query: &str) -> Vec<Match> {
    let query = query.to_lowercase();

    collection
        .sets()
        .iter()
        .flat_map(|set| {
            set.cards.iter().enumerate().map(move |(i, card)| (set.index, i, card))
        })
        .filter(|(_, _, card)| card.word.to_lowercase().contains(&query))
        .map(|(set_index, card_index, card)| Match {
            set_index: set_index + 1,
            word_index: card_index + 1,
            word: card.word.clone(),
            translation: card.translation.clone(),
        })
        .collect()
}

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub word: String,
    pub translation: String,
}

impl Card {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Card { word: word.into(), translation: translation.into() }
    }
}

/// One page of a deck. `index` is the zero-based page it was retrieved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSet {
    pub name: String,
    pub cards: Vec<Card>,
    pub index: usize,
}

/// Every set of one deck, in retrieval order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection(Vec<DeckSet>);

impl Collection {
    pub fn new(sets: Vec<DeckSet>) -> Self {
        Collection(sets)
    }

    pub fn sets(&self) -> &[DeckSet] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.0.iter().map(|set| set.cards.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub set_index: usize,  // 1-based
    pub word_index: usize, // 1-based
    pub word: String,
    pub translation: String,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[set {}, word {}] {} - {}",
            self.set_index, self.word_index, self.word, self.translation
        )
    }
}

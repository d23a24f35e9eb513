use crate::card::{card_label, Card, DECK_SIZE};
use crate::error::{Result, SolitaireError};
use crate::validate::assert_permutation;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, immutable 54-card deck, top card first
///
/// The only ways to obtain a `Deck` go through the permutation check, so every value
/// of this type holds each card 1..=54 exactly once. Nothing hands out mutable access
/// to the cards; operations that move cards return a new `Deck`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<Card>")]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Wrap cards that already passed validation
    pub(crate) fn from_validated(cards: Vec<Card>) -> Self {
        debug_assert_eq!(cards.len(), DECK_SIZE);
        Self(cards)
    }

    /// Build a deck from card values, checking the permutation invariant
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        assert_permutation(&cards)
    }

    /// The ordered deck 1, 2, ..., 52, A, B
    pub fn ordered() -> Self {
        Self((1..=DECK_SIZE as Card).collect())
    }

    /// A Fisher-Yates shuffle of the ordered deck using the given RNG
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = (1..=DECK_SIZE as Card).collect();
        cards.shuffle(rng);
        Self(cards)
    }

    /// A freshly shuffled deck from the thread-local RNG
    pub fn random() -> Self {
        Self::shuffled(&mut rand::thread_rng())
    }

    /// Cards from top to bottom
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Comma-joined decimal card values, e.g. "1,2,...,54"
    pub fn serialize_values(&self) -> String {
        self.0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = SolitaireError;
    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Self::new(cards)
    }
}

impl TryFrom<Vec<i64>> for Deck {
    type Error = SolitaireError;
    fn try_from(values: Vec<i64>) -> Result<Self> {
        assert_permutation(&values)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

/// Renders the deck vector text format with joker letters: "1, 2, ..., A, B"
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.0.iter().map(|&c| card_label(c as i64)).collect();
        write!(f, "{}", labels.join(", "))
    }
}

//! Solitaire keystream state machine
//!
//! One round moves Joker A down one, Joker B down two, performs a triple cut around the
//! jokers, a count cut keyed by the bottom card, and finally reads an output card. The
//! deck is the only state; every function here returns a new deck.

use crate::alphabet::ALPHABET_SIZE;
use crate::card::{card_weight, is_joker, Card, JOKER_A, JOKER_B};
use crate::deck::Deck;
use log::{debug, trace};

/// Move `card` down `steps` places, one place at a time
///
/// A card on the bottom wraps to just below the top card (index 1), never to the top.
pub fn move_card_down(cards: &[Card], card: Card, steps: usize) -> Vec<Card> {
    let mut working = cards.to_vec();
    for _ in 0..steps {
        let Some(index) = working.iter().position(|&c| c == card) else {
            return working;
        };
        working.remove(index);
        let target = if index + 1 > working.len() { 1 } else { index + 1 };
        working.insert(target, card);
    }
    working
}

/// Swap the cards above the first joker with the cards below the second
pub fn triple_cut(cards: &[Card]) -> Vec<Card> {
    let (Some(a), Some(b)) = (
        cards.iter().position(|&c| c == JOKER_A),
        cards.iter().position(|&c| c == JOKER_B),
    ) else {
        return cards.to_vec();
    };
    let (lo, hi) = (a.min(b), a.max(b));

    let mut result = Vec::with_capacity(cards.len());
    result.extend_from_slice(&cards[hi + 1..]);
    result.extend_from_slice(&cards[lo..=hi]);
    result.extend_from_slice(&cards[..lo]);
    result
}

/// Cut the deck by the bottom card's value, keeping the bottom card in place
pub fn count_cut(cards: &[Card]) -> Vec<Card> {
    let Some(&bottom) = cards.last() else {
        return Vec::new();
    };
    let last = cards.len() - 1;
    let cut = card_weight(bottom);

    if cut >= last {
        return cards.to_vec();
    }

    let mut result = Vec::with_capacity(cards.len());
    result.extend_from_slice(&cards[cut..last]);
    result.extend_from_slice(&cards[..cut]);
    result.push(bottom);
    result
}

/// Read the output card: count down by the top card's value and take the next card
///
/// Returns `None` when that card is a joker; the round produces no output.
pub fn output_card(cards: &[Card]) -> Option<Card> {
    let top = *cards.first()?;
    let card = *cards.get(card_weight(top))?;
    if is_joker(card) {
        None
    } else {
        Some(card)
    }
}

/// Apply the four deck-mixing steps of one round
pub fn advance_one_step(deck: &Deck) -> Deck {
    let working = move_card_down(deck.cards(), JOKER_A, 1);
    let working = move_card_down(&working, JOKER_B, 2);
    let working = triple_cut(&working);
    let working = count_cut(&working);
    // Moves and cuts only reorder cards, so the permutation invariant holds.
    Deck::from_validated(working)
}

/// Result of one full round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub deck: Deck,
    pub output: Option<Card>,
}

/// One full round: mix the deck, then extract its output card
pub fn perform_round(deck: &Deck) -> Round {
    let deck = advance_one_step(deck);
    let output = output_card(deck.cards());
    Round { deck, output }
}

/// Lazy stream of raw output cards from successive rounds
///
/// Rounds that land on a joker are skipped. The deck after the last yielded value is
/// available through [`Keystream::deck`].
#[derive(Debug, Clone)]
pub struct Keystream {
    deck: Deck,
    rounds: usize,
}

impl Keystream {
    pub fn new(deck: Deck) -> Self {
        Self { deck, rounds: 0 }
    }

    /// Current deck state
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Rounds executed so far, including those skipped for jokers
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn into_deck(self) -> Deck {
        self.deck
    }
}

impl Iterator for Keystream {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        loop {
            let round = perform_round(&self.deck);
            self.deck = round.deck;
            self.rounds += 1;
            match round.output {
                Some(card) => return Some(card),
                None => trace!("round {} hit a joker, skipping", self.rounds),
            }
        }
    }
}

impl Deck {
    /// Keystream driven by this deck; the deck itself is left untouched
    pub fn keystream(&self) -> Keystream {
        Keystream::new(self.clone())
    }

    /// The deck after one round of mixing
    pub fn advance(&self) -> Deck {
        advance_one_step(self)
    }
}

/// A generated keystream with the deck state that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKeystream {
    pub keystream: Vec<u8>,
    pub deck: Deck,
    pub rounds: usize,
}

/// Map a raw output card into `1..=ALPHABET_SIZE`; exact multiples map to `ALPHABET_SIZE`
fn reduce(value: Card) -> u8 {
    match value % ALPHABET_SIZE {
        0 => ALPHABET_SIZE,
        v => v,
    }
}

/// Generate `length` keystream values reduced into the cipher alphabet's range
///
/// A zero length runs no rounds and returns the input deck unchanged.
pub fn generate_keystream(deck: &Deck, length: usize) -> GeneratedKeystream {
    let mut stream = deck.keystream();
    let keystream: Vec<u8> = stream
        .by_ref()
        .take(length)
        .map(reduce)
        .collect();

    debug!(
        "generated {} keystream values in {} rounds",
        keystream.len(),
        stream.rounds()
    );

    GeneratedKeystream {
        keystream,
        rounds: stream.rounds(),
        deck: stream.into_deck(),
    }
}

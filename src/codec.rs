//! Deck identity codes
//!
//! Each of the 54! deck orders gets a unique index in `[0, 54!)` from its Lehmer code
//! (factorial number system): position `p` contributes the card's rank among the cards
//! not yet placed, times `(53 - p)!`. The index is written in base 62 over
//! `0-9A-Za-z`, so codes are at most 40 symbols and the ordered deck is `"0"`.

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::{Result, SolitaireError};
use crate::validate::assert_permutation;
use log::debug;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use std::sync::OnceLock;

/// Symbols of the deck code, in digit order
pub const DECK_CODE_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Radix of the deck code
pub const DECK_CODE_BASE: u32 = 62;

/// Length of the longest deck code, the encoding of `54! - 1`
pub const MAX_CODE_LEN: usize = 40;

/// `0!` through `54!`, built on first use
fn factorials() -> &'static [BigUint] {
    static TABLE: OnceLock<Vec<BigUint>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = Vec::with_capacity(DECK_SIZE + 1);
        table.push(BigUint::from(1u32));
        for i in 1..=DECK_SIZE {
            let next = &table[i - 1] * BigUint::from(i);
            table.push(next);
        }
        table
    })
}

/// Largest valid permutation index, `54! - 1`
pub fn max_index() -> &'static BigUint {
    static MAX: OnceLock<BigUint> = OnceLock::new();
    MAX.get_or_init(|| &factorials()[DECK_SIZE] - BigUint::from(1u32))
}

/// Lehmer-code index of a deck
pub fn deck_to_index(deck: &Deck) -> BigUint {
    let table = factorials();
    let mut remaining: Vec<Card> = (1..=DECK_SIZE as Card).collect();
    let mut index = BigUint::zero();

    for (position, &card) in deck.cards().iter().enumerate() {
        // Every card of a valid deck is still in the pool when its turn comes.
        let rank = remaining
            .iter()
            .position(|&c| c == card)
            .unwrap_or_default();
        index += &table[DECK_SIZE - 1 - position] * BigUint::from(rank);
        remaining.remove(rank);
    }

    index
}

/// Rebuild the deck named by a permutation index
pub fn index_to_deck(index: &BigUint) -> Result<Deck> {
    if index > max_index() {
        return Err(SolitaireError::DeckCodeOutOfRange);
    }

    let table = factorials();
    let mut pool: Vec<Card> = (1..=DECK_SIZE as Card).collect();
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut remainder = index.clone();

    for remaining in (1..=DECK_SIZE).rev() {
        let (digit, rest) = remainder.div_rem(&table[remaining - 1]);
        remainder = rest;

        let selection = digit
            .to_usize()
            .filter(|&i| i < pool.len())
            .ok_or_else(|| {
                SolitaireError::DeckCodeMalformed(format!(
                    "selection {} exceeds {} remaining cards",
                    digit, pool.len()
                ))
            })?;
        cards.push(pool.remove(selection));
    }

    // Re-check the rebuilt deck rather than trusting the arithmetic above.
    assert_permutation(&cards)
}

/// Write an index in the deck code alphabet
pub fn encode_index(index: &BigUint) -> String {
    if index.is_zero() {
        return DECK_CODE_ALPHABET[..1].to_string();
    }
    let symbols = DECK_CODE_ALPHABET.as_bytes();
    index
        .to_radix_be(DECK_CODE_BASE)
        .into_iter()
        .map(|digit| symbols[digit as usize] as char)
        .collect()
}

/// Parse a deck code back into its index
///
/// Surrounding whitespace is ignored; any other symbol outside the alphabet is an error.
/// Codes longer than [`MAX_CODE_LEN`] or padded with leading zeros are rejected so each
/// index has exactly one spelling.
pub fn decode_index(code: &str) -> Result<BigUint> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(SolitaireError::DeckCodeMalformed(
            "deck code cannot be empty".into(),
        ));
    }
    let length = trimmed.chars().count();
    if length > MAX_CODE_LEN {
        return Err(SolitaireError::DeckCodeMalformed(format!(
            "deck code has {} symbols, at most {} allowed",
            length, MAX_CODE_LEN
        )));
    }
    if length > 1 && trimmed.starts_with('0') {
        return Err(SolitaireError::DeckCodeMalformed(
            "deck code cannot have leading zeros".into(),
        ));
    }

    let digits = trimmed
        .chars()
        .map(|c| {
            DECK_CODE_ALPHABET
                .find(c)
                .map(|d| d as u8)
                .ok_or_else(|| {
                    SolitaireError::DeckCodeMalformed(format!(
                        "invalid character {:?} in deck code",
                        c
                    ))
                })
        })
        .collect::<Result<Vec<u8>>>()?;

    BigUint::from_radix_be(&digits, DECK_CODE_BASE).ok_or_else(|| {
        SolitaireError::DeckCodeMalformed(format!("cannot read {:?} as base 62", trimmed))
    })
}

/// Deck code for a candidate card sequence, which must be a valid deck
pub fn deck_to_code<T: Copy + Into<i64>>(candidate: &[T]) -> Result<String> {
    let deck = assert_permutation(candidate)?;
    Ok(encode_index(&deck_to_index(&deck)))
}

/// Deck named by a deck code
pub fn code_to_deck(code: &str) -> Result<Deck> {
    let index = decode_index(code)?;
    if &index > max_index() {
        debug!("deck code {:?} decodes past 54! - 1", code.trim());
        return Err(SolitaireError::DeckCodeOutOfRange);
    }
    index_to_deck(&index)
}

impl Deck {
    /// Compact printable identity of this deck
    pub fn to_code(&self) -> String {
        encode_index(&deck_to_index(self))
    }

    pub fn from_code(code: &str) -> Result<Deck> {
        code_to_deck(code)
    }
}

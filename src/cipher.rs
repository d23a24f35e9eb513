use crate::alphabet::{self, ALPHABET_SIZE};
use crate::deck::Deck;
use crate::engine::generate_keystream;
use crate::error::{Result, SolitaireError};
use log::debug;
use serde::{Deserialize, Serialize};

/// Which way the keystream is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Encrypt,
    Decrypt,
}

impl std::str::FromStr for Direction {
    type Err = SolitaireError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "encrypt" | "e" => Ok(Self::Encrypt),
            "decrypt" | "d" => Ok(Self::Decrypt),
            _ => Err(SolitaireError::UnsupportedAlgorithm(format!(
                "direction: {}",
                s
            ))),
        }
    }
}

/// Options for a cipher run
#[derive(Debug, Clone, Default)]
pub struct CipherOptions {
    /// The caller is deliberately continuing from a deck state that already produced
    /// keystream for an earlier message. The arithmetic is unchanged; the result is
    /// flagged so the reuse can be surfaced to a person.
    pub continued_from_previous_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CipherWarning {
    ReusedKeystream,
}

/// Output of `encrypt` / `decrypt`
///
/// `final_deck` is the state after the rounds this message consumed. It is never
/// applied to the caller's deck; adopt it explicitly to continue the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CipherResult {
    pub text: String,
    pub keystream: Vec<u8>,
    pub final_deck: Deck,
    pub warning: Option<CipherWarning>,
}

/// Encrypt alphabet-only text with the keystream of `deck`
pub fn encrypt(text: &str, deck: &Deck, options: &CipherOptions) -> Result<CipherResult> {
    transform(Direction::Encrypt, text, deck, options)
}

/// Decrypt alphabet-only text with the keystream of `deck`
pub fn decrypt(text: &str, deck: &Deck, options: &CipherOptions) -> Result<CipherResult> {
    transform(Direction::Decrypt, text, deck, options)
}

/// Shared driver for both directions
pub fn transform(
    direction: Direction,
    text: &str,
    deck: &Deck,
    options: &CipherOptions,
) -> Result<CipherResult> {
    let ranks = text_to_ranks(text)?;
    let generated = generate_keystream(deck, ranks.len());

    let output: String = ranks
        .iter()
        .zip(&generated.keystream)
        .map(|(&value, &key)| alphabet::symbol(apply(direction, value, key)))
        .collect();

    debug!(
        "{:?} {} characters over {} rounds",
        direction,
        ranks.len(),
        generated.rounds
    );

    Ok(CipherResult {
        text: output,
        keystream: generated.keystream,
        final_deck: generated.deck,
        warning: options
            .continued_from_previous_run
            .then_some(CipherWarning::ReusedKeystream),
    })
}

/// Combine one rank with one keystream value, both in `1..=ALPHABET_SIZE`
fn apply(direction: Direction, value: u8, key: u8) -> u8 {
    let n = ALPHABET_SIZE as u16;
    let (value, key) = (value as u16, key as u16);
    let rank = match direction {
        Direction::Encrypt => (value + key - 1) % n + 1,
        Direction::Decrypt => (value + n - key - 1) % n + 1,
    };
    rank as u8
}

fn text_to_ranks(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| alphabet::rank(c).ok_or(SolitaireError::UnsupportedCharacter(c)))
        .collect()
}

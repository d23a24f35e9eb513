use crate::cli::source::DeckSource;
use crate::codec::{code_to_deck, deck_to_code};
use crate::deck::Deck;
use crate::error::Result;
use crate::fingerprint::{deck_fingerprint, HashAlgorithm};
use crate::parse::parse_deck_vector;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Shuffle a new deck, reproducibly when a seed is given
pub fn shuffle_deck(seed: Option<u64>) -> String {
    let deck = match seed {
        Some(seed) => Deck::shuffled(&mut StdRng::seed_from_u64(seed)),
        None => Deck::random(),
    };
    describe_deck(&deck)
}

/// Deck code of the selected deck
pub fn encode_deck(source: &DeckSource) -> Result<String> {
    let deck = source.resolve()?;
    Ok(format!("{}\n", deck_to_code(deck.cards())?))
}

/// Deck vector named by a deck code
pub fn decode_code(code: &str) -> Result<String> {
    let deck = code_to_deck(code)?;
    Ok(format!("{}\n", deck))
}

pub fn show_fingerprint(source: &DeckSource, algorithm: HashAlgorithm) -> Result<String> {
    let deck = source.resolve()?;
    Ok(format!("{}\n", deck_fingerprint(deck.cards(), algorithm)?))
}

/// Check a deck vector; errors carry the validator's message
pub fn check_vector(text: &str) -> Result<String> {
    let deck = parse_deck_vector(text)?;
    Ok(format!("valid\nCode: {}\n", deck.to_code()))
}

fn describe_deck(deck: &Deck) -> String {
    let mut output = String::new();
    output.push_str(&format!("Deck: {}\n", deck));
    output.push_str(&format!("Code: {}\n", deck.to_code()));
    output
}

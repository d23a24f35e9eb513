use crate::card::{Card, DECK_SIZE, JOKER_A, JOKER_B};
use crate::deck::Deck;
use crate::error::{Result, SolitaireError};
use crate::validate::assert_permutation;

/// Parse the deck vector text format
///
/// Tokens are separated by whitespace, commas, brackets or parentheses. Each token is a
/// card number 1-54 or a joker letter (`A`/`a` for 53, `B`/`b` for 54). Errors share the
/// validator's wording.
pub fn parse_deck_vector(input: &str) -> Result<Deck> {
    let tokens: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']' | '(' | ')'))
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() != DECK_SIZE {
        return Err(SolitaireError::WrongCardCount {
            expected: DECK_SIZE,
            actual: tokens.len(),
        });
    }

    let cards = tokens
        .iter()
        .map(|token| {
            parse_token(token).ok_or_else(|| SolitaireError::UnrecognizedToken(token.to_string()))
        })
        .collect::<Result<Vec<Card>>>()?;

    assert_permutation(&cards)
}

fn parse_token(token: &str) -> Option<Card> {
    let normalized: String = token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    match normalized.as_str() {
        "A" | "a" => Some(JOKER_A),
        "B" | "b" => Some(JOKER_B),
        digits if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => digits
            .parse::<u32>()
            .ok()
            .filter(|v| (1..=DECK_SIZE as u32).contains(v))
            .map(|v| v as Card),
        _ => None,
    }
}

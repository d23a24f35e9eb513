use crate::card::{card_label, Card, DECK_SIZE, JOKER_A, JOKER_B};
use crate::deck::Deck;
use crate::error::{Result, SolitaireError};

/// Check that a candidate card sequence is a legal 54-card deck
///
/// Checks run in a fixed order and stop at the first failure:
/// card count, value range, presence of both jokers, duplicates.
pub fn validate<T: Copy + Into<i64>>(candidate: &[T]) -> Result<()> {
    if candidate.len() != DECK_SIZE {
        return Err(SolitaireError::WrongCardCount {
            expected: DECK_SIZE,
            actual: candidate.len(),
        });
    }

    let values: Vec<i64> = candidate.iter().map(|&c| c.into()).collect();

    if let Some(&bad) = values.iter().find(|&&v| v < 1 || v > DECK_SIZE as i64) {
        return Err(SolitaireError::CardOutOfRange(bad));
    }

    let has_a = values.contains(&(JOKER_A as i64));
    let has_b = values.contains(&(JOKER_B as i64));
    if !has_a || !has_b {
        return Err(SolitaireError::MissingJoker);
    }

    let mut seen = [false; DECK_SIZE + 1];
    for &value in &values {
        let slot = &mut seen[value as usize];
        if *slot {
            return Err(SolitaireError::DuplicateCard(card_label(value)));
        }
        *slot = true;
    }

    Ok(())
}

/// Validate a candidate and hand back the checked `Deck`
///
/// Used wherever an invalid deck must never be given an identity (codes, fingerprints).
pub fn assert_permutation<T: Copy + Into<i64>>(candidate: &[T]) -> Result<Deck> {
    validate(candidate)?;
    // Range was checked above, so the narrowing cannot truncate.
    let cards: Vec<Card> = candidate
        .iter()
        .map(|&c| Into::<i64>::into(c) as Card)
        .collect();
    Ok(Deck::from_validated(cards))
}

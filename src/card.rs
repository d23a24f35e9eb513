/// A card value. 1-52 are the standard playing cards, 53 and 54 the jokers.
pub type Card = u8;

/// Number of cards in a Solitaire deck
pub const DECK_SIZE: usize = 54;

/// Joker A (the "small" joker, moves one position per round)
pub const JOKER_A: Card = 53;

/// Joker B (the "big" joker, moves two positions per round)
pub const JOKER_B: Card = 54;

/// True for either joker
pub fn is_joker(card: Card) -> bool {
    card == JOKER_A || card == JOKER_B
}

/// Numeric weight of a card for cuts and lookups: both jokers count as 53
pub fn card_weight(card: Card) -> usize {
    if is_joker(card) {
        JOKER_A as usize
    } else {
        card as usize
    }
}

/// User-facing label: "A"/"B" for the jokers, decimal digits otherwise
pub fn card_label(card: i64) -> String {
    match card {
        53 => "A".to_string(),
        54 => "B".to_string(),
        other => other.to_string(),
    }
}

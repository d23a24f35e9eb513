use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolitaireError {
    #[error("Expected {expected} cards, received {actual}.")]
    WrongCardCount { expected: usize, actual: usize },

    #[error("Card {0} must be between 1 and 54.")]
    CardOutOfRange(i64),

    #[error("Card {0} appears more than once.")]
    DuplicateCard(String),

    #[error("Deck must include exactly one A joker and one B joker.")]
    MissingJoker,

    #[error("Unrecognized token \"{0}\". Use 1-52 or jokers A/B.")]
    UnrecognizedToken(String),

    #[error("Malformed deck code: {0}")]
    DeckCodeMalformed(String),

    #[error("Deck code is out of range for a 54-card deck.")]
    DeckCodeOutOfRange,

    #[error("Character {0:?} is not in the cipher alphabet.")]
    UnsupportedCharacter(char),

    #[error("Unable to compute deck fingerprint: no {0} hash primitive available")]
    NoHashPrimitiveAvailable(String),

    #[error("Unsupported option: {0}")]
    UnsupportedAlgorithm(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SolitaireError>;

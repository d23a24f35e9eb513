//! Solitaire - a deck-of-cards stream cipher
//!
//! Implements Bruce Schneier's Solitaire keystream generator over a 54-card deck
//! together with a compact, reversible code for every deck arrangement.
//!
//! ## Keystream Round
//!
//! ```text
//! Deck → Joker A down 1 → Joker B down 2 → Triple cut → Count cut → Output card
//! ```
//!
//! - **Joker moves**: a joker on the bottom wraps to just below the top card
//! - **Triple cut**: swap the cards above the first joker with those below the second
//! - **Count cut**: cut by the bottom card's value, keeping the bottom card in place
//! - **Output**: count down by the top card; a joker there yields no output
//!
//! Keystream values are reduced into `1..=52` and added to (or subtracted from) the
//! rank of each character in the 52-symbol cipher alphabet.
//!
//! ## Deck Codes
//!
//! Every deck order has a Lehmer-code index in `[0, 54!)`, written in base 62. The
//! ordered deck is `"0"`; the fully reversed deck is the longest code (40 symbols).
//!
//! ## Example
//!
//! ```
//! use solitaire::{decrypt, encrypt, CipherOptions, Deck};
//!
//! let deck = Deck::ordered();
//! let options = CipherOptions::default();
//!
//! let sealed = encrypt("MEET AT NOON", &deck, &options).unwrap();
//! let opened = decrypt(&sealed.text, &deck, &options).unwrap();
//! assert_eq!(opened.text, "MEET AT NOON");
//!
//! // Share the starting deck compactly
//! let code = deck.to_code();
//! assert_eq!(Deck::from_code(&code).unwrap(), deck);
//! ```

pub mod alphabet;
pub mod card;
pub mod cipher;
pub mod cli;
pub mod codec;
pub mod deck;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod parse;
pub mod sanitize;
pub mod validate;

pub use card::{Card, DECK_SIZE, JOKER_A, JOKER_B};
pub use cipher::{decrypt, encrypt, CipherOptions, CipherResult, CipherWarning, Direction};
pub use codec::{code_to_deck, deck_to_code};
pub use deck::Deck;
pub use engine::{generate_keystream, GeneratedKeystream, Keystream};
pub use error::{Result, SolitaireError};
pub use fingerprint::{deck_fingerprint, HashAlgorithm};
pub use parse::parse_deck_vector;
pub use validate::{assert_permutation, validate};

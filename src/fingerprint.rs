//! Short display identifiers for decks
//!
//! A fingerprint hashes the comma-joined card values (`"1,2,...,54"`). It is only for
//! showing and comparing decks; it cannot be turned back into a deck (use a deck code).

use crate::error::{Result, SolitaireError};
use crate::validate::assert_permutation;
use digest::Digest;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::Sha3_256;

/// Hash used for fingerprints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha3,
    Blake3,
}

impl std::str::FromStr for HashAlgorithm {
    type Err = SolitaireError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha3" | "sha3-256" => Ok(Self::Sha3),
            "blake3" => Ok(Self::Blake3),
            _ => Err(SolitaireError::NoHashPrimitiveAvailable(s.to_string())),
        }
    }
}

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// Lowercase hex fingerprint of a deck; invalid decks are refused
pub fn deck_fingerprint<T: Copy + Into<i64>>(
    candidate: &[T],
    algorithm: HashAlgorithm,
) -> Result<String> {
    let deck = assert_permutation(candidate)?;
    let payload = deck.serialize_values();

    Ok(match algorithm {
        HashAlgorithm::Sha256 => hex_digest::<Sha256>(payload.as_bytes()),
        HashAlgorithm::Sha3 => hex_digest::<Sha3_256>(payload.as_bytes()),
        HashAlgorithm::Blake3 => blake3::hash(payload.as_bytes()).to_hex().to_string(),
    })
}

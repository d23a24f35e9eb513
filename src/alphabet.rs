//! The fixed cipher alphabet
//!
//! Membership and order are part of the cipher's definition: changing either changes
//! which keystream offsets map to which symbols.

/// Alphabet symbols in rank order (rank 1 is 'A')
pub const CIPHER_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .,'-?!:;\"()/_@&";

/// Number of symbols; the modulus for all keystream arithmetic
pub const ALPHABET_SIZE: u8 = 52;

/// 1-based rank of a symbol, or `None` if it is not in the alphabet
pub fn rank(symbol: char) -> Option<u8> {
    CIPHER_ALPHABET
        .chars()
        .position(|c| c == symbol)
        .map(|i| i as u8 + 1)
}

/// Symbol at a 1-based rank; ranks wrap modulo the alphabet size
pub fn symbol(rank: u8) -> char {
    let index = (rank as usize + ALPHABET_SIZE as usize - 1) % ALPHABET_SIZE as usize;
    CIPHER_ALPHABET.as_bytes()[index] as char
}

pub fn contains(symbol: char) -> bool {
    rank(symbol).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_size_matches_symbols() {
        assert_eq!(CIPHER_ALPHABET.chars().count(), ALPHABET_SIZE as usize);
        assert!(CIPHER_ALPHABET.is_ascii());
    }

    #[test]
    fn test_ranks_are_one_based() {
        assert_eq!(rank('A'), Some(1));
        assert_eq!(rank('Z'), Some(26));
        assert_eq!(rank('0'), Some(27));
        assert_eq!(rank(' '), Some(37));
        assert_eq!(rank('&'), Some(52));
        assert_eq!(rank('a'), None);
        assert_eq!(rank('*'), None);
    }

    #[test]
    fn test_symbol_inverts_rank() {
        for c in CIPHER_ALPHABET.chars() {
            assert_eq!(symbol(rank(c).unwrap()), c);
        }
        assert_eq!(symbol(52), '&');
        assert_eq!(symbol(53), 'A');
    }
}

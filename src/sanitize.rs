//! Normalization of free text into the cipher alphabet

use crate::alphabet;
use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizationAction {
    Normalized,
    Replaced,
    Removed,
}

/// A non-trivial change made while sanitizing (plain uppercasing is not recorded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizationChange {
    pub original: char,
    pub replacement: String,
    /// Character index in the input
    pub index: usize,
    pub action: SanitizationAction,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sanitized {
    pub value: String,
    pub changes: Vec<SanitizationChange>,
}

fn substitution(c: char) -> Option<&'static str> {
    let replacement = match c {
        '\t' | '\n' | '\r' | '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}'
        | '\u{205F}' | '\u{3000}' => " ",
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' | '\u{02BC}' | '`' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' | '\u{02DD}' => "\"",
        '\u{2013}' | '\u{2014}' | '\u{2015}' | '\u{2212}' | '\u{2043}' => "-",
        '\u{2026}' => "...",
        '\u{00B7}' | '\u{2022}' => ".",
        '\u{2044}' | '\u{2215}' | '\u{00F7}' => "/",
        '\u{00D7}' | '\u{2715}' | '\u{2716}' => "X",
        // No compatibility decomposition for these
        '\u{0152}' | '\u{0153}' => "OE",
        '\u{00C6}' | '\u{00E6}' => "AE",
        '\u{00D8}' | '\u{00F8}' => "O",
        '\u{0110}' | '\u{0111}' | '\u{00D0}' | '\u{00F0}' => "D",
        '\u{0141}' | '\u{0142}' => "L",
        _ => return None,
    };
    Some(replacement)
}

/// Compatibility-decompose a character, drop combining marks and uppercase what is left
fn fold(c: char) -> String {
    c.nfkd()
        .filter(|&d| !is_combining_mark(d))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Convert arbitrary text into the cipher alphabet
///
/// Letters are uppercased, common punctuation variants substituted, stray whitespace
/// turned into a space, and everything else compatibility-decomposed with its
/// combining marks stripped. Symbols that still fall outside the alphabet become `?`.
pub fn sanitize_to_alphabet(input: &str) -> Sanitized {
    let mut value = String::with_capacity(input.len());
    let mut changes = Vec::new();

    for (index, original) in input.chars().enumerate() {
        if alphabet::contains(original) {
            value.push(original);
            continue;
        }

        let upper: String = original.to_uppercase().collect();
        if upper.chars().all(alphabet::contains) {
            // Plain case change, not worth recording
            value.push_str(&upper);
            continue;
        }

        let (replacement, action, reason) = if let Some(sub) = substitution(original) {
            (sub.to_string(), SanitizationAction::Replaced, "substitution")
        } else if original.is_whitespace() {
            (" ".to_string(), SanitizationAction::Replaced, "whitespace")
        } else {
            let folded = fold(original);
            if folded.is_empty() {
                (folded, SanitizationAction::Removed, "combining-mark")
            } else {
                let unmapped = folded
                    .chars()
                    .any(|c| !alphabet::contains(c) && substitution(c).is_none());
                let mapped: String = folded
                    .chars()
                    .map(|c| {
                        if alphabet::contains(c) {
                            c.to_string()
                        } else {
                            substitution(c).unwrap_or("?").to_string()
                        }
                    })
                    .collect();
                if unmapped {
                    (mapped, SanitizationAction::Replaced, "fallback")
                } else {
                    (mapped, SanitizationAction::Normalized, "ascii-folding")
                }
            }
        };

        value.push_str(&replacement);
        changes.push(SanitizationChange {
            original,
            replacement,
            index,
            action,
            reason,
        });
    }

    Sanitized { value, changes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercases_without_recording() {
        let result = sanitize_to_alphabet("hello, world");
        assert_eq!(result.value, "HELLO, WORLD");
        assert!(result.changes.is_empty());
    }

    #[test]
    fn test_substitutes_punctuation() {
        let result = sanitize_to_alphabet("it\u{2019}s \u{201C}fine\u{201D} \u{2014} ok\u{2026}");
        assert_eq!(result.value, "IT'S \"FINE\" - OK...");
        assert_eq!(result.changes.len(), 5);
        assert!(result
            .changes
            .iter()
            .all(|c| c.action == SanitizationAction::Replaced && c.reason == "substitution"));
    }

    #[test]
    fn test_folds_accents() {
        let result = sanitize_to_alphabet("Café Œuvre");
        assert_eq!(result.value, "CAFE OEUVRE");
        assert_eq!(result.changes.len(), 2);
        assert_eq!(result.changes[0].index, 3);
        assert_eq!(result.changes[0].action, SanitizationAction::Normalized);
    }

    #[test]
    fn test_drops_decomposed_accents() {
        let result = sanitize_to_alphabet("Cafe\u{301}");
        assert_eq!(result.value, "CAFE");
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].index, 4);
        assert_eq!(result.changes[0].action, SanitizationAction::Removed);
        assert_eq!(result.changes[0].replacement, "");
    }

    #[test]
    fn test_folds_compatibility_forms() {
        let result = sanitize_to_alphabet("\u{FF21}\u{FF11} \u{01CD}\u{1E0C}");
        assert_eq!(result.value, "A1 AD");
        assert_eq!(result.changes.len(), 4);
        assert!(result
            .changes
            .iter()
            .all(|c| c.action == SanitizationAction::Normalized && c.reason == "ascii-folding"));
    }

    #[test]
    fn test_partial_folds() {
        // 1/2 decomposes through the fraction slash
        assert_eq!(sanitize_to_alphabet("\u{00BD}").value, "1/2");
        assert_eq!(sanitize_to_alphabet("\u{00B2}\u{2460}").value, "21");

        let result = sanitize_to_alphabet("\u{65E5}");
        assert_eq!(result.value, "?");
        assert_eq!(result.changes[0].reason, "fallback");
    }

    #[test]
    fn test_whitespace_and_fallback() {
        let result = sanitize_to_alphabet("a\tb\u{2028}c*d");
        assert_eq!(result.value, "A B C?D");
        let reasons: Vec<&str> = result.changes.iter().map(|c| c.reason).collect();
        assert_eq!(reasons, vec!["substitution", "whitespace", "fallback"]);
    }

    #[test]
    fn test_output_is_always_in_alphabet() {
        let result = sanitize_to_alphabet("Ünïcødé ✓ 日本 ½ ×2");
        assert!(result.value.chars().all(alphabet::contains));
    }
}

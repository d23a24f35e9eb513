use crate::cipher::{transform, CipherOptions, CipherWarning, Direction};
use crate::cli::source::DeckSource;
use crate::engine::generate_keystream;
use crate::error::Result;
use crate::sanitize::sanitize_to_alphabet;
use log::info;

/// Options for the encrypt and decrypt commands
#[derive(Debug, Clone, Default)]
pub struct CipherCommandOptions {
    pub deck: DeckSource,
    pub continued: bool,
    /// Normalize the input into the cipher alphabet first
    pub sanitize: bool,
    pub json: bool,
}

/// Run the cipher in one direction and render the result
pub fn run_cipher(
    direction: Direction,
    text: &str,
    options: &CipherCommandOptions,
) -> Result<String> {
    let deck = options.deck.resolve()?;

    let input = if options.sanitize {
        let sanitized = sanitize_to_alphabet(text);
        if !sanitized.changes.is_empty() {
            info!("sanitizing changed {} characters", sanitized.changes.len());
        }
        sanitized.value
    } else {
        text.to_string()
    };

    let cipher_options = CipherOptions {
        continued_from_previous_run: options.continued,
    };
    let result = transform(direction, &input, &deck, &cipher_options)?;

    if options.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&result)?));
    }

    let mut output = String::new();
    output.push_str(&format!("Text: {}\n", result.text));
    output.push_str(&format!("Keystream: {}\n", join_values(&result.keystream)));
    output.push_str(&format!("Final deck: {}\n", result.final_deck));
    output.push_str(&format!("Final deck code: {}\n", result.final_deck.to_code()));
    if result.warning == Some(CipherWarning::ReusedKeystream) {
        output.push_str("Warning: continuing a keystream that was already used\n");
    }
    Ok(output)
}

/// Generate and render raw keystream values
pub fn show_keystream(length: usize, source: &DeckSource, json: bool) -> Result<String> {
    let deck = source.resolve()?;
    let generated = generate_keystream(&deck, length);

    if json {
        let value = serde_json::json!({
            "keystream": generated.keystream,
            "rounds": generated.rounds,
            "finalDeck": generated.deck,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
    }

    let mut output = String::new();
    output.push_str(&format!("Keystream: {}\n", join_values(&generated.keystream)));
    output.push_str(&format!("Rounds: {}\n", generated.rounds));
    output.push_str(&format!("Final deck code: {}\n", generated.deck.to_code()));
    Ok(output)
}

/// Sanitize free text and render the result
pub fn show_sanitized(text: &str, json: bool) -> Result<String> {
    let sanitized = sanitize_to_alphabet(text);
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&sanitized)?));
    }
    Ok(format!("{}\n", sanitized.value))
}

fn join_values(values: &[u8]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::CipherResult;
    use crate::deck::Deck;

    #[test]
    fn test_run_cipher_text_report() {
        let report = run_cipher(Direction::Encrypt, "HELLOWORLD", &Default::default()).unwrap();
        assert!(report.starts_with("Text: LBV9WVGXP \n"));
        assert!(report.contains("Keystream: 4 49 10 24 8 51 44 6 4 33\n"));
        assert!(!report.contains("Warning"));
    }

    #[test]
    fn test_run_cipher_sanitizes() {
        let options = CipherCommandOptions {
            sanitize: true,
            ..Default::default()
        };
        let sanitized = run_cipher(Direction::Encrypt, "hello world", &options).unwrap();
        let direct = run_cipher(Direction::Encrypt, "HELLO WORLD", &Default::default()).unwrap();
        assert_eq!(sanitized, direct);

        assert!(run_cipher(Direction::Encrypt, "hello", &Default::default()).is_err());
    }

    #[test]
    fn test_run_cipher_json() {
        let options = CipherCommandOptions {
            json: true,
            continued: true,
            ..Default::default()
        };
        let json = run_cipher(Direction::Decrypt, "LBV9WVGXP ", &options).unwrap();
        let result: CipherResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.text, "HELLOWORLD");
        assert_eq!(result.warning, Some(CipherWarning::ReusedKeystream));
    }

    #[test]
    fn test_show_sanitized() {
        assert_eq!(show_sanitized("caf\u{e9}!", false).unwrap(), "CAFE!\n");
        let json = show_sanitized("caf\u{e9}", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["value"], "CAFE");
        assert_eq!(value["changes"][0]["action"], "normalized");
    }

    #[test]
    fn test_show_keystream() {
        let report = show_keystream(3, &DeckSource::default(), false).unwrap();
        assert!(report.contains("Keystream: 4 49 10\n"));
        assert!(report.contains("Rounds: 3\n"));

        let empty = show_keystream(0, &DeckSource::default(), false).unwrap();
        assert!(empty.contains("Rounds: 0\n"));
        assert!(empty.contains(&format!("Final deck code: {}\n", Deck::ordered().to_code())));
    }
}

use crate::codec::code_to_deck;
use crate::deck::Deck;
use crate::error::Result;
use crate::parse::parse_deck_vector;
use log::debug;
use std::path::PathBuf;

/// Where a command takes its starting deck from
///
/// At most one field is expected to be set; with none set the ordered deck is used.
#[derive(Debug, Clone, Default)]
pub struct DeckSource {
    /// Deck vector text, e.g. "1, 2, ..., A, B"
    pub vector: Option<String>,
    /// Deck code
    pub code: Option<String>,
    /// File holding a deck vector
    pub file: Option<PathBuf>,
}

impl DeckSource {
    pub fn resolve(&self) -> Result<Deck> {
        if let Some(vector) = &self.vector {
            return parse_deck_vector(vector);
        }
        if let Some(code) = &self.code {
            return code_to_deck(code);
        }
        if let Some(path) = &self.file {
            debug!("reading deck vector from {}", path.display());
            let text = std::fs::read_to_string(path)?;
            return parse_deck_vector(&text);
        }
        Ok(Deck::ordered())
    }
}

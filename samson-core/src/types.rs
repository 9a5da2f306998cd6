//! Core type definitions shared across the Samson engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual form of the end-of-message marker: ASCII record separator (RS).
pub const END_OF_MESSAGE: char = '\u{1e}';

/// A position in the sequence memory (0-based, assigned at append time).
pub type Position = usize;

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// One entry in the sequence memory.
///
/// A word is a maximal run of non-separator characters (see
/// [`crate::tokenizer::is_separator`]). The end-of-message marker is a
/// separate variant, so no input text can ever produce it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A word produced by the tokenizer.
    Word(String),
    /// Message boundary marker.
    EndOfMessage,
}

impl Token {
    /// Build a word token.
    #[must_use]
    pub fn word(text: impl Into<String>) -> Self {
        Self::Word(text.into())
    }

    /// Whether this token is the end-of-message marker.
    #[must_use]
    pub fn is_end_of_message(&self) -> bool {
        matches!(self, Self::EndOfMessage)
    }

    /// The word text, or `None` for the marker.
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w),
            Self::EndOfMessage => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(w) => f.write_str(w),
            Self::EndOfMessage => write!(f, "{END_OF_MESSAGE}"),
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::Word(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self::Word(s)
    }
}

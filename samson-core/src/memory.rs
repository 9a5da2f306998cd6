//! Sequence memory — the append-only token log and its occurrence index.
//!
//! ```text
//! position:  0     1    2      3     4    5
//! sequence: [RS]  hi   there  [RS]  hi   [RS]
//!
//! index:    RS    → [0, 3, 5]
//!           hi    → [1, 4]
//!           there → [2]
//! ```
//!
//! The sequence is never truncated or mutated in place. Every append records
//! the new position in the index immediately, so both structures are always
//! in sync and every index list is strictly ascending.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, SamsonError};
use crate::stats::MemoryStats;
use crate::tokenizer;
use crate::types::{Position, Token};

/// Append-only token sequence plus a reverse index from token to positions.
#[derive(Debug, Clone)]
pub struct SequenceMemory {
    tokens: Vec<Token>,
    index: HashMap<Token, Vec<Position>>,
}

impl Default for SequenceMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceMemory {
    /// Create a memory seeded with a single end-of-message marker at
    /// position 0.
    #[must_use]
    pub fn new() -> Self {
        let mut memory = Self {
            tokens: Vec::new(),
            index: HashMap::new(),
        };
        memory.append_token(Token::EndOfMessage);
        memory
    }

    /// Append one token and return the position it was assigned.
    pub fn append_token(&mut self, token: Token) -> Position {
        let pos = self.tokens.len();
        self.index.entry(token.clone()).or_default().push(pos);
        self.tokens.push(token);
        pos
    }

    /// Tokenize `text`, append every word, then append one end-of-message
    /// marker.
    ///
    /// Returns the number of word tokens appended (the marker not included).
    pub fn ingest_message(&mut self, text: &str) -> usize {
        let words = tokenizer::tokenize(text);
        let count = words.len();
        for word in words {
            self.append_token(word);
        }
        let marker_pos = self.append_token(Token::EndOfMessage);
        debug!(
            words = count,
            marker_position = marker_pos,
            sequence_len = self.tokens.len(),
            "Ingested message"
        );
        count
    }

    /// Return the token at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`SamsonError::OutOfRange`] if `pos` is not an existing
    /// position.
    pub fn token_at(&self, pos: Position) -> Result<&Token> {
        self.tokens.get(pos).ok_or(SamsonError::OutOfRange {
            position: pos,
            len: self.tokens.len(),
        })
    }

    /// Return the most recently appended token.
    ///
    /// # Errors
    ///
    /// Returns [`SamsonError::EmptyMemory`] if the sequence is empty, which
    /// cannot happen for a memory built with [`SequenceMemory::new`].
    pub fn last_token(&self) -> Result<&Token> {
        self.tokens.last().ok_or(SamsonError::EmptyMemory)
    }

    /// Ascending positions where `token` occurs; empty if never seen.
    #[must_use]
    pub fn positions_of(&self, token: &Token) -> &[Position] {
        self.index.get(token).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of tokens in the sequence (markers included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sequence holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Highest valid position, or `None` for an empty sequence.
    #[must_use]
    pub fn last_position(&self) -> Option<Position> {
        self.tokens.len().checked_sub(1)
    }

    /// Iterate over the full sequence in position order.
    pub fn tokens(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of distinct word tokens seen so far.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.index.keys().filter(|t| !t.is_end_of_message()).count()
    }

    /// Number of messages ingested (the seed marker is not a message).
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.positions_of(&Token::EndOfMessage).len().saturating_sub(1)
    }

    /// Snapshot of the memory's size.
    #[must_use]
    pub fn stats(&self) -> MemoryStats {
        MemoryStats {
            sequence_len: self.len(),
            vocabulary_size: self.vocabulary_size(),
            message_count: self.message_count(),
        }
    }
}

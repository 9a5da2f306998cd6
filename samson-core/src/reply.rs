//! Reply generation — a random walk over the sequence memory.
//!
//! Starting from the newest token, each step looks up every earlier
//! occurrence of the current token, picks one uniformly at random and moves
//! to the token that followed it. The walk ends when that successor is an
//! end-of-message marker.
//!
//! ```text
//!            ┌──────────────── Continue(token) ◀───────────────┐
//!            ▼                                                 │
//!   positions_of(token) ─▶ drop newest position ─▶ choose ─▶ successor
//!            │                     │                           │
//!         (empty)              (nothing left)              (marker)
//!            ▼                     ▼                           ▼
//!    Done(UnknownToken)   Done(NoPriorOccurrence)     Done(EndOfMessage)
//! ```
//!
//! The newest position of the whole sequence is never a candidate: right
//! after an ingest it is the marker that was just appended, and choosing it
//! would leave no successor to move to. When it is the only occurrence the
//! walk stops instead of redrawing.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::GenerationConfig;
use crate::error::{Result, SamsonError};
use crate::memory::SequenceMemory;
use crate::types::{Position, Token};

/// Why a walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WalkOutcome {
    /// The chosen successor was an end-of-message marker.
    EndOfMessage,
    /// The current token's only occurrence is the newest position.
    NoPriorOccurrence,
    /// The current token has no recorded positions at all.
    UnknownToken,
    /// The reply reached the configured token cap.
    LengthCap,
}

impl fmt::Display for WalkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfMessage => write!(f, "end-of-message"),
            Self::NoPriorOccurrence => write!(f, "no-prior-occurrence"),
            Self::UnknownToken => write!(f, "unknown-token"),
            Self::LengthCap => write!(f, "length-cap"),
        }
    }
}

/// State of the walk between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState<'m> {
    Continue(&'m Token),
    Done(WalkOutcome),
}

/// One generated reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Emitted words, in order.
    pub tokens: Vec<String>,
    /// How the walk ended.
    pub outcome: WalkOutcome,
    /// Number of lookup-and-advance iterations performed.
    pub steps: u32,
}

impl Reply {
    /// Whether the walk emitted nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined by single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Positions eligible for the next draw: `positions` minus `newest`.
///
/// `positions` is ascending, so only its last element can be `newest`.
#[must_use]
pub fn eligible_positions(positions: &[Position], newest: Position) -> &[Position] {
    match positions.split_last() {
        Some((&last, rest)) if last == newest => rest,
        _ => positions,
    }
}

/// Random-walk reply generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplyGenerator {
    max_tokens: Option<usize>,
}

impl ReplyGenerator {
    /// Generator with an optional cap on reply length. `None` walks until a
    /// marker is reached.
    #[must_use]
    pub fn new(max_tokens: Option<usize>) -> Self {
        Self { max_tokens }
    }

    /// Build from the `[generation]` config section.
    #[must_use]
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.reply_cap())
    }

    /// The configured length cap.
    #[must_use]
    pub fn max_tokens(&self) -> Option<usize> {
        self.max_tokens
    }

    /// Walk the memory from its newest token and collect a reply.
    ///
    /// Memory is only read; the reply is not ingested.
    ///
    /// # Errors
    ///
    /// Returns [`SamsonError::EmptyMemory`] for an empty sequence, or
    /// [`SamsonError::OutOfRange`] if the index points past the sequence
    /// (both impossible for a memory built with [`SequenceMemory::new`]).
    pub fn generate<R: Rng + ?Sized>(
        &self,
        memory: &SequenceMemory,
        rng: &mut R,
    ) -> Result<Reply> {
        let newest = memory.last_position().ok_or(SamsonError::EmptyMemory)?;
        let mut state = WalkState::Continue(memory.last_token()?);
        let mut tokens: Vec<String> = Vec::new();
        let mut steps: u32 = 0;

        let outcome = loop {
            let current = match state {
                WalkState::Continue(token) => token,
                WalkState::Done(outcome) => break outcome,
            };
            if self.max_tokens.is_some_and(|cap| tokens.len() >= cap) {
                break WalkOutcome::LengthCap;
            }

            steps = steps.saturating_add(1);
            state = Self::step(memory, current, newest, rng)?;
            if let WalkState::Continue(next) = state {
                trace!(step = steps, token = %next, "Walk advanced");
                tokens.push(next.to_string());
            }
        };

        debug!(
            tokens = tokens.len(),
            steps,
            outcome = %outcome,
            "Reply generated"
        );

        Ok(Reply {
            tokens,
            outcome,
            steps,
        })
    }

    fn step<'m, R: Rng + ?Sized>(
        memory: &'m SequenceMemory,
        current: &Token,
        newest: Position,
        rng: &mut R,
    ) -> Result<WalkState<'m>> {
        let positions = memory.positions_of(current);
        if positions.is_empty() {
            return Ok(WalkState::Done(WalkOutcome::UnknownToken));
        }

        let Some(&chosen) = eligible_positions(positions, newest).choose(rng) else {
            return Ok(WalkState::Done(WalkOutcome::NoPriorOccurrence));
        };

        let next = memory.token_at(chosen + 1)?;
        if next.is_end_of_message() {
            Ok(WalkState::Done(WalkOutcome::EndOfMessage))
        } else {
            Ok(WalkState::Continue(next))
        }
    }
}

//! Lightweight counters for the chat engine.
//!
//! Both snapshots are `Serialize` so they can be attached to `tracing`
//! events as structured fields or dumped by a front-end.

use serde::Serialize;

use crate::reply::{Reply, WalkOutcome};

/// Size snapshot of a [`crate::SequenceMemory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    /// Tokens in the sequence, markers included.
    pub sequence_len: usize,
    /// Distinct word tokens.
    pub vocabulary_size: usize,
    /// Messages ingested (user and self-generated).
    pub message_count: usize,
}

/// Per-session reply counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Number of `respond` turns completed.
    pub turns: u64,
    /// Total tokens emitted across all replies.
    pub reply_tokens: u64,
    /// Total walk iterations across all replies.
    pub walk_steps: u64,
    /// Replies that ended on an end-of-message marker.
    pub ended_on_marker: u64,
    /// Replies cut short because the current token had no earlier occurrence.
    pub no_prior_occurrence: u64,
    /// Replies that stopped at the length cap.
    pub length_capped: u64,
    /// Replies that stopped on a token missing from the index.
    pub unknown_token: u64,
}

impl SessionStats {
    /// Fold one finished reply into the counters.
    pub fn record(&mut self, reply: &Reply) {
        self.turns += 1;
        self.reply_tokens += reply.tokens.len() as u64;
        self.walk_steps += u64::from(reply.steps);
        match reply.outcome {
            WalkOutcome::EndOfMessage => self.ended_on_marker += 1,
            WalkOutcome::NoPriorOccurrence => self.no_prior_occurrence += 1,
            WalkOutcome::LengthCap => self.length_capped += 1,
            WalkOutcome::UnknownToken => self.unknown_token += 1,
        }
    }

    /// Mean reply length in tokens, `0.0` before the first turn.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_reply_len(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            self.reply_tokens as f64 / self.turns as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tallies_outcomes() {
        let mut stats = SessionStats::default();
        stats.record(&Reply {
            tokens: vec!["a".into(), "b".into()],
            outcome: WalkOutcome::EndOfMessage,
            steps: 3,
        });
        stats.record(&Reply {
            tokens: vec![],
            outcome: WalkOutcome::NoPriorOccurrence,
            steps: 1,
        });

        assert_eq!(stats.turns, 2);
        assert_eq!(stats.reply_tokens, 2);
        assert_eq!(stats.walk_steps, 4);
        assert_eq!(stats.ended_on_marker, 1);
        assert_eq!(stats.no_prior_occurrence, 1);
        assert!((stats.mean_reply_len() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_of_nothing_is_zero() {
        assert!(SessionStats::default().mean_reply_len().abs() < f64::EPSILON);
    }
}

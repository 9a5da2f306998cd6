//! Chat session — one memory, one generator, one random source.
//!
//! A turn is always "ingest, then walk": the user's line is appended to
//! memory first, so the walk starts from the marker that closes it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::{ChatConfig, SamsonConfig};
use crate::error::Result;
use crate::memory::SequenceMemory;
use crate::reply::{Reply, ReplyGenerator};
use crate::stats::SessionStats;

/// A running conversation.
#[derive(Debug)]
pub struct ChatSession<R = StdRng> {
    chat: ChatConfig,
    memory: SequenceMemory,
    generator: ReplyGenerator,
    rng: R,
    stats: SessionStats,
}

impl<R: Rng> ChatSession<R> {
    /// Start a session with an explicit random source.
    #[must_use]
    pub fn new(config: &SamsonConfig, rng: R) -> Self {
        let generator = ReplyGenerator::from_config(&config.generation);
        info!(
            bot = %config.chat.bot_name,
            max_reply_tokens = ?generator.max_tokens(),
            "Chat session started"
        );
        Self {
            chat: config.chat.clone(),
            memory: SequenceMemory::new(),
            generator,
            rng,
            stats: SessionStats::default(),
        }
    }

    /// Ingest the configured greeting like any other message and return it
    /// for display.
    pub fn greet(&mut self) -> &str {
        self.memory.ingest_message(&self.chat.greeting);
        &self.chat.greeting
    }

    /// Ingest `input`, then walk the memory to produce a reply.
    ///
    /// # Errors
    ///
    /// Propagates [`ReplyGenerator::generate`] errors, which indicate a
    /// broken memory invariant.
    pub fn respond(&mut self, input: &str) -> Result<Reply> {
        self.memory.ingest_message(input);
        let reply = self.generator.generate(&self.memory, &mut self.rng)?;
        self.stats.record(&reply);
        debug!(
            turn = self.stats.turns,
            sequence_len = self.memory.len(),
            "Turn complete"
        );
        Ok(reply)
    }

    /// Labels and greeting in use.
    #[must_use]
    pub fn chat_config(&self) -> &ChatConfig {
        &self.chat
    }

    /// Read access to the underlying memory.
    #[must_use]
    pub fn memory(&self) -> &SequenceMemory {
        &self.memory
    }

    /// Reply counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}

impl ChatSession<StdRng> {
    /// Deterministic session: same seed and same inputs give the same
    /// replies.
    #[must_use]
    pub fn from_seed(config: &SamsonConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Session seeded from the OS entropy source.
    #[must_use]
    pub fn from_entropy(config: &SamsonConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }

    /// Seeded from `generation.seed` when set, from entropy otherwise.
    #[must_use]
    pub fn from_config(config: &SamsonConfig) -> Self {
        match config.generation.seed {
            Some(seed) => Self::from_seed(config, seed),
            None => Self::from_entropy(config),
        }
    }
}

//! # Samson Core Library
//!
//! The memory and generation engine behind the Samson chatbot.
//!
//! Every word ever typed (by the user and by Samson itself) is appended to a
//! single [`SequenceMemory`]. An occurrence index maps each token to the
//! positions where it appears, and replies are produced by a random walk:
//! from the current token, jump to a random earlier occurrence and emit the
//! token that followed it, until an end-of-message marker is reached.
//!
//! ```text
//!  "the cat sat"  ──tokenize──▶  [RS] the cat sat [RS] ...
//!                                      │    │
//!  index: "the" → [1, 5]               ▼    ▼
//!         "cat" → [2, 6]        walk: the → cat → ran → [RS]  (done)
//! ```
//!
//! ## Modules
//!
//! - [`tokenizer`] — whitespace tokenization
//! - [`memory`] — the append-only sequence and its occurrence index
//! - [`reply`] — the random-walk reply generator
//! - [`session`] — greeting / respond turns over one memory
//! - [`config`] — TOML-loadable settings
//! - [`stats`] — serializable counters for logging

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod memory;
pub mod reply;
pub mod session;
pub mod stats;
pub mod tokenizer;
pub mod types;

pub use config::SamsonConfig;
pub use error::SamsonError;
pub use memory::SequenceMemory;
pub use reply::{Reply, ReplyGenerator, WalkOutcome};
pub use session::ChatSession;
pub use types::*;

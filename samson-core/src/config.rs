//! Configuration for the Samson chatbot.
//!
//! Maps directly to an optional `samson.toml`. Every field has a default, so
//! an empty file (or no file at all) reproduces the stock behaviour.
//!
//! ```toml
//! [general]
//! log_level = "info"
//!
//! [chat]
//! bot_name = "Samson"
//! user_label = "User"
//! greeting = "Hello! I am Samson. I am a simple chatbot. :)"
//!
//! [generation]
//! max_reply_tokens = 256   # 0 disables the cap
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SamsonError};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub struct SamsonConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Conversation labels and greeting.
    #[serde(default)]
    pub chat: ChatConfig,
    /// Reply walk settings.
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl SamsonConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `SamsonError::Config` if the TOML is invalid or fails
    /// [`SamsonConfig::validate`].
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| SamsonError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    /// Returns `SamsonError::Config` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.chat.bot_name.trim().is_empty() {
            return Err(SamsonError::Config("chat.bot_name must not be blank".to_string()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log filter used when neither `--log-level` nor `RUST_LOG` is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Conversation labels and the opening message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Label printed before every bot line.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    /// Label printed as the input prompt.
    #[serde(default = "default_user_label")]
    pub user_label: String,
    /// First message, ingested into memory before the first prompt.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            user_label: default_user_label(),
            greeting: default_greeting(),
        }
    }
}

/// Reply walk settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Hard cap on reply length; `0` walks until a marker is reached.
    #[serde(default = "default_max_reply_tokens")]
    pub max_reply_tokens: usize,
    /// Seed for the random source; `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// The reply cap as an option, with `0` meaning uncapped.
    #[must_use]
    pub fn reply_cap(&self) -> Option<usize> {
        (self.max_reply_tokens > 0).then_some(self.max_reply_tokens)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_reply_tokens: default_max_reply_tokens(),
            seed: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "warn".to_string() }
fn default_bot_name() -> String { "Samson".to_string() }
fn default_user_label() -> String { "User".to_string() }
fn default_greeting() -> String { "Hello! I am Samson. I am a simple chatbot. :)".to_string() }
fn default_max_reply_tokens() -> usize { 256 }

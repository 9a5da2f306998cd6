//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use samson_core::config::SamsonConfig;

/// Log output format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// A tiny stochastic chatbot. Type a line, get a reply; Ctrl-D to leave.
#[derive(Parser, Debug)]
#[command(name = "samson", version, about)]
pub struct Args {
    /// TOML configuration file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Seed the random walk for reproducible replies.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Longest reply in tokens (0 disables the cap).
    #[arg(long)]
    pub max_reply_tokens: Option<usize>,

    /// Log filter, e.g. `debug` or `samson_core=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Args {
    /// Load the config file (or defaults) and apply command-line overrides.
    pub fn load_config(&self) -> samson_core::error::Result<SamsonConfig> {
        let mut config = match &self.config {
            Some(path) => SamsonConfig::from_file(path)?,
            None => SamsonConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.generation.seed = Some(seed);
        }
        if let Some(cap) = self.max_reply_tokens {
            config.generation.max_reply_tokens = cap;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_arguments_means_defaults() {
        let args = Args::try_parse_from(["samson"]).expect("parse");
        assert_eq!(args.log_format, LogFormat::Text);
        let config = args.load_config().expect("defaults");
        assert_eq!(config, SamsonConfig::default());
    }

    #[test]
    fn flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "[chat]\nbot_name = \"Sam\"\n[generation]\nseed = 1\nmax_reply_tokens = 10"
        )
        .expect("write");

        let path = file.path().to_string_lossy().into_owned();
        let args = Args::try_parse_from([
            "samson",
            "--config",
            path.as_str(),
            "--seed",
            "7",
            "--max-reply-tokens",
            "0",
            "--log-format",
            "json",
        ])
        .expect("parse");

        let config = args.load_config().expect("load");
        assert_eq!(config.chat.bot_name, "Sam");
        assert_eq!(config.generation.seed, Some(7));
        assert_eq!(config.generation.reply_cap(), None);
        assert_eq!(args.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Args::try_parse_from(["samson", "--seed", "abc"]).is_err());
    }
}

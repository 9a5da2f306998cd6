//! `tracing` subscriber setup.
//!
//! Logs go to stderr; stdout carries only the conversation.

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Pick the filter: `--log-level`, then `env_level` (`RUST_LOG`), then the
/// config value. A malformed directive at the chosen level is an error.
pub fn resolve_filter(
    cli_level: Option<&str>,
    env_level: Option<&str>,
    config_level: &str,
) -> anyhow::Result<EnvFilter> {
    if let Some(level) = cli_level {
        return EnvFilter::try_new(level).with_context(|| format!("invalid --log-level {level:?}"));
    }
    match env_level.map(str::trim).filter(|s| !s.is_empty()) {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid {} {level:?}", EnvFilter::DEFAULT_ENV)),
        None => EnvFilter::try_new(config_level)
            .with_context(|| format!("invalid general.log_level {config_level:?}")),
    }
}

/// Install the global subscriber.
pub fn init(cli_level: Option<&str>, config_level: &str, format: LogFormat) -> anyhow::Result<()> {
    let env_level = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = resolve_filter(cli_level, env_level.as_deref(), config_level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_wins() {
        let filter = resolve_filter(Some("debug"), Some("trace"), "warn").expect("valid filter");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn env_level_beats_config() {
        let filter = resolve_filter(None, Some("info"), "warn").expect("valid filter");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn unset_or_blank_env_falls_back_to_config() {
        let unset = resolve_filter(None, None, "warn").expect("valid filter");
        assert_eq!(unset.to_string(), "warn");
        let blank = resolve_filter(None, Some("  "), "error").expect("valid filter");
        assert_eq!(blank.to_string(), "error");
    }

    #[test]
    fn malformed_env_level_is_reported() {
        let err = resolve_filter(None, Some("samson_core=loudest"), "warn")
            .expect_err("bad level must not be ignored");
        assert!(err.to_string().contains("RUST_LOG"), "{err}");
    }
}

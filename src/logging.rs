//! Console logging for the rental-scout binary.
//!
//! Logging starts before the config file is read so config loading itself
//! is visible. Precedence: RUST_LOG, then `--debug`, then `log_level` from
//! the config, which is swapped in once the file has been parsed.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::fmt::Formatter;
use tracing_subscriber::reload::Handle;
use tracing_subscriber::EnvFilter;

pub struct Logging {
    handle: Handle<EnvFilter, Formatter>,
    env_override: bool,
    debug: bool,
}

/// Install the global subscriber with the startup filter
pub fn init(debug: bool) -> Result<Logging> {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let env_override = env_filter.is_some();
    let filter = env_filter.unwrap_or_else(|| EnvFilter::new(startup_level(debug)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .with_filter_reloading();
    let handle = builder.reload_handle();
    builder.try_init().map_err(|err| anyhow!(err))?;

    Ok(Logging {
        handle,
        env_override,
        debug,
    })
}

impl Logging {
    /// Switch to the configured level unless RUST_LOG or `--debug` decided it
    pub fn apply_config_level(&self, level: &str) -> Result<()> {
        let Some(level) = configured_level(self.debug, self.env_override, level) else {
            return Ok(());
        };
        let filter =
            EnvFilter::try_new(level).with_context(|| format!("Invalid log_level '{}'", level))?;
        self.handle
            .reload(filter)
            .context("Failed to apply log_level")?;
        Ok(())
    }
}

fn startup_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

fn configured_level(debug: bool, env_override: bool, level: &str) -> Option<&str> {
    if debug || env_override {
        None
    } else {
        Some(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_starts_at_debug() {
        assert_eq!(startup_level(true), "debug");
        assert_eq!(startup_level(false), "info");
    }

    #[test]
    fn test_config_level_only_without_overrides() {
        assert_eq!(configured_level(false, false, "warn"), Some("warn"));
        assert_eq!(configured_level(true, false, "warn"), None);
        assert_eq!(configured_level(false, true, "warn"), None);
    }
}

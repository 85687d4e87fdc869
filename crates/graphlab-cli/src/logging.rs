//! Tracing subscriber setup for the CLI.
//!
//! Only the binary installs a subscriber; the library crates just emit events.
//! Output goes to stderr so that `eval` can stream samples on stdout.

use std::{env, io};

use anyhow::Result;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the `-v` verbosity mapping.
pub const LOG_ENV: &str = "GRAPHLAB_LOG";

/// Tracing configuration builder.
#[derive(Debug, Default)]
pub struct TracingConfig {
    /// Verbosity level from repeated `-v` flags.
    pub verbosity: u8,
    /// Filter directive; takes precedence over `verbosity` when set.
    pub env_filter: Option<String>,
}

impl TracingConfig {
    /// Configuration for `verbosity`, honouring [`LOG_ENV`] when present.
    pub fn from_env(verbosity: u8) -> Self {
        Self {
            verbosity,
            env_filter: env::var(LOG_ENV).ok().filter(|v| !v.trim().is_empty()),
        }
    }

    /// Filter directive for the configured verbosity.
    pub fn verbosity_to_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Install the global subscriber.
    pub fn init(self) -> Result<()> {
        let filter = match &self.env_filter {
            Some(directive) => EnvFilter::try_new(directive)?,
            None => EnvFilter::try_new(self.verbosity_to_filter())?,
        };
        let fmt_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .compact();
        Registry::default().with(filter).with(fmt_layer).try_init()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        let level = |verbosity| {
            TracingConfig {
                verbosity,
                env_filter: None,
            }
            .verbosity_to_filter()
        };
        assert_eq!(level(0), "warn");
        assert_eq!(level(1), "debug");
        assert_eq!(level(2), "trace");
        assert_eq!(level(7), "trace");
    }
}

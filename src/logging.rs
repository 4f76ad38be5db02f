// SPDX-License-Identifier: MPL-2.0
//! Log subscriber setup.
//!
//! `RUST_LOG` replaces the default `info` filter entirely; an unset, blank or
//! unparsable value falls back to it.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `RUST_LOG`-style directives.
#[must_use]
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global fmt subscriber.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::prelude::*;

    fn enabled(directives: Option<&str>, level: Level) -> bool {
        let subscriber = tracing_subscriber::registry().with(env_filter(directives));
        tracing::subscriber::with_default(subscriber, || match level {
            Level::TRACE => tracing::enabled!(Level::TRACE),
            Level::DEBUG => tracing::enabled!(Level::DEBUG),
            Level::INFO => tracing::enabled!(Level::INFO),
            Level::WARN => tracing::enabled!(Level::WARN),
            _ => tracing::enabled!(Level::ERROR),
        })
    }

    #[test]
    fn defaults_to_info() {
        assert!(enabled(None, Level::INFO));
        assert!(!enabled(None, Level::DEBUG));
    }

    #[test]
    fn rust_log_can_raise_verbosity() {
        assert!(enabled(Some("debug"), Level::DEBUG));
    }

    #[test]
    fn rust_log_can_lower_verbosity() {
        assert!(!enabled(Some("warn"), Level::INFO));
        assert!(enabled(Some("warn"), Level::WARN));
    }

    #[test]
    fn blank_value_uses_default() {
        assert!(enabled(Some("  "), Level::INFO));
        assert!(!enabled(Some("  "), Level::DEBUG));
    }
}

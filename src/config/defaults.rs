// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Name shown in the landing page greeting.
pub const DEFAULT_USER_NAME: &str = "Abby";

// ==========================================================================
// Roku Defaults
// ==========================================================================

/// TCP port of the Roku External Control Protocol.
pub const ROKU_ECP_PORT: u16 = 8060;

/// Default delay between two power-mode queries while Quick Controls is open.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;

/// Minimum poll interval (in seconds).
pub const MIN_POLL_INTERVAL_SECS: u64 = 1;

/// Maximum poll interval (in seconds).
pub const MAX_POLL_INTERVAL_SECS: u64 = 60;

/// Default timeout for a single ECP request.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 2000;

/// Minimum request timeout (in milliseconds).
pub const MIN_REQUEST_TIMEOUT_MS: u64 = 250;

/// Maximum request timeout (in milliseconds).
pub const MAX_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Keypresses sent per volume button press.
pub const DEFAULT_VOLUME_STEPS: u32 = 1;

/// Maximum keypresses per volume button press.
pub const MAX_VOLUME_STEPS: u32 = 10;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_POLL_INTERVAL_SECS > 0);
    assert!(MAX_POLL_INTERVAL_SECS >= MIN_POLL_INTERVAL_SECS);
    assert!(DEFAULT_POLL_INTERVAL_SECS >= MIN_POLL_INTERVAL_SECS);
    assert!(DEFAULT_POLL_INTERVAL_SECS <= MAX_POLL_INTERVAL_SECS);

    assert!(MIN_REQUEST_TIMEOUT_MS > 0);
    assert!(MAX_REQUEST_TIMEOUT_MS >= MIN_REQUEST_TIMEOUT_MS);
    assert!(DEFAULT_REQUEST_TIMEOUT_MS >= MIN_REQUEST_TIMEOUT_MS);
    assert!(DEFAULT_REQUEST_TIMEOUT_MS <= MAX_REQUEST_TIMEOUT_MS);

    assert!(DEFAULT_VOLUME_STEPS <= MAX_VOLUME_STEPS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_defaults_are_valid() {
        assert_eq!(DEFAULT_POLL_INTERVAL_SECS, 2);
        assert!(DEFAULT_POLL_INTERVAL_SECS >= MIN_POLL_INTERVAL_SECS);
        assert!(DEFAULT_POLL_INTERVAL_SECS <= MAX_POLL_INTERVAL_SECS);
    }

    #[test]
    fn request_timeout_defaults_are_valid() {
        assert_eq!(DEFAULT_REQUEST_TIMEOUT_MS, 2000);
        assert!(DEFAULT_REQUEST_TIMEOUT_MS >= MIN_REQUEST_TIMEOUT_MS);
        assert!(DEFAULT_REQUEST_TIMEOUT_MS <= MAX_REQUEST_TIMEOUT_MS);
    }
}

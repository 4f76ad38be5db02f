// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Roku(RokuError),
}

/// Failures talking to a Roku device over the External Control Protocol.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RokuError {
    /// No TV address was configured (CLI, `ROKU_IP`, or settings file).
    MissingAddress,

    /// The request never produced a response (connection refused, timeout, DNS).
    Request(String),

    /// The device answered with a non-2xx status.
    Status {
        key: String,
        status: u16,
        body: String,
    },
}

impl RokuError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RokuError::MissingAddress => "error-roku-missing-address",
            RokuError::Request(_) => "error-roku-request",
            RokuError::Status { .. } => "error-roku-status",
        }
    }
}

impl fmt::Display for RokuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RokuError::MissingAddress => write!(f, "ROKU_IP is not set"),
            RokuError::Request(msg) => write!(f, "Request failed: {}", msg),
            RokuError::Status { key, status, body } => {
                write!(f, "Keypress {} failed: {} {}", key, status, body)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Roku(e) => write!(f, "Roku Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for RokuError {}

impl From<RokuError> for Error {
    fn from(err: RokuError) -> Self {
        Error::Roku(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for RokuError {
    fn from(err: reqwest::Error) -> Self {
        RokuError::Request(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn roku_status_error_mentions_key_and_status() {
        let err = RokuError::Status {
            key: "PowerOn".to_string(),
            status: 503,
            body: "busy".to_string(),
        };
        assert_eq!(format!("{}", err), "Keypress PowerOn failed: 503 busy");
    }

    #[test]
    fn roku_error_wraps_into_top_level_error() {
        let err: Error = RokuError::MissingAddress.into();
        assert!(matches!(err, Error::Roku(RokuError::MissingAddress)));
        assert_eq!(format!("{}", err), "Roku Error: ROKU_IP is not set");
    }

    #[test]
    fn roku_error_i18n_keys() {
        assert_eq!(
            RokuError::MissingAddress.i18n_key(),
            "error-roku-missing-address"
        );
        assert_eq!(
            RokuError::Request("timeout".into()).i18n_key(),
            "error-roku-request"
        );
        assert_eq!(
            RokuError::Status {
                key: "Power".into(),
                status: 500,
                body: String::new(),
            }
            .i18n_key(),
            "error-roku-status"
        );
    }
}

//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Roster.
///
/// `Network`, `RemoteStatus` and `Decode` together form the remote-call
/// failure surface: issuing a request, interpreting its status, and decoding
/// its payload. Callers treat the three interchangeably; the split exists so
/// logs and tests can tell them apart.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum RosterError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Remote returned status {status}: {message}")]
    RemoteStatus { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RosterError {
    /// Whether this error came from the remote call path (as opposed to
    /// local configuration or internal plumbing).
    pub const fn is_remote_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::RemoteStatus { .. } | Self::Decode(_))
    }

    /// Stable label for structured logging.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::RemoteStatus { .. } => "remote_status",
            Self::Decode(_) => "decode",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_failure_covers_transport_status_and_decode() {
        assert!(RosterError::Network("connection refused".into()).is_remote_failure());
        assert!(RosterError::RemoteStatus { status: 500, message: "boom".into() }
            .is_remote_failure());
        assert!(RosterError::Decode("bad json".into()).is_remote_failure());
        assert!(!RosterError::Config("missing base url".into()).is_remote_failure());
        assert!(!RosterError::Internal("oops".into()).is_remote_failure());
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(RosterError::Network("x".into()).label(), "network");
        assert_eq!(
            RosterError::RemoteStatus { status: 404, message: "x".into() }.label(),
            "remote_status"
        );
        assert_eq!(RosterError::Decode("x".into()).label(), "decode");
    }

    #[test]
    fn errors_serialize_with_tag() {
        let err = RosterError::RemoteStatus { status: 503, message: "unavailable".into() };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "RemoteStatus");
        assert_eq!(json["detail"]["status"], 503);
    }
}

//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use roster_domain::RosterError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RosterError);

impl From<InfraError> for RosterError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RosterError> for InfraError {
    fn from(value: RosterError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRosterError {
    fn into_roster(self) -> RosterError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RosterError */
/* -------------------------------------------------------------------------- */

impl IntoRosterError for HttpError {
    fn into_roster(self) -> RosterError {
        if self.is_timeout() {
            return RosterError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return RosterError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return RosterError::Decode(self.to_string());
        }

        if let Some(status) = self.status() {
            return RosterError::RemoteStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown status").into(),
            };
        }

        RosterError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_roster())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

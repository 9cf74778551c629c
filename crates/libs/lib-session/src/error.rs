//! # Provider Error Taxonomy
//!
//! Failure kinds a wallet provider can produce. The controller absorbs both
//! of them: a failed provider call only ever decides *which* terminal state
//! is reached (signed-out), it is never surfaced to the render surface as an
//! error value. The two kinds stay distinguishable so telemetry can tell an
//! unresponsive extension apart from a user pressing "cancel".

use thiserror::Error;

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Failure raised by a wallet provider operation.
///
/// `Clone` and `PartialEq` are derived so test providers can script outcomes
/// and assertions can match on the exact failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider could not be reached or failed outright (extension not
    /// installed, locked, or crashed mid-call).
    #[error("wallet provider unavailable: {0}")]
    Unavailable(String),

    /// The user cancelled an interactive connection flow.
    #[error("connection request declined by user")]
    Declined,
}

impl ProviderError {
    /// Short kind tag for telemetry fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Unavailable(_) => "unavailable",
            ProviderError::Declined => "declined",
        }
    }

    /// Whether this failure is an expected user action rather than an
    /// environment fault.
    pub fn is_declined(&self) -> bool {
        matches!(self, ProviderError::Declined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::Unavailable("extension locked".to_string());
        assert_eq!(err.to_string(), "wallet provider unavailable: extension locked");
        assert_eq!(ProviderError::Declined.to_string(), "connection request declined by user");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(ProviderError::Unavailable(String::new()).kind(), "unavailable");
        assert_eq!(ProviderError::Declined.kind(), "declined");
        assert!(ProviderError::Declined.is_declined());
        assert!(!ProviderError::Unavailable(String::new()).is_declined());
    }
}

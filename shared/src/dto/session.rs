//! Wallet session DTOs shared between the controller and the render surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Connection status of a wallet session.
///
/// `Initializing` is only ever observed before the mount-time probe settles;
/// after that the status is always one of the two terminal display states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    Initializing,
    SignedOut,
    SignedIn,
}

impl SessionStatus {
    /// Human-readable label for logs and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Initializing => "initializing",
            SessionStatus::SignedOut => "signed-out",
            SessionStatus::SignedIn => "signed-in",
        }
    }
}

/// Snapshot of a wallet session, shaped for display.
///
/// `identity` is the full public key; `display_identity` is its truncated
/// form for constrained layouts. Both are absent unless `status` is
/// [`SessionStatus::SignedIn`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionView {
    pub status: SessionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_identity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_at: Option<DateTime<Utc>>,
}

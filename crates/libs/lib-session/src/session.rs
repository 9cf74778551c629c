//! # Wallet Session State
//!
//! The authoritative state of one wallet session. Exactly one of these
//! exists per controller instance; it is never shared across controllers.

use chrono::{DateTime, Utc};
use shared::dto::session::{SessionStatus, SessionView};
use shared::utils::truncate_identity;

/// Connection state of a single wallet session.
///
/// `Initializing` holds only until the mount-time probe settles; after that
/// the session is always in one of the two displayable states. Signed-in is
/// equivalent to holding a non-empty identity.
#[derive(Clone, Debug, PartialEq)]
pub enum WalletSession {
    Initializing,
    SignedOut,
    SignedIn {
        /// Opaque public key identifying the wallet account.
        identity: String,
        /// When this controller last observed the sign-in.
        connected_at: DateTime<Utc>,
    },
}

impl WalletSession {
    /// Classify a provider-supplied identity into a terminal session state.
    ///
    /// Absent and blank identities both mean signed-out; the identity is
    /// otherwise kept verbatim, it is opaque to this library.
    pub fn from_identity(identity: Option<String>) -> Self {
        match identity {
            Some(key) if !key.trim().is_empty() => WalletSession::SignedIn {
                identity: key,
                connected_at: Utc::now(),
            },
            _ => WalletSession::SignedOut,
        }
    }

    pub fn status(&self) -> SessionStatus {
        match self {
            WalletSession::Initializing => SessionStatus::Initializing,
            WalletSession::SignedOut => SessionStatus::SignedOut,
            WalletSession::SignedIn { .. } => SessionStatus::SignedIn,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, WalletSession::SignedIn { .. })
    }

    pub fn identity(&self) -> Option<&str> {
        match self {
            WalletSession::SignedIn { identity, .. } => Some(identity),
            _ => None,
        }
    }

    /// Project this session into the DTO the render surface consumes.
    pub fn view(&self) -> SessionView {
        match self {
            WalletSession::SignedIn {
                identity,
                connected_at,
            } => SessionView {
                status: SessionStatus::SignedIn,
                identity: Some(identity.clone()),
                display_identity: Some(truncate_identity(identity)),
                connected_at: Some(*connected_at),
            },
            _ => SessionView {
                status: self.status(),
                identity: None,
                display_identity: None,
                connected_at: None,
            },
        }
    }
}

//! # Wallet Session Library
//!
//! Connection-state management for one external wallet session.
//!
//! ## Overview
//!
//! A [`SessionController`] owns the authoritative view of a single wallet
//! session (signed-out vs. signed-in with an identity) and mediates connect
//! and disconnect requests to an injected [`WalletProvider`]. The render
//! surface reads snapshots or subscribes to a watch channel; it never talks
//! to the provider directly.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lib_session::{SessionController, provider::mock::MockProvider};
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let provider = Arc::new(MockProvider::new().with_stored_identity("GDQP..."));
//! let controller = SessionController::new(provider);
//!
//! // Mount-time probe: settles on signed-in or signed-out, never sticks
//! // on initializing.
//! let session = controller.probe().await;
//! assert!(session.is_signed_in());
//!
//! let session = controller.request_disconnect().await;
//! assert!(!session.is_signed_in());
//! # }
//! ```
//!
//! ## Failure Policy
//!
//! Provider failures are absorbed, logged, and mapped to signed-out. The
//! render surface always has a definite state to show; an unresponsive
//! wallet extension must not block the rest of the interface.

pub mod controller;
pub mod error;
pub mod provider;
pub mod session;

// Re-export commonly used types
pub use controller::SessionController;
pub use error::{ProviderError, Result};
pub use provider::WalletProvider;
pub use session::WalletSession;

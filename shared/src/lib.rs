//! # Shared Session Contract Library
//!
//! Defines the contract between the wallet session controller and whatever
//! render surface consumes it. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects handed to the render surface
//!   - **[`dto::session`]**: Wallet session status and view
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_identity`]**: Format wallet identities for display
//!   - **[`utils::truncate_identity`]**: Truncate identities with ellipsis
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** in Rust, mapped to **snake_case** in JSON
//! - Status values serialize as **kebab-case** strings (`"signed-in"`)
//! - Optional fields are omitted from JSON when `None`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::session::{SessionStatus, SessionView};
//! use shared::utils::truncate_identity;
//!
//! let view = SessionView {
//!     status: SessionStatus::SignedIn,
//!     identity: Some("GDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37".into()),
//!     display_identity: Some(truncate_identity(
//!         "GDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37",
//!     )),
//!     connected_at: None,
//! };
//! assert_eq!(view.display_identity.as_deref(), Some("GDQP...4W37"));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;

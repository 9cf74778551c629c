//! # Data Transfer Objects (DTOs)
//!
//! Data structures handed from the session controller to the render surface.
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: omitted when `None` using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: serialize to kebab-case strings using
//!   `#[serde(rename_all = "kebab-case")]`

pub mod session;

pub use session::{SessionStatus, SessionView};

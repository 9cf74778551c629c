//! # Shared Utility Functions
//!
//! Display helpers used by both the session library and its consumers.
//!
//! Stellar public keys are 56-character base32 strings; showing them in full
//! wrecks most layouts, so the render surface gets an ellipsized form.

/// Format a wallet identity by keeping the first `prefix` and last `suffix`
/// characters with an ellipsis in between.
///
/// Identities too short to truncate meaningfully are returned unchanged.
/// Identities are ASCII (base32), so byte slicing is safe.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_identity;
///
/// let key = "GDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37";
/// assert_eq!(format_identity(key, 4, 4), "GDQP...4W37");
/// assert_eq!(format_identity(key, 6, 3), "GDQP2K...W37");
/// assert_eq!(format_identity("short", 4, 4), "short");
/// ```
pub fn format_identity(identity: &str, prefix: usize, suffix: usize) -> String {
    let len = identity.len();
    if len <= prefix + suffix || prefix >= len || suffix >= len {
        return identity.to_string();
    }

    let (head, _) = identity.split_at(prefix);
    let (_, tail) = identity.split_at(len - suffix);
    format!("{}...{}", head, tail)
}

/// Format a wallet identity with the default 4-character prefix and suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_identity;
///
/// let key = "GDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37";
/// assert_eq!(truncate_identity(key), "GDQP...4W37");
/// ```
pub fn truncate_identity(identity: &str) -> String {
    format_identity(identity, 4, 4)
}

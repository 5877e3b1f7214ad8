//! Access restriction for structure dumps.
//!
//! A document may be protected by an owner password and/or a user password.
//! The dump stores SHA-256 digests of them; opening the document requires
//! one of the passwords to authenticate, the same way a PDF standard
//! security handler does:
//!
//! - the owner password grants full access
//! - the user password grants read access
//! - a document without a user password opens for anyone
//!
//! # Security Considerations
//!
//! - Digests are compared in constant time
//! - Plain-text passwords are never stored

mod handler;

pub use handler::{sha256_hex, SecurityHandler};

/// Level of access granted by the credentials that opened a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// Authenticated with the owner password, or the document is unrestricted
    Owner,
    /// Authenticated as a user
    User,
}

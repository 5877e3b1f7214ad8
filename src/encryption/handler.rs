//! Password validation.

use super::AccessLevel;
use crate::error::{Error, Result};
use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Security handler of an access-restricted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SecurityHandler {
    /// Hex SHA-256 of the owner password
    #[serde(default, rename = "owner_password_sha256")]
    pub owner_hash: Option<String>,

    /// Hex SHA-256 of the user password; absent means no user password
    #[serde(default, rename = "user_password_sha256")]
    pub user_hash: Option<String>,
}

impl SecurityHandler {
    /// Create a handler from plain-text passwords.
    pub fn from_passwords(owner: Option<&str>, user: Option<&str>) -> Self {
        Self {
            owner_hash: owner.map(sha256_hex),
            user_hash: user.map(sha256_hex),
        }
    }

    /// Check that the stored digests are well formed.
    pub fn validate(&self) -> Result<()> {
        for hash in [&self.owner_hash, &self.user_hash].into_iter().flatten() {
            decode_digest(hash)?;
        }
        Ok(())
    }

    /// Authenticate with the supplied credentials.
    ///
    /// Tries the owner password first, then the user password, then the
    /// empty user password.
    pub fn authenticate(&self, owner: Option<&str>, user: Option<&str>) -> Result<AccessLevel> {
        if let (Some(password), Some(hash)) = (owner, &self.owner_hash) {
            if matches_digest(password, hash)? {
                log::debug!("Authenticated with owner password");
                return Ok(AccessLevel::Owner);
            }
        }

        let Some(user_hash) = &self.user_hash else {
            return Ok(AccessLevel::User);
        };

        for candidate in [user, Some("")].into_iter().flatten() {
            if matches_digest(candidate, user_hash)? {
                log::debug!("Authenticated with user password");
                return Ok(AccessLevel::User);
            }
        }

        log::warn!("Password authentication failed");
        Err(Error::WrongPassword)
    }
}

/// Hex-encoded SHA-256 digest of a password.
pub fn sha256_hex(password: &str) -> String {
    Sha256::digest(password.as_bytes())
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

fn matches_digest(password: &str, expected_hex: &str) -> Result<bool> {
    let expected = decode_digest(expected_hex)?;
    let actual = Sha256::digest(password.as_bytes());
    Ok(constant_time_compare(&actual, &expected))
}

fn decode_digest(hex: &str) -> Result<Vec<u8>> {
    let invalid = || Error::InvalidDocument(format!("malformed password digest '{}'", hex));

    if hex.len() != 64 || !hex.is_ascii() {
        return Err(invalid());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid()))
        .collect()
}

/// Constant-time comparison to prevent timing attacks.
///
/// Returns true if the slices are equal.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_owner_password_grants_owner_access() {
        let handler = SecurityHandler::from_passwords(Some("boss"), Some("reader"));
        assert_eq!(handler.authenticate(Some("boss"), None).unwrap(), AccessLevel::Owner);
        assert_eq!(handler.authenticate(None, Some("reader")).unwrap(), AccessLevel::User);
        assert_eq!(
            handler.authenticate(Some("wrong"), Some("reader")).unwrap(),
            AccessLevel::User
        );
    }

    #[test]
    fn test_wrong_password() {
        let handler = SecurityHandler::from_passwords(Some("boss"), Some("reader"));
        assert!(matches!(handler.authenticate(None, None), Err(Error::WrongPassword)));
        assert!(matches!(
            handler.authenticate(Some("reader"), Some("boss")),
            Err(Error::WrongPassword)
        ));
    }

    #[test]
    fn test_empty_user_password_opens_without_credentials() {
        let handler = SecurityHandler::from_passwords(Some("boss"), Some(""));
        assert_eq!(handler.authenticate(None, None).unwrap(), AccessLevel::User);

        let owner_only = SecurityHandler::from_passwords(Some("boss"), None);
        assert_eq!(owner_only.authenticate(None, None).unwrap(), AccessLevel::User);
    }

    #[test]
    fn test_malformed_digest() {
        let handler = SecurityHandler {
            owner_hash: None,
            user_hash: Some("not-a-digest".to_string()),
        };
        assert!(matches!(handler.validate(), Err(Error::InvalidDocument(_))));
        assert!(matches!(handler.authenticate(None, Some("x")), Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare(b"abc", b"abc"));
        assert!(!constant_time_compare(b"abc", b"abd"));
        assert!(!constant_time_compare(b"abc", b"ab"));
    }
}

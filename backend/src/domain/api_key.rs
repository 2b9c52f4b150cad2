//! Opaque API key credential issued to each user at registration.
//!
//! Keys are 64 lowercase hex characters: the SHA-256 digest of 32 random
//! bytes. The raw value lives in a [`Zeroizing`] buffer and never appears in
//! `Debug` output.

use std::fmt;

use rand::RngCore;
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

const SEED_LEN: usize = 32;

/// Validation errors returned by [`ApiKey::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyValidationError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for ApiKeyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "api key must not be empty"),
            Self::ContainsWhitespace => write!(f, "api key must not contain whitespace"),
        }
    }
}

impl std::error::Error for ApiKeyValidationError {}

/// Bearer credential resolving to exactly one user.
///
/// Comparison is exact and case sensitive.
///
/// # Examples
/// ```
/// use rssagg::domain::ApiKey;
///
/// let key = ApiKey::generate();
/// assert_eq!(key.as_str().len(), 64);
/// assert!(!format!("{key:?}").contains(key.as_str()));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    /// Wrap a caller-supplied key after checking its shape.
    pub fn new(raw: impl Into<String>) -> Result<Self, ApiKeyValidationError> {
        let raw = Zeroizing::new(raw.into());
        if raw.is_empty() {
            return Err(ApiKeyValidationError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(ApiKeyValidationError::ContainsWhitespace);
        }
        Ok(Self(raw))
    }

    /// Issue a fresh random key.
    pub fn generate() -> Self {
        let mut seed = Zeroizing::new([0_u8; SEED_LEN]);
        rand::thread_rng().fill_bytes(seed.as_mut_slice());
        let digest = Sha256::digest(seed.as_slice());
        Self(Zeroizing::new(hex::encode(digest)))
    }

    /// Borrow the raw key for comparison or persistence.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl Serialize for ApiKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for key issuance and parsing.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn generated_keys_are_hex_sha256_digests() {
        let key = ApiKey::generate();
        assert_eq!(key.as_str().len(), 64);
        assert!(key.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[rstest]
    fn generated_keys_are_distinct() {
        assert_ne!(ApiKey::generate(), ApiKey::generate());
    }

    #[rstest]
    #[case("", ApiKeyValidationError::Empty)]
    #[case("abc def", ApiKeyValidationError::ContainsWhitespace)]
    #[case("abc\t", ApiKeyValidationError::ContainsWhitespace)]
    fn new_rejects_invalid_shapes(#[case] raw: &str, #[case] expected: ApiKeyValidationError) {
        assert_eq!(ApiKey::new(raw), Err(expected));
    }

    #[rstest]
    fn debug_output_is_redacted() {
        let key = ApiKey::new("super-secret").expect("valid key");
        assert_eq!(format!("{key:?}"), "ApiKey(<redacted>)");
    }

    #[rstest]
    fn serialises_as_plain_string() {
        let key = ApiKey::new("abc123").expect("valid key");
        let json = serde_json::to_string(&key).expect("serialise key");
        assert_eq!(json, "\"abc123\"");
    }
}

//! API key extraction from request headers.
//!
//! Pure parsing with no I/O: the auth gate decides what to do with the
//! outcome. Callers send `Authorization: ApiKey <key>`.

use std::fmt;

use actix_web::http::header::{AUTHORIZATION, HeaderMap};

use crate::domain::ApiKey;

const SCHEME: &str = "ApiKey";

/// Why a request carried no usable API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// No `Authorization` value at all.
    MissingHeader,
    /// A value was present but not in `ApiKey <key>` form.
    MalformedHeader,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "no authorization header included"),
            Self::MalformedHeader => write!(f, "malformed authorization header"),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Read the API key from the `Authorization` header.
///
/// The value is split on single spaces. The first part must be exactly
/// `ApiKey` and the second part is the key; anything after it is ignored.
///
/// # Examples
/// ```
/// use actix_web::http::header::{AUTHORIZATION, HeaderMap, HeaderValue};
/// use rssagg::inbound::http::credentials::{CredentialError, api_key_from_headers};
///
/// let mut headers = HeaderMap::new();
/// assert_eq!(api_key_from_headers(&headers), Err(CredentialError::MissingHeader));
///
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey abc123"));
/// let key = api_key_from_headers(&headers).expect("well formed");
/// assert_eq!(key.as_str(), "abc123");
/// ```
pub fn api_key_from_headers(headers: &HeaderMap) -> Result<ApiKey, CredentialError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(CredentialError::MissingHeader);
    };
    if value.is_empty() {
        return Err(CredentialError::MissingHeader);
    }
    let value = value
        .to_str()
        .map_err(|_| CredentialError::MalformedHeader)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next()) {
        (Some(SCHEME), Some(token)) => {
            ApiKey::new(token).map_err(|_| CredentialError::MalformedHeader)
        }
        _ => Err(CredentialError::MalformedHeader),
    }
}

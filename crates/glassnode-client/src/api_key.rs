// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! API key validation and redaction
//!
//! [`ApiKey`] makes two invalid states unrepresentable: an empty key (rejected
//! at construction, before any network activity) and a leaked key (the
//! `Debug` and `Display` implementations print a redaction marker instead of
//! the secret). The raw value is reachable only through [`ApiKey::as_str`],
//! which the request executor uses when assembling the query string.

use core::fmt;
use std::str::FromStr;

/// A validated Glassnode API key.
///
/// Guaranteed non-empty (after trimming) by construction and immutable
/// afterwards. Formatting never reveals the key material:
///
/// ```rust
/// use glassnode_client::ApiKey;
///
/// let key = ApiKey::new("sk-1234567890").unwrap();
/// assert_eq!(format!("{key:?}"), "ApiKey(<redacted>)");
/// assert!(ApiKey::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Box<str>);

impl ApiKey {
    /// Create a new `ApiKey` from any string-like input.
    ///
    /// # Errors
    ///
    /// Returns a descriptive message if the input is empty or
    /// whitespace-only.
    pub fn new(key: impl Into<String>) -> Result<Self, String> {
        let key = key.into();
        if key.trim().is_empty() {
            Err("API key cannot be empty".to_string())
        } else {
            Ok(ApiKey(key.into_boxed_str()))
        }
    }

    /// Get the raw key material for query-string assembly.
    ///
    /// Callers must not log or persist the returned value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl FromStr for ApiKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_key() {
        let key = ApiKey::new("sk-abc123").unwrap();
        assert_eq!(key.as_str(), "sk-abc123");
    }

    #[test]
    fn rejects_empty_key() {
        assert!(ApiKey::new("").is_err());
    }

    #[test]
    fn rejects_whitespace_only_key() {
        assert!(ApiKey::new(" \t\n ").is_err());
    }

    #[test]
    fn debug_and_display_redact_the_secret() {
        let key = ApiKey::new("super-secret-value").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(<redacted>)");
        assert_eq!(format!("{key}"), "<redacted>");
        assert!(!format!("{key:?}").contains("super-secret-value"));
    }

    #[test]
    fn parses_via_from_str() {
        let key: ApiKey = "sk-parsed".parse().unwrap();
        assert_eq!(key.as_str(), "sk-parsed");
    }
}

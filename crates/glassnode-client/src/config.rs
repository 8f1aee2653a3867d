// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration

use crate::{api_key::ApiKey, error::GlassnodeError};

/// Default base URL for the Glassnode production API.
pub const DEFAULT_BASE_URL: &str = "https://api.glassnode.com";

/// Default API version segment.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Configuration for [`GlassnodeClient`](crate::GlassnodeClient).
///
/// The API key is required and validated at construction; base URL and API
/// version default to the production endpoint and can be overridden. The
/// configuration is immutable once handed to the client. `Debug` output
/// redacts the key via [`ApiKey`].
#[derive(Debug, Clone)]
pub struct GlassnodeConfig {
    /// API key appended to every request
    pub api_key: ApiKey,
    /// Base URL for the Glassnode API
    pub base_url: String,
    /// API version segment inserted after the base URL
    pub api_version: String,
}

impl GlassnodeConfig {
    /// Create a configuration targeting the production API.
    ///
    /// # Errors
    ///
    /// Returns [`GlassnodeError::Config`] if the key is empty or
    /// whitespace-only.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GlassnodeError> {
        Ok(Self {
            api_key: ApiKey::new(api_key).map_err(GlassnodeError::Config)?,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Override the base URL, e.g. to point at a staging host or test server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the API version segment.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }
}

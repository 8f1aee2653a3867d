// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request executor
//!
//! [`GlassnodeClient`] owns the validated configuration and a shared
//! `reqwest` connection pool. Each call is an independent request/response
//! round trip: build the endpoint URL, issue one GET, classify the result.
//! There is no retry, no timeout beyond transport defaults, and no shared
//! mutable state, so a single instance (or a clone) can be reused freely
//! across tasks.

use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::{config::GlassnodeConfig, error::GlassnodeError, params::QueryParams};

/// Glassnode API client.
///
/// Construct via [`GlassnodeClient::new`]; invoke metric accessors from the
/// [`endpoints`](crate::endpoints) catalog, or [`GlassnodeClient::request`]
/// directly for endpoints not yet in the catalog.
#[derive(Debug, Clone)]
pub struct GlassnodeClient {
    http: Client,
    config: GlassnodeConfig,
}

impl GlassnodeClient {
    /// Create a new client from a validated configuration.
    ///
    /// Fails fast, before any network activity, on an empty base URL or API
    /// version. The API key is already guaranteed non-empty by
    /// [`GlassnodeConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: GlassnodeConfig) -> Result<Self, GlassnodeError> {
        if config.base_url.trim().is_empty() {
            return Err(GlassnodeError::Config(
                "Base URL cannot be empty".to_string(),
            ));
        }

        if config.api_version.trim().is_empty() {
            return Err(GlassnodeError::Config(
                "API version cannot be empty".to_string(),
            ));
        }

        let http = Client::builder()
            .user_agent(concat!("glassnode-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GlassnodeError::Http)?;

        Ok(Self { http, config })
    }

    /// Issue a GET against `{base_url}/{api_version}/{subpath}` with the
    /// given query parameters and the configured API key appended.
    ///
    /// Returns the raw response on any 2xx status; the body is never read or
    /// parsed on success.
    ///
    /// # Errors
    ///
    /// Returns [`GlassnodeError::Http`] on transport failure and
    /// [`GlassnodeError::Api`] carrying the status code and body on any
    /// non-2xx response.
    pub async fn request(
        &self,
        subpath: &str,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        let url = self.build_url(subpath, params);

        // The assembled URL carries the key; log the subpath only.
        debug!(subpath, params = params.len(), "requesting Glassnode metric");

        let response = self.http.get(url).send().await?;
        self.handle_response(subpath, response).await
    }

    /// Assemble the fully-qualified endpoint URL.
    ///
    /// Parameters are serialized in insertion order as `key=value` joined by
    /// `&`, with `api_key` as the trailing parameter. Keys and values are
    /// inserted verbatim, with no percent-encoding, matching the wire format
    /// existing integrations expect.
    pub(crate) fn build_url(&self, subpath: &str, params: &QueryParams) -> String {
        let mut url = format!(
            "{}/{}/{}?",
            self.config.base_url, self.config.api_version, subpath
        );
        for (key, value) in params.iter() {
            url.push_str(key);
            url.push('=');
            url.push_str(value);
            url.push('&');
        }
        url.push_str("api_key=");
        url.push_str(self.config.api_key.as_str());
        url
    }

    /// Classify a response: any 2xx status passes through untouched, anything
    /// else is consumed into an [`GlassnodeError::Api`].
    async fn handle_response(
        &self,
        subpath: &str,
        response: Response,
    ) -> Result<Response, GlassnodeError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!(subpath, status = status.as_u16(), "Glassnode API error");
        Err(GlassnodeError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the Glassnode client

use thiserror::Error;

/// Errors surfaced by [`GlassnodeClient`](crate::GlassnodeClient).
///
/// Construction problems are reported before any network activity; everything
/// else propagates from the single request/response round trip. Nothing is
/// retried or recovered internally.
#[derive(Debug, Error)]
pub enum GlassnodeError {
    /// Invalid configuration (empty API key, base URL, or API version)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure: unreachable host, connection error, malformed URL
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("API error: {status} - {body}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body content
        body: String,
    },
}

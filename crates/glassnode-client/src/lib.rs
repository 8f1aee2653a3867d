// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Thin client for the Glassnode on-chain metrics API
//!
//! This crate wraps the Glassnode HTTP API in a small typed surface: a
//! validated configuration, a request executor that builds endpoint URLs and
//! classifies responses, and a catalog of named metric accessors grouped by
//! resource family.
//!
//! # Architecture
//!
//! - **Request Executor**: [`GlassnodeClient`] - URL construction, GET
//!   execution, and success/error classification
//! - **Endpoint Catalog**: the [`endpoints`] modules - one thin forwarding
//!   accessor per documented metric, grouped by family (assets, indicators,
//!   market, addresses, transactions, fees, blockchain, exchange flow)
//! - **Validation Utilities**: [`ApiKey`] - non-empty, redaction-safe secret
//!   wrapper
//!
//! Responses are passed through untouched: a successful call returns the raw
//! [`reqwest::Response`] for the caller to interpret, and any non-2xx status
//! surfaces as [`GlassnodeError::Api`] carrying the status code and body.
//!
//! # Example
//!
//! ```no_run
//! use glassnode_client::{GlassnodeClient, GlassnodeConfig, QueryParams};
//!
//! # async fn run() -> Result<(), glassnode_client::GlassnodeError> {
//! let config = GlassnodeConfig::new("my-api-key")?;
//! let client = GlassnodeClient::new(config)?;
//!
//! let params = QueryParams::new().with("a", "BTC");
//! let response = client.get_nvt_ratio_indicator(&params).await?;
//! println!("status: {}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod api_key;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod params;

pub use api_key::ApiKey;
pub use client::GlassnodeClient;
pub use config::GlassnodeConfig;
pub use error::GlassnodeError;
pub use params::QueryParams;

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Exchange flow API

use reqwest::Response;

use crate::{GlassnodeClient, GlassnodeError, QueryParams};

impl GlassnodeClient {
    /// Per-ticker exchange flow for an asset: `flow/assets/{asset}/tickers`.
    ///
    /// Unlike the metric families this endpoint lives outside the `metrics`
    /// prefix and takes the asset symbol as a path segment.
    pub async fn get_exchange_flow_per_ticker(
        &self,
        asset: &str,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.request(&format!("flow/assets/{asset}/tickers"), params)
            .await
    }
}

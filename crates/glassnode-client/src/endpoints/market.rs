// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Market API

use reqwest::Response;

use crate::{GlassnodeClient, GlassnodeError, QueryParams};

impl GlassnodeClient {
    /// Fetch a market metric by name: `metrics/market/{market}`.
    pub async fn get_market(
        &self,
        market: &str,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.request(&format!("metrics/market/{market}"), params)
            .await
    }

    /// Realized market capitalization in USD:
    /// `metrics/market/marketcap_realized_usd`.
    pub async fn get_market_cap_realized(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_market("marketcap_realized_usd", params).await
    }

    /// Market value to realized value ratio: `metrics/market/mvrv`.
    pub async fn get_market_value_to_realized_value(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_market("mvrv", params).await
    }
}

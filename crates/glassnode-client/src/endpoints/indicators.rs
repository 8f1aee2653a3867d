// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Indicators API

use reqwest::Response;

use crate::{GlassnodeClient, GlassnodeError, QueryParams};

impl GlassnodeClient {
    /// Fetch an indicator metric by name: `metrics/indicators/{indicator}`.
    ///
    /// The named accessors below cover the documented indicators; this helper
    /// is public so callers can reach indicators added by the provider before
    /// the catalog catches up.
    pub async fn get_indicator(
        &self,
        indicator: &str,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.request(&format!("metrics/indicators/{indicator}"), params)
            .await
    }

    /// Network value to transactions ratio: `metrics/indicators/nvt`.
    pub async fn get_nvt_ratio_indicator(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_indicator("nvt", params).await
    }

    /// Coin days destroyed: `metrics/indicators/cdd`.
    pub async fn get_coin_days_destroyed_indicator(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_indicator("cdd", params).await
    }

    /// Average coin dormancy: `metrics/indicators/average_dormancy`.
    pub async fn get_average_coin_dormancy_indicator(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_indicator("average_dormancy", params).await
    }

    /// Supply-adjusted average dormancy:
    /// `metrics/indicators/average_dormancy_supply_adjusted`.
    pub async fn get_average_dormancy_supply_adjusted_indicator(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_indicator("average_dormancy_supply_adjusted", params)
            .await
    }

    /// Liveliness: `metrics/indicators/liveliness`.
    pub async fn get_liveliness_indicator(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_indicator("liveliness", params).await
    }

    /// Average spent output lifespan: `metrics/indicators/asol`.
    pub async fn get_asol_indicator(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_indicator("asol", params).await
    }

    /// Median spent output lifespan: `metrics/indicators/msol`.
    pub async fn get_msol_indicator(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_indicator("msol", params).await
    }
}

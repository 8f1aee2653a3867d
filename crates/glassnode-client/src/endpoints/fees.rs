// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Fees API

use reqwest::Response;

use crate::{GlassnodeClient, GlassnodeError, QueryParams};

impl GlassnodeClient {
    /// Fetch a fee metric by name: `metrics/fees/{metric}`.
    pub async fn get_fee_metric(
        &self,
        metric: &str,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.request(&format!("metrics/fees/{metric}"), params)
            .await
    }

    /// Total fee volume: `metrics/fees/volume_sum`.
    pub async fn get_fee_volume_total(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_fee_metric("volume_sum", params).await
    }

    /// Mean fee volume: `metrics/fees/volume_mean`.
    pub async fn get_fee_volume_mean(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_fee_metric("volume_mean", params).await
    }

    /// Total gas used: `metrics/fees/gas_used_sum`.
    pub async fn get_gas_used_sum(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_fee_metric("gas_used_sum", params).await
    }

    /// Mean gas used: `metrics/fees/gas_used_mean`.
    pub async fn get_gas_used_mean(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_fee_metric("gas_used_mean", params).await
    }

    /// Median gas used: `metrics/fees/gas_used_median`.
    pub async fn get_gas_used_median(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_fee_metric("gas_used_median", params).await
    }

    /// Mean gas price: `metrics/fees/gas_price_mean`.
    pub async fn get_gas_price_mean(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_fee_metric("gas_price_mean", params).await
    }

    /// Median gas price: `metrics/fees/gas_price_median`.
    pub async fn get_gas_price_median(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_fee_metric("gas_price_median", params).await
    }

    /// Mean per-transaction gas limit: `metrics/fees/gas_limit_tx_mean`.
    pub async fn get_transaction_gas_limit_mean(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_fee_metric("gas_limit_tx_mean", params).await
    }

    /// Median per-transaction gas limit: `metrics/fees/gas_limit_tx_median`.
    pub async fn get_transaction_gas_limit_median(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_fee_metric("gas_limit_tx_median", params).await
    }
}

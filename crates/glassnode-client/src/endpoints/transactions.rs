// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Transactions API
//!
//! Covers on-chain transaction and transfer statistics, including the
//! exchange in/outflow metrics the provider exposes under the transactions
//! family.

use reqwest::Response;

use crate::{GlassnodeClient, GlassnodeError, QueryParams};

impl GlassnodeClient {
    /// Fetch a transaction metric by name: `metrics/transactions/{metric}`.
    pub async fn get_transaction_metric(
        &self,
        metric: &str,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.request(&format!("metrics/transactions/{metric}"), params)
            .await
    }

    /// Transfer volume into exchanges:
    /// `metrics/transactions/transfers_volume_to_exchanges_sum`.
    pub async fn get_exchange_inflow(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("transfers_volume_to_exchanges_sum", params)
            .await
    }

    /// Transfer volume out of exchanges:
    /// `metrics/transactions/transfers_volume_from_exchanges_sum`.
    pub async fn get_exchange_outflow(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("transfers_volume_from_exchanges_sum", params)
            .await
    }

    /// Count of transfers into exchanges:
    /// `metrics/transactions/transfers_to_exchanges_count`.
    pub async fn get_exchange_deposits(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("transfers_to_exchanges_count", params)
            .await
    }

    /// Count of transfers out of exchanges:
    /// `metrics/transactions/transfers_from_exchanges_count`.
    pub async fn get_exchange_withdrawals(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("transfers_from_exchanges_count", params)
            .await
    }

    /// Transaction count: `metrics/transactions/count`.
    pub async fn get_transaction_count(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("count", params).await
    }

    /// Transaction rate: `metrics/transactions/rate`.
    pub async fn get_transaction_rate(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("rate", params).await
    }

    /// Transfer count: `metrics/transactions/transfers_count`.
    pub async fn get_transfer_count(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("transfers_count", params).await
    }

    /// Transfer rate: `metrics/transactions/transfers_rate`.
    pub async fn get_transfer_rate(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("transfers_rate", params).await
    }

    /// Total transfer volume: `metrics/transactions/transfers_volume_sum`.
    pub async fn get_transfer_volume_sum(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("transfers_volume_sum", params)
            .await
    }

    /// Mean transfer volume: `metrics/transactions/transfers_volume_mean`.
    pub async fn get_transfer_volume_mean(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("transfers_volume_mean", params)
            .await
    }

    /// Median transfer volume: `metrics/transactions/transfers_volume_median`.
    pub async fn get_transfer_volume_median(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("transfers_volume_median", params)
            .await
    }

    /// Entity-adjusted total transfer volume:
    /// `metrics/transactions/transfers_volume_adjusted_sum`.
    pub async fn get_transfer_volume_adjusted_sum(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("transfers_volume_adjusted_sum", params)
            .await
    }

    /// Entity-adjusted mean transfer volume:
    /// `metrics/transactions/transfers_volume_adjusted_mean`.
    pub async fn get_transfer_volume_adjusted_mean(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("transfers_volume_adjusted_mean", params)
            .await
    }

    /// Entity-adjusted median transfer volume:
    /// `metrics/transactions/transfers_volume_adjusted_median`.
    pub async fn get_transfer_volume_adjusted_median(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_transaction_metric("transfers_volume_adjusted_median", params)
            .await
    }
}

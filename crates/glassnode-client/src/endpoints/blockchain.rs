// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Blockchain API (UTXO statistics)

use reqwest::Response;

use crate::{GlassnodeClient, GlassnodeError, QueryParams};

impl GlassnodeClient {
    /// Fetch a blockchain metric by name: `metrics/blockchain/{metric}`.
    pub async fn get_blockchain_metric(
        &self,
        metric: &str,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.request(&format!("metrics/blockchain/{metric}"), params)
            .await
    }

    /// Created UTXO count: `metrics/blockchain/utxo_created_count`.
    pub async fn get_utxo_created_count(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_blockchain_metric("utxo_created_count", params)
            .await
    }

    /// Spent UTXO count: `metrics/blockchain/utxo_spent_count`.
    pub async fn get_utxo_spent_count(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_blockchain_metric("utxo_spent_count", params).await
    }

    /// Total value of created UTXOs:
    /// `metrics/blockchain/utxo_created_value_sum`.
    pub async fn get_utxo_created_value_sum(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_blockchain_metric("utxo_created_value_sum", params)
            .await
    }

    /// Mean value of created UTXOs:
    /// `metrics/blockchain/utxo_created_value_mean`.
    pub async fn get_utxo_created_value_mean(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_blockchain_metric("utxo_created_value_mean", params)
            .await
    }

    /// Median value of created UTXOs:
    /// `metrics/blockchain/utxo_created_value_median`.
    pub async fn get_utxo_created_value_median(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_blockchain_metric("utxo_created_value_median", params)
            .await
    }

    /// Total value of spent UTXOs: `metrics/blockchain/utxo_spent_value_sum`.
    pub async fn get_utxo_spent_value_sum(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_blockchain_metric("utxo_spent_value_sum", params)
            .await
    }

    /// Mean value of spent UTXOs: `metrics/blockchain/utxo_spent_value_mean`.
    pub async fn get_utxo_spent_value_mean(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_blockchain_metric("utxo_spent_value_mean", params)
            .await
    }

    /// Median value of spent UTXOs:
    /// `metrics/blockchain/utxo_spent_value_median`.
    pub async fn get_utxo_spent_value_median(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_blockchain_metric("utxo_spent_value_median", params)
            .await
    }
}

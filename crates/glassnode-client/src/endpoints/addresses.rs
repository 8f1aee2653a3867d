// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Addresses API

use reqwest::Response;

use crate::{GlassnodeClient, GlassnodeError, QueryParams};

impl GlassnodeClient {
    /// Fetch an address metric by name: `metrics/addresses/{metric}`.
    pub async fn get_address_metric(
        &self,
        metric: &str,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.request(&format!("metrics/addresses/{metric}"), params)
            .await
    }

    /// Total address count: `metrics/addresses/count`.
    pub async fn get_addresses_total_count(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_address_metric("count", params).await
    }

    /// Active address count: `metrics/addresses/active_count`.
    pub async fn get_addresses_active_count(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_address_metric("active_count", params).await
    }

    /// First-time funded address count:
    /// `metrics/addresses/new_non_zero_count`.
    pub async fn get_addresses_new_count(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_address_metric("new_non_zero_count", params).await
    }

    /// Sending address count: `metrics/addresses/sending_count`.
    pub async fn get_addresses_sending_count(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_address_metric("sending_count", params).await
    }

    /// Receiving address count: `metrics/addresses/receiving_count`.
    pub async fn get_addresses_receiving_count(
        &self,
        params: &QueryParams,
    ) -> Result<Response, GlassnodeError> {
        self.get_address_metric("receiving_count", params).await
    }
}

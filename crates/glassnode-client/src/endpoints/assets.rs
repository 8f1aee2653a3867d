// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Assets API

use reqwest::Response;

use crate::{GlassnodeClient, GlassnodeError, QueryParams};

impl GlassnodeClient {
    /// List the assets the API exposes: `metrics/assets`.
    pub async fn get_assets(&self, params: &QueryParams) -> Result<Response, GlassnodeError> {
        self.request("metrics/assets", params).await
    }
}

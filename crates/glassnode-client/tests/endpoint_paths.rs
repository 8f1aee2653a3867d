// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint catalog routing tests
//!
//! Each named accessor must target exactly its documented subpath. Every
//! call runs against a wiremock server that only answers the expected path,
//! so a drifted mapping fails the request.

use std::future::Future;

use glassnode_client::{GlassnodeClient, GlassnodeConfig, GlassnodeError, QueryParams};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Assert that `call` issues a GET for `expected_path` with the API key
/// attached.
async fn assert_routes_to<F, Fut>(expected_path: &str, call: F)
where
    F: FnOnce(GlassnodeClient) -> Fut,
    Fut: Future<Output = Result<reqwest::Response, GlassnodeError>>,
{
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(expected_path))
        .and(query_param("api_key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = GlassnodeConfig::new("test-api-key")
        .unwrap()
        .with_base_url(mock_server.uri());
    let client = GlassnodeClient::new(config).unwrap();

    let response = call(client)
        .await
        .unwrap_or_else(|e| panic!("request to {expected_path} failed: {e}"));
    assert_eq!(response.status(), 200, "unexpected status for {expected_path}");
}

#[tokio::test]
async fn assets_accessor_routes_to_documented_subpath() {
    assert_routes_to("/v1/metrics/assets", |c| async move {
        c.get_assets(&QueryParams::new()).await
    })
    .await;
}

#[tokio::test]
async fn indicator_accessors_route_to_documented_subpaths() {
    assert_routes_to("/v1/metrics/indicators/nvt", |c| async move {
        c.get_nvt_ratio_indicator(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/indicators/cdd", |c| async move {
        c.get_coin_days_destroyed_indicator(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/indicators/average_dormancy", |c| async move {
        c.get_average_coin_dormancy_indicator(&QueryParams::new()).await
    })
    .await;
    assert_routes_to(
        "/v1/metrics/indicators/average_dormancy_supply_adjusted",
        |c| async move {
            c.get_average_dormancy_supply_adjusted_indicator(&QueryParams::new())
                .await
        },
    )
    .await;
    assert_routes_to("/v1/metrics/indicators/liveliness", |c| async move {
        c.get_liveliness_indicator(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/indicators/asol", |c| async move {
        c.get_asol_indicator(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/indicators/msol", |c| async move {
        c.get_msol_indicator(&QueryParams::new()).await
    })
    .await;
}

#[tokio::test]
async fn market_accessors_route_to_documented_subpaths() {
    assert_routes_to("/v1/metrics/market/marketcap_realized_usd", |c| async move {
        c.get_market_cap_realized(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/market/mvrv", |c| async move {
        c.get_market_value_to_realized_value(&QueryParams::new()).await
    })
    .await;
}

#[tokio::test]
async fn address_accessors_route_to_documented_subpaths() {
    assert_routes_to("/v1/metrics/addresses/count", |c| async move {
        c.get_addresses_total_count(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/addresses/active_count", |c| async move {
        c.get_addresses_active_count(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/addresses/new_non_zero_count", |c| async move {
        c.get_addresses_new_count(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/addresses/sending_count", |c| async move {
        c.get_addresses_sending_count(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/addresses/receiving_count", |c| async move {
        c.get_addresses_receiving_count(&QueryParams::new()).await
    })
    .await;
}

#[tokio::test]
async fn exchange_transfer_accessors_route_to_documented_subpaths() {
    assert_routes_to(
        "/v1/metrics/transactions/transfers_volume_to_exchanges_sum",
        |c| async move { c.get_exchange_inflow(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/transactions/transfers_volume_from_exchanges_sum",
        |c| async move { c.get_exchange_outflow(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/transactions/transfers_to_exchanges_count",
        |c| async move { c.get_exchange_deposits(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/transactions/transfers_from_exchanges_count",
        |c| async move { c.get_exchange_withdrawals(&QueryParams::new()).await },
    )
    .await;
}

#[tokio::test]
async fn transaction_accessors_route_to_documented_subpaths() {
    assert_routes_to("/v1/metrics/transactions/count", |c| async move {
        c.get_transaction_count(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/transactions/rate", |c| async move {
        c.get_transaction_rate(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/transactions/transfers_count", |c| async move {
        c.get_transfer_count(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/transactions/transfers_rate", |c| async move {
        c.get_transfer_rate(&QueryParams::new()).await
    })
    .await;
    assert_routes_to(
        "/v1/metrics/transactions/transfers_volume_sum",
        |c| async move { c.get_transfer_volume_sum(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/transactions/transfers_volume_mean",
        |c| async move { c.get_transfer_volume_mean(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/transactions/transfers_volume_median",
        |c| async move { c.get_transfer_volume_median(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/transactions/transfers_volume_adjusted_sum",
        |c| async move { c.get_transfer_volume_adjusted_sum(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/transactions/transfers_volume_adjusted_mean",
        |c| async move { c.get_transfer_volume_adjusted_mean(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/transactions/transfers_volume_adjusted_median",
        |c| async move {
            c.get_transfer_volume_adjusted_median(&QueryParams::new())
                .await
        },
    )
    .await;
}

#[tokio::test]
async fn fee_accessors_route_to_documented_subpaths() {
    assert_routes_to("/v1/metrics/fees/volume_sum", |c| async move {
        c.get_fee_volume_total(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/fees/volume_mean", |c| async move {
        c.get_fee_volume_mean(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/fees/gas_used_sum", |c| async move {
        c.get_gas_used_sum(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/fees/gas_used_mean", |c| async move {
        c.get_gas_used_mean(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/fees/gas_used_median", |c| async move {
        c.get_gas_used_median(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/fees/gas_price_mean", |c| async move {
        c.get_gas_price_mean(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/fees/gas_price_median", |c| async move {
        c.get_gas_price_median(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/fees/gas_limit_tx_mean", |c| async move {
        c.get_transaction_gas_limit_mean(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/fees/gas_limit_tx_median", |c| async move {
        c.get_transaction_gas_limit_median(&QueryParams::new()).await
    })
    .await;
}

#[tokio::test]
async fn blockchain_accessors_route_to_documented_subpaths() {
    assert_routes_to("/v1/metrics/blockchain/utxo_created_count", |c| async move {
        c.get_utxo_created_count(&QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/blockchain/utxo_spent_count", |c| async move {
        c.get_utxo_spent_count(&QueryParams::new()).await
    })
    .await;
    assert_routes_to(
        "/v1/metrics/blockchain/utxo_created_value_sum",
        |c| async move { c.get_utxo_created_value_sum(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/blockchain/utxo_created_value_mean",
        |c| async move { c.get_utxo_created_value_mean(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/blockchain/utxo_created_value_median",
        |c| async move { c.get_utxo_created_value_median(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/blockchain/utxo_spent_value_sum",
        |c| async move { c.get_utxo_spent_value_sum(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/blockchain/utxo_spent_value_mean",
        |c| async move { c.get_utxo_spent_value_mean(&QueryParams::new()).await },
    )
    .await;
    assert_routes_to(
        "/v1/metrics/blockchain/utxo_spent_value_median",
        |c| async move { c.get_utxo_spent_value_median(&QueryParams::new()).await },
    )
    .await;
}

#[tokio::test]
async fn family_helpers_route_to_prefixed_subpaths() {
    assert_routes_to("/v1/metrics/indicators/sopr", |c| async move {
        c.get_indicator("sopr", &QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/market/price_usd", |c| async move {
        c.get_market("price_usd", &QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/addresses/min_1_count", |c| async move {
        c.get_address_metric("min_1_count", &QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/transactions/size_sum", |c| async move {
        c.get_transaction_metric("size_sum", &QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/fees/volume_median", |c| async move {
        c.get_fee_metric("volume_median", &QueryParams::new()).await
    })
    .await;
    assert_routes_to("/v1/metrics/blockchain/block_count", |c| async move {
        c.get_blockchain_metric("block_count", &QueryParams::new())
            .await
    })
    .await;
}

#[tokio::test]
async fn exchange_flow_routes_per_asset() {
    assert_routes_to("/v1/flow/assets/BTC/tickers", |c| async move {
        c.get_exchange_flow_per_ticker("BTC", &QueryParams::new())
            .await
    })
    .await;
    assert_routes_to("/v1/flow/assets/ETH/tickers", |c| async move {
        c.get_exchange_flow_per_ticker("ETH", &QueryParams::new())
            .await
    })
    .await;
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint catalog
//!
//! Thin named accessors for the documented Glassnode metrics, grouped by
//! resource family. Every family routes through one helper that prefixes the
//! family subpath and forwards to the request executor; the leaf accessors
//! pass the caller's [`QueryParams`](crate::QueryParams) through unchanged
//! and return whatever the executor returns. No transformation, validation,
//! or interpretation of results happens here.

pub mod addresses;
pub mod assets;
pub mod blockchain;
pub mod fees;
pub mod flow;
pub mod indicators;
pub mod market;
pub mod transactions;

//! Delivery platform API
//!
//! Wire models for the create/confirm endpoints and the HTTP client that
//! talks to them. One `reqwest::Client` is built at startup and shared by
//! the platform client and the sheet fetch.

use std::time::Duration;

use anyhow::{Context, Result};

pub mod client;
pub mod models;

pub use client::{ApiResponse, DeliveryClient};

/// Build the shared HTTP client. TLS verification stays on for every call.
pub fn build_http_client(http: &crate::config::HttpConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(http.timeout_secs))
        .user_agent(concat!("almacen-cli/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

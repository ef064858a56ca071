//! HTTP client for the delivery platform
//!
//! Thin wrapper over a shared `reqwest::Client`. Transport-level problems
//! (connection refused, timeout, body read errors) surface as `Err`; any
//! HTTP response, success or not, comes back as `Ok(ApiResponse)` with the
//! raw body preserved verbatim for the operator report.

use anyhow::{Context, Result};
use serde::Serialize;

use super::models::{ConfirmRequest, CreateOrderRequest};

/// Raw response from one platform call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Client for the order create/confirm endpoints.
#[derive(Debug, Clone)]
pub struct DeliveryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DeliveryClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        DeliveryClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST {base_url}/create?dump=eventlog` with a Bearer credential.
    pub async fn create_order(
        &self,
        payload: &CreateOrderRequest,
        token: &str,
    ) -> Result<ApiResponse> {
        let url = format!("{}/create?dump=eventlog", self.base_url);
        self.post_json(&url, payload, token).await
    }

    /// `POST {base_url}/confirm` with a Bearer credential.
    pub async fn confirm_offer(&self, offer_id: &str, token: &str) -> Result<ApiResponse> {
        let url = format!("{}/confirm", self.base_url);
        let payload = ConfirmRequest {
            offer_id: offer_id.to_string(),
        };
        self.post_json(&url, &payload, token).await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        token: &str,
    ) -> Result<ApiResponse> {
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to POST {}", url))?;

        let status = response.status().as_u16();
        log::debug!("POST {} -> {}", url, status);

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;
        log::debug!("Response body: {}", body);

        Ok(ApiResponse { status, body })
    }
}

//! Two-call submission sequence
//!
//! One row goes through create-then-confirm against the delivery platform.
//! HTTP-level failures never escape as errors: transport problems become a
//! fixed message with status 500, non-200 responses are passed through
//! verbatim, and a 200 creation response without offers is reported as
//! malformed. The only `Err` this pipeline produces is an unknown client
//! key, which is a configuration problem rather than a platform outcome.
//!
//! There is deliberately no retry and no backoff; the operator re-runs the
//! sheet after fixing whatever the report shows.

use anyhow::Result;

use crate::api::DeliveryClient;
use crate::api::models::CreateOrderResponse;
use crate::config::Config;
use crate::orders::models::{OrderRow, SubmissionOutcome};
use crate::orders::payload::build_create_payload;

/// Fixed outcome message when the creation call never reaches the platform.
pub const CREATE_FAILURE_MESSAGE: &str = "Failed to create order with unknown error";
/// Fixed outcome message when the confirmation call never reaches the platform.
pub const CONFIRM_FAILURE_MESSAGE: &str = "Failed to approve order with unknown error";
/// Outcome message for a 200 creation response without a usable offer.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "malformed creation response";

/// Status recorded for local failures; no HTTP exchange produced it.
const LOCAL_FAILURE_STATUS: u16 = 500;

/// Submits single rows; holds no per-row state.
pub struct SubmissionPipeline<'a> {
    client: &'a DeliveryClient,
    config: &'a Config,
}

impl<'a> SubmissionPipeline<'a> {
    pub fn new(client: &'a DeliveryClient, config: &'a Config) -> Self {
        SubmissionPipeline { client, config }
    }

    /// Create and confirm one order.
    ///
    /// Returns the row's reported outcome: the confirmation response when
    /// the sequence got that far, otherwise the point of failure. `Err`
    /// only for an unknown client key.
    pub async fn submit(&self, row: &OrderRow) -> Result<SubmissionOutcome> {
        let entry = self.config.client(&row.client)?;
        let payload = build_create_payload(
            row,
            &entry.station_id,
            &self.config.comment,
            self.config.comment_style,
        );

        let created = match self.client.create_order(&payload, &entry.api_key).await {
            Ok(response) => response,
            Err(err) => {
                log::error!("create failed for {}: {:#}", row.barcode, err);
                return Ok(SubmissionOutcome::new(
                    CREATE_FAILURE_MESSAGE,
                    LOCAL_FAILURE_STATUS,
                ));
            }
        };

        if created.status != 200 {
            return Ok(SubmissionOutcome::new(created.body, created.status));
        }

        let offer_id = match serde_json::from_str::<CreateOrderResponse>(&created.body) {
            Ok(response) => match response.first_offer_id() {
                Some(id) => id.to_string(),
                None => {
                    log::warn!("creation response for {} carried no offers", row.barcode);
                    return Ok(SubmissionOutcome::new(
                        MALFORMED_RESPONSE_MESSAGE,
                        LOCAL_FAILURE_STATUS,
                    ));
                }
            },
            Err(err) => {
                log::warn!(
                    "creation response for {} was not parseable: {}",
                    row.barcode,
                    err
                );
                return Ok(SubmissionOutcome::new(
                    MALFORMED_RESPONSE_MESSAGE,
                    LOCAL_FAILURE_STATUS,
                ));
            }
        };

        log::debug!("confirming offer {} for {}", offer_id, row.barcode);
        match self.client.confirm_offer(&offer_id, &entry.api_key).await {
            Ok(response) => Ok(SubmissionOutcome::new(response.body, response.status)),
            Err(err) => {
                log::error!("confirm failed for {}: {:#}", row.barcode, err);
                Ok(SubmissionOutcome::new(
                    CONFIRM_FAILURE_MESSAGE,
                    LOCAL_FAILURE_STATUS,
                ))
            }
        }
    }
}

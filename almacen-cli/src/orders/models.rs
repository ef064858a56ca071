//! Order rows and submission results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recipient last name placeholder; the sheet only carries a first name.
pub const LAST_NAME_PLACEHOLDER: &str = "-";

/// One order as read from the spreadsheet, immutable once constructed.
///
/// `client` is not the end customer: it keys the per-client station and
/// credential tables in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    /// Package barcode, reused as article/barcode/place_barcode on the wire.
    pub barcode: String,
    /// Destination address exactly as entered by the operator.
    pub address: String,
    /// Recipient first name.
    pub recipient: String,
    /// Phone value as it appears in the sheet (may carry export artifacts).
    pub phone: String,
    /// Key into the configured station/credential tables.
    pub client: String,
    /// Free-form operator comment; empty when the sheet has no such column.
    #[serde(default)]
    pub comment: String,
}

impl OrderRow {
    /// Create a row; mainly a convenience for tests.
    pub fn new(
        barcode: impl Into<String>,
        address: impl Into<String>,
        recipient: impl Into<String>,
        phone: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        OrderRow {
            barcode: barcode.into(),
            address: address.into(),
            recipient: recipient.into(),
            phone: phone.into(),
            client: client.into(),
            comment: String::new(),
        }
    }

    /// True when every field is empty, as produced by blank sheet lines.
    pub fn is_blank(&self) -> bool {
        self.barcode.is_empty()
            && self.address.is_empty()
            && self.recipient.is_empty()
            && self.phone.is_empty()
            && self.client.is_empty()
            && self.comment.is_empty()
    }
}

/// Outcome of one submission attempt: the platform's raw response body (or
/// a fixed local failure message) and the HTTP status code.
///
/// Status 500 doubles as the transport-failure marker, matching the fixed
/// messages; status 0 means no HTTP exchange happened at all (for example
/// an unknown client key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub response: String,
    pub status: u16,
}

impl SubmissionOutcome {
    pub fn new(response: impl Into<String>, status: u16) -> Self {
        SubmissionOutcome {
            response: response.into(),
            status,
        }
    }

    /// 2xx statuses count as success for reporting purposes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Per-row report entry: the row's address plus its submission outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub address: String,
    pub response: String,
    pub status: u16,
}

impl SubmissionResult {
    pub fn new(address: impl Into<String>, outcome: SubmissionOutcome) -> Self {
        SubmissionResult {
            address: address.into(),
            response: outcome.response,
            status: outcome.status,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Ordered results of one batch run, append-only while the batch executes.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReport {
    /// Correlation id, also used in batch log lines.
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    /// One entry per input row, in input order.
    pub results: Vec<SubmissionResult>,
}

impl SubmissionReport {
    pub fn new(run_id: Uuid, started_at: DateTime<Utc>) -> Self {
        SubmissionReport {
            run_id,
            started_at,
            results: Vec::new(),
        }
    }

    pub fn ok_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.ok_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_row_detection() {
        let row = OrderRow::new("", "", "", "", "");
        assert!(row.is_blank());

        let row = OrderRow::new("WH1", "", "", "", "");
        assert!(!row.is_blank());
    }

    #[test]
    fn test_outcome_success_range() {
        assert!(SubmissionOutcome::new("ok", 200).is_success());
        assert!(SubmissionOutcome::new("accepted", 201).is_success());
        assert!(!SubmissionOutcome::new("bad request", 400).is_success());
        assert!(!SubmissionOutcome::new("no call made", 0).is_success());
    }

    #[test]
    fn test_report_counts() {
        let mut report = SubmissionReport::new(Uuid::new_v4(), Utc::now());
        report.results.push(SubmissionResult::new(
            "a",
            SubmissionOutcome::new("ok", 200),
        ));
        report.results.push(SubmissionResult::new(
            "b",
            SubmissionOutcome::new("bad gateway", 502),
        ));
        assert_eq!(report.ok_count(), 1);
        assert_eq!(report.failed_count(), 1);
    }
}

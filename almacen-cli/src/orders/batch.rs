//! Sequential batch runner
//!
//! Runs the submission pipeline once per row, in input order, one row at a
//! time. A row's failure is recorded and the batch moves on; rows that
//! never reached the platform (unknown client key) are recorded with
//! status 0 so they are distinguishable from real HTTP outcomes.

use chrono::Utc;
use uuid::Uuid;

use crate::orders::models::{OrderRow, SubmissionReport, SubmissionResult};
use crate::orders::pipeline::SubmissionPipeline;

/// Run the whole batch, producing one result per row in input order.
pub async fn run(pipeline: &SubmissionPipeline<'_>, rows: &[OrderRow]) -> SubmissionReport {
    let run_id = Uuid::new_v4();
    let mut report = SubmissionReport::new(run_id, Utc::now());
    log::info!("batch {} started: {} row(s)", run_id, rows.len());

    for (index, row) in rows.iter().enumerate() {
        log::info!("[{}/{}] {}", index + 1, rows.len(), row.address);
        let outcome = match pipeline.submit(row).await {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("row {} skipped: {:#}", index + 1, err);
                crate::orders::models::SubmissionOutcome::new(format!("{:#}", err), 0)
            }
        };
        log::info!(
            "[{}/{}] -> {} {}",
            index + 1,
            rows.len(),
            outcome.status,
            if outcome.is_success() { "ok" } else { "failed" }
        );
        report
            .results
            .push(SubmissionResult::new(row.address.clone(), outcome));
    }

    log::info!(
        "batch {} finished: {} ok, {} failed",
        run_id,
        report.ok_count(),
        report.failed_count()
    );
    report
}

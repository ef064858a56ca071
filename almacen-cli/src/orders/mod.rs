//! Order ingestion to confirmation
//!
//! Everything between a spreadsheet row and the operator report: field
//! normalization, payload construction, the create/confirm sequence, the
//! sequential batch runner and report rendering.

pub mod address;
pub mod batch;
pub mod models;
pub mod payload;
pub mod phone;
pub mod pipeline;
pub mod report;

pub use models::{OrderRow, SubmissionOutcome, SubmissionReport, SubmissionResult};
pub use pipeline::SubmissionPipeline;

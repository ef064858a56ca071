//! Report rendering
//!
//! The batch's result list rendered for the operator: an aligned text table
//! by default, JSON or CSV for files and downstream tooling. The table
//! truncates long platform responses; JSON and CSV always carry the full
//! text, as does the table with `--wide`.

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;

use crate::orders::models::SubmissionReport;

/// Response column width in the non-wide table.
const RESPONSE_TRUNCATE_AT: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Render the report in the requested format.
pub fn render(report: &SubmissionReport, format: ReportFormat, wide: bool) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(report, wide)),
        ReportFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to format report as JSON")
        }
        ReportFormat::Csv => Ok(render_csv(report)),
    }
}

/// One-line batch summary with colored counts.
pub fn summary_line(report: &SubmissionReport) -> String {
    let ok = format!("{} ok", report.ok_count());
    let failed = format!("{} failed", report.failed_count());
    format!(
        "{}, {} (run {})",
        if report.ok_count() > 0 {
            ok.green().to_string()
        } else {
            ok
        },
        if report.failed_count() > 0 {
            failed.red().to_string()
        } else {
            failed
        },
        report.run_id
    )
}

fn render_table(report: &SubmissionReport, wide: bool) -> String {
    let rows: Vec<(String, String, String)> = report
        .results
        .iter()
        .map(|result| {
            let response = if wide {
                result.response.clone()
            } else {
                truncate(&result.response, RESPONSE_TRUNCATE_AT)
            };
            (
                result.address.clone(),
                response.replace('\n', " "),
                status_label(result.status),
            )
        })
        .collect();

    let address_width = column_width("Address", rows.iter().map(|r| r.0.as_str()));
    let response_width = column_width("Response", rows.iter().map(|r| r.1.as_str()));

    let mut out = String::new();
    out.push_str(&format!(
        "{:<address_width$}  {:<response_width$}  {}\n",
        "Address", "Response", "Status"
    ));
    out.push_str(&format!(
        "{}  {}  {}\n",
        "-".repeat(address_width),
        "-".repeat(response_width),
        "------"
    ));
    for (result, (address, response, status)) in report.results.iter().zip(&rows) {
        let status = if result.is_success() {
            status.green().to_string()
        } else {
            status.red().to_string()
        };
        out.push_str(&format!(
            "{:<address_width$}  {:<response_width$}  {}\n",
            address, response, status
        ));
    }
    out
}

fn render_csv(report: &SubmissionReport) -> String {
    let mut csv = String::from("address,response,status\n");
    for result in &report.results {
        csv.push_str(&format!(
            "{},{},{}\n",
            csv_escape(&result.address),
            csv_escape(&result.response),
            result.status
        ));
    }
    csv
}

/// Status 0 means no HTTP exchange happened for the row.
fn status_label(status: u16) -> String {
    if status == 0 {
        "---".to_string()
    } else {
        status.to_string()
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Escape a value for CSV output.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::models::{SubmissionOutcome, SubmissionResult};
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_report() -> SubmissionReport {
        let mut report = SubmissionReport::new(Uuid::nil(), Utc::now());
        report.results.push(SubmissionResult::new(
            "Calle 5",
            SubmissionOutcome::new("confirmed", 200),
        ));
        report.results.push(SubmissionResult::new(
            "Av. Norte 10",
            SubmissionOutcome::new("bad, \"request\"", 400),
        ));
        report.results.push(SubmissionResult::new(
            "Col. Centro 3",
            SubmissionOutcome::new("Unknown client 'x'", 0),
        ));
        report
    }

    #[test]
    fn test_table_keeps_input_order_and_marks_local_failures() {
        colored::control::set_override(false);
        let table = render_table(&sample_report(), false);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("Address"));
        assert!(lines[2].starts_with("Calle 5"));
        assert!(lines[3].starts_with("Av. Norte 10"));
        assert!(lines[4].starts_with("Col. Centro 3"));
        assert!(lines[4].trim_end().ends_with("---"));
    }

    #[test]
    fn test_table_truncates_long_responses_unless_wide() {
        colored::control::set_override(false);
        let mut report = sample_report();
        report.results[0].response = "x".repeat(200);

        let table = render_table(&report, false);
        assert!(table.lines().nth(2).unwrap().contains('…'));

        let wide = render_table(&report, true);
        assert!(wide.contains(&"x".repeat(200)));
    }

    #[test]
    fn test_csv_escapes_commas_and_quotes() {
        let csv = render_csv(&sample_report());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "address,response,status");
        assert_eq!(lines[1], "Calle 5,confirmed,200");
        assert_eq!(lines[2], r#"Av. Norte 10,"bad, ""request""",400"#);
        assert_eq!(lines[3], "Col. Centro 3,Unknown client 'x',0");
    }

    #[test]
    fn test_json_round_trips_full_responses() {
        let rendered = render(&sample_report(), ReportFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["results"][1]["response"], "bad, \"request\"");
        assert_eq!(value["results"][1]["status"], 400);
    }
}

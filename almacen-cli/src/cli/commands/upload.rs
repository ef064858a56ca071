//! Upload command handler

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use is_terminal::IsTerminal;

use crate::api::{DeliveryClient, build_http_client};
use crate::cli::UploadArgs;
use crate::config::Config;
use crate::orders::pipeline::SubmissionPipeline;
use crate::orders::payload::build_create_payload;
use crate::orders::report::ReportFormat;
use crate::orders::{batch, report};
use crate::source::{OrderSource, SheetSource};

pub async fn handle_upload(args: UploadArgs, config_path: Option<&Path>) -> Result<()> {
    if args.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config = Config::load(config_path)?;
    let http = build_http_client(&config.http)?;

    if let Some(link) = &config.load_link {
        println!("Orders are managed here: {}", link.cyan());
    }

    let source = SheetSource::new(http.clone(), &config.sheet);
    let mut rows = source.fetch_rows().await?;
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }
    if rows.is_empty() {
        println!("No orders to upload.");
        return Ok(());
    }
    println!("Fetched {} order(s) from the sheet.", rows.len());

    if args.dry_run {
        return print_payloads(&config, &rows);
    }

    if !args.yes {
        let proceed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Submit {} order(s) to {}?",
                rows.len(),
                config.base_url
            ))
            .default(false)
            .interact()
            .context("Confirmation prompt failed")?;
        if !proceed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let delivery = DeliveryClient::new(http, &config.base_url);
    let pipeline = SubmissionPipeline::new(&delivery, &config);
    let batch_report = batch::run(&pipeline, &rows).await;

    let rendered = report::render(&batch_report, args.format, args.wide)?;
    if let Some(path) = &args.output {
        fs::write(path, &rendered)
            .with_context(|| format!("Failed to write report to: {}", path.display()))?;
        println!("Report saved to: {}", path.display().to_string().green());
    } else {
        if args.format == ReportFormat::Table {
            println!();
        }
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
    }
    println!("{}", report::summary_line(&batch_report));

    Ok(())
}

/// Dry run: show what would go on the wire, row by row. Rows whose client
/// is not configured are reported but do not abort the preview.
fn print_payloads(config: &Config, rows: &[crate::orders::OrderRow]) -> Result<()> {
    for (index, row) in rows.iter().enumerate() {
        println!();
        println!(
            "{} {}",
            format!("[{}/{}]", index + 1, rows.len()).bold(),
            row.address
        );
        match config.client(&row.client) {
            Ok(entry) => {
                let payload = build_create_payload(
                    row,
                    &entry.station_id,
                    &config.comment,
                    config.comment_style,
                );
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            Err(err) => println!("{}", format!("{:#}", err).red()),
        }
    }
    Ok(())
}

//! Routing command handler

use std::fs;

use anyhow::{Context, Result, bail};
use chrono::NaiveTime;
use serde::Deserialize;

use crate::cli::RoutingBuildArgs;
use crate::routing::RoutingParams;

/// Input file shape: the parameters under a `[routing]` table.
#[derive(Debug, Deserialize)]
struct RoutingFile {
    routing: RoutingParams,
}

pub fn handle_routing_build(args: RoutingBuildArgs) -> Result<()> {
    let params = if let Some(path) = &args.file {
        if !args.windows.is_empty() || !args.excluded_claims.is_empty() {
            bail!("Cannot combine --file with --window/--excluded-claim flags");
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read routing file: {}", path.display()))?;
        let file: RoutingFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse routing file: {}", path.display()))?;
        file.routing.validate()?;
        file.routing
    } else {
        params_from_flags(&args)?
    };

    let payload = params.to_payload()?;
    let rendered = serde_json::to_string_pretty(&payload)?;

    if let Some(path) = &args.output {
        fs::write(path, &rendered)
            .with_context(|| format!("Failed to write payload to: {}", path.display()))?;
        println!("Routing payload saved to: {}", path.display());
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

fn params_from_flags(args: &RoutingBuildArgs) -> Result<RoutingParams> {
    let mut builder = RoutingParams::builder()
        .courier_limits(
            args.min_couriers,
            args.max_couriers,
            args.max_orders_per_courier,
        )
        .quality(args.quality)
        .proximity_factor(args.proximity_factor);

    for window in &args.windows {
        let (start, end) = parse_window(window)?;
        builder = builder.window(start, end);
    }
    for claim in &args.excluded_claims {
        builder = builder.excluded_claim(claim.clone());
    }
    builder.build()
}

/// Parse "HH:MM-HH:MM".
fn parse_window(raw: &str) -> Result<(NaiveTime, NaiveTime)> {
    let (start, end) = raw
        .split_once('-')
        .with_context(|| format!("Invalid window '{}', expected HH:MM-HH:MM", raw))?;
    let parse = |s: &str| {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .with_context(|| format!("Invalid time '{}' in window '{}'", s.trim(), raw))
    };
    Ok((parse(start)?, parse(end)?))
}

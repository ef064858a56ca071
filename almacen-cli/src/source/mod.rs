//! Order source
//!
//! Fetches the order sheet as a CSV export and parses it into rows. The
//! default export URL is the Google Sheets template; `sheet.export_url`
//! replaces it wholesale so any CSV-over-HTTPS host works. Certificate
//! verification is always on.
//!
//! Phone cells exported from numeric columns arrive as text like
//! "5512345678.0"; that artifact is the normalizer's problem, not the
//! reader's.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::SheetConfig;
use crate::orders::models::OrderRow;

/// Anything that can produce the ordered row list for a batch.
#[async_trait]
pub trait OrderSource {
    async fn fetch_rows(&self) -> Result<Vec<OrderRow>>;
}

/// CSV export of a shared spreadsheet.
pub struct SheetSource {
    http: reqwest::Client,
    export_url: String,
}

impl SheetSource {
    pub fn new(http: reqwest::Client, sheet: &SheetConfig) -> Self {
        let export_url = sheet.export_url.clone().unwrap_or_else(|| {
            format!(
                "https://docs.google.com/spreadsheets/d/{}/export?gid={}&format=csv",
                urlencoding::encode(&sheet.id),
                sheet.gid
            )
        });
        SheetSource { http, export_url }
    }

    pub fn export_url(&self) -> &str {
        &self.export_url
    }
}

#[async_trait]
impl OrderSource for SheetSource {
    async fn fetch_rows(&self) -> Result<Vec<OrderRow>> {
        log::debug!("GET {}", self.export_url);
        let response = self
            .http
            .get(&self.export_url)
            .send()
            .await
            .context("Failed to fetch the orders sheet")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Sheet export returned HTTP {}", status);
        }

        let body = response
            .bytes()
            .await
            .context("Failed to read the sheet export body")?;
        parse_rows(&body)
    }
}

/// Sheet columns; headers are accepted in either case, Comment optional.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(alias = "Barcode", default)]
    barcode: String,
    #[serde(alias = "Address", default)]
    address: String,
    #[serde(alias = "Recipient", default)]
    recipient: String,
    #[serde(alias = "Phone", default)]
    phone: String,
    #[serde(alias = "Client", default)]
    client: String,
    #[serde(alias = "Comment", default)]
    comment: String,
}

/// Parse the CSV export, preserving row order and skipping blank lines.
pub fn parse_rows(csv_bytes: &[u8]) -> Result<Vec<OrderRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(csv_bytes);

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<RawRow>().enumerate() {
        let raw = record.with_context(|| format!("Failed to parse sheet row {}", index + 2))?;
        let row = OrderRow {
            barcode: raw.barcode,
            address: raw.address,
            recipient: raw.recipient,
            phone: raw.phone,
            client: raw.client,
            comment: raw.comment,
        };
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rows_in_order() {
        let csv = b"Barcode,Address,Recipient,Phone,Client,Comment\n\
            WH1,Calle 5,Ana,5512345678,acme,gate code 4\n\
            WH2,Av. Norte 10,Luis,5587654321,acme,\n";
        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].barcode, "WH1");
        assert_eq!(rows[0].comment, "gate code 4");
        assert_eq!(rows[1].address, "Av. Norte 10");
        assert_eq!(rows[1].comment, "");
    }

    #[test]
    fn test_comment_column_is_optional() {
        let csv = b"Barcode,Address,Recipient,Phone,Client\n\
            WH1,Calle 5,Ana,5512345678,acme\n";
        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].comment, "");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let csv = b"Barcode,Address,Recipient,Phone,Client\n\
            WH1,Calle 5,Ana,5512345678,acme\n\
            ,,,,\n\
            WH2,Av. Norte 10,Luis,5587654321,acme\n";
        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].barcode, "WH2");
    }

    #[test]
    fn test_lowercase_headers_accepted() {
        let csv = b"barcode,address,recipient,phone,client\n\
            WH1,Calle 5,Ana,5512345678,acme\n";
        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows[0].recipient, "Ana");
    }

    #[test]
    fn test_numeric_phone_artifact_survives_parsing() {
        // Left untouched here; the normalizer strips the ".0" later.
        let csv = b"Barcode,Address,Recipient,Phone,Client\n\
            WH1,Calle 5,Ana,5512345678.0,acme\n";
        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows[0].phone, "5512345678.0");
    }

    #[test]
    fn test_default_export_url_template() {
        let sheet = SheetConfig {
            id: "abc 123".to_string(),
            gid: 7,
            export_url: None,
        };
        let source = SheetSource::new(reqwest::Client::new(), &sheet);
        assert_eq!(
            source.export_url(),
            "https://docs.google.com/spreadsheets/d/abc%20123/export?gid=7&format=csv"
        );
    }

    #[test]
    fn test_export_url_override_wins() {
        let sheet = SheetConfig {
            id: "ignored".to_string(),
            gid: 0,
            export_url: Some("https://example.test/orders.csv".to_string()),
        };
        let source = SheetSource::new(reqwest::Client::new(), &sheet);
        assert_eq!(source.export_url(), "https://example.test/orders.csv");
    }
}

//! CSV ingestion and typed record construction.
//!
//! The raw dataset arrives as delimited text with one row per observation
//! month. ASM/RPM/Pax fields carry thousands separators that must be stripped
//! before coercion; load-factor fields are plain decimals on a 0-100 scale.
//! Any missing or non-numeric field fails the whole batch: downstream scale
//! domains cannot tolerate NaN.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{ChartError, ChartResult};

/// One string-keyed observation row exactly as it appears in the CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Dom_ASM")]
    pub dom_asm: String,
    #[serde(rename = "Int_ASM")]
    pub int_asm: String,
    #[serde(rename = "ASM")]
    pub asm: String,
    #[serde(rename = "Dom_RPM")]
    pub dom_rpm: String,
    #[serde(rename = "Int_RPM")]
    pub int_rpm: String,
    #[serde(rename = "RPM")]
    pub rpm: String,
    #[serde(rename = "Dom_LF")]
    pub dom_lf: String,
    #[serde(rename = "Int_LF")]
    pub int_lf: String,
    #[serde(rename = "LF")]
    pub lf: String,
    #[serde(rename = "Dom_Pax")]
    pub dom_pax: String,
    #[serde(rename = "Int_Pax")]
    pub int_pax: String,
    #[serde(rename = "Pax")]
    pub pax: String,
}

/// Typed per-month traffic observation.
///
/// Created once at load time and immutable afterwards. `date` is uniquely
/// determined by `(year, month)` at month resolution, and every consumer sees
/// records sorted ascending by `date`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficRecord {
    pub year: i32,
    pub month: u32,
    pub date: NaiveDate,
    pub dom_asm: f64,
    pub int_asm: f64,
    pub asm: f64,
    pub dom_rpm: f64,
    pub int_rpm: f64,
    pub rpm: f64,
    pub dom_lf: f64,
    pub int_lf: f64,
    pub lf: f64,
    pub dom_pax: f64,
    pub int_pax: f64,
    pub pax: f64,
}

/// Strips thousands separators, then coerces. Used for the ASM/RPM/Pax family.
fn parse_grouped(line: usize, field: &'static str, value: &str) -> ChartResult<f64> {
    let stripped: String = value.chars().filter(|c| *c != ',').collect();
    parse_plain(line, field, &stripped)
}

/// Coerces a field that is already a plain decimal (the LF family).
fn parse_plain(line: usize, field: &'static str, value: &str) -> ChartResult<f64> {
    let trimmed = value.trim();
    let parsed: f64 = trimmed.parse().map_err(|_| ChartError::Schema {
        line,
        field,
        value: value.to_owned(),
    })?;
    if !parsed.is_finite() {
        return Err(ChartError::Schema {
            line,
            field,
            value: value.to_owned(),
        });
    }
    Ok(parsed)
}

/// Coerces a field that must be a whole number (`Year`, `Month`).
///
/// Fractional strings like `"2019.5"` are a schema violation, never truncated.
fn parse_integer<T: std::str::FromStr>(
    line: usize,
    field: &'static str,
    value: &str,
) -> ChartResult<T> {
    value.trim().parse().map_err(|_| ChartError::Schema {
        line,
        field,
        value: value.to_owned(),
    })
}

fn parse_row(line: usize, row: &RawRow) -> ChartResult<TrafficRecord> {
    let year: i32 = parse_integer(line, "Year", &row.year)?;
    let month: u32 = parse_integer(line, "Month", &row.month)?;
    let date =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| ChartError::Schema {
            line,
            field: "Month",
            value: row.month.clone(),
        })?;

    Ok(TrafficRecord {
        year,
        month,
        date,
        dom_asm: parse_grouped(line, "Dom_ASM", &row.dom_asm)?,
        int_asm: parse_grouped(line, "Int_ASM", &row.int_asm)?,
        asm: parse_grouped(line, "ASM", &row.asm)?,
        dom_rpm: parse_grouped(line, "Dom_RPM", &row.dom_rpm)?,
        int_rpm: parse_grouped(line, "Int_RPM", &row.int_rpm)?,
        rpm: parse_grouped(line, "RPM", &row.rpm)?,
        dom_lf: parse_plain(line, "Dom_LF", &row.dom_lf)?,
        int_lf: parse_plain(line, "Int_LF", &row.int_lf)?,
        lf: parse_plain(line, "LF", &row.lf)?,
        dom_pax: parse_grouped(line, "Dom_Pax", &row.dom_pax)?,
        int_pax: parse_grouped(line, "Int_Pax", &row.int_pax)?,
        pax: parse_grouped(line, "Pax", &row.pax)?,
    })
}

/// Converts raw rows into typed records, batch-fatally.
///
/// Output has equal length and corresponding input order, then is sorted
/// ascending by date. Row numbering in errors is 1-based and counts the
/// header, matching what a reader sees in the file.
pub fn parse_rows(rows: &[RawRow]) -> ChartResult<Vec<TrafficRecord>> {
    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        records.push(parse_row(i + 2, row)?);
    }
    records.sort_by_key(|r| r.date);
    Ok(records)
}

/// Parses a full CSV document into sorted traffic records.
///
/// Any reader-level failure (malformed CSV, missing column) maps to
/// [`ChartError::Ingest`]; a document with a header but no data rows is
/// [`ChartError::EmptyDataset`].
pub fn load_records(csv_text: &str) -> ChartResult<Vec<TrafficRecord>> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut rows = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        rows.push(row.map_err(|e| ChartError::Ingest(e.to_string()))?);
    }

    if rows.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let records = parse_rows(&rows)?;
    tracing::debug!(rows = records.len(), "parsed traffic records");
    Ok(records)
}

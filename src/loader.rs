//! CSV ingestion for the order table
//!
//! The loader owns the schema contract: the source file must carry the
//! eleven named columns below, with dates parseable into calendar dates.
//! Anything that violates the contract fails here, at load time, so the
//! aggregation layer never sees a malformed table.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::order::{OrderRecord, OrderTable};

/// Column headers the source file must provide, verbatim.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Order ID",
    "Order Date",
    "Ship Date",
    "Sales",
    "Profit",
    "Product ID",
    "Product Name",
    "Category",
    "Sub-Category",
    "Region",
    "Segment",
];

/// Accepted calendar-date formats, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Fatal load-time failure. The session cannot proceed with a table that
/// violates the schema contract.
#[derive(Debug, Error)]
pub enum DataIntegrityError {
    #[error("source table is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("line {line}: column '{column}' has unparseable date '{value}'")]
    InvalidDate {
        column: String,
        value: String,
        line: usize,
    },

    #[error("line {line}: column '{column}' has unparseable number '{value}'")]
    InvalidNumber {
        column: String,
        value: String,
        line: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Raw CSV row before date/number coercion.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Order ID")]
    order_id: String,
    #[serde(rename = "Order Date")]
    order_date: String,
    #[serde(rename = "Ship Date")]
    ship_date: String,
    #[serde(rename = "Sales")]
    sales: String,
    #[serde(rename = "Profit")]
    profit: String,
    #[serde(rename = "Product ID")]
    product_id: String,
    #[serde(rename = "Product Name")]
    product_name: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Sub-Category")]
    sub_category: String,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Segment")]
    segment: String,
}

/// Load the order table from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<OrderTable, DataIntegrityError> {
    let text = fs::read_to_string(path)?;
    let table = load_csv_str(&text)?;
    log::info!("Loaded {} order records from {}", table.len(), path.display());
    Ok(table)
}

/// Load the order table from CSV text already in memory.
pub fn load_csv_str(text: &str) -> Result<OrderTable, DataIntegrityError> {
    // Strip UTF-8 BOM if present (some exports prepend one)
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataIntegrityError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        // Data starts on line 2, after the header line
        let line = idx + 2;
        let raw = row?;

        records.push(OrderRecord {
            order_id: raw.order_id,
            order_date: parse_date("Order Date", &raw.order_date, line)?,
            ship_date: parse_date("Ship Date", &raw.ship_date, line)?,
            sales: parse_number("Sales", &raw.sales, line)?,
            profit: parse_number("Profit", &raw.profit, line)?,
            product_id: raw.product_id,
            product_name: raw.product_name,
            category: raw.category,
            sub_category: raw.sub_category,
            region: raw.region,
            segment: raw.segment,
        });
    }

    Ok(OrderTable::from_records(records))
}

fn parse_date(column: &str, value: &str, line: usize) -> Result<NaiveDate, DataIntegrityError> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value.trim(), format) {
            return Ok(date);
        }
    }
    Err(DataIntegrityError::InvalidDate {
        column: column.to_string(),
        value: value.to_string(),
        line,
    })
}

fn parse_number(column: &str, value: &str, line: usize) -> Result<f64, DataIntegrityError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| DataIntegrityError::InvalidNumber {
            column: column.to_string(),
            value: value.to_string(),
            line,
        })
}

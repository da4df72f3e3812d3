//! Order records and the immutable in-memory order table

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single line item of a sales order.
///
/// Order identifiers are not unique: an order with several line items
/// contributes one record per item, all sharing the same `order_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub order_date: NaiveDate,
    pub ship_date: NaiveDate,
    pub sales: f64,
    pub profit: f64,
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub sub_category: String,
    pub region: String,
    pub segment: String,
}

impl OrderRecord {
    /// Calendar-month bucket of the order date, e.g. `"2023-07"`.
    ///
    /// Zero-padded so that lexical order on bucket keys is chronological
    /// order. Time-series output depends on this property.
    pub fn month_bucket(&self) -> String {
        format!("{:04}-{:02}", self.order_date.year(), self.order_date.month())
    }

    /// Calendar-year bucket of the order date, e.g. `"2023"`.
    pub fn year_bucket(&self) -> String {
        format!("{:04}", self.order_date.year())
    }
}

/// Immutable table of order records, loaded once per session.
///
/// Aggregation functions only ever read from it; none of them mutate the
/// records or hold state between calls.
#[derive(Debug, Clone, Default)]
pub struct OrderTable {
    records: Vec<OrderRecord>,
}

impl OrderTable {
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

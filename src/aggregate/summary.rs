//! Scalar summary metrics for the dashboard header

use std::collections::HashMap;

use serde::Serialize;

use super::filter::Filter;
use crate::order::OrderTable;

/// Headline metrics over the filtered subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// Count of distinct order identifiers (an order may span several rows).
    pub order_count: usize,
    /// Sum of the sales amount over every matching row.
    pub total_sales: f64,
    /// Mean per-order sales sum over the distinct orders.
    pub average_order_value: f64,
}

/// Compute order count, total sales, and average order value.
///
/// Returns `None` when the filter matches no rows; the average is undefined
/// there and a zero would be misleading. A non-empty subset always has at
/// least one distinct order, so the average is always defined in the `Some`
/// case.
pub fn summary_metrics(table: &OrderTable, filter: &Filter) -> Option<SummaryMetrics> {
    let mut per_order: HashMap<&str, f64> = HashMap::new();
    let mut total_sales = 0.0;
    let mut matched = false;

    for record in filter.apply(table) {
        matched = true;
        total_sales += record.sales;
        *per_order.entry(record.order_id.as_str()).or_insert(0.0) += record.sales;
    }

    if !matched {
        return None;
    }

    let order_count = per_order.len();
    let average_order_value = per_order.values().sum::<f64>() / order_count as f64;

    Some(SummaryMetrics {
        order_count,
        total_sales,
        average_order_value,
    })
}

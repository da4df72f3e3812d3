//! Categorical sales breakdowns

use std::collections::HashMap;

use serde::Serialize;

use super::filter::Filter;
use crate::order::OrderTable;

/// Ordering of the category breakdown rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownOrder {
    /// Largest total first.
    SalesDescending,
    /// Row order of the source table.
    FirstSeen,
}

/// Summed sales for one (category, sub-category) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySales {
    pub category: String,
    pub sub_category: String,
    pub total_sales: f64,
}

/// Summed sales for one customer segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentSales {
    pub segment: String,
    pub total_sales: f64,
}

/// Sum sales per (category, sub-category) pair over the filtered subset.
///
/// Returns `None` when the filter matches no rows.
pub fn category_breakdown(
    table: &OrderTable,
    filter: &Filter,
    order: BreakdownOrder,
) -> Option<Vec<CategorySales>> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut rows: Vec<CategorySales> = Vec::new();

    for record in filter.apply(table) {
        let key = (record.category.as_str(), record.sub_category.as_str());
        match index.get(&key) {
            Some(&slot) => rows[slot].total_sales += record.sales,
            None => {
                index.insert(key, rows.len());
                rows.push(CategorySales {
                    category: record.category.clone(),
                    sub_category: record.sub_category.clone(),
                    total_sales: record.sales,
                });
            }
        }
    }

    if rows.is_empty() {
        return None;
    }

    if order == BreakdownOrder::SalesDescending {
        rows.sort_by(|a, b| {
            b.total_sales
                .partial_cmp(&a.total_sales)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    Some(rows)
}

/// Sum sales per segment over the filtered subset. Output order is
/// first-encountered row order; share/pie consumers are order-insensitive.
///
/// Returns `None` when the filter matches no rows.
pub fn segment_breakdown(table: &OrderTable, filter: &Filter) -> Option<Vec<SegmentSales>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<SegmentSales> = Vec::new();

    for record in filter.apply(table) {
        match index.get(record.segment.as_str()) {
            Some(&slot) => rows[slot].total_sales += record.sales,
            None => {
                index.insert(record.segment.as_str(), rows.len());
                rows.push(SegmentSales {
                    segment: record.segment.clone(),
                    total_sales: record.sales,
                });
            }
        }
    }

    if rows.is_empty() {
        return None;
    }

    Some(rows)
}

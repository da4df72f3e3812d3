//! Time-bucketed sales series for trend charts

use std::collections::BTreeMap;

use serde::Serialize;

use super::filter::Filter;
use crate::order::{OrderRecord, OrderTable};

/// Calendar granularity of the series buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Month,
    Year,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "month" => Some(Granularity::Month),
            "year" => Some(Granularity::Year),
            _ => None,
        }
    }

    fn bucket_of(&self, record: &OrderRecord) -> String {
        match self {
            Granularity::Month => record.month_bucket(),
            Granularity::Year => record.year_bucket(),
        }
    }
}

/// One bucket of a sales series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub bucket: String,
    pub total_sales: f64,
}

/// One category's totals, aligned on a shared bucket axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    pub category: String,
    /// Same length as the owning [`AlignedSeries`] bucket axis; buckets with
    /// no sales for this category hold an explicit 0.0.
    pub totals: Vec<f64>,
}

/// Per-category sales series sharing one chronological bucket axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedSeries {
    pub buckets: Vec<String>,
    pub series: Vec<CategorySeries>,
}

/// Sum sales per time bucket over the filtered subset.
///
/// Output is ordered chronologically. Bucket keys are built so that lexical
/// string order is chronological order ("YYYY-MM" / "YYYY"), and the
/// BTreeMap grouping preserves exactly that.
///
/// Returns `None` when the filter matches no rows.
pub fn time_series(
    table: &OrderTable,
    filter: &Filter,
    granularity: Granularity,
) -> Option<Vec<SeriesPoint>> {
    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();

    for record in filter.apply(table) {
        *buckets.entry(granularity.bucket_of(record)).or_insert(0.0) += record.sales;
    }

    if buckets.is_empty() {
        return None;
    }

    Some(
        buckets
            .into_iter()
            .map(|(bucket, total_sales)| SeriesPoint { bucket, total_sales })
            .collect(),
    )
}

/// Sum sales per (time bucket, category) over the filtered subset, one
/// series per category, all aligned on the same chronological bucket axis.
///
/// Missing (bucket, category) combinations are zero-filled rather than
/// omitted, so every series has one value per axis bucket. Category order
/// is first-encountered row order.
///
/// Returns `None` when the filter matches no rows.
pub fn time_series_by_category(
    table: &OrderTable,
    filter: &Filter,
    granularity: Granularity,
) -> Option<AlignedSeries> {
    let mut axis: BTreeMap<String, usize> = BTreeMap::new();
    let mut categories: Vec<String> = Vec::new();
    let mut sums: BTreeMap<(String, String), f64> = BTreeMap::new();

    for record in filter.apply(table) {
        let bucket = granularity.bucket_of(record);
        axis.entry(bucket.clone()).or_insert(0);
        if !categories.contains(&record.category) {
            categories.push(record.category.clone());
        }
        *sums.entry((record.category.clone(), bucket)).or_insert(0.0) += record.sales;
    }

    if axis.is_empty() {
        return None;
    }

    // Assign each axis bucket its chronological position
    for (position, slot) in axis.values_mut().enumerate() {
        *slot = position;
    }

    let buckets: Vec<String> = axis.keys().cloned().collect();
    let series = categories
        .into_iter()
        .map(|category| {
            let mut totals = vec![0.0; buckets.len()];
            for (bucket, position) in &axis {
                if let Some(total) = sums.get(&(category.clone(), bucket.clone())) {
                    totals[*position] = *total;
                }
            }
            CategorySeries { category, totals }
        })
        .collect();

    Some(AlignedSeries { buckets, series })
}

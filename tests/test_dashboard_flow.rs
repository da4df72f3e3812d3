//! End-to-end dashboard flow: CSV on disk → cached load → every aggregation
//!
//! Exercises the same path the report binary takes, and cross-checks the
//! aggregator's totals against naive full scans of the loaded table.

use std::fs;
use std::path::PathBuf;

use salesdash::aggregate::{
    category_breakdown, segment_breakdown, summary_metrics, time_series,
    time_series_by_category, top_products, BreakdownOrder, Filter, Granularity, RankMeasure,
};
use salesdash::cache::TableCache;
use salesdash::loader::load_csv;

const HEADER: &str = "Order ID,Order Date,Ship Date,Sales,Profit,Product ID,Product Name,Category,Sub-Category,Region,Segment";

fn write_dataset(dir: &tempfile::TempDir, rows: &[&str]) -> PathBuf {
    let path = dir.path().join("sales.csv");
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    fs::write(&path, text).unwrap();
    path
}

fn sample_rows() -> Vec<&'static str> {
    vec![
        // Order A spans two line items in the West, July 2023
        "A,2023-07-04,2023-07-08,100.0,10.0,P1,Stapler,Office Supplies,Fasteners,West,Consumer",
        "A,2023-07-04,2023-07-08,50.0,5.0,P2,Paper Ream,Office Supplies,Paper,West,Consumer",
        // Order B, East, August 2023
        "B,2023-08-15,2023-08-20,200.0,30.0,P3,Desk Chair,Furniture,Chairs,East,Corporate",
        // Order C, zero sales row
        "C,2023-09-01,2023-09-03,0.0,0.0,P1,Stapler,Office Supplies,Fasteners,West,Home Office",
        // Order D, prior year
        "D,2022-12-30,2023-01-02,80.0,20.0,P3,Desk Chair,Furniture,Chairs,West,Consumer",
    ]
}

#[test]
fn test_full_dashboard_flow() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir, &sample_rows());

    let mut cache = TableCache::new();
    let table = cache.get_or_load(&path).unwrap();
    assert_eq!(table.len(), 5);

    let filter = Filter::new();

    let summary = summary_metrics(&table, &filter).unwrap();
    assert_eq!(summary.order_count, 4);
    assert_eq!(summary.total_sales, 430.0);
    // Per-order sums: A=150, B=200, C=0, D=80
    assert!((summary.average_order_value - 430.0 / 4.0).abs() < 1e-9);

    // Cross-check against a naive full scan
    let naive_total: f64 = table.records().iter().map(|r| r.sales).sum();
    assert!((summary.total_sales - naive_total).abs() < 1e-9);
    assert!(summary.order_count <= table.len());

    let series = time_series(&table, &filter, Granularity::Month).unwrap();
    let buckets: Vec<&str> = series.iter().map(|p| p.bucket.as_str()).collect();
    assert_eq!(buckets, vec!["2022-12", "2023-07", "2023-08", "2023-09"]);
    let mut sorted = buckets.clone();
    sorted.sort();
    assert_eq!(buckets, sorted);

    let aligned = time_series_by_category(&table, &filter, Granularity::Year).unwrap();
    assert_eq!(aligned.buckets, vec!["2022", "2023"]);
    for series in &aligned.series {
        assert_eq!(series.totals.len(), aligned.buckets.len());
    }

    // Profit per product: P1=10, P2=5, P3=50
    let top = top_products(&table, &filter, 2, RankMeasure::Profit).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].product_id, "P1");
    assert_eq!(top[0].value, 10.0);
    assert_eq!(top[1].product_id, "P3");
    assert_eq!(top[1].value, 50.0);

    let categories =
        category_breakdown(&table, &filter, BreakdownOrder::SalesDescending).unwrap();
    assert_eq!(categories[0].sub_category, "Chairs");
    assert_eq!(categories[0].total_sales, 280.0);

    let segments = segment_breakdown(&table, &filter).unwrap();
    let consumer = segments.iter().find(|s| s.segment == "Consumer").unwrap();
    assert_eq!(consumer.total_sales, 230.0);
}

#[test]
fn test_year_and_region_filter_combination() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir, &sample_rows());
    let table = load_csv(&path).unwrap();

    let filter = Filter::new().with_year(2023).with_region("West");
    let summary = summary_metrics(&table, &filter).unwrap();

    // Rows A (2x) and C match; D is 2022, B is East
    assert_eq!(summary.order_count, 2);
    assert_eq!(summary.total_sales, 150.0);

    let naive_total: f64 = table
        .records()
        .iter()
        .filter(|r| r.year_bucket() == "2023" && r.region == "West")
        .map(|r| r.sales)
        .sum();
    assert!((summary.total_sales - naive_total).abs() < 1e-9);
}

#[test]
fn test_unmatched_filter_returns_empty_marker_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir, &sample_rows());
    let table = load_csv(&path).unwrap();

    let filter = Filter::new().with_year(1999);

    assert!(summary_metrics(&table, &filter).is_none());
    assert!(time_series(&table, &filter, Granularity::Month).is_none());
    assert!(time_series_by_category(&table, &filter, Granularity::Month).is_none());
    assert!(top_products(&table, &filter, 10, RankMeasure::Profit).is_none());
    assert!(category_breakdown(&table, &filter, BreakdownOrder::SalesDescending).is_none());
    assert!(segment_breakdown(&table, &filter).is_none());
}

#[test]
fn test_repeat_calls_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir, &sample_rows());

    let mut cache = TableCache::new();
    let table = cache.get_or_load(&path).unwrap();
    let filter = Filter::new().with_year(2023);

    let first = summary_metrics(&table, &filter).unwrap();
    let second = summary_metrics(&table, &filter).unwrap();
    assert_eq!(first, second);

    let series_a = time_series(&table, &filter, Granularity::Month).unwrap();
    let series_b = time_series(&table, &filter, Granularity::Month).unwrap();
    assert_eq!(series_a, series_b);
}

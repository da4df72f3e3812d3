//! Sales report generator
//!
//! Loads the dataset through the table cache, runs every aggregation with
//! the env-configured filter, and either logs a human-readable report or
//! prints a JSON payload to stdout for a downstream renderer.

use serde::Serialize;

use salesdash::aggregate::{
    category_breakdown, segment_breakdown, summary_metrics, time_series,
    time_series_by_category, top_products, AlignedSeries, BreakdownOrder, CategorySales,
    ProductRank, RankMeasure, SegmentSales, SeriesPoint, SummaryMetrics,
};
use salesdash::cache::TableCache;
use salesdash::config::Config;

/// Everything a dashboard page needs, in one payload.
#[derive(Serialize)]
struct DashboardReport {
    summary: SummaryMetrics,
    sales_over_time: Vec<SeriesPoint>,
    sales_by_category_over_time: AlignedSeries,
    top_products: Vec<ProductRank>,
    category_breakdown: Vec<CategorySales>,
    segment_breakdown: Vec<SegmentSales>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();

    // Write logs to stderr so OUTPUT_JSON=1 keeps stdout machine-readable
    let mut builder = if config.rust_log.is_some() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
    } else {
        env_logger::Builder::from_default_env()
    };
    builder.target(env_logger::Target::Stderr).init();

    log::info!("🚀 Starting SalesDash report...");
    log::info!("📊 Configuration:");
    log::info!("   DATASET_PATH: {}", config.dataset_path.display());
    let filter_str = match (config.filter_year, config.filter_region.as_deref()) {
        (None, None) => "None (aggregating the whole dataset)".to_string(),
        (year, region) => format!("year={year:?} region={region:?}"),
    };
    log::info!("   Filter: {}", filter_str);
    log::info!("   Granularity: {}", config.granularity.as_str());

    let mut cache = TableCache::new();
    let table = cache.get_or_load(&config.dataset_path)?;
    let filter = config.filter();

    let summary = match summary_metrics(&table, &filter) {
        Some(summary) => summary,
        None => {
            // Empty selections are a normal user-driven state
            log::warn!("No data for the selected filter; nothing to report");
            println!("No data for the selected filter.");
            return Ok(());
        }
    };

    // The subset is non-empty, so every remaining operation yields data
    let report = DashboardReport {
        sales_over_time: time_series(&table, &filter, config.granularity).unwrap_or_default(),
        sales_by_category_over_time: time_series_by_category(&table, &filter, config.granularity)
            .unwrap_or(AlignedSeries {
                buckets: Vec::new(),
                series: Vec::new(),
            }),
        top_products: top_products(&table, &filter, config.top_n, RankMeasure::Profit)
            .unwrap_or_default(),
        category_breakdown: category_breakdown(
            &table,
            &filter,
            BreakdownOrder::SalesDescending,
        )
        .unwrap_or_default(),
        segment_breakdown: segment_breakdown(&table, &filter).unwrap_or_default(),
        summary,
    };

    if config.output_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &DashboardReport) {
    println!("── Summary ─────────────────────────────");
    println!("Orders:              {}", report.summary.order_count);
    println!("Total sales:         {:.2}", report.summary.total_sales);
    println!("Average order value: {:.2}", report.summary.average_order_value);

    println!("\n── Sales over time ─────────────────────");
    for point in &report.sales_over_time {
        println!("{}  {:.2}", point.bucket, point.total_sales);
    }

    println!("\n── Top products by profit ──────────────");
    // Ascending on purpose: largest lands at the top of a horizontal bar
    for product in report.top_products.iter().rev() {
        println!("{:<20} {:<40} {:.2}", product.product_id, product.product_name, product.value);
    }

    println!("\n── Category breakdown ──────────────────");
    for row in &report.category_breakdown {
        println!("{:<20} {:<20} {:.2}", row.category, row.sub_category, row.total_sales);
    }

    println!("\n── Segment breakdown ───────────────────");
    for row in &report.segment_breakdown {
        println!("{:<20} {:.2}", row.segment, row.total_sales);
    }
}

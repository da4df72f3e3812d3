//! SalesDash - in-memory sales analytics core
//!
//! Loads a static sales-transaction dataset once, holds it as an immutable
//! order table, and answers dashboard queries (summary metrics, time series,
//! top products, category and segment breakdowns) through pure aggregation
//! functions. Presentation (charts, tables, number formatting) is left to
//! whatever consumes the returned values.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod loader;
pub mod order;

pub use aggregate::{
    category_breakdown, segment_breakdown, summary_metrics, time_series,
    time_series_by_category, top_products, AlignedSeries, BreakdownOrder, CategorySales,
    CategorySeries, Filter, Granularity, ProductRank, RankMeasure, SegmentSales, SeriesPoint,
    SummaryMetrics,
};
pub use cache::TableCache;
pub use loader::{load_csv, load_csv_str, DataIntegrityError};
pub use order::{OrderRecord, OrderTable};

//! Sales Aggregator - pure aggregation over the in-memory order table
//!
//! Every operation takes the table and an optional filter as explicit
//! arguments and returns new values; there is no shared session state and
//! nothing here mutates the table.
//!
//! # Pipeline
//!
//! ```text
//! CSV file → loader → OrderTable (immutable)
//!     ↓
//! Filter (year AND region predicates)
//!     ↓
//! summary_metrics / time_series / top_products /
//! category_breakdown / segment_breakdown
//!     ↓
//! presentation layer (charts, tables - out of scope)
//! ```
//!
//! # Empty selections
//!
//! A filter that matches zero rows is a normal user-driven state, not an
//! error: every operation returns `None` for it, distinct from `Some` with
//! all-zero totals. Consumers render a "no data" state off the `None`.

pub mod breakdown;
pub mod filter;
pub mod series;
pub mod summary;
pub mod top;

pub use breakdown::{
    category_breakdown, segment_breakdown, BreakdownOrder, CategorySales, SegmentSales,
};
pub use filter::Filter;
pub use series::{
    time_series, time_series_by_category, AlignedSeries, CategorySeries, Granularity, SeriesPoint,
};
pub use summary::{summary_metrics, SummaryMetrics};
pub use top::{top_products, ProductRank, RankMeasure};

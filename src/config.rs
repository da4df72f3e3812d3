use std::env;
use std::path::PathBuf;

use crate::aggregate::{Filter, Granularity};

/// Configuration loaded from environment variables
pub struct Config {
    pub dataset_path: PathBuf,
    pub filter_year: Option<i32>,
    pub filter_region: Option<String>,
    pub granularity: Granularity,
    pub top_n: usize,
    pub output_json: bool,
    pub rust_log: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// By default no filter is applied (the whole dataset is aggregated).
    /// Set FILTER_YEAR and/or FILTER_REGION to narrow the report.
    pub fn from_env() -> Self {
        let dataset_path = env::var("DATASET_PATH")
            .map(PathBuf::from)
            .expect("DATASET_PATH must be set in .env file");

        let filter_year = env::var("FILTER_YEAR")
            .ok()
            .and_then(|s| s.trim().parse::<i32>().ok());

        let filter_region = env::var("FILTER_REGION")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        // month (default) or year
        let granularity = env::var("GRANULARITY")
            .ok()
            .and_then(|s| Granularity::from_str(s.trim()))
            .unwrap_or(Granularity::Month);

        let top_n = env::var("TOP_N")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(10);

        let output_json = env::var("OUTPUT_JSON")
            .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let rust_log = env::var("RUST_LOG").ok();

        Self {
            dataset_path,
            filter_year,
            filter_region,
            granularity,
            top_n,
            output_json,
            rust_log,
        }
    }

    /// Build the aggregation filter from the configured predicates.
    pub fn filter(&self) -> Filter {
        let mut filter = Filter::new();
        if let Some(year) = self.filter_year {
            filter = filter.with_year(year);
        }
        if let Some(ref region) = self.filter_region {
            filter = filter.with_region(region);
        }
        filter
    }
}

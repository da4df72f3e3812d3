//! Row filter combining optional year and region predicates

use crate::order::{OrderRecord, OrderTable};

/// Optional equality predicates narrowing the order table before
/// aggregation. Present predicates are combined with logical AND; the empty
/// filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    year: Option<String>,
    region: Option<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only records whose year bucket matches `year`.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(format!("{year:04}"));
        self
    }

    /// Keep only records from `region` (exact match).
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn matches(&self, record: &OrderRecord) -> bool {
        if let Some(ref year) = self.year {
            if record.year_bucket() != *year {
                return false;
            }
        }
        if let Some(ref region) = self.region {
            if record.region != *region {
                return false;
            }
        }
        true
    }

    /// Iterate over the records of `table` that pass this filter.
    pub fn apply<'a>(&'a self, table: &'a OrderTable) -> impl Iterator<Item = &'a OrderRecord> {
        table.records().iter().filter(move |r| self.matches(r))
    }
}

//! Top-N product ranking

use std::collections::HashMap;

use serde::Serialize;

use super::filter::Filter;
use crate::order::OrderTable;

/// Measure a product ranking is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankMeasure {
    /// Summed profit per product (the dashboard default).
    Profit,
    /// Summed sales per product.
    Sales,
}

impl RankMeasure {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankMeasure::Profit => "profit",
            RankMeasure::Sales => "sales",
        }
    }
}

/// One ranked product with its summed measure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRank {
    pub product_id: String,
    pub product_name: String,
    pub value: f64,
}

/// The `n` highest-ranked products by the summed measure.
///
/// Output is ascending (lowest of the top n first), matching the
/// horizontal-bar convention where the largest value renders at the top.
/// Ties keep first-encountered product order: grouping preserves row order
/// and the sort is stable.
///
/// Returns `None` when the filter matches no rows.
pub fn top_products(
    table: &OrderTable,
    filter: &Filter,
    n: usize,
    rank_by: RankMeasure,
) -> Option<Vec<ProductRank>> {
    // Group by (product id, product name) in first-encountered order
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut ranked: Vec<ProductRank> = Vec::new();

    for record in filter.apply(table) {
        let key = (record.product_id.as_str(), record.product_name.as_str());
        let value = match rank_by {
            RankMeasure::Profit => record.profit,
            RankMeasure::Sales => record.sales,
        };
        match index.get(&key) {
            Some(&slot) => ranked[slot].value += value,
            None => {
                index.insert(key, ranked.len());
                ranked.push(ProductRank {
                    product_id: record.product_id.clone(),
                    product_name: record.product_name.clone(),
                    value,
                });
            }
        }
    }

    if ranked.is_empty() {
        return None;
    }

    ranked.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(std::cmp::Ordering::Equal));

    let skip = ranked.len().saturating_sub(n);
    Some(ranked.split_off(skip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::order::OrderRecord;

    fn test_order(product_id: &str, profit: f64, sales: f64) -> OrderRecord {
        OrderRecord {
            order_id: "ORD-1".to_string(),
            order_date: NaiveDate::from_ymd_opt(2023, 7, 4).unwrap(),
            ship_date: NaiveDate::from_ymd_opt(2023, 7, 8).unwrap(),
            sales,
            profit,
            product_id: product_id.to_string(),
            product_name: format!("Product {product_id}"),
            category: "Office Supplies".to_string(),
            sub_category: "Fasteners".to_string(),
            region: "West".to_string(),
            segment: "Consumer".to_string(),
        }
    }

    #[test]
    fn test_top_two_ascending() {
        let table = OrderTable::from_records(vec![
            test_order("P1", 10.0, 1.0),
            test_order("P2", 30.0, 1.0),
            test_order("P3", 20.0, 1.0),
        ]);

        let top = top_products(&table, &Filter::new(), 2, RankMeasure::Profit).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_id, "P3");
        assert_eq!(top[0].value, 20.0);
        assert_eq!(top[1].product_id, "P2");
        assert_eq!(top[1].value, 30.0);
    }

    #[test]
    fn test_n_covers_all_products() {
        let records: Vec<_> = (1..=10)
            .map(|i| test_order(&format!("P{i}"), i as f64, 1.0))
            .collect();
        let table = OrderTable::from_records(records);

        let top = top_products(&table, &Filter::new(), 10, RankMeasure::Profit).unwrap();
        assert_eq!(top.len(), 10);
        for pair in top.windows(2) {
            assert!(pair[0].value <= pair[1].value);
        }
    }

    #[test]
    fn test_profit_summed_across_rows() {
        let table = OrderTable::from_records(vec![
            test_order("P1", 5.0, 1.0),
            test_order("P1", 7.0, 1.0),
            test_order("P2", 10.0, 1.0),
        ]);

        let top = top_products(&table, &Filter::new(), 2, RankMeasure::Profit).unwrap();
        assert_eq!(top[0].product_id, "P2");
        assert_eq!(top[0].value, 10.0);
        assert_eq!(top[1].product_id, "P1");
        assert_eq!(top[1].value, 12.0);
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        let table = OrderTable::from_records(vec![
            test_order("P1", 10.0, 1.0),
            test_order("P2", 10.0, 1.0),
            test_order("P3", 10.0, 1.0),
        ]);

        let top = top_products(&table, &Filter::new(), 3, RankMeasure::Profit).unwrap();
        let ids: Vec<&str> = top.iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_rank_by_sales() {
        let table = OrderTable::from_records(vec![
            test_order("P1", 100.0, 5.0),
            test_order("P2", 1.0, 50.0),
        ]);

        let top = top_products(&table, &Filter::new(), 1, RankMeasure::Sales).unwrap();
        assert_eq!(top[0].product_id, "P2");
        assert_eq!(top[0].value, 50.0);
    }

    #[test]
    fn test_negative_profit_products_rank_lowest() {
        let table = OrderTable::from_records(vec![
            test_order("P1", -5.0, 1.0),
            test_order("P2", 3.0, 1.0),
        ]);

        let top = top_products(&table, &Filter::new(), 2, RankMeasure::Profit).unwrap();
        assert_eq!(top[0].value, -5.0);
        assert_eq!(top[1].value, 3.0);
    }

    #[test]
    fn test_empty_selection_is_none() {
        let table = OrderTable::from_records(vec![test_order("P1", 10.0, 1.0)]);

        let filter = Filter::new().with_year(1999);
        assert_eq!(top_products(&table, &filter, 5, RankMeasure::Profit), None);
    }
}

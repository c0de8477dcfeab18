//! Dashboard KPIs

use crate::numeric;
use dataset::{columns, Dataset, Value};
use serde::Serialize;
use std::collections::HashSet;

/// Fixed-shape set of dashboard-level statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSet {
    /// Sum of all sales
    pub total_revenue: f64,
    /// Mean sales per row, 0.0 for an empty dataset
    pub avg_revenue: f64,
    /// Distinct item identifiers, 0 without an identifier column
    pub unique_items: usize,
    /// Distinct outlet identifiers, 0 without an identifier column
    pub unique_outlets: usize,
    /// Mean of present ratings, absent without any rating values
    pub avg_rating: Option<f64>,
}

pub(crate) fn compute_kpis(ds: &Dataset, sales: &[f64]) -> KpiSet {
    let total_revenue: f64 = sales.iter().sum();
    let avg_revenue = if sales.is_empty() {
        0.0
    } else {
        total_revenue / sales.len() as f64
    };

    KpiSet {
        total_revenue,
        avg_revenue,
        unique_items: distinct_count(ds, columns::ITEM_IDENTIFIER),
        unique_outlets: distinct_count(ds, columns::OUTLET_IDENTIFIER),
        avg_rating: mean_rating(ds),
    }
}

/// Distinct non-missing values in a column, 0 when the column is absent
fn distinct_count(ds: &Dataset, column: &str) -> usize {
    match ds.column(column) {
        Some(col) => col
            .values
            .iter()
            .filter_map(Value::label)
            .collect::<HashSet<_>>()
            .len(),
        None => 0,
    }
}

/// Mean of present ratings. Absent column or zero present ratings both
/// yield `None`, never 0.0.
pub(crate) fn mean_rating(ds: &Dataset) -> Option<f64> {
    let ratings = numeric::rating_values(ds)?;
    let present: Vec<f64> = ratings.into_iter().flatten().collect();
    if present.is_empty() {
        return None;
    }
    Some(present.iter().sum::<f64>() / present.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::Column;

    fn text(values: &[&str]) -> Vec<Value> {
        values.iter().map(|s| Value::Text(s.to_string())).collect()
    }

    #[test]
    fn test_kpis_over_plain_dataset() {
        let ds = Dataset::new(vec![
            Column::new(columns::ITEM_IDENTIFIER, text(&["FDA15", "FDA15", "DRC01"])),
            Column::new(columns::OUTLET_IDENTIFIER, text(&["OUT049", "OUT018", "OUT049"])),
            Column::new(
                columns::ITEM_OUTLET_SALES,
                vec![
                    Value::Number(100.0),
                    Value::Text("bad".to_string()),
                    Value::Number(50.0),
                ],
            ),
            Column::new(
                columns::RATING,
                vec![Value::Number(4.0), Value::Missing, Value::Number(5.0)],
            ),
        ])
        .unwrap();

        let sales = crate::numeric::sales_values(&ds);
        let kpis = compute_kpis(&ds, &sales);

        assert_eq!(kpis.total_revenue, 150.0);
        assert_eq!(kpis.avg_revenue, 50.0);
        assert_eq!(kpis.unique_items, 2);
        assert_eq!(kpis.unique_outlets, 2);
        assert_eq!(kpis.avg_rating, Some(4.5));
    }

    #[test]
    fn test_absent_columns_degrade_to_zero() {
        let ds = Dataset::new(vec![Column::new("Item Type", text(&["Dairy"]))]).unwrap();
        let sales = crate::numeric::sales_values(&ds);
        let kpis = compute_kpis(&ds, &sales);

        assert_eq!(kpis.total_revenue, 0.0);
        assert_eq!(kpis.avg_revenue, 0.0);
        assert_eq!(kpis.unique_items, 0);
        assert_eq!(kpis.unique_outlets, 0);
        assert_eq!(kpis.avg_rating, None);
    }

    #[test]
    fn test_all_missing_ratings_yield_absent_average() {
        let ds = Dataset::new(vec![
            Column::new(columns::ITEM_OUTLET_SALES, vec![Value::Number(10.0)]),
            Column::new(columns::RATING, vec![Value::Text("unrated".to_string())]),
        ])
        .unwrap();

        let sales = crate::numeric::sales_values(&ds);
        assert_eq!(compute_kpis(&ds, &sales).avg_rating, None);
    }

    #[test]
    fn test_empty_dataset_mean_is_zero_not_nan() {
        let ds = Dataset::new(vec![]).unwrap();
        let sales = crate::numeric::sales_values(&ds);
        assert_eq!(compute_kpis(&ds, &sales).avg_revenue, 0.0);
    }
}

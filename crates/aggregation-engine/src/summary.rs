//! Outlet-Type Summary Table

use crate::numeric;
use dataset::{columns, Dataset};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// One row of the outlet-type cross tabulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Outlet type label
    pub outlet_type: String,
    /// Sum of sales for this outlet type
    pub total_sales: f64,
    /// Mean sales for this outlet type
    pub avg_sales: f64,
    /// Distinct item identifiers, 0 without an identifier column
    pub num_items: usize,
    /// Mean of present ratings fixed to two decimals, "N/A" when none
    pub avg_rating: String,
}

/// Per-outlet-type summary, rows in first-seen-group order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    /// Ordered rows
    pub rows: Vec<SummaryRow>,
}

#[derive(Default)]
struct GroupAccum {
    sales_sum: f64,
    row_count: usize,
    items: HashSet<String>,
    ratings: Vec<f64>,
}

/// Compute the summary table, `None` without an outlet-type column
pub(crate) fn compute_summary(ds: &Dataset, sales: &[f64]) -> Option<SummaryTable> {
    let outlet_type = ds.column(columns::OUTLET_TYPE)?;
    let item_ids = ds.column(columns::ITEM_IDENTIFIER);
    let ratings = numeric::rating_values(ds);

    let mut groups: IndexMap<String, GroupAccum> = IndexMap::new();
    for row in 0..ds.n_rows() {
        let Some(key) = outlet_type.values[row].label() else {
            continue;
        };
        let accum = groups.entry(key).or_default();
        accum.sales_sum += sales[row];
        accum.row_count += 1;
        if let Some(ids) = item_ids {
            if let Some(id) = ids.values[row].label() {
                accum.items.insert(id);
            }
        }
        if let Some(rating) = ratings.as_ref().and_then(|r| r[row]) {
            accum.ratings.push(rating);
        }
    }

    let rows = groups
        .into_iter()
        .map(|(outlet_type, accum)| SummaryRow {
            outlet_type,
            total_sales: accum.sales_sum,
            avg_sales: accum.sales_sum / accum.row_count as f64,
            num_items: accum.items.len(),
            avg_rating: format_rating(&accum.ratings),
        })
        .collect();

    Some(SummaryTable { rows })
}

fn format_rating(ratings: &[f64]) -> String {
    if ratings.is_empty() {
        return "N/A".to_string();
    }
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    format!("{mean:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::{Column, Value};

    fn text(values: &[&str]) -> Vec<Value> {
        values.iter().map(|s| Value::Text(s.to_string())).collect()
    }

    fn numbers(values: &[f64]) -> Vec<Value> {
        values.iter().map(|n| Value::Number(*n)).collect()
    }

    #[test]
    fn test_summary_absent_without_outlet_type() {
        let ds = Dataset::new(vec![Column::new(
            columns::ITEM_OUTLET_SALES,
            numbers(&[1.0]),
        )])
        .unwrap();
        let sales = numeric::sales_values(&ds);
        assert!(compute_summary(&ds, &sales).is_none());
    }

    #[test]
    fn test_summary_full_row() {
        let ds = Dataset::new(vec![
            Column::new(
                columns::OUTLET_TYPE,
                text(&["Supermarket Type1", "Supermarket Type1", "Grocery Store"]),
            ),
            Column::new(columns::ITEM_IDENTIFIER, text(&["FDA15", "FDA15", "DRC01"])),
            Column::new(columns::ITEM_OUTLET_SALES, numbers(&[100.0, 60.0, 20.0])),
            Column::new(
                columns::RATING,
                vec![Value::Number(4.0), Value::Number(4.5), Value::Missing],
            ),
        ])
        .unwrap();
        let sales = numeric::sales_values(&ds);

        let table = compute_summary(&ds, &sales).unwrap();
        assert_eq!(table.rows.len(), 2);

        let market = &table.rows[0];
        assert_eq!(market.outlet_type, "Supermarket Type1");
        assert_eq!(market.total_sales, 160.0);
        assert_eq!(market.avg_sales, 80.0);
        assert_eq!(market.num_items, 1);
        assert_eq!(market.avg_rating, "4.25");

        let grocery = &table.rows[1];
        assert_eq!(grocery.num_items, 1);
        assert_eq!(grocery.avg_rating, "N/A");
    }

    #[test]
    fn test_num_items_zero_without_identifier_column() {
        let ds = Dataset::new(vec![
            Column::new(columns::OUTLET_TYPE, text(&["A"])),
            Column::new(columns::ITEM_OUTLET_SALES, numbers(&[10.0])),
        ])
        .unwrap();
        let sales = numeric::sales_values(&ds);

        let table = compute_summary(&ds, &sales).unwrap();
        assert_eq!(table.rows[0].num_items, 0);
        assert_eq!(table.rows[0].avg_rating, "N/A");
    }
}

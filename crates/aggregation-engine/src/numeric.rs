//! Best-Effort Numeric Coercion
//!
//! Two deliberately different policies:
//! - sales: anything non-numeric counts as 0.0, so totals never fail
//! - rating: anything non-numeric counts as missing, so means exclude it

use dataset::{columns, Dataset, Value};

/// Sales coercion. Numeric text still parses; everything else is 0.0.
pub(crate) fn coerce_sales(value: &Value) -> f64 {
    match value {
        Value::Number(n) => *n,
        Value::Text(s) => s.trim().parse().unwrap_or(0.0),
        Value::Missing => 0.0,
    }
}

/// Rating coercion. Non-numeric entries are missing, not zero.
pub(crate) fn coerce_rating(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::Text(s) => s.trim().parse().ok(),
        Value::Missing => None,
    }
}

/// Per-row sales figures. A dataset without the sales column behaves
/// as an all-zero sales column.
pub(crate) fn sales_values(ds: &Dataset) -> Vec<f64> {
    match ds.column(columns::ITEM_OUTLET_SALES) {
        Some(col) => col.values.iter().map(coerce_sales).collect(),
        None => vec![0.0; ds.n_rows()],
    }
}

/// Per-row ratings, `None` when the rating column is absent
pub(crate) fn rating_values(ds: &Dataset) -> Option<Vec<Option<f64>>> {
    ds.column(columns::RATING)
        .map(|col| col.values.iter().map(coerce_rating).collect())
}

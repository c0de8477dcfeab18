//! Aggregation Engine
//!
//! Turns a normalized sales dataset into the dashboard view model:
//! scalar KPIs, one grouped-aggregate series per chartable dimension,
//! and the per-outlet-type summary table. Pure request-scoped
//! computation, no I/O, no caching.

mod kpis;
mod numeric;
mod series;
mod summary;

pub use kpis::KpiSet;
pub use series::{AggregateSeries, Aggregation, ChartDimension, RowOrder, SeriesPoint, CHART_DIMENSIONS};
pub use summary::{SummaryRow, SummaryTable};

use dataset::Dataset;
use serde::Serialize;
use tracing::debug;

/// The complete view model handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Dashboard-level scalar statistics
    pub kpis: KpiSet,
    /// One entry per chartable dimension present in the dataset
    pub series: Vec<AggregateSeries>,
    /// Per-outlet-type cross tabulation, absent without an outlet-type column
    pub summary: Option<SummaryTable>,
}

/// Aggregate a normalized dataset into the dashboard view model.
///
/// Deterministic: the same dataset always produces the same view.
pub fn aggregate(ds: &Dataset) -> DashboardView {
    let sales = numeric::sales_values(ds);
    let view = DashboardView {
        kpis: kpis::compute_kpis(ds, &sales),
        series: series::compute_series(ds, &sales),
        summary: summary::compute_summary(ds, &sales),
    };
    debug!(
        "Aggregated {} rows into {} series (summary: {})",
        ds.n_rows(),
        view.series.len(),
        view.summary.is_some()
    );
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::{columns, Column, Value};

    fn text(values: &[&str]) -> Vec<Value> {
        values.iter().map(|s| Value::Text(s.to_string())).collect()
    }

    fn numbers(values: &[f64]) -> Vec<Value> {
        values.iter().map(|n| Value::Number(*n)).collect()
    }

    fn outlet_type_dataset() -> Dataset {
        Dataset::new(vec![
            Column::new(columns::OUTLET_TYPE, text(&["A", "A", "B"])),
            Column::new(columns::ITEM_OUTLET_SALES, numbers(&[100.0, 50.0, 30.0])),
        ])
        .unwrap()
    }

    #[test]
    fn test_summary_rows_first_seen_order() {
        let view = aggregate(&outlet_type_dataset());
        let summary = view.summary.unwrap();

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].outlet_type, "A");
        assert_eq!(summary.rows[0].total_sales, 150.0);
        assert_eq!(summary.rows[0].avg_sales, 75.0);
        assert_eq!(summary.rows[1].outlet_type, "B");
        assert_eq!(summary.rows[1].total_sales, 30.0);
        assert_eq!(summary.rows[1].avg_sales, 30.0);
    }

    #[test]
    fn test_series_totals_match_total_revenue() {
        let ds = Dataset::new(vec![
            Column::new(columns::ITEM_FAT_CONTENT, text(&["Low Fat", "Regular", "Low Fat"])),
            Column::new(columns::ITEM_OUTLET_SALES, numbers(&[10.0, 20.0, 5.0])),
        ])
        .unwrap();

        let view = aggregate(&ds);
        let fat_series = &view.series[0];
        let series_total: f64 = fat_series.points.iter().map(|p| p.value).sum();
        assert_eq!(series_total, view.kpis.total_revenue);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let ds = outlet_type_dataset();
        assert_eq!(aggregate(&ds), aggregate(&ds));
    }

    #[test]
    fn test_missing_dimensions_are_omitted() {
        let view = aggregate(&outlet_type_dataset());
        // no fat content / item type / outlet age etc. columns
        assert!(view.series.is_empty());
    }
}

//! Chart Series from Declarative Dimensions
//!
//! Each chartable dimension is declared once as data (required
//! columns, grouping keys, aggregation, ordering) and all dimensions
//! are computed by the same loop, so adding a chart is a table edit.

use crate::numeric;
use dataset::{columns, Column, Dataset};
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;

/// How grouped sales figures are reduced to one value per group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Sum of the measure
    Sum,
    /// Mean of the measure
    Mean,
    /// Count of distinct measure values
    DistinctCount,
}

impl Aggregation {
    fn apply(&self, values: &[f64]) -> f64 {
        match self {
            Aggregation::Sum => values.iter().sum(),
            Aggregation::Mean => {
                if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
            Aggregation::DistinctCount => {
                let mut bits: Vec<u64> = values.iter().map(|v| v.to_bits()).collect();
                bits.sort_unstable();
                bits.dedup();
                bits.len() as f64
            }
        }
    }
}

/// Row ordering within a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// Groups appear in the order they are first seen in the dataset
    FirstSeen,
    /// Groups sort ascending by the numeric value of their first key;
    /// unparseable keys sort after the numeric ones, lexicographically
    AscendingNumeric,
}

/// One chartable dimension, declared as data
#[derive(Debug, Clone, Copy)]
pub struct ChartDimension {
    /// Series name, also the chart title
    pub name: &'static str,
    /// Group-by column(s); all must exist or the series is omitted
    pub group_by: &'static [&'static str],
    /// Reduction applied to each group's sales
    pub aggregation: Aggregation,
    /// Row ordering
    pub order: RowOrder,
}

/// The fixed dimension list; output series order follows this order
pub const CHART_DIMENSIONS: &[ChartDimension] = &[
    ChartDimension {
        name: "Sales by Fat Content",
        group_by: &[columns::ITEM_FAT_CONTENT],
        aggregation: Aggregation::Sum,
        order: RowOrder::FirstSeen,
    },
    ChartDimension {
        name: "Sales by Item Type",
        group_by: &[columns::ITEM_TYPE],
        aggregation: Aggregation::Sum,
        order: RowOrder::FirstSeen,
    },
    ChartDimension {
        name: "Fat Content Sales by Outlet",
        group_by: &[columns::OUTLET_IDENTIFIER, columns::ITEM_FAT_CONTENT],
        aggregation: Aggregation::Sum,
        order: RowOrder::FirstSeen,
    },
    ChartDimension {
        name: "Sales by Outlet Age",
        group_by: &[columns::OUTLET_AGE],
        aggregation: Aggregation::Sum,
        order: RowOrder::AscendingNumeric,
    },
    ChartDimension {
        name: "Sales by Outlet Size",
        group_by: &[columns::OUTLET_SIZE],
        aggregation: Aggregation::Sum,
        order: RowOrder::FirstSeen,
    },
    ChartDimension {
        name: "Sales by Outlet Location Type",
        group_by: &[columns::OUTLET_LOCATION_TYPE],
        aggregation: Aggregation::Sum,
        order: RowOrder::FirstSeen,
    },
];

/// One group's label(s) and aggregated value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// One label per group-by column
    pub key: Vec<String>,
    /// Aggregated sales value
    pub value: f64,
}

/// A named grouped aggregate, driving one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSeries {
    /// Chartable name
    pub name: String,
    /// Group key column name(s)
    pub group_by: Vec<String>,
    /// Value semantics of `points`
    pub aggregation: Aggregation,
    /// Ordered (key, value) rows
    pub points: Vec<SeriesPoint>,
}

/// Compute one series per dimension whose columns all exist, in the
/// fixed dimension order. Missing dimensions are omitted, never empty.
pub(crate) fn compute_series(ds: &Dataset, sales: &[f64]) -> Vec<AggregateSeries> {
    CHART_DIMENSIONS
        .iter()
        .filter_map(|dim| compute_dimension(ds, sales, dim))
        .collect()
}

fn compute_dimension(
    ds: &Dataset,
    sales: &[f64],
    dim: &ChartDimension,
) -> Option<AggregateSeries> {
    let group_cols: Vec<&Column> = dim
        .group_by
        .iter()
        .map(|name| ds.column(name))
        .collect::<Option<_>>()?;

    // first-seen insertion order; rows with a missing key are excluded
    let mut groups: IndexMap<Vec<String>, Vec<f64>> = IndexMap::new();
    for row in 0..ds.n_rows() {
        let key: Option<Vec<String>> = group_cols.iter().map(|c| c.values[row].label()).collect();
        if let Some(key) = key {
            groups.entry(key).or_default().push(sales[row]);
        }
    }

    let mut points: Vec<SeriesPoint> = groups
        .into_iter()
        .map(|(key, values)| SeriesPoint {
            key,
            value: dim.aggregation.apply(&values),
        })
        .collect();

    if dim.order == RowOrder::AscendingNumeric {
        points.sort_by(compare_numeric_keys);
    }

    Some(AggregateSeries {
        name: dim.name.to_string(),
        group_by: dim.group_by.iter().map(|s| s.to_string()).collect(),
        aggregation: dim.aggregation,
        points,
    })
}

fn compare_numeric_keys(a: &SeriesPoint, b: &SeriesPoint) -> Ordering {
    match (a.key[0].parse::<f64>(), b.key[0].parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.key[0].cmp(&b.key[0]),
    }
}

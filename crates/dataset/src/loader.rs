//! CSV Ingest

use crate::table::{Column, Dataset, Value};
use crate::DatasetError;
use std::path::Path;
use tracing::debug;

/// Load a dataset from a delimited file.
///
/// Blank cells become [`Value::Missing`]; cells parsing as a finite
/// float become [`Value::Number`]; everything else is kept verbatim as
/// [`Value::Text`]. Malformed numeric text is deliberately not an
/// error here, coercion is the aggregation layer's responsibility.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DatasetError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut values: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];

    for record in reader.records() {
        let record = record?;
        for (i, cells) in values.iter_mut().enumerate() {
            cells.push(record.get(i).map_or(Value::Missing, parse_cell));
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(values)
        .map(|(name, vals)| Column::new(name, vals))
        .collect();
    let dataset = Dataset::new(columns)?;

    debug!(
        "Loaded {} rows x {} columns from {}",
        dataset.n_rows(),
        dataset.n_cols(),
        path.display()
    );
    Ok(dataset)
}

/// NaN/inf cells count as text, not numbers
fn parse_cell(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Number(n),
        _ => Value::Text(cell.to_string()),
    }
}

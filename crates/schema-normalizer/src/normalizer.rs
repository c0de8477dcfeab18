//! Dataset Normalization Pass

use crate::aliases::{canonical_column_name, canonical_fat_content};
use dataset::{columns, Column, Dataset, DatasetError, Value};
use tracing::debug;

/// Normalize a raw dataset into the canonical schema.
///
/// Column names are trimmed, known aliases are renamed to their
/// canonical form, fat-content spellings are rewritten, and columns
/// holding no values at all are dropped. When several input columns
/// collapse to the same canonical name, the later column in input
/// order wins; the merged column keeps the first occurrence's position.
///
/// No value-level validation happens here. Malformed numeric text is
/// passed through for the aggregation layer to coerce.
pub fn normalize(raw: &Dataset) -> Result<Dataset, DatasetError> {
    let mut merged: Vec<Column> = Vec::with_capacity(raw.n_cols());
    let mut renamed = 0usize;

    for col in raw.columns() {
        let trimmed = col.name.trim();
        let name = match canonical_column_name(trimmed) {
            Some(canonical) => {
                renamed += 1;
                canonical.to_string()
            }
            None => trimmed.to_string(),
        };

        let values = if name == columns::ITEM_FAT_CONTENT {
            col.values.iter().map(rewrite_fat_content).collect()
        } else {
            col.values.clone()
        };

        let column = Column::new(name, values);
        match merged.iter_mut().find(|c| c.name == column.name) {
            // last-write-wins on canonical-name collisions
            Some(existing) => *existing = column,
            None => merged.push(column),
        }
    }

    // empty-column drop runs after collision resolution
    let before = merged.len();
    let normalized: Vec<Column> = merged.into_iter().filter(|c| !c.all_missing()).collect();

    debug!(
        "Normalized schema: {} -> {} columns ({} renamed, {} empty dropped)",
        raw.n_cols(),
        normalized.len(),
        renamed,
        before - normalized.len()
    );
    Dataset::new(normalized)
}

fn rewrite_fat_content(value: &Value) -> Value {
    match value {
        Value::Text(s) => match canonical_fat_content(s) {
            Some(canonical) => Value::Text(canonical.to_string()),
            None => value.clone(),
        },
        _ => value.clone(),
    }
}

//! Static Rename Tables
//!
//! Fixed at process start, read-only, safe for unsynchronized
//! concurrent reads.

use dataset::columns;

/// Lower-cased raw column-name variants and the canonical name each
/// collapses to
pub const COLUMN_ALIASES: &[(&str, &str)] = &[
    ("total sales", columns::ITEM_OUTLET_SALES),
    ("total_sales", columns::ITEM_OUTLET_SALES),
    ("item outlet sales", columns::ITEM_OUTLET_SALES),
    ("sales", columns::ITEM_OUTLET_SALES),
    ("revenue", columns::ITEM_OUTLET_SALES),
];

/// Raw fat-content spellings and their canonical label
pub const FAT_CONTENT_REWRITES: &[(&str, &str)] = &[
    ("LF", "Low Fat"),
    ("low fat", "Low Fat"),
    ("reg", "Regular"),
    ("regular", "Regular"),
];

/// Canonical name for a raw column header, if the lower-cased header is
/// a known alias
pub fn canonical_column_name(raw: &str) -> Option<&'static str> {
    let lowered = raw.to_lowercase();
    COLUMN_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| *canonical)
}

/// Canonical label for a raw fat-content spelling; unknown spellings
/// get no rewrite
pub fn canonical_fat_content(raw: &str) -> Option<&'static str> {
    FAT_CONTENT_REWRITES
        .iter()
        .find(|(spelling, _)| *spelling == raw)
        .map(|(_, canonical)| *canonical)
}

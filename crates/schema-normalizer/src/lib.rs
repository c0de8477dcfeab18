//! Schema Normalizer
//!
//! Reconciles raw column headers against the canonical schema and
//! cleans up categorical value spellings:
//! - Trims column names
//! - Collapses known header aliases to canonical names
//! - Canonicalizes fat-content spellings
//! - Drops fully-empty columns

mod aliases;
mod normalizer;

pub use aliases::{canonical_column_name, canonical_fat_content, COLUMN_ALIASES, FAT_CONTENT_REWRITES};
pub use normalizer::normalize;

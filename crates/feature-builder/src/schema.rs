//! Feature Schema
//!
//! The ordered feature-name list captured at model-training time. The
//! position of a name in the list is the position of that feature in
//! every input vector.

use serde::Deserialize;
use std::collections::HashMap;

/// Continuous feature names, as the training pipeline recorded them
pub const ITEM_WEIGHT: &str = "Item Weight";
/// Item visibility share
pub const ITEM_VISIBILITY: &str = "Item Visibility";
/// Outlet age in years
pub const OUTLET_AGE: &str = "Outlet Age";

/// One-hot base names; a selected category `v` maps to the feature
/// `"{base}_{v}"`
pub const ITEM_FAT_CONTENT: &str = "Item Fat Content";
/// Outlet type base name
pub const OUTLET_TYPE: &str = "Outlet Type";
/// Outlet location tier base name
pub const OUTLET_LOCATION_TYPE: &str = "Outlet Location Type";
/// Outlet size base name
pub const OUTLET_SIZE: &str = "Outlet Size";
/// Item type base name
pub const ITEM_TYPE: &str = "Item Type";

/// Separator the training-time encoder used between base name and value
pub const ONE_HOT_SEPARATOR: char = '_';

/// Candidate feature name for a one-hot selection
pub fn one_hot_name(base: &str, value: &str) -> String {
    format!("{base}{ONE_HOT_SEPARATOR}{value}")
}

/// Ordered feature names plus a derived name -> position index.
///
/// Owned by the model artifact and treated as immutable; whether it is
/// internally consistent is trusted as given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct FeatureSchema {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Build a schema from the ordered training-time name list
    pub fn new(names: Vec<String>) -> Self {
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { names, index }
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True for a zero-length schema
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Feature names in vector order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Vector position of an exact feature name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}

impl From<Vec<String>> for FeatureSchema {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_matches_order() {
        let schema = FeatureSchema::new(vec![
            ITEM_WEIGHT.to_string(),
            "Outlet Size_Small".to_string(),
        ]);
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.position(ITEM_WEIGHT), Some(0));
        assert_eq!(schema.position("Outlet Size_Small"), Some(1));
        assert_eq!(schema.position("Outlet Size_Medium"), None);
    }

    #[test]
    fn test_one_hot_name_join() {
        assert_eq!(one_hot_name(OUTLET_SIZE, "Small"), "Outlet Size_Small");
        assert_eq!(
            one_hot_name(ITEM_FAT_CONTENT, "Low Fat"),
            "Item Fat Content_Low Fat"
        );
    }
}

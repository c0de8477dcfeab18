//! Vector Assembly

use crate::schema::{self, one_hot_name, FeatureSchema};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Sparse per-request prediction input.
///
/// Serde field names match the submitted form keys; absent fields stay
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Item weight, raw text
    #[serde(rename = "Item_Weight", default)]
    pub item_weight: Option<String>,
    /// Item visibility share, raw text
    #[serde(rename = "Item_Visibility", default)]
    pub item_visibility: Option<String>,
    /// Outlet age in years, raw text
    #[serde(rename = "Outlet_Age", default)]
    pub outlet_age: Option<String>,
    /// Selected fat-content category
    #[serde(rename = "Item_Fat_Content", default)]
    pub item_fat_content: Option<String>,
    /// Selected outlet type
    #[serde(rename = "Outlet_Type", default)]
    pub outlet_type: Option<String>,
    /// Selected outlet location tier
    #[serde(rename = "Outlet_Location_Type", default)]
    pub outlet_location_type: Option<String>,
    /// Selected outlet size
    #[serde(rename = "Outlet_Size", default)]
    pub outlet_size: Option<String>,
    /// Selected item type
    #[serde(rename = "Item_Type", default)]
    pub item_type: Option<String>,
}

/// Build the dense feature vector for one prediction request.
///
/// Every position starts at zero. The three continuous fields are
/// parsed leniently (absent or malformed text stays 0.0). Each
/// categorical selection sets the matching `{base}_{value}` position
/// to 1.0; selections with no matching schema name set nothing,
/// silently. The result length always equals the schema length.
pub fn build_feature_vector(input: &PredictionInput, schema: &FeatureSchema) -> Vec<f64> {
    let mut vector = vec![0.0; schema.len()];

    set_continuous(&mut vector, schema, schema::ITEM_WEIGHT, input.item_weight.as_deref());
    set_continuous(&mut vector, schema, schema::ITEM_VISIBILITY, input.item_visibility.as_deref());
    set_continuous(&mut vector, schema, schema::OUTLET_AGE, input.outlet_age.as_deref());

    set_one_hot(&mut vector, schema, schema::ITEM_FAT_CONTENT, input.item_fat_content.as_deref());
    set_one_hot(&mut vector, schema, schema::OUTLET_TYPE, input.outlet_type.as_deref());
    set_one_hot(&mut vector, schema, schema::OUTLET_LOCATION_TYPE, input.outlet_location_type.as_deref());
    set_one_hot(&mut vector, schema, schema::OUTLET_SIZE, input.outlet_size.as_deref());
    set_one_hot(&mut vector, schema, schema::ITEM_TYPE, input.item_type.as_deref());

    vector
}

fn set_continuous(vector: &mut [f64], schema: &FeatureSchema, name: &str, raw: Option<&str>) {
    if let Some(pos) = schema.position(name) {
        vector[pos] = raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0.0);
    }
}

fn set_one_hot(vector: &mut [f64], schema: &FeatureSchema, base: &str, value: Option<&str>) {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return;
    };
    let candidate = one_hot_name(base, value);
    match schema.position(&candidate) {
        Some(pos) => vector[pos] = 1.0,
        // unseen category at training time: nothing to set
        None => trace!("No schema position for '{candidate}'"),
    }
}

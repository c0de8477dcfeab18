//! Feature Vector Builder
//!
//! Maps sparse, partial, user-supplied fields back into the exact
//! numeric feature vector layout a trained model expects. Independent
//! of the dataset pipeline; shares no state with it.

mod builder;
mod schema;

pub use builder::{build_feature_vector, PredictionInput};
pub use schema::{one_hot_name, FeatureSchema, ONE_HOT_SEPARATOR};

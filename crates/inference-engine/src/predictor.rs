//! Prediction Gateway

use crate::artifact::ModelArtifact;
use crate::InferenceError;
use feature_builder::{build_feature_vector, FeatureSchema, PredictionInput};
use std::path::Path;
use tracing::{debug, warn};

/// Explicit model availability, owned and injected rather than held as
/// a nullable global
#[derive(Debug, Clone)]
pub enum ModelState {
    /// Artifact loaded, prediction enabled
    Ready(ModelArtifact),
    /// Artifact never loaded; every prediction request reports failure
    Unavailable,
}

/// Request-facing prediction entry point
#[derive(Debug, Clone)]
pub struct Predictor {
    state: ModelState,
}

impl Predictor {
    /// Wrap an already-decided model state
    pub fn new(state: ModelState) -> Self {
        Self { state }
    }

    /// Load the artifact once at process start. Any load failure
    /// leaves the predictor permanently unavailable.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match ModelArtifact::load(path) {
            Ok(artifact) => Self::new(ModelState::Ready(artifact)),
            Err(err) => {
                warn!("Model not loaded, predictions disabled: {err}");
                Self::new(ModelState::Unavailable)
            }
        }
    }

    /// True when the artifact loaded and predictions are enabled
    pub fn available(&self) -> bool {
        matches!(self.state, ModelState::Ready(_))
    }

    /// The loaded artifact's feature schema, if any
    pub fn schema(&self) -> Option<&FeatureSchema> {
        match &self.state {
            ModelState::Ready(artifact) => Some(artifact.schema()),
            ModelState::Unavailable => None,
        }
    }

    /// Run one prediction request end to end: build the feature
    /// vector, run inference, clamp negative forecasts to zero.
    pub fn predict(&self, input: &PredictionInput) -> Result<f64, InferenceError> {
        let ModelState::Ready(artifact) = &self.state else {
            return Err(InferenceError::ModelUnavailable);
        };

        let vector = build_feature_vector(input, artifact.schema());
        let raw = artifact.predict(&vector);
        if !raw.is_finite() {
            return Err(InferenceError::PredictionFailed(format!(
                "non-finite model output: {raw}"
            )));
        }

        let forecast = raw.max(0.0);
        debug!("Forecast {forecast:.2} from {} features", vector.len());
        Ok(forecast)
    }
}

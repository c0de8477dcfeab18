//! Trained Model Artifact

use crate::InferenceError;
use feature_builder::FeatureSchema;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// A trained regression artifact: the ordered feature schema recorded
/// at training time plus the fitted linear coefficients.
///
/// The artifact is trusted as given; whether coefficients and schema
/// agree internally is not validated here.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    features: FeatureSchema,
    intercept: f64,
    coefficients: Vec<f64>,
}

impl ModelArtifact {
    /// Read and decode the JSON artifact file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InferenceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            InferenceError::ArtifactLoad(format!("{}: {e}", path.display()))
        })?;
        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| InferenceError::ArtifactLoad(e.to_string()))?;

        info!(
            "Loaded model artifact with {} features from {}",
            artifact.features.len(),
            path.display()
        );
        Ok(artifact)
    }

    /// The feature-name layout every input vector must follow
    pub fn schema(&self) -> &FeatureSchema {
        &self.features
    }

    /// Linear inference over a dense feature vector
    pub fn predict(&self, vector: &[f64]) -> f64 {
        self.intercept
            + vector
                .iter()
                .zip(&self.coefficients)
                .map(|(x, coef)| x * coef)
                .sum::<f64>()
    }
}

//! Sales Inference Engine
//!
//! Owns the trained regression artifact and runs per-request
//! predictions over feature vectors built from form input.

mod artifact;
mod predictor;

pub use artifact::ModelArtifact;
pub use predictor::{ModelState, Predictor};

use thiserror::Error;

/// Errors during model loading or inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Artifact failed to load at process start; prediction stays
    /// disabled for the process lifetime
    #[error("model unavailable, prediction disabled")]
    ModelUnavailable,

    /// Artifact file unreadable or undecodable
    #[error("failed to load model artifact: {0}")]
    ArtifactLoad(String),

    /// Generic inference failure, no partial result
    #[error("prediction failed: {0}")]
    PredictionFailed(String),
}

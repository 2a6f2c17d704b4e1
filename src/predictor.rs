//! Prediction pipeline: encode -> predict -> decode.
//!
//! Runs only on a response the validator has already accepted. Anything that
//! still goes wrong here is an internal error and propagates; the request
//! fails rather than guessing.

use crate::artifacts::{Artifacts, EncodeError};
use std::collections::HashMap;
use thiserror::Error;

/// The three body-constitution classes the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prakriti {
    Vata,
    Pitta,
    Kapha,
}

impl Prakriti {
    pub fn from_label(label: &str) -> Option<Prakriti> {
        match label {
            "Vata" => Some(Prakriti::Vata),
            "Pitta" => Some(Prakriti::Pitta),
            "Kapha" => Some(Prakriti::Kapha),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Prakriti::Vata => "Vata",
            Prakriti::Pitta => "Pitta",
            Prakriti::Kapha => "Kapha",
        }
    }
}

impl std::fmt::Display for Prakriti {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("feature '{0}' has no answer")]
    MissingFeature(String),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("classifier failed: {0}")]
    Classifier(String),

    #[error("predicted label '{0}' is not a known constitution class")]
    UnknownLabel(String),
}

/// Predict the constitution class for a fully-answered response.
///
/// Features are encoded in the order the classifier artifact fixes; the
/// predicted integer code is decoded through the label encoder and parsed
/// into the closed class set.
pub fn predict(
    artifacts: &Artifacts,
    response: &HashMap<String, String>,
) -> Result<Prakriti, PredictError> {
    let mut encoded = Vec::with_capacity(artifacts.catalog().len());

    for encoder in artifacts.catalog() {
        let answer = response
            .get(&encoder.name)
            .ok_or_else(|| PredictError::MissingFeature(encoder.name.clone()))?;
        encoded.push(encoder.encode(answer)?);
    }

    let code = artifacts
        .model
        .predict(&encoded)
        .map_err(|e| PredictError::Classifier(e.to_string()))?;

    let label = artifacts.encoders.label.decode(code)?;
    Prakriti::from_label(label).ok_or_else(|| PredictError::UnknownLabel(label.to_string()))
}

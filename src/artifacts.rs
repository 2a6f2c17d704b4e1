//! Pretrained artifacts: the classifier and the per-feature category encoders.
//!
//! Both artifacts are produced by an upstream training pipeline and are
//! opaque to this service beyond the schema deserialized here. They are
//! loaded once at startup and shared read-only for the life of the process;
//! a load failure is fatal and the server must not start.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors on the encode/decode path.
///
/// An unseen category can only reach an encoder if validation was bypassed,
/// so it is reported as an internal error rather than guessed around.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("category '{category}' is outside the trained domain of feature '{feature}'")]
    UnseenCategory { feature: String, category: String },

    #[error("code {code} is outside the trained domain of '{feature}'")]
    UnknownCode { feature: String, code: usize },
}

/// Bidirectional category-string <-> integer-code mapping for one feature.
///
/// The class list order is fixed at training time; the integer code of a
/// category is its position in that list.
#[derive(Debug, Clone, Deserialize)]
pub struct Encoder {
    pub name: String,
    pub classes: Vec<String>,
}

impl Encoder {
    pub fn encode(&self, category: &str) -> Result<usize, EncodeError> {
        self.classes
            .iter()
            .position(|c| c == category)
            .ok_or_else(|| EncodeError::UnseenCategory {
                feature: self.name.clone(),
                category: category.to_string(),
            })
    }

    pub fn decode(&self, code: usize) -> Result<&str, EncodeError> {
        self.classes
            .get(code)
            .map(String::as_str)
            .ok_or(EncodeError::UnknownCode {
                feature: self.name.clone(),
                code,
            })
    }

    pub fn contains(&self, category: &str) -> bool {
        self.classes.iter().any(|c| c == category)
    }
}

/// The encoder artifact: one encoder per input feature, in the feature order
/// the classifier was trained with, plus the encoder for the target label.
#[derive(Debug, Deserialize)]
pub struct EncoderSet {
    pub features: Vec<Encoder>,
    pub label: Encoder,
}

/// The classifier artifact: a pretrained multinomial linear model over the
/// integer-encoded feature vector. One coefficient row and one intercept per
/// class; `classes` lists the label codes the rows correspond to.
#[derive(Debug, Deserialize)]
pub struct ClassifierModel {
    pub n_features: usize,
    pub coeffs: Vec<Vec<f32>>,
    pub intercept: Vec<f32>,
    pub classes: Vec<usize>,
}

impl ClassifierModel {
    /// Score every class for a fixed-order vector of integer-encoded features
    /// and return the label code of the best one (first wins on ties).
    pub fn predict(&self, encoded: &[usize]) -> Result<usize> {
        if encoded.len() != self.n_features {
            bail!(
                "classifier expects {} features, got {}",
                self.n_features,
                encoded.len()
            );
        }

        let mut best: Option<(usize, f32)> = None;
        for (row, (coeffs, intercept)) in self
            .coeffs
            .iter()
            .zip(self.intercept.iter())
            .enumerate()
        {
            let score = encoded
                .iter()
                .zip(coeffs.iter())
                .map(|(x, w)| *x as f32 * w)
                .sum::<f32>()
                + intercept;

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((row, score)),
            }
        }

        let (row, _) = best.context("classifier artifact has no classes")?;
        Ok(self.classes[row])
    }
}

/// Immutable artifact state constructed once at startup.
#[derive(Debug)]
pub struct Artifacts {
    pub model: ClassifierModel,
    pub encoders: EncoderSet,
}

impl Artifacts {
    /// Load and cross-check both artifacts. Any failure here is fatal.
    pub fn load(model_path: impl AsRef<Path>, encoders_path: impl AsRef<Path>) -> Result<Self> {
        let model_path = model_path.as_ref();
        let encoders_path = encoders_path.as_ref();

        let model_raw = std::fs::read_to_string(model_path)
            .with_context(|| format!("Failed to read classifier artifact {}", model_path.display()))?;
        let model: ClassifierModel = serde_json::from_str(&model_raw)
            .with_context(|| format!("Corrupt classifier artifact {}", model_path.display()))?;

        let encoders_raw = std::fs::read_to_string(encoders_path)
            .with_context(|| format!("Failed to read encoder artifact {}", encoders_path.display()))?;
        let encoders: EncoderSet = serde_json::from_str(&encoders_raw)
            .with_context(|| format!("Corrupt encoder artifact {}", encoders_path.display()))?;

        let artifacts = Self { model, encoders };
        artifacts.validate()?;
        Ok(artifacts)
    }

    /// Schema cross-checks between the two blobs. The artifacts come from the
    /// same training run, so any disagreement means a corrupt or mismatched
    /// pair.
    fn validate(&self) -> Result<()> {
        let model = &self.model;
        let encoders = &self.encoders;

        if model.n_features != encoders.features.len() {
            bail!(
                "classifier expects {} features but encoder artifact defines {}",
                model.n_features,
                encoders.features.len()
            );
        }
        if model.coeffs.len() != model.classes.len() || model.intercept.len() != model.classes.len()
        {
            bail!(
                "classifier artifact is inconsistent: {} classes, {} coefficient rows, {} intercepts",
                model.classes.len(),
                model.coeffs.len(),
                model.intercept.len()
            );
        }
        if let Some(row) = model.coeffs.iter().find(|row| row.len() != model.n_features) {
            bail!(
                "classifier coefficient row has {} entries, expected {}",
                row.len(),
                model.n_features
            );
        }
        if let Some(&code) = model.classes.iter().find(|&&c| c >= encoders.label.classes.len()) {
            bail!(
                "classifier emits label code {} but '{}' only encodes {} classes",
                code,
                encoders.label.name,
                encoders.label.classes.len()
            );
        }
        if let Some(empty) = encoders.features.iter().find(|e| e.classes.is_empty()) {
            bail!("feature encoder '{}' has an empty category list", empty.name);
        }

        Ok(())
    }

    /// The feature catalog: every input feature with its permitted categories,
    /// in classifier order. The label encoder is not part of the catalog.
    pub fn catalog(&self) -> &[Encoder] {
        &self.encoders.features
    }

    pub fn feature(&self, name: &str) -> Option<&Encoder> {
        self.encoders.features.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== Test Helpers ====================

    fn test_encoder_set() -> EncoderSet {
        EncoderSet {
            features: vec![
                Encoder {
                    name: "bodyType".to_string(),
                    classes: vec!["Heavy".into(), "Medium".into(), "Thin".into()],
                },
                Encoder {
                    name: "hungerLevel".to_string(),
                    classes: vec!["Irregular".into(), "Low".into(), "Strong".into()],
                },
                Encoder {
                    name: "sleep".to_string(),
                    classes: vec!["Deep".into(), "Disturbed".into(), "Moderate".into()],
                },
            ],
            label: Encoder {
                name: "prakriti".to_string(),
                classes: vec!["Kapha".into(), "Pitta".into(), "Vata".into()],
            },
        }
    }

    fn test_model() -> ClassifierModel {
        // Kapha favors low codes, Vata high codes, Pitta the middle band
        ClassifierModel {
            n_features: 3,
            coeffs: vec![
                vec![-1.0, -1.0, -1.0],
                vec![0.0, 0.0, 0.0],
                vec![1.0, 1.0, 1.0],
            ],
            intercept: vec![3.0, 1.5, -3.0],
            classes: vec![0, 1, 2],
        }
    }

    fn write_artifacts(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
        let model_path = dir.path().join("model.json");
        let encoders_path = dir.path().join("encoders.json");

        std::fs::write(
            &model_path,
            serde_json::json!({
                "n_features": 3,
                "coeffs": [[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
                "intercept": [3.0, 1.5, -3.0],
                "classes": [0, 1, 2]
            })
            .to_string(),
        )
        .expect("write model");

        std::fs::write(
            &encoders_path,
            serde_json::json!({
                "features": [
                    {"name": "bodyType", "classes": ["Heavy", "Medium", "Thin"]},
                    {"name": "hungerLevel", "classes": ["Irregular", "Low", "Strong"]},
                    {"name": "sleep", "classes": ["Deep", "Disturbed", "Moderate"]}
                ],
                "label": {"name": "prakriti", "classes": ["Kapha", "Pitta", "Vata"]}
            })
            .to_string(),
        )
        .expect("write encoders");

        (model_path, encoders_path)
    }

    // ==================== Encoder Tests ====================

    #[test]
    fn test_encode_known_category() {
        let encoders = test_encoder_set();
        let body_type = &encoders.features[0];

        assert_eq!(body_type.encode("Heavy").unwrap(), 0);
        assert_eq!(body_type.encode("Medium").unwrap(), 1);
        assert_eq!(body_type.encode("Thin").unwrap(), 2);
    }

    #[test]
    fn test_encode_unseen_category_is_loud() {
        let encoders = test_encoder_set();
        let result = encoders.features[0].encode("Gigantic");

        let err = result.unwrap_err();
        assert!(matches!(err, EncodeError::UnseenCategory { .. }));
        assert!(err.to_string().contains("Gigantic"));
        assert!(err.to_string().contains("bodyType"));
    }

    #[test]
    fn test_decode_known_code() {
        let encoders = test_encoder_set();
        assert_eq!(encoders.label.decode(0).unwrap(), "Kapha");
        assert_eq!(encoders.label.decode(1).unwrap(), "Pitta");
        assert_eq!(encoders.label.decode(2).unwrap(), "Vata");
    }

    #[test]
    fn test_decode_out_of_range_code() {
        let encoders = test_encoder_set();
        let err = encoders.label.decode(3).unwrap_err();
        assert!(matches!(err, EncodeError::UnknownCode { code: 3, .. }));
    }

    #[test]
    fn test_encode_decode_are_inverse() {
        let encoders = test_encoder_set();
        for encoder in &encoders.features {
            for category in &encoder.classes {
                let code = encoder.encode(category).unwrap();
                assert_eq!(encoder.decode(code).unwrap(), category);
            }
        }
    }

    #[test]
    fn test_contains() {
        let encoders = test_encoder_set();
        assert!(encoders.features[0].contains("Thin"));
        assert!(!encoders.features[0].contains("thin")); // categories are case-sensitive
        assert!(!encoders.features[0].contains(""));
    }

    // ==================== Classifier Tests ====================

    #[test]
    fn test_predict_low_codes_is_kapha() {
        let model = test_model();
        assert_eq!(model.predict(&[0, 0, 0]).unwrap(), 0);
    }

    #[test]
    fn test_predict_middle_codes_is_pitta() {
        let model = test_model();
        assert_eq!(model.predict(&[1, 1, 1]).unwrap(), 1);
    }

    #[test]
    fn test_predict_high_codes_is_vata() {
        let model = test_model();
        assert_eq!(model.predict(&[2, 2, 2]).unwrap(), 2);
    }

    #[test]
    fn test_predict_tie_first_class_wins() {
        // All scores equal: zero weights, equal intercepts
        let model = ClassifierModel {
            n_features: 2,
            coeffs: vec![vec![0.0, 0.0], vec![0.0, 0.0]],
            intercept: vec![1.0, 1.0],
            classes: vec![0, 1],
        };
        assert_eq!(model.predict(&[1, 1]).unwrap(), 0);
    }

    #[test]
    fn test_predict_wrong_arity() {
        let model = test_model();
        let err = model.predict(&[0, 1]).unwrap_err();
        assert!(err.to_string().contains("expects 3 features"));
    }

    // ==================== Loader Tests ====================

    #[test]
    fn test_load_valid_artifacts() {
        let dir = TempDir::new().unwrap();
        let (model_path, encoders_path) = write_artifacts(&dir);

        let artifacts = Artifacts::load(&model_path, &encoders_path).expect("Should load");
        assert_eq!(artifacts.catalog().len(), 3);
        assert_eq!(artifacts.encoders.label.classes.len(), 3);
    }

    #[test]
    fn test_load_missing_model_is_fatal() {
        let dir = TempDir::new().unwrap();
        let (_, encoders_path) = write_artifacts(&dir);

        let result = Artifacts::load(dir.path().join("absent.json"), &encoders_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read classifier artifact"));
    }

    #[test]
    fn test_load_corrupt_encoders_is_fatal() {
        let dir = TempDir::new().unwrap();
        let (model_path, _) = write_artifacts(&dir);
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();

        let result = Artifacts::load(&model_path, &bad);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Corrupt encoder artifact"));
    }

    #[test]
    fn test_load_rejects_feature_count_mismatch() {
        let dir = TempDir::new().unwrap();
        let (model_path, encoders_path) = write_artifacts(&dir);

        // Rewrite the model to expect an extra feature
        std::fs::write(
            &model_path,
            serde_json::json!({
                "n_features": 4,
                "coeffs": [[0.0, 0.0, 0.0, 0.0]],
                "intercept": [0.0],
                "classes": [0]
            })
            .to_string(),
        )
        .unwrap();

        let result = Artifacts::load(&model_path, &encoders_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("encoder artifact defines 3"));
    }

    #[test]
    fn test_load_rejects_label_code_out_of_range() {
        let dir = TempDir::new().unwrap();
        let (model_path, encoders_path) = write_artifacts(&dir);

        std::fs::write(
            &model_path,
            serde_json::json!({
                "n_features": 3,
                "coeffs": [[0.0, 0.0, 0.0]],
                "intercept": [0.0],
                "classes": [7]
            })
            .to_string(),
        )
        .unwrap();

        let result = Artifacts::load(&model_path, &encoders_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("label code 7"));
    }

    #[test]
    fn test_catalog_excludes_label() {
        let dir = TempDir::new().unwrap();
        let (model_path, encoders_path) = write_artifacts(&dir);
        let artifacts = Artifacts::load(&model_path, &encoders_path).unwrap();

        assert!(artifacts.catalog().iter().all(|e| e.name != "prakriti"));
        assert!(artifacts.feature("prakriti").is_none());
        assert!(artifacts.feature("bodyType").is_some());
    }
}

use crate::error::ClassifyError;
use crate::models::classify_types::Prediction;
use crate::services::classifier::inference::{self, Classifier};
use crate::services::classifier::labels;
use image::DynamicImage;
use ndarray::Array4;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;

/// ONNX-backed classifier. The session is loaded once and only evaluated
/// afterwards; `predict` takes `&mut self` because the ort session API does.
pub struct OrtClassifier {
    session: Session,
}

impl OrtClassifier {
    pub fn load(model_path: &Path) -> Result<Self, ClassifyError> {
        let _ = ort::init().with_name("cast-inspect").commit();

        let session = Session::builder()
            .map_err(|e| {
                ClassifyError::Model(format!("Failed to create session builder: {}", e))
            })?
            .with_optimization_level(ort::session::builder::GraphOptimizationLevel::Level3)
            .map_err(|e| ClassifyError::Model(format!("Failed to set optimization level: {}", e)))?
            .with_intra_threads(4)
            .map_err(|e| ClassifyError::Model(format!("Failed to set intra threads: {}", e)))?
            .with_execution_providers([
                ort::execution_providers::CPU::default().build()
            ])
            .map_err(|e| {
                ClassifyError::Model(format!("Failed to register CPU execution provider: {}", e))
            })?
            .commit_from_file(model_path)
            .map_err(|e| {
                ClassifyError::Model(format!(
                    "Failed to load ONNX model {}: {}",
                    model_path.display(),
                    e
                ))
            })?;

        Ok(OrtClassifier { session })
    }
}

impl Classifier for OrtClassifier {
    fn predict(&mut self, input: Array4<f32>) -> Result<Vec<f32>, ClassifyError> {
        // Get the input name from the model (assuming single input)
        let input_name = self.session.inputs()[0].name().to_string();

        let input_tensor = Value::from_array(input).map_err(|e| {
            ClassifyError::Inference(format!("Failed to create tensor value: {}", e))
        })?;

        let outputs = self
            .session
            .run(ort::inputs![input_name.as_str() => input_tensor])
            .map_err(|e| ClassifyError::Inference(format!("Inference failed: {}", e)))?;

        let output_value = outputs
            .values()
            .next()
            .ok_or_else(|| ClassifyError::Inference("Model produced no outputs".to_string()))?;

        let (shape, data) = output_value.try_extract_tensor::<f32>().map_err(|e| {
            ClassifyError::Inference(format!("Failed to extract output tensor: {}", e))
        })?;

        // Rank-2 (1, num_labels) output: row 0 is the confidence vector.
        let row = if shape.len() == 2 {
            &data[..shape[1] as usize]
        } else {
            data
        };

        Ok(row.to_vec())
    }
}

/// Loaded model plus its label set, built once per process. Replaces any
/// reliance on module-level globals or load order.
pub struct ClassifierContext {
    classifier: OrtClassifier,
    labels: Vec<String>,
}

impl ClassifierContext {
    pub fn load(model_path: &Path, labels_path: &Path) -> Result<Self, ClassifyError> {
        let labels = labels::load_labels(labels_path)?;
        let classifier = OrtClassifier::load(model_path)?;

        log::info!(
            "loaded classifier from {} with {} labels",
            model_path.display(),
            labels.len()
        );

        Ok(ClassifierContext { classifier, labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn classify(
        &mut self,
        image: &DynamicImage,
        top_n: usize,
    ) -> Result<Vec<Prediction>, ClassifyError> {
        inference::classify(image, &mut self.classifier, &self.labels, top_n)
    }
}

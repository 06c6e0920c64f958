use crate::error::ClassifyError;
use crate::models::classify_types::Prediction;
use image::imageops::FilterType;
use image::DynamicImage;
use ndarray::Array4;

/// Input resolution the classifier was trained on.
pub const INPUT_SIZE: u32 = 300;

/// An opaque evaluation capability: a fixed-shape tensor in, one confidence
/// per known label out. Whether concurrent calls against a shared
/// implementation are safe is a property of that implementation, not of the
/// pipeline.
pub trait Classifier {
    fn predict(&mut self, input: Array4<f32>) -> Result<Vec<f32>, ClassifyError>;
}

pub fn preprocess(image: &DynamicImage) -> Result<Array4<f32>, ClassifyError> {
    // Luminance conversion first; already-grayscale input passes through.
    let gray = match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        other => other.to_luma8(),
    };

    // Triangle (bilinear) resampling, pinned so numeric output is stable
    // across runs. A 300x300 input is used as-is.
    let resized = if gray.dimensions() == (INPUT_SIZE, INPUT_SIZE) {
        gray
    } else {
        image::imageops::resize(&gray, INPUT_SIZE, INPUT_SIZE, FilterType::Triangle)
    };

    // Normalize to [0, 1] and shape into NHWC: (batch, height, width, channel).
    let data: Vec<f32> = resized
        .into_raw()
        .iter()
        .map(|&p| p as f32 / 255.0)
        .collect();

    let tensor = Array4::from_shape_vec((1, INPUT_SIZE as usize, INPUT_SIZE as usize, 1), data)
        .map_err(|e| ClassifyError::InvalidInput(format!("Failed to shape input tensor: {}", e)))?;

    Ok(tensor)
}

pub fn classify<C: Classifier>(
    image: &DynamicImage,
    classifier: &mut C,
    labels: &[String],
    top_n: usize,
) -> Result<Vec<Prediction>, ClassifyError> {
    if top_n == 0 {
        return Err(ClassifyError::InvalidInput(
            "top_n must be at least 1".to_string(),
        ));
    }

    let tensor = preprocess(image)?;
    let confidences = classifier.predict(tensor)?;

    if confidences.len() != labels.len() {
        return Err(ClassifyError::ShapeMismatch {
            expected: labels.len(),
            actual: confidences.len(),
        });
    }

    log::debug!(
        "classified image: {} scores, top_n={}",
        confidences.len(),
        top_n
    );

    Ok(rank(&confidences, labels, top_n))
}

// Descending by confidence, ascending index on ties, so the ranking is
// deterministic even when the model emits equal scores.
fn rank(confidences: &[f32], labels: &[String], top_n: usize) -> Vec<Prediction> {
    let mut indexed: Vec<(usize, f32)> = confidences.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    indexed
        .into_iter()
        .take(top_n.min(labels.len()))
        .map(|(idx, confidence)| Prediction {
            label: labels[idx].clone(),
            confidence,
        })
        .collect()
}

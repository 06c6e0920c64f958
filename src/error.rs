use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub enum ClassifyError {
    InvalidInput(String),
    ShapeMismatch { expected: usize, actual: usize },
    Inference(String),
    Model(String),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            ClassifyError::ShapeMismatch { expected, actual } => write!(
                f,
                "classifier output length {} does not match label count {}",
                actual, expected
            ),
            ClassifyError::Inference(msg) => write!(f, "{}", msg),
            ClassifyError::Model(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ClassifyError {}

impl From<image::ImageError> for ClassifyError {
    fn from(err: image::ImageError) -> Self {
        ClassifyError::InvalidInput(err.to_string())
    }
}

impl From<ndarray::ShapeError> for ClassifyError {
    fn from(err: ndarray::ShapeError) -> Self {
        ClassifyError::InvalidInput(err.to_string())
    }
}

impl From<ort::Error> for ClassifyError {
    fn from(err: ort::Error) -> Self {
        ClassifyError::Inference(err.to_string())
    }
}

impl From<std::io::Error> for ClassifyError {
    fn from(err: std::io::Error) -> Self {
        ClassifyError::Model(err.to_string())
    }
}

mod error;
mod models;
mod services;

pub use error::ClassifyError;
pub use models::classify_types::Prediction;
pub use services::classifier::inference::{classify, preprocess, Classifier, INPUT_SIZE};
pub use services::classifier::labels::{load_labels, parse_labels};
pub use services::classifier::model::{ClassifierContext, OrtClassifier};

use crate::error::ClassifyError;
use std::path::Path;

// Label files are line-oriented, one class per line in classifier output
// order: "<index> <label>". Only the position of the line matters; the index
// prefix is stripped.
pub fn parse_labels(contents: &str) -> Result<Vec<String>, ClassifyError> {
    let mut labels = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (_, name) = line.split_once(' ').ok_or_else(|| {
            ClassifyError::Model(format!(
                "Malformed label line {}: expected \"<index> <label>\", got {:?}",
                line_no + 1,
                line
            ))
        })?;
        labels.push(name.to_string());
    }

    if labels.is_empty() {
        return Err(ClassifyError::Model(
            "Label file contains no labels".to_string(),
        ));
    }

    Ok(labels)
}

pub fn load_labels(path: &Path) -> Result<Vec<String>, ClassifyError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ClassifyError::Model(format!(
            "Failed to read label file {}: {}",
            path.display(),
            e
        ))
    })?;
    parse_labels(&contents)
}

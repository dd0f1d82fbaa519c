//! Parse phase: YAML → raw workflow types.

pub mod types;

pub use types::*;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("expected a single workflow document, found more than one")]
    MultipleDocuments,
}

/// Decode a workflow document from a byte buffer.
///
/// An empty buffer, a comment-only buffer and an explicit `~` all decode to a
/// workflow with neither stage configured. Documents after the first must be
/// empty or null.
pub fn decode(input: &[u8]) -> Result<Workflow, DecodeError> {
    let mut documents = serde_yaml::Deserializer::from_slice(input);

    let Some(document) = documents.next() else {
        return Ok(Workflow::default());
    };
    let workflow = Option::<Workflow>::deserialize(document)?;

    // A trailing `---` only adds an empty document.
    for document in documents {
        if !serde_yaml::Value::deserialize(document)?.is_null() {
            return Err(DecodeError::MultipleDocuments);
        }
    }

    Ok(workflow.unwrap_or_default())
}

pub fn decode_str(input: &str) -> Result<Workflow, DecodeError> {
    decode(input.as_bytes())
}

//! Unified error type for the decode → validate pipeline.

use crate::parse::DecodeError;
use crate::validate::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Decode,
    Validate,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Decode => write!(f, "Decode"),
            Phase::Validate => write!(f, "Validate"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Validate(#[from] ValidationErrors),
}

impl WorkflowError {
    pub fn phase(&self) -> Phase {
        match self {
            WorkflowError::Decode(_) => Phase::Decode,
            WorkflowError::Validate(_) => Phase::Validate,
        }
    }

    /// Stable code: `D001` YAML error, `D002` multiple documents, `V001` step vocabulary.
    pub fn code(&self) -> &'static str {
        match self {
            WorkflowError::Decode(DecodeError::Yaml(_)) => "D001",
            WorkflowError::Decode(DecodeError::MultipleDocuments) => "D002",
            WorkflowError::Validate(_) => "V001",
        }
    }
}

//! Nested validation error tree.
//!
//! Errors are keyed by field label or sequence index and render as
//! `apply: (steps: (0: "invalid" is not a valid step type.).).`. Keys on one
//! level are ordered as strings, so index `10` sorts before index `2`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// One entry of the tree: either a leaf message or a nested level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Message(String),
    Nested(ValidationErrors),
}

impl ValidationError {
    pub fn message(message: impl Into<String>) -> Self {
        ValidationError::Message(message.into())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Message(message) => f.write_str(message),
            ValidationError::Nested(errors) => fmt::Display::fmt(errors, f),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        ValidationError::Nested(errors)
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidationError::Message(message) => serializer.serialize_str(message),
            ValidationError::Nested(errors) => errors.serialize(serializer),
        }
    }
}

/// All failures found on one level of the workflow tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, error: impl Into<ValidationError>) {
        self.0.insert(key.into(), error.into());
    }

    pub fn get(&self, key: &str) -> Option<&ValidationError> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.0.iter().map(|(key, error)| (key.as_str(), error))
    }

    /// `Ok(())` when nothing was recorded, so callers never see an empty error.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Leaf messages with their dotted path, e.g. `("apply.steps.0", "...")`.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.collect_leaves("", &mut out);
        out
    }

    fn collect_leaves(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for (key, error) in &self.0 {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match error {
                ValidationError::Message(message) => out.push((path, message.clone())),
                ValidationError::Nested(nested) => nested.collect_leaves(&path, out),
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        for (i, (key, error)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            match error {
                ValidationError::Nested(nested) => write!(f, "{key}: ({nested})")?,
                ValidationError::Message(message) => write!(f, "{key}: {message}")?,
            }
        }
        f.write_str(".")
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}

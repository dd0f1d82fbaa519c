//! Validation configuration.
//!
//! Passed explicitly to the validator; nothing here is read from process
//! state, so concurrent callers can use different settings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::parse::DecodeError;
use crate::validate::{StepRegistry, Validator};

/// Which label a field contributes to a validation error path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorTag {
    /// Document keys: `plan`, `apply`, `steps`.
    #[default]
    Yaml,
    /// Type field names: `Plan`, `Apply`, `Steps`.
    Struct,
}

impl ErrorTag {
    pub(crate) fn label(self, key: &'static str) -> String {
        match self {
            ErrorTag::Yaml => key.to_string(),
            ErrorTag::Struct => {
                let mut chars = key.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub error_tag: ErrorTag,
    /// Extension step names accepted alongside the built-in step kinds.
    pub registered_steps: BTreeSet<String>,
}

impl ValidationConfig {
    pub fn from_yaml(input: &str) -> Result<Self, DecodeError> {
        let config: Option<Self> = serde_yaml::from_str(input)?;
        Ok(config.unwrap_or_default())
    }

    pub fn with_error_tag(mut self, tag: ErrorTag) -> Self {
        self.error_tag = tag;
        self
    }

    pub fn with_registered_step(mut self, name: impl Into<String>) -> Self {
        self.registered_steps.insert(name.into());
        self
    }

    pub fn validator(&self) -> Validator<'_> {
        Validator::new(self.error_tag, self)
    }
}

impl StepRegistry for ValidationConfig {
    fn is_known_step_name(&self, name: &str) -> bool {
        self.registered_steps.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_tag_capitalizes_keys() {
        assert_eq!(ErrorTag::Struct.label("steps"), "Steps");
        assert_eq!(ErrorTag::Yaml.label("steps"), "steps");
    }

    #[test]
    fn loads_from_yaml() {
        let config = ValidationConfig::from_yaml(
            "error_tag: struct\nregistered_steps: [policy_check]\n",
        )
        .unwrap();
        assert_eq!(config.error_tag, ErrorTag::Struct);
        assert!(config.is_known_step_name("policy_check"));
    }

    #[test]
    fn unknown_config_key_is_rejected() {
        assert!(ValidationConfig::from_yaml("error_tags: yaml\n").is_err());
    }

    #[test]
    fn null_config_uses_defaults() {
        assert_eq!(ValidationConfig::from_yaml("~").unwrap(), ValidationConfig::default());
    }
}

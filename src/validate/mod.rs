//! Validation phase over the raw workflow tree.
//!
//! Never stops at the first failure: every bad step contributes an entry keyed
//! by its index, every bad stage an entry keyed by its field label.

pub mod errors;
pub mod step_rules;

pub use errors::{ValidationError, ValidationErrors};
pub use step_rules::{NoExtensions, StepKind, StepRegistry};

use crate::config::{ErrorTag, ValidationConfig};
use crate::parse::types::{Stage, Step, Workflow};

/// Validate with the default configuration: YAML labels, built-in steps only.
pub fn validate(workflow: &Workflow) -> Result<(), ValidationErrors> {
    Validator::default().workflow(workflow)
}

pub fn validate_with(
    workflow: &Workflow,
    config: &ValidationConfig,
) -> Result<(), ValidationErrors> {
    config.validator().workflow(workflow)
}

#[derive(Clone, Copy)]
pub struct Validator<'a> {
    tag: ErrorTag,
    registry: &'a dyn StepRegistry,
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Validator {
            tag: ErrorTag::default(),
            registry: &NoExtensions,
        }
    }
}

impl<'a> Validator<'a> {
    pub fn new(tag: ErrorTag, registry: &'a dyn StepRegistry) -> Self {
        Validator { tag, registry }
    }

    pub fn workflow(&self, workflow: &Workflow) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(apply) = &workflow.apply {
            if let Err(e) = self.stage(apply) {
                errors.insert(self.tag.label("apply"), e);
            }
        }
        if let Some(plan) = &workflow.plan {
            if let Err(e) = self.stage(plan) {
                errors.insert(self.tag.label("plan"), e);
            }
        }

        errors.into_result()
    }

    pub fn stage(&self, stage: &Stage) -> Result<(), ValidationErrors> {
        let Some(steps) = &stage.steps else {
            return Ok(());
        };

        let mut step_errors = ValidationErrors::new();
        for (i, step) in steps.iter().enumerate() {
            if let Err(e) = self.step(step) {
                step_errors.insert(i.to_string(), e);
            }
        }

        let mut errors = ValidationErrors::new();
        if let Err(e) = step_errors.into_result() {
            errors.insert(self.tag.label("steps"), e);
        }
        errors.into_result()
    }

    pub fn step(&self, step: &Step) -> Result<(), ValidationError> {
        step_rules::check_step_name(step.name(), self.registry).map_err(ValidationError::Message)
    }
}

impl std::fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator").field("tag", &self.tag).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(names: &[&str]) -> Stage {
        Stage {
            steps: Some(names.iter().copied().map(Step::from).collect()),
        }
    }

    #[test]
    fn every_bad_step_is_reported() {
        let workflow = Workflow {
            plan: Some(stage(&["init", "nope", "plan", "bogus"])),
            apply: None,
        };
        let errors = validate(&workflow).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "plan: (steps: (1: \"nope\" is not a valid step type; 3: \"bogus\" is not a valid step type.).)."
        );
    }

    #[test]
    fn nil_steps_are_valid() {
        let validator = Validator::default();
        assert!(validator.stage(&Stage { steps: None }).is_ok());
        assert!(validator.stage(&Stage { steps: Some(vec![]) }).is_ok());
    }

    #[test]
    fn struct_tag_changes_labels_only() {
        let workflow = Workflow {
            plan: None,
            apply: Some(stage(&["invalid"])),
        };
        let config = ValidationConfig::default().with_error_tag(ErrorTag::Struct);
        let errors = validate_with(&workflow, &config).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "Apply: (Steps: (0: \"invalid\" is not a valid step type.).)."
        );
    }
}

//! Full pipeline: decode → validate → lower.

use crate::config::ValidationConfig;
use crate::error::WorkflowError;
use crate::ir::WorkflowIR;
use crate::parse::{self, Workflow};

/// Decode and validate, returning the raw workflow for callers that only
/// want early feedback.
pub fn check(input: &[u8], config: &ValidationConfig) -> Result<Workflow, WorkflowError> {
    let workflow = parse::decode(input)?;
    tracing::debug!(
        bytes = input.len(),
        plan = workflow.plan.is_some(),
        apply = workflow.apply.is_some(),
        "Decoded workflow"
    );

    if let Err(errors) = crate::validate::validate_with(&workflow, config) {
        tracing::warn!(failures = errors.flatten().len(), "Workflow failed validation: {}", errors);
        return Err(errors.into());
    }

    Ok(workflow)
}

pub fn compile(input: &[u8], config: &ValidationConfig) -> Result<WorkflowIR, WorkflowError> {
    let workflow = check(input, config)?;
    let ir = crate::lower::lower(&workflow);
    tracing::debug!(
        plan_steps = ir.plan.as_ref().map(|s| s.steps.len()),
        apply_steps = ir.apply.as_ref().map(|s| s.steps.len()),
        "Lowered workflow"
    );
    Ok(ir)
}

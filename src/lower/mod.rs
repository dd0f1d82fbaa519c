//! Lowering phase: raw Workflow → WorkflowIR.
//!
//! Structural mapping only. Step names are not checked here; an invalid name
//! is carried into the IR unchanged, so callers validate first.

use crate::ir::types::*;
use crate::parse::types::{Stage, Step, Workflow};

pub fn lower(workflow: &Workflow) -> WorkflowIR {
    WorkflowIR {
        plan: workflow.plan.as_ref().map(lower_stage),
        apply: workflow.apply.as_ref().map(lower_stage),
    }
}

/// Absent and empty step lists both lower to an empty `steps`.
pub fn lower_stage(stage: &Stage) -> StageIR {
    StageIR {
        steps: stage
            .steps
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(lower_step)
            .collect(),
    }
}

pub fn lower_step(step: &Step) -> StepIR {
    StepIR {
        step_name: step.name().to_string(),
        extra_args: step.extra_args().map(<[String]>::to_vec),
    }
}

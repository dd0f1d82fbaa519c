//! Validated workflow types.
//!
//! Produced by the lowering pass, consumed by the execution engine. Unlike the
//! raw form, a stage always holds a concrete (possibly empty) step list.

use serde::{Deserialize, Serialize};

use crate::validate::StepKind;

// =============================================================================
// TOP-LEVEL IR
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowIR {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<StageIR>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply: Option<StageIR>,
}

impl WorkflowIR {
    /// The configured plan stage, or `init` followed by `plan`.
    pub fn plan_or_default(&self) -> StageIR {
        self.plan.clone().unwrap_or_else(StageIR::default_plan)
    }

    /// The configured apply stage, or a single `apply`.
    pub fn apply_or_default(&self) -> StageIR {
        self.apply.clone().unwrap_or_else(StageIR::default_apply)
    }
}

// =============================================================================
// STAGE
// =============================================================================

/// Steps in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageIR {
    pub steps: Vec<StepIR>,
}

impl StageIR {
    pub fn default_plan() -> Self {
        StageIR {
            steps: vec![StepIR::builtin(StepKind::Init), StepIR::builtin(StepKind::Plan)],
        }
    }

    pub fn default_apply() -> Self {
        StageIR {
            steps: vec![StepIR::builtin(StepKind::Apply)],
        }
    }
}

// =============================================================================
// STEP
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepIR {
    pub step_name: String,
    /// `None` when the step entry carried no `extra_args`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_args: Option<Vec<String>>,
}

impl StepIR {
    pub fn builtin(kind: StepKind) -> Self {
        StepIR {
            step_name: kind.as_str().to_string(),
            extra_args: None,
        }
    }

    /// The built-in kind, or `None` for a registered extension step.
    pub fn kind(&self) -> Option<StepKind> {
        StepKind::from_name(&self.step_name)
    }
}

use workflow_config::parse::*;

// =============================================================================
// Raw workflow builders
// =============================================================================

pub fn stage(steps: Vec<Step>) -> Stage {
    Stage { steps: Some(steps) }
}

pub fn apply_only(steps: Vec<Step>) -> Workflow {
    Workflow {
        plan: None,
        apply: Some(stage(steps)),
    }
}

pub fn plan_only(steps: Vec<Step>) -> Workflow {
    Workflow {
        plan: Some(stage(steps)),
        apply: None,
    }
}

// =============================================================================
// Step builders
// =============================================================================

pub fn named(name: &str) -> Step {
    Step::Name(name.into())
}

pub fn entry(key: &str) -> Step {
    Step::Entry(StepEntry {
        key: key.into(),
        extra_args: None,
    })
}

pub fn entry_with_args(key: &str, args: &[&str]) -> Step {
    Step::Entry(StepEntry {
        key: key.into(),
        extra_args: Some(args.iter().map(|a| a.to_string()).collect()),
    })
}

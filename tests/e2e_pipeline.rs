//! End-to-end pipeline test: Decode → Validate → Lower.

use workflow_config::config::ValidationConfig;
use workflow_config::error::{Phase, WorkflowError};
use workflow_config::pipeline;

#[test]
fn end_to_end_full_workflow() {
    let yaml = include_str!("fixtures/full_workflow.yaml");
    let ir = pipeline::compile(yaml.as_bytes(), &ValidationConfig::default()).unwrap();

    let plan = ir.plan.expect("plan stage");
    assert_eq!(plan.steps.len(), 3);
    assert_eq!(plan.steps[0].extra_args.as_deref(), Some(&["-upgrade".to_string()][..]));
    assert_eq!(ir.apply.expect("apply stage").steps.len(), 1);
}

#[test]
fn end_to_end_validation_failure() {
    let yaml = include_str!("fixtures/invalid_steps.yaml");
    let err = pipeline::compile(yaml.as_bytes(), &ValidationConfig::default()).unwrap_err();

    assert_eq!(err.phase(), Phase::Validate);
    assert_eq!(err.code(), "V001");
    let WorkflowError::Validate(errors) = &err else {
        panic!("expected validation errors, got {err:?}");
    };
    assert_eq!(errors.flatten().len(), 2);
    assert_eq!(err.to_string(), errors.to_string());
}

#[test]
fn end_to_end_decode_failure_stops_pipeline() {
    let yaml = include_str!("fixtures/unknown_step_key.yaml");
    let err = pipeline::check(yaml.as_bytes(), &ValidationConfig::default()).unwrap_err();
    assert_eq!(err.phase(), Phase::Decode);
    assert_eq!(err.code(), "D001");
}

#[test]
fn end_to_end_multiple_documents() {
    let err = pipeline::compile(b"plan:\n---\napply:\n", &ValidationConfig::default()).unwrap_err();
    assert_eq!(err.code(), "D002");
}

#[test]
fn end_to_end_registered_step() {
    let config = ValidationConfig::from_yaml("registered_steps: [import]\n").unwrap();
    let yaml = include_str!("fixtures/invalid_steps.yaml");
    let err = pipeline::compile(yaml.as_bytes(), &config).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @r#"plan: (steps: (1: "destroy" is not a valid step type.).)."#
    );
}

#[test]
fn end_to_end_nothing_configured() {
    let ir = pipeline::compile(b"", &ValidationConfig::default()).unwrap();
    assert_eq!(ir.plan, None);
    assert_eq!(ir.apply, None);
}

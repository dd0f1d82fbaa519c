//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::config::ValidationConfig;
use crate::error::{Phase, WorkflowError};
use crate::ir::WorkflowIR;

/// Decode + validate a workflow YAML with the default configuration.
/// Returns a JSON array of error objects, empty when the workflow is valid.
#[wasm_bindgen]
pub fn validate_workflow(yaml: &str) -> JsValue {
    let result = validate_workflow_inner(yaml);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(yaml: &str) -> Vec<ErrorDto> {
    match crate::pipeline::check(yaml.as_bytes(), &ValidationConfig::default()) {
        Ok(_) => vec![],
        Err(e) => ErrorDto::from_error(&e),
    }
}

/// Full pipeline: decode → validate → lower.
/// `config_yaml` may be empty to use the default configuration.
#[wasm_bindgen]
pub fn compile_workflow(yaml: &str, config_yaml: &str) -> JsValue {
    let result = compile_workflow_inner(yaml, config_yaml);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn compile_workflow_inner(yaml: &str, config_yaml: &str) -> CompileResult {
    let config = if config_yaml.trim().is_empty() {
        ValidationConfig::default()
    } else {
        match ValidationConfig::from_yaml(config_yaml) {
            Ok(config) => config,
            Err(e) => {
                return CompileResult::Errors {
                    errors: vec![ErrorDto {
                        code: "C001".into(),
                        phase: Phase::Decode.to_string(),
                        message: format!("Failed to parse validation config: {e}"),
                        path: None,
                    }],
                };
            }
        }
    };

    match crate::pipeline::compile(yaml.as_bytes(), &config) {
        Ok(workflow) => CompileResult::Success { workflow },
        Err(e) => CompileResult::Errors {
            errors: ErrorDto::from_error(&e),
        },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    path: Option<String>,
}

impl ErrorDto {
    /// Validation failures become one DTO per failing leaf.
    fn from_error(e: &WorkflowError) -> Vec<ErrorDto> {
        match e {
            WorkflowError::Validate(errors) => errors
                .flatten()
                .into_iter()
                .map(|(path, message)| ErrorDto {
                    code: e.code().into(),
                    phase: e.phase().to_string(),
                    message,
                    path: Some(path),
                })
                .collect(),
            WorkflowError::Decode(_) => vec![ErrorDto {
                code: e.code().into(),
                phase: e.phase().to_string(),
                message: e.to_string(),
                path: None,
            }],
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum CompileResult {
    #[serde(rename = "success")]
    Success { workflow: WorkflowIR },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}

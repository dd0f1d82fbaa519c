//! Raw workflow types: the serde target for the user-authored YAML.
//!
//! Every optional container is an `Option`, so "key absent or null" (`None`)
//! stays distinguishable from "key present with an empty value"
//! (`Some(vec![])`). Nothing here is validated; see `crate::validate`.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

// =============================================================================
// TOP-LEVEL WORKFLOW
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Workflow {
    pub plan: Option<Stage>,
    pub apply: Option<Stage>,
}

impl Workflow {
    /// True when neither stage is configured.
    pub fn is_empty(&self) -> bool {
        self.plan.is_none() && self.apply.is_none()
    }
}

// =============================================================================
// STAGE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stage {
    pub steps: Option<Vec<Step>>,
}

impl Stage {
    /// True when the `steps` key carried a sequence, even an empty one.
    pub fn is_configured(&self) -> bool {
        self.steps.is_some()
    }
}

// =============================================================================
// STEP — bare name or mapping
// =============================================================================

/// A single step entry.
///
/// ```yaml
/// steps:
///   - init                 # Step::Name
///   - key: plan            # Step::Entry
///     extra_args: [-no-color]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Name(String),
    Entry(StepEntry),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepEntry {
    pub key: String,
    pub extra_args: Option<Vec<String>>,
}

impl Step {
    pub fn name(&self) -> &str {
        match self {
            Step::Name(name) => name,
            Step::Entry(entry) => &entry.key,
        }
    }

    pub fn extra_args(&self) -> Option<&[String]> {
        match self {
            Step::Name(_) => None,
            Step::Entry(entry) => entry.extra_args.as_deref(),
        }
    }
}

impl From<&str> for Step {
    fn from(name: &str) -> Self {
        Step::Name(name.to_string())
    }
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StepVisitor)
    }
}

struct StepVisitor;

impl<'de> Visitor<'de> for StepVisitor {
    type Value = Step;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a step name string or a mapping with `key` and `extra_args`")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Step, E> {
        Ok(Step::Name(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Step, E> {
        Ok(Step::Name(v))
    }

    fn visit_map<A>(self, map: A) -> Result<Step, A::Error>
    where
        A: MapAccess<'de>,
    {
        StepEntry::deserialize(de::value::MapAccessDeserializer::new(map)).map(Step::Entry)
    }
}

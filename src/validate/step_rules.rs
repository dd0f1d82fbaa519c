//! Step-name vocabulary and the extension lookup.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Built-in step kinds accepted without registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Init,
    Plan,
    Apply,
}

impl StepKind {
    pub const ALL: [StepKind; 3] = [StepKind::Init, StepKind::Plan, StepKind::Apply];

    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Init => "init",
            StepKind::Plan => "plan",
            StepKind::Apply => "apply",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup for step names registered outside the built-in vocabulary.
pub trait StepRegistry {
    fn is_known_step_name(&self, name: &str) -> bool;
}

/// Registry that knows no extension steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExtensions;

impl StepRegistry for NoExtensions {
    fn is_known_step_name(&self, _name: &str) -> bool {
        false
    }
}

impl StepRegistry for BTreeSet<String> {
    fn is_known_step_name(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl StepRegistry for HashSet<String> {
    fn is_known_step_name(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// Check a single step name against the built-ins, then the registry.
pub fn check_step_name(name: &str, registry: &dyn StepRegistry) -> Result<(), String> {
    if StepKind::from_name(name).is_some() || registry.is_known_step_name(name) {
        return Ok(());
    }
    Err(format!("{} is not a valid step type", quote(name)))
}

/// Double-quote `value` with the escapes of Go's `%q`: `\xHH` for ASCII
/// control bytes, `\uHHHH` / `\UHHHHHHHH` for other non-printable characters.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            ' ' => out.push(' '),
            c if (c as u32) < 0x20 || c == '\u{7F}' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() || c.is_whitespace() => {
                if (c as u32) < 0x10000 {
                    out.push_str(&format!("\\u{:04x}", c as u32));
                } else {
                    out.push_str(&format!("\\U{:08x}", c as u32));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_round_trip_through_names() {
        for kind in StepKind::ALL {
            assert_eq!(StepKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(StepKind::from_name("Init"), None);
    }

    #[test]
    fn unknown_name_is_quoted_verbatim() {
        assert_eq!(
            check_step_name("invalid", &NoExtensions),
            Err("\"invalid\" is not a valid step type".to_string())
        );
        assert_eq!(
            check_step_name("say \"hi\"", &NoExtensions),
            Err(r#""say \"hi\"" is not a valid step type"#.to_string())
        );
    }

    #[test]
    fn control_characters_use_hex_escapes() {
        assert_eq!(quote("a\u{7f}b"), r#""a\x7fb""#);
        assert_eq!(quote("\0"), r#""\x00""#);
        assert_eq!(quote("tab\there\n"), r#""tab\there\n""#);
        assert_eq!(quote("\u{85}\u{2028}"), r#""\u0085\u2028""#);
        assert_eq!(quote("héllo wörld"), r#""héllo wörld""#);
        assert_eq!(
            check_step_name("\u{1b}[31m", &NoExtensions),
            Err(r#""\x1b[31m" is not a valid step type"#.to_string())
        );
    }

    #[test]
    fn registry_extends_vocabulary() {
        let registry: BTreeSet<String> = ["policy_check".to_string()].into();
        assert!(check_step_name("policy_check", &registry).is_ok());
        assert!(check_step_name("policy_check", &NoExtensions).is_err());
    }
}

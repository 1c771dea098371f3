//! Snippet model and the pure generators for names, triggers and bodies.
//!
//! A [`SnippetKind`] fixes the three axes of a template: argument count,
//! [`Target`] (function or method) and whether a return value is documented.
//! Everything the catalog stores for an entry is derived from the kind alone.
//!
//! ## Body layout
//!
//! ```text
//! def ${methodname}(self, ${arg1}: ${arg1type}) -> ${returntype}:
//! 	"""${comment}
//!
//! Args:
//! 	${arg1} (${arg1type}): ${args1comment}
//!
//! Returns:
//! 	${returntype}: ${returncomment}
//! """
//! ```
//!
//! With no arguments and no return value the docstring collapses onto the
//! opening line (`\t"""${comment}"""`).

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnippetError};

const DOCSTRING: &str = "\"\"\"";

/// Whether a snippet defines a free function or a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    Function,
    Method,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Function, Target::Method];

    /// Label used in catalog keys: "Function" or "Method".
    pub fn label(self) -> &'static str {
        match self {
            Self::Function => "Function",
            Self::Method => "Method",
        }
    }

    /// Placeholder name for the definition's identifier.
    pub fn name_placeholder(self) -> &'static str {
        match self {
            Self::Function => "functionname",
            Self::Method => "methodname",
        }
    }

    fn trigger_char(self) -> char {
        match self {
            Self::Function => 'f',
            Self::Method => 'm',
        }
    }
}

/// One point in the catalog's axis space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnippetKind {
    /// Number of documented parameters (excluding `self`).
    pub args: u32,
    pub target: Target,
    /// Document a return value.
    pub returns: bool,
}

impl SnippetKind {
    pub fn new(args: u32, target: Target, returns: bool) -> Self {
        Self {
            args,
            target,
            returns,
        }
    }

    /// Catalog key, e.g. `"Args 0 Function"` or `"Args 3 Returns Method"`.
    pub fn name(&self) -> String {
        let returns = if self.returns { " Returns " } else { " " };
        format!("Args {}{returns}{}", self.args, self.target.label())
    }

    /// Short invocation string, e.g. `"fa0"` or `"ma2r"`.
    pub fn trigger(&self) -> String {
        let ret = if self.returns { "r" } else { "" };
        format!("{}a{}{ret}", self.target.trigger_char(), self.args)
    }

    /// Parse a trigger back into its kind.
    ///
    /// Only strings that [`SnippetKind::trigger`] can produce are accepted, so
    /// `"fa01"` or `"ma2rr"` are rejected even though they look close.
    pub fn from_trigger(trigger: &str) -> Result<Self> {
        let unknown = || SnippetError::UnknownTrigger(trigger.to_string());

        let mut chars = trigger.chars();
        let target = match chars.next() {
            Some('f') => Target::Function,
            Some('m') => Target::Method,
            _ => return Err(unknown()),
        };
        if chars.next() != Some('a') {
            return Err(unknown());
        }

        let rest = chars.as_str();
        let (digits, returns) = match rest.strip_suffix('r') {
            Some(digits) => (digits, true),
            None => (rest, false),
        };
        if digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
            || (digits.len() > 1 && digits.starts_with('0'))
        {
            return Err(unknown());
        }
        let args: u32 = digits.parse().map_err(|_| unknown())?;

        Ok(Self::new(args, target, returns))
    }

    /// The template lines, in order.
    pub fn body(&self) -> Vec<String> {
        let mut lines = vec![self.signature(), self.opening_doc()];

        if self.args > 0 || self.returns {
            if self.args > 0 {
                lines.push(String::new());
                lines.push("Args:".to_string());
                lines.extend((1..=self.args).map(|i| {
                    format!("\t${{arg{i}}} (${{arg{i}type}}): ${{args{i}comment}}")
                }));
            }
            if self.returns {
                lines.push(String::new());
                lines.push("Returns:".to_string());
                lines.push("\t${returntype}: ${returncomment}".to_string());
            }
            lines.push(DOCSTRING.to_string());
        }

        lines
    }

    fn signature(&self) -> String {
        let receiver = match (self.target, self.args) {
            (Target::Function, _) => "",
            (Target::Method, 0) => "self",
            (Target::Method, _) => "self, ",
        };
        let params = (1..=self.args)
            .map(|i| format!("${{arg{i}}}: ${{arg{i}type}}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "def ${{{}}}({receiver}{params}) -> ${{returntype}}:",
            self.target.name_placeholder()
        )
    }

    fn opening_doc(&self) -> String {
        let close = if self.args == 0 && !self.returns {
            DOCSTRING
        } else {
            ""
        };
        format!("\t{DOCSTRING}${{comment}}{close}")
    }
}

/// One generated template as the editor expects it.
///
/// Fields are declared in key order so the serialized object matches a
/// sorted-keys writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    pub body: Vec<String>,
    pub description: String,
    /// Trigger string. The editor calls this field `prefix`.
    #[serde(rename = "prefix")]
    pub trigger: String,
}

impl SnippetRecord {
    /// Assemble the record for `kind` with an already rendered description.
    pub fn new(kind: &SnippetKind, description: String) -> Self {
        Self {
            body: kind.body(),
            description,
            trigger: kind.trigger(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_examples() {
        assert_eq!(SnippetKind::new(2, Target::Method, true).trigger(), "ma2r");
        assert_eq!(SnippetKind::new(0, Target::Function, false).trigger(), "fa0");
        assert_eq!(SnippetKind::new(12, Target::Function, true).trigger(), "fa12r");
    }

    #[test]
    fn test_name_examples() {
        assert_eq!(
            SnippetKind::new(0, Target::Function, false).name(),
            "Args 0 Function"
        );
        assert_eq!(
            SnippetKind::new(3, Target::Method, true).name(),
            "Args 3 Returns Method"
        );
    }

    #[test]
    fn test_from_trigger_roundtrip() {
        for args in [0, 1, 9, 10, 250] {
            for target in Target::ALL {
                for returns in [false, true] {
                    let kind = SnippetKind::new(args, target, returns);
                    assert_eq!(SnippetKind::from_trigger(&kind.trigger()).unwrap(), kind);
                }
            }
        }
    }

    #[test]
    fn test_from_trigger_rejects_malformed() {
        for bad in ["", "f", "fa", "far", "xa1", "fb1", "fa01", "ma2rr", "fa-1", "fa1x", "Fa1"] {
            let err = SnippetKind::from_trigger(bad).unwrap_err();
            assert!(matches!(err, SnippetError::UnknownTrigger(t) if t == bad));
        }
        assert!(SnippetKind::from_trigger("fa99999999999").is_err());
    }

    #[test]
    fn test_zero_args_no_return_self_closes() {
        let body = SnippetKind::new(0, Target::Function, false).body();
        assert_eq!(
            body,
            vec![
                "def ${functionname}() -> ${returntype}:",
                "\t\"\"\"${comment}\"\"\"",
            ]
        );
    }

    #[test]
    fn test_zero_args_method_has_bare_self() {
        let body = SnippetKind::new(0, Target::Method, false).body();
        assert_eq!(body[0], "def ${methodname}(self) -> ${returntype}:");
    }

    #[test]
    fn test_zero_args_with_return() {
        let body = SnippetKind::new(0, Target::Function, true).body();
        assert_eq!(
            body,
            vec![
                "def ${functionname}() -> ${returntype}:",
                "\t\"\"\"${comment}",
                "",
                "Returns:",
                "\t${returntype}: ${returncomment}",
                "\"\"\"",
            ]
        );
    }

    #[test]
    fn test_two_arg_method_without_return() {
        let body = SnippetKind::new(2, Target::Method, false).body();
        assert_eq!(
            body,
            vec![
                "def ${methodname}(self, ${arg1}: ${arg1type}, ${arg2}: ${arg2type}) -> ${returntype}:",
                "\t\"\"\"${comment}",
                "",
                "Args:",
                "\t${arg1} (${arg1type}): ${args1comment}",
                "\t${arg2} (${arg2type}): ${args2comment}",
                "\"\"\"",
            ]
        );
    }

    #[test]
    fn test_two_arg_function_with_return() {
        let body = SnippetKind::new(2, Target::Function, true).body();
        assert_eq!(body.len(), 10);
        assert_eq!(
            body[0],
            "def ${functionname}(${arg1}: ${arg1type}, ${arg2}: ${arg2type}) -> ${returntype}:"
        );
        assert_eq!(&body[6..], ["", "Returns:", "\t${returntype}: ${returncomment}", "\"\"\""]);
    }

    #[test]
    fn test_line_counts() {
        for target in Target::ALL {
            assert_eq!(SnippetKind::new(0, target, false).body().len(), 2);
            assert_eq!(SnippetKind::new(0, target, true).body().len(), 6);
            for n in 1..6u32 {
                let n_lines = n as usize;
                assert_eq!(SnippetKind::new(n, target, false).body().len(), n_lines + 5);
                assert_eq!(SnippetKind::new(n, target, true).body().len(), n_lines + 8);
            }
        }
    }

    #[test]
    fn test_signature_parameter_pattern() {
        let n = 4;
        let sig = &SnippetKind::new(n, Target::Function, false).body()[0];
        for i in 1..=n {
            let param = format!("${{arg{i}}}: ${{arg{i}type}}");
            assert_eq!(sig.matches(&param).count(), 1, "{param} in {sig}");
        }
        assert_eq!(sig.matches(", ").count(), (n - 1) as usize);

        let method_sig = &SnippetKind::new(n, Target::Method, false).body()[0];
        assert!(method_sig.starts_with("def ${methodname}(self, ${arg1}: ${arg1type}, "));
    }

    #[test]
    fn test_record_serializes_with_prefix_field() {
        let record = SnippetRecord::new(&SnippetKind::new(1, Target::Method, true), "d".into());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["prefix"], "ma1r");
        assert_eq!(value["description"], "d");
        assert!(value.get("trigger").is_none());
        assert_eq!(value["body"].as_array().unwrap().len(), 9);
    }
}

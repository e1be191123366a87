//! Rule enforcing lower camel case variable names.
//!
//! # Rationale
//!
//! Local variables should read as `lowerCamelCase`. Two carve-outs apply:
//! the PHP superglobals keep their canonical uppercase names, and static
//! property references (`MyClass::$variable`) are skipped because their
//! declaration may be outside the author's control.
//!
//! # Configuration
//!
//! None. The reserved superglobal set is fixed.

use phlint_core::nav;
use phlint_core::{
    Diagnostic, FileContext, Location, Rule, RuleConfig, Severity, TokenKind, TokenStream,
};

/// Rule name for variable-naming.
pub const NAME: &str = "variable-naming";

/// Violation code: variable name is not in camel caps format.
pub const CODE_NOT_CAMEL_CAPS: &str = "NotCamelCaps";

/// PHP reserved variables, matched against the bare name after the `$`
/// sigil is stripped. Fixed set, not configurable.
const PHP_RESERVED_VARS: &[&str] = &[
    "_SERVER", "_GET", "_POST", "_REQUEST", "_SESSION", "_ENV", "_COOKIE", "_FILES", "GLOBALS",
];

/// Flags variable references whose name is not valid lower camel case.
///
/// Member-variable declarations and variables embedded in string
/// interpolation are the host's concern: it must not dispatch those token
/// positions to this rule.
#[derive(Debug, Clone)]
pub struct VariableNaming {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for VariableNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableNaming {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for VariableNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Requires lower camel case variable names"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn triggers(&self) -> &'static [TokenKind] {
        &[TokenKind::Variable]
    }

    fn check(
        &self,
        ctx: &FileContext,
        stream: &TokenStream,
        pos: usize,
        _config: &RuleConfig,
    ) -> Vec<Diagnostic> {
        let name = stream[pos].text.trim_start_matches('$');

        if PHP_RESERVED_VARS.contains(&name) {
            return Vec::new(); // skip PHP reserved vars
        }

        // skip MyClass::$variable, there might be no control over the declaration
        if let Some(previous) = nav::find_previous_non_whitespace(stream, pos) {
            if stream[previous].kind == TokenKind::DoubleColon {
                return Vec::new();
            }
        }

        if is_camel_caps(name) {
            return Vec::new();
        }

        vec![Diagnostic::new(
            CODE_NOT_CAMEL_CAPS,
            NAME,
            self.severity,
            Location::new(ctx.path, stream[pos].line),
            format!("Variable \"{name}\" is not in valid camel caps format"),
        )]
    }
}

/// Non-strict lower camel caps: first character a lowercase ASCII letter,
/// remainder ASCII alphanumeric. Underscores are rejected; consecutive
/// uppercase runs (acronyms) are accepted.
fn is_camel_caps(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_lowercase() && chars.all(|c| c.is_ascii_alphanumeric())
}

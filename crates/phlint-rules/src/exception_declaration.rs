//! Rule enforcing exception declaration conventions.
//!
//! # Rationale
//!
//! Exception types should be recognizable from their name, live together in
//! a dedicated directory, and be chainable so a wrapped cause is never lost.
//! A declaration is treated as an exception type when it extends a type
//! whose name ends with `Exception`; this is a deliberate lexical
//! approximation, no symbol resolution is performed.
//!
//! # Configuration
//!
//! - `exceptions_directory_name`: expected parent directory basename for
//!   exception files (default: `"exceptions"`)

use phlint_core::nav;
use phlint_core::{
    Diagnostic, FileContext, Location, Rule, RuleConfig, Severity, TokenKind, TokenStream,
};

/// Rule name for exception-declaration.
pub const NAME: &str = "exception-declaration";

/// Violation code: declaration name does not end with `Exception`.
pub const CODE_NOT_ENDING_WITH_EXCEPTION: &str = "NotEndingWithException";

/// Violation code: exception constructor cannot chain a cause.
pub const CODE_NOT_CHAINABLE: &str = "NotChainable";

/// Violation code: exception file placed outside the exceptions directory.
pub const CODE_INCORRECT_EXCEPTION_DIRECTORY: &str = "IncorrectExceptionDirectory";

/// Configuration key for the expected directory basename.
const DIRECTORY_OPTION: &str = "exceptions_directory_name";

/// Default expected directory basename.
const DEFAULT_DIRECTORY: &str = "exceptions";

/// The suffix that classifies a type name as an exception.
const EXCEPTION_SUFFIX: &str = "Exception";

/// The fully qualified throwable root type.
const THROWABLE: &str = "\\Throwable";

/// Checks naming, directory placement and constructor chainability of
/// exception class and interface declarations.
#[derive(Debug, Clone)]
pub struct ExceptionDeclaration {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ExceptionDeclaration {
    fn default() -> Self {
        Self::new()
    }
}

impl ExceptionDeclaration {
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

    fn check_exception_name(
        &self,
        ctx: &FileContext,
        stream: &TokenStream,
        decl_pos: usize,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let Some(name) = nav::declaration_name(stream, decl_pos) else {
            return;
        };
        if !nav::ends_with(name, EXCEPTION_SUFFIX) {
            diagnostics.push(Diagnostic::new(
                CODE_NOT_ENDING_WITH_EXCEPTION,
                NAME,
                self.severity,
                Location::new(ctx.path, stream[decl_pos].line),
                format!("Exception class name \"{name}\" must end with \"Exception\"."),
            ));
        }
    }

    fn check_exception_directory(
        &self,
        ctx: &FileContext,
        stream: &TokenStream,
        decl_pos: usize,
        config: &RuleConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let expected = config.get_str(DIRECTORY_OPTION, DEFAULT_DIRECTORY);
        let actual = ctx.parent_directory_name();
        if actual != expected {
            diagnostics.push(Diagnostic::new(
                CODE_INCORRECT_EXCEPTION_DIRECTORY,
                NAME,
                self.severity,
                Location::new(ctx.path, stream[decl_pos].line),
                format!(
                    "Exception file \"{}\" must be placed in \"{expected}\" directory (is in \"{actual}\").",
                    ctx.file_name(),
                ),
            ));
        }
    }

    fn check_chainability(
        &self,
        ctx: &FileContext,
        stream: &TokenStream,
        decl_pos: usize,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        // No explicit constructor means the inherited one stays chainable.
        let Some(ctor_pos) = nav::find_constructor(stream, decl_pos) else {
            return;
        };

        let location = Location::new(ctx.path, stream[ctor_pos].line);
        let types = nav::parameter_types(stream, ctor_pos);

        let Some(last) = types.last() else {
            diagnostics.push(Diagnostic::new(
                CODE_NOT_CHAINABLE,
                NAME,
                self.severity,
                location,
                "Exception is not chainable. It must have optional \\Throwable as last constructor argument.",
            ));
            return;
        };

        let Some(type_name) = last else {
            diagnostics.push(Diagnostic::new(
                CODE_NOT_CHAINABLE,
                NAME,
                self.severity,
                location,
                "Exception is not chainable. It must have optional \\Throwable as last constructor argument and has none.",
            ));
            return;
        };

        // Type-only check: a default value is never verified, and any type
        // name ending in "Exception" is accepted without proving it is
        // actually throwable.
        if type_name != THROWABLE && !nav::ends_with(type_name, EXCEPTION_SUFFIX) {
            diagnostics.push(Diagnostic::new(
                CODE_NOT_CHAINABLE,
                NAME,
                self.severity,
                location,
                format!(
                    "Exception is not chainable. It must have optional \\Throwable as last constructor argument and has \"{type_name}\"."
                ),
            ));
        }
    }
}

impl Rule for ExceptionDeclaration {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Checks naming, placement and chainability of exception declarations"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn triggers(&self) -> &'static [TokenKind] {
        &[TokenKind::Class, TokenKind::Interface]
    }

    fn check(
        &self,
        ctx: &FileContext,
        stream: &TokenStream,
        pos: usize,
        config: &RuleConfig,
    ) -> Vec<Diagnostic> {
        let Some(supertype) = nav::declared_supertype(stream, pos) else {
            return Vec::new(); // does not extend anything
        };

        if !nav::ends_with(&supertype, EXCEPTION_SUFFIX) {
            return Vec::new(); // does not extend an exception type
        }

        tracing::debug!(supertype = %supertype, "declaration treated as exception type");

        let mut diagnostics = Vec::new();
        self.check_exception_name(ctx, stream, pos, &mut diagnostics);
        self.check_exception_directory(ctx, stream, pos, config, &mut diagnostics);
        self.check_chainability(ctx, stream, pos, &mut diagnostics);
        diagnostics
    }
}

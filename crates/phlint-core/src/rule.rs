//! Rule trait for defining token-stream style rules.

use crate::config::RuleConfig;
use crate::context::FileContext;
use crate::token::{TokenKind, TokenStream};
use crate::types::{Diagnostic, Severity};

/// A stateless style rule over a tokenized source file.
///
/// A rule declares the token kinds it wants to be invoked on via
/// [`Rule::triggers`] and is then called once per matching token, in file
/// order. Rules share no mutable state across invocations; everything they
/// need is the borrowed stream, the file context and their own read-only
/// configuration slice.
///
/// # Example
///
/// ```ignore
/// use phlint_core::{Diagnostic, FileContext, Location, Rule, RuleConfig, Severity};
/// use phlint_core::{TokenKind, TokenStream};
///
/// pub struct NoLongLines;
///
/// impl Rule for NoLongLines {
///     fn name(&self) -> &'static str { "no-long-lines" }
///     fn triggers(&self) -> &'static [TokenKind] { &[TokenKind::Whitespace] }
///
///     fn check(
///         &self,
///         ctx: &FileContext,
///         stream: &TokenStream,
///         pos: usize,
///         _config: &RuleConfig,
///     ) -> Vec<Diagnostic> {
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "exception-declaration").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the token kinds this rule wants to be invoked on.
    fn triggers(&self) -> &'static [TokenKind];

    /// Checks a single trigger position and returns any diagnostics found.
    ///
    /// Never fails for well-formed input: malformed token shapes degrade to
    /// an empty result.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `stream` - The tokenized file, borrowed from the host
    /// * `pos` - Position of the trigger token
    /// * `config` - This rule's configuration slice
    fn check(
        &self,
        ctx: &FileContext,
        stream: &TokenStream,
        pos: usize,
        config: &RuleConfig,
    ) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn description(&self) -> &'static str {
            "A test rule"
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
            vec![Diagnostic::new(
                "TestCode",
                self.name(),
                self.default_severity(),
                Location::new(ctx.path, stream[pos].line),
                "Test diagnostic",
            )]
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert_eq!(rule.triggers(), &[TokenKind::Variable]);
    }
}

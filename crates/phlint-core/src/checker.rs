//! Checker orchestrating rule dispatch over token streams.

use crate::config::Config;
use crate::context::FileContext;
use crate::rule::RuleBox;
use crate::token::{TokenKind, TokenStream};
use crate::types::{CheckResult, Diagnostic};

use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during checking.
///
/// Rules themselves never fail; the only failure at this layer is the
/// host-programming-error case of dispatching a token kind no rule asked
/// for, which is distinct from the diagnostic taxonomy.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A single token was dispatched for a kind no registered rule listens to.
    #[error("no rule registered for trigger kind {kind:?} at position {position}")]
    UnregisteredTrigger {
        /// Kind of the dispatched token.
        kind: TokenKind,
        /// Stream position of the dispatched token.
        position: usize,
    },

    /// Dispatch position past the end of the stream.
    #[error("token position {position} out of bounds for stream of length {len}")]
    PositionOutOfBounds {
        /// Requested position.
        position: usize,
        /// Stream length.
        len: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring a [`Checker`].
#[derive(Default)]
pub struct CheckerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl CheckerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the checker.
    #[must_use]
    pub fn rule<R: crate::Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the checker.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the checker, registering each rule under its trigger kinds.
    #[must_use]
    pub fn build(self) -> Checker {
        let mut registry: HashMap<TokenKind, Vec<usize>> = HashMap::new();
        for (index, rule) in self.rules.iter().enumerate() {
            for &kind in rule.triggers() {
                registry.entry(kind).or_default().push(index);
            }
        }

        Checker {
            rules: self.rules,
            registry,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Dispatches registered rules over token streams and collects diagnostics.
///
/// Use [`Checker::builder()`] to construct an instance. The checker holds
/// no per-file state: each [`Checker::check_stream`] call is independent,
/// so a host processing files concurrently can share one checker across
/// threads.
pub struct Checker {
    rules: Vec<RuleBox>,
    registry: HashMap<TokenKind, Vec<usize>>,
    config: Config,
}

impl Checker {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns true when at least one rule listens to `kind`.
    #[must_use]
    pub fn is_registered(&self, kind: TokenKind) -> bool {
        self.registry.contains_key(&kind)
    }

    /// Checks one tokenized file: walks the stream in order, invokes every
    /// interested rule per trigger token, and returns the collected
    /// diagnostics sorted by line. The sort is stable, so emission order is
    /// preserved within a line.
    #[must_use]
    pub fn check_stream(&self, ctx: &FileContext, stream: &TokenStream) -> CheckResult {
        debug!(path = ctx.path, tokens = stream.len(), "checking file");

        let mut result = CheckResult::new();
        for (pos, token) in stream.iter() {
            if let Some(indices) = self.registry.get(&token.kind) {
                result
                    .diagnostics
                    .extend(self.dispatch(indices, ctx, stream, pos));
            }
        }

        result
            .diagnostics
            .sort_by_key(|d| (d.location.file.clone(), d.location.line));
        result.files_checked = 1;

        debug!(
            path = ctx.path,
            diagnostics = result.diagnostics.len(),
            "file checked"
        );
        result
    }

    /// Checks a single trigger position.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::UnregisteredTrigger`] when the token kind at
    /// `pos` has no interested rule, and [`CheckError::PositionOutOfBounds`]
    /// when `pos` is past the end of the stream. Both are precondition
    /// violations in the host, not style findings.
    pub fn check_token(
        &self,
        ctx: &FileContext,
        stream: &TokenStream,
        pos: usize,
    ) -> Result<Vec<Diagnostic>, CheckError> {
        let kind = stream
            .kind_at(pos)
            .ok_or(CheckError::PositionOutOfBounds {
                position: pos,
                len: stream.len(),
            })?;

        let indices = self
            .registry
            .get(&kind)
            .ok_or(CheckError::UnregisteredTrigger {
                kind,
                position: pos,
            })?;

        Ok(self.dispatch(indices, ctx, stream, pos))
    }

    /// Invokes the given rules for one trigger token, honoring per-rule
    /// enablement and severity overrides from the configuration.
    fn dispatch(
        &self,
        indices: &[usize],
        ctx: &FileContext,
        stream: &TokenStream,
        pos: usize,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for &index in indices {
            let rule = &self.rules[index];
            if !self.config.is_rule_enabled(rule.name()) {
                debug!(rule = rule.name(), "skipping disabled rule");
                continue;
            }

            let rule_config = self.config.rule_config(rule.name());
            let mut found = rule.check(ctx, stream, pos, &rule_config);

            if let Some(severity) = self.config.rule_severity(rule.name()) {
                for d in &mut found {
                    d.severity = severity;
                }
            }
            diagnostics.extend(found);
        }
        diagnostics
    }
}

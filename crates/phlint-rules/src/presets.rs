//! Rule presets for common configurations.

use crate::{ExceptionDeclaration, VariableNaming};
use phlint_core::RuleBox;

/// Preset configurations for phlint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// Minimal rules for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `exception-declaration` - naming, placement and chainability of exceptions
/// - `variable-naming` - lower camel case variable names
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ExceptionDeclaration::new()),
        Box::new(VariableNaming::new()),
    ]
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes `exception-declaration`.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![Box::new(ExceptionDeclaration::new())]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    recommended_rules()
}

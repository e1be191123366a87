//! # phlint-rules
//!
//! Built-in style rules for phlint.
//!
//! ## Available Rules
//!
//! | Name | Codes | Description |
//! |------|-------|-------------|
//! | `exception-declaration` | `NotEndingWithException`, `IncorrectExceptionDirectory`, `NotChainable` | Naming, placement and chainability of exception declarations |
//! | `variable-naming` | `NotCamelCaps` | Lower camel case variable names |
//!
//! ## Usage
//!
//! ```ignore
//! use phlint_core::Checker;
//! use phlint_rules::{ExceptionDeclaration, VariableNaming};
//!
//! let checker = Checker::builder()
//!     .rule(ExceptionDeclaration::new())
//!     .rule(VariableNaming::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod exception_declaration;
mod presets;
mod variable_naming;

pub use exception_declaration::{
    ExceptionDeclaration, CODE_INCORRECT_EXCEPTION_DIRECTORY, CODE_NOT_CHAINABLE,
    CODE_NOT_ENDING_WITH_EXCEPTION,
};
pub use presets::{all_rules, minimal_rules, recommended_rules, Preset};
pub use variable_naming::{VariableNaming, CODE_NOT_CAMEL_CAPS};

/// Re-export core types for convenience.
pub use phlint_core::{Diagnostic, Rule, Severity};

//! # phlint-core
//!
//! Core framework for token-stream style checking.
//!
//! This crate provides the foundational traits and types for building
//! style checkers over tokenized PHP-like sources. It includes:
//!
//! - [`Rule`] trait for per-trigger token rules
//! - [`Checker`] for registering rules and dispatching token streams
//! - [`Diagnostic`] for representing style findings
//! - [`nav`] helpers for scope-bounded token navigation
//!
//! The tokenizer is deliberately out of scope: the host produces a
//! [`TokenStream`] and feeds it to the checker.
//!
//! ## Example
//!
//! ```ignore
//! use phlint_core::{Checker, Config, FileContext};
//!
//! let checker = Checker::builder()
//!     .rule(MyRule::new())
//!     .config(Config::default())
//!     .build();
//!
//! let result = checker.check_stream(&FileContext::new(path), &stream);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod config;
mod context;
mod rule;
mod token;
mod types;

/// Token navigation helpers for rule implementations.
pub mod nav;

pub use checker::{CheckError, Checker, CheckerBuilder};
pub use config::{Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use rule::{Rule, RuleBox};
pub use token::{Token, TokenKind, TokenStream};
pub use types::{CheckResult, Diagnostic, Location, Severity, StyleDiagnostic};

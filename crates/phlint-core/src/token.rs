//! Token model for one tokenized source file.
//!
//! The tokenizer itself lives in the host; this crate only consumes the
//! stream it produces. A [`TokenStream`] is immutable once built and rules
//! hold only a borrowed view of it.

use serde::{Deserialize, Serialize};

/// Structural classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// The `class` keyword.
    Class,
    /// The `interface` keyword.
    Interface,
    /// The `function` keyword.
    Function,
    /// The `extends` keyword.
    Extends,
    /// A bare identifier (class name, function name, type segment).
    Identifier,
    /// A variable reference, text includes the leading `$` sigil.
    Variable,
    /// The `::` static member access operator.
    DoubleColon,
    /// The `\` namespace separator.
    NsSeparator,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// `=`
    Equals,
    /// Whitespace run, including newlines.
    Whitespace,
    /// Anything the checker has no interest in.
    Other,
}

/// A single token: classification, 1-based source line and raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Structural classification.
    pub kind: TokenKind,
    /// 1-based source line the token starts on.
    pub line: usize,
    /// Raw source text of the token.
    pub text: String,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, line: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            text: text.into(),
        }
    }
}

/// An ordered, indexable sequence of tokens for one source file.
///
/// Owned by the host; rules receive `&TokenStream` and never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Wraps a token vector produced by the host's tokenizer.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Returns the token at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&Token> {
        self.tokens.get(pos)
    }

    /// Returns the token kind at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn kind_at(&self, pos: usize) -> Option<TokenKind> {
        self.tokens.get(pos).map(|t| t.kind)
    }

    /// Number of tokens in the stream.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true when the stream holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over `(position, token)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Token)> {
        self.tokens.iter().enumerate()
    }
}

impl std::ops::Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, pos: usize) -> &Token {
        &self.tokens[pos]
    }
}

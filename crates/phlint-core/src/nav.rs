//! Token navigation helpers for rule implementations.
//!
//! All functions are pure, read-only scans over a borrowed [`TokenStream`].
//! Malformed shapes (missing body, unbalanced braces, truncated parameter
//! lists) yield `None` or an empty result rather than an error: a style
//! checker must never abort a run over one odd file.

use crate::token::{TokenKind, TokenStream};

/// Reserved name of a class constructor method.
pub const CONSTRUCTOR_NAME: &str = "__construct";

/// Finds the next token of `kind` at or after `from`.
#[must_use]
pub fn find_next(stream: &TokenStream, kind: TokenKind, from: usize) -> Option<usize> {
    (from..stream.len()).find(|&pos| stream[pos].kind == kind)
}

/// Finds the nearest non-whitespace token strictly before `before`.
#[must_use]
pub fn find_previous_non_whitespace(stream: &TokenStream, before: usize) -> Option<usize> {
    (0..before.min(stream.len()))
        .rev()
        .find(|&pos| stream[pos].kind != TokenKind::Whitespace)
}

/// Case-sensitive exact tail match.
#[must_use]
pub fn ends_with(text: &str, suffix: &str) -> bool {
    text.ends_with(suffix)
}

/// Name of a class/interface/function declaration: the first identifier
/// after the keyword token at `decl_pos`.
#[must_use]
pub fn declaration_name(stream: &TokenStream, decl_pos: usize) -> Option<&str> {
    let pos = find_next(stream, TokenKind::Identifier, decl_pos + 1)?;
    Some(stream[pos].text.as_str())
}

/// Name of the single extended type, or `None` when the declaration does
/// not extend anything.
///
/// The scan is bounded by the declaration body's opening brace, and also
/// stops at any brace or later declaration keyword, so a bodyless
/// (malformed) declaration never picks up an `extends` belonging to the
/// next declaration in the file. Namespace-qualified names are reassembled
/// from their separator and identifier tokens (e.g.
/// `\Consistence\FooException`).
#[must_use]
pub fn declared_supertype(stream: &TokenStream, decl_pos: usize) -> Option<String> {
    let mut pos = decl_pos + 1;
    while pos < stream.len() {
        match stream[pos].kind {
            TokenKind::OpenBrace
            | TokenKind::CloseBrace
            | TokenKind::Class
            | TokenKind::Interface => return None,
            TokenKind::Extends => return collect_type_name(stream, pos + 1),
            _ => pos += 1,
        }
    }
    None
}

/// Collects a contiguous `\`-qualified type name starting at or after `from`,
/// skipping leading whitespace. Returns `None` when no name tokens follow.
fn collect_type_name(stream: &TokenStream, from: usize) -> Option<String> {
    let mut pos = from;
    while pos < stream.len() && stream[pos].kind == TokenKind::Whitespace {
        pos += 1;
    }

    let mut name = String::new();
    while pos < stream.len() {
        match stream[pos].kind {
            TokenKind::Identifier | TokenKind::NsSeparator => {
                name.push_str(&stream[pos].text);
                pos += 1;
            }
            _ => break,
        }
    }

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Positions of the opening and closing brace of the declaration body.
///
/// Returns `None` when the declaration has no body or the braces never
/// balance (truncated stream). The search for the opening brace stops at
/// any later declaration keyword so a bodyless declaration never adopts
/// the body of the next declaration in the file.
#[must_use]
pub fn body_bounds(stream: &TokenStream, decl_pos: usize) -> Option<(usize, usize)> {
    let mut pos = decl_pos + 1;
    let open = loop {
        match stream.kind_at(pos)? {
            TokenKind::OpenBrace => break pos,
            TokenKind::Class | TokenKind::Interface => return None,
            _ => pos += 1,
        }
    };
    let mut depth = 1usize;
    let mut pos = open + 1;
    while pos < stream.len() {
        match stream[pos].kind {
            TokenKind::OpenBrace => depth += 1,
            TokenKind::CloseBrace => {
                depth -= 1;
                if depth == 0 {
                    return Some((open, pos));
                }
            }
            _ => {}
        }
        pos += 1;
    }
    None
}

/// Finds the explicit constructor of the declaration at `decl_pos`.
///
/// Scans `function` tokens inside the declaration body, in order, and
/// returns the first one named `__construct`. The scan never runs past the
/// declaration's closing brace, so a constructor of a later declaration in
/// the same file is not mistaken for this one. Anonymous functions are
/// skipped (no name identifier before their parameter list).
#[must_use]
pub fn find_constructor(stream: &TokenStream, decl_pos: usize) -> Option<usize> {
    let (open, close) = body_bounds(stream, decl_pos)?;
    let mut scan_from = open + 1;
    while let Some(fn_pos) = find_next(stream, TokenKind::Function, scan_from) {
        if fn_pos >= close {
            return None;
        }
        if function_name(stream, fn_pos) == Some(CONSTRUCTOR_NAME) {
            return Some(fn_pos);
        }
        scan_from = fn_pos + 1;
    }
    None
}

/// Declared name of the function at `fn_pos`, `None` for anonymous
/// functions.
#[must_use]
pub fn function_name(stream: &TokenStream, fn_pos: usize) -> Option<&str> {
    let pos = find_next_non_whitespace(stream, fn_pos)?;
    match stream[pos].kind {
        TokenKind::Identifier => Some(stream[pos].text.as_str()),
        _ => None,
    }
}

/// Nearest non-whitespace token strictly after `from`, or `None` at end of
/// stream.
fn find_next_non_whitespace(stream: &TokenStream, from: usize) -> Option<usize> {
    let mut pos = from + 1;
    while pos < stream.len() {
        if stream[pos].kind != TokenKind::Whitespace {
            return Some(pos);
        }
        pos += 1;
    }
    None
}

/// Ordered parameter type annotations of the function at `fn_pos`.
///
/// One entry per declared parameter, `None` for a parameter without a type
/// annotation, empty vector for an empty parameter list. Nested parentheses
/// in default values (e.g. `= array(1, 2)`) do not split parameters.
#[must_use]
pub fn parameter_types(stream: &TokenStream, fn_pos: usize) -> Vec<Option<String>> {
    let Some(open) = find_next(stream, TokenKind::OpenParen, fn_pos) else {
        return Vec::new();
    };

    let mut types = Vec::new();
    let mut segment_start = open + 1;
    let mut depth = 1usize;
    let mut pos = open + 1;

    while pos < stream.len() {
        match stream[pos].kind {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => {
                depth -= 1;
                if depth == 0 {
                    if let Some(ty) = segment_type(stream, segment_start, pos) {
                        types.push(ty);
                    }
                    break;
                }
            }
            TokenKind::Comma if depth == 1 => {
                if let Some(ty) = segment_type(stream, segment_start, pos) {
                    types.push(ty);
                }
                segment_start = pos + 1;
            }
            _ => {}
        }
        pos += 1;
    }

    types
}

/// Type annotation of one parameter segment `[start, end)`.
///
/// Returns `None` for a segment with no parameter variable at all (the
/// empty list case) and `Some(None)` for an untyped parameter.
fn segment_type(stream: &TokenStream, start: usize, end: usize) -> Option<Option<String>> {
    let variable = (start..end).find(|&pos| stream[pos].kind == TokenKind::Variable)?;

    let mut name = String::new();
    for pos in start..variable {
        match stream[pos].kind {
            TokenKind::Identifier | TokenKind::NsSeparator => name.push_str(&stream[pos].text),
            _ => {}
        }
    }

    if name.is_empty() {
        Some(None)
    } else {
        Some(Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, 1, text)
    }

    fn ws() -> Token {
        tok(TokenKind::Whitespace, " ")
    }

    /// `class FooException extends \Exception { function __construct(<params>) {} }`
    fn class_with_constructor(params: &[Token]) -> TokenStream {
        let mut tokens = vec![
            tok(TokenKind::Class, "class"),
            ws(),
            tok(TokenKind::Identifier, "FooException"),
            ws(),
            tok(TokenKind::Extends, "extends"),
            ws(),
            tok(TokenKind::NsSeparator, "\\"),
            tok(TokenKind::Identifier, "Exception"),
            ws(),
            tok(TokenKind::OpenBrace, "{"),
            ws(),
            tok(TokenKind::Function, "function"),
            ws(),
            tok(TokenKind::Identifier, "__construct"),
            tok(TokenKind::OpenParen, "("),
        ];
        tokens.extend_from_slice(params);
        tokens.extend(vec![
            tok(TokenKind::CloseParen, ")"),
            ws(),
            tok(TokenKind::OpenBrace, "{"),
            tok(TokenKind::CloseBrace, "}"),
            ws(),
            tok(TokenKind::CloseBrace, "}"),
        ]);
        TokenStream::new(tokens)
    }

    #[test]
    fn finds_next_token_of_kind() {
        let stream = class_with_constructor(&[]);
        assert_eq!(find_next(&stream, TokenKind::Class, 0), Some(0));
        assert_eq!(find_next(&stream, TokenKind::Function, 0), Some(11));
        assert_eq!(find_next(&stream, TokenKind::Function, 12), None);
    }

    #[test]
    fn reads_declaration_name_and_supertype() {
        let stream = class_with_constructor(&[]);
        assert_eq!(declaration_name(&stream, 0), Some("FooException"));
        assert_eq!(declared_supertype(&stream, 0), Some("\\Exception".to_string()));
    }

    #[test]
    fn supertype_absent_when_nothing_extended() {
        let stream = TokenStream::new(vec![
            tok(TokenKind::Class, "class"),
            ws(),
            tok(TokenKind::Identifier, "Plain"),
            ws(),
            tok(TokenKind::OpenBrace, "{"),
            tok(TokenKind::CloseBrace, "}"),
        ]);
        assert_eq!(declared_supertype(&stream, 0), None);
    }

    #[test]
    fn supertype_scan_stops_at_body_brace() {
        // `class A {}` followed by `class B extends \Exception {}`; the
        // scan for A must not reach B's extends clause.
        let stream = TokenStream::new(vec![
            tok(TokenKind::Class, "class"),
            ws(),
            tok(TokenKind::Identifier, "A"),
            ws(),
            tok(TokenKind::OpenBrace, "{"),
            tok(TokenKind::CloseBrace, "}"),
            ws(),
            tok(TokenKind::Class, "class"),
            ws(),
            tok(TokenKind::Identifier, "B"),
            ws(),
            tok(TokenKind::Extends, "extends"),
            ws(),
            tok(TokenKind::NsSeparator, "\\"),
            tok(TokenKind::Identifier, "Exception"),
            ws(),
            tok(TokenKind::OpenBrace, "{"),
            tok(TokenKind::CloseBrace, "}"),
        ]);
        assert_eq!(declared_supertype(&stream, 0), None);
        assert_eq!(declared_supertype(&stream, 7), Some("\\Exception".to_string()));
    }

    #[test]
    fn supertype_scan_stops_at_next_declaration() {
        // Malformed: `class A` with no body, then a complete exception
        // class. A must not borrow B's extends clause.
        let stream = TokenStream::new(vec![
            tok(TokenKind::Class, "class"),
            ws(),
            tok(TokenKind::Identifier, "A"),
            ws(),
            tok(TokenKind::Class, "class"),
            ws(),
            tok(TokenKind::Identifier, "BException"),
            ws(),
            tok(TokenKind::Extends, "extends"),
            ws(),
            tok(TokenKind::NsSeparator, "\\"),
            tok(TokenKind::Identifier, "Exception"),
            ws(),
            tok(TokenKind::OpenBrace, "{"),
            tok(TokenKind::CloseBrace, "}"),
        ]);
        assert_eq!(declared_supertype(&stream, 0), None);
        assert_eq!(declared_supertype(&stream, 4), Some("\\Exception".to_string()));
    }

    #[test]
    fn body_scan_stops_at_next_declaration() {
        // Malformed: bodyless `class A`, then a class with a constructor.
        // A has no body, so it has no constructor either.
        let stream = TokenStream::new(vec![
            tok(TokenKind::Class, "class"),
            ws(),
            tok(TokenKind::Identifier, "A"),
            ws(),
            tok(TokenKind::Class, "class"),
            ws(),
            tok(TokenKind::Identifier, "B"),
            ws(),
            tok(TokenKind::OpenBrace, "{"),
            tok(TokenKind::Function, "function"),
            ws(),
            tok(TokenKind::Identifier, "__construct"),
            tok(TokenKind::OpenParen, "("),
            tok(TokenKind::CloseParen, ")"),
            tok(TokenKind::OpenBrace, "{"),
            tok(TokenKind::CloseBrace, "}"),
            tok(TokenKind::CloseBrace, "}"),
        ]);
        assert_eq!(body_bounds(&stream, 0), None);
        assert_eq!(find_constructor(&stream, 0), None);
        assert_eq!(find_constructor(&stream, 4), Some(9));
    }

    #[test]
    fn finds_constructor_inside_body() {
        let stream = class_with_constructor(&[]);
        let ctor = find_constructor(&stream, 0);
        assert_eq!(ctor, Some(11));
        assert_eq!(function_name(&stream, 11), Some(CONSTRUCTOR_NAME));
    }

    #[test]
    fn constructor_scan_does_not_leave_declaration_scope() {
        // `class A {}` then a free function `__construct` lookalike.
        let stream = TokenStream::new(vec![
            tok(TokenKind::Class, "class"),
            ws(),
            tok(TokenKind::Identifier, "A"),
            ws(),
            tok(TokenKind::OpenBrace, "{"),
            tok(TokenKind::CloseBrace, "}"),
            ws(),
            tok(TokenKind::Function, "function"),
            ws(),
            tok(TokenKind::Identifier, "__construct"),
            tok(TokenKind::OpenParen, "("),
            tok(TokenKind::CloseParen, ")"),
            tok(TokenKind::OpenBrace, "{"),
            tok(TokenKind::CloseBrace, "}"),
        ]);
        assert_eq!(find_constructor(&stream, 0), None);
    }

    #[test]
    fn constructor_absent_in_bodyless_declaration() {
        let stream = TokenStream::new(vec![
            tok(TokenKind::Class, "class"),
            ws(),
            tok(TokenKind::Identifier, "A"),
        ]);
        assert_eq!(find_constructor(&stream, 0), None);
    }

    #[test]
    fn skips_non_constructor_methods() {
        let stream = TokenStream::new(vec![
            tok(TokenKind::Class, "class"),
            ws(),
            tok(TokenKind::Identifier, "A"),
            ws(),
            tok(TokenKind::OpenBrace, "{"),
            tok(TokenKind::Function, "function"),
            ws(),
            tok(TokenKind::Identifier, "helper"),
            tok(TokenKind::OpenParen, "("),
            tok(TokenKind::CloseParen, ")"),
            tok(TokenKind::OpenBrace, "{"),
            tok(TokenKind::CloseBrace, "}"),
            ws(),
            tok(TokenKind::Function, "function"),
            ws(),
            tok(TokenKind::Identifier, "__construct"),
            tok(TokenKind::OpenParen, "("),
            tok(TokenKind::CloseParen, ")"),
            tok(TokenKind::OpenBrace, "{"),
            tok(TokenKind::CloseBrace, "}"),
            tok(TokenKind::CloseBrace, "}"),
        ]);
        assert_eq!(find_constructor(&stream, 0), Some(13));
    }

    #[test]
    fn parameter_types_empty_list() {
        let stream = class_with_constructor(&[]);
        assert!(parameter_types(&stream, 11).is_empty());
    }

    #[test]
    fn parameter_types_typed_and_untyped() {
        // (string $foo, $bar, \Throwable $e)
        let stream = class_with_constructor(&[
            tok(TokenKind::Identifier, "string"),
            ws(),
            tok(TokenKind::Variable, "$foo"),
            tok(TokenKind::Comma, ","),
            ws(),
            tok(TokenKind::Variable, "$bar"),
            tok(TokenKind::Comma, ","),
            ws(),
            tok(TokenKind::NsSeparator, "\\"),
            tok(TokenKind::Identifier, "Throwable"),
            ws(),
            tok(TokenKind::Variable, "$e"),
        ]);
        assert_eq!(
            parameter_types(&stream, 11),
            vec![
                Some("string".to_string()),
                None,
                Some("\\Throwable".to_string()),
            ]
        );
    }

    #[test]
    fn parameter_default_value_parens_do_not_split() {
        // (array $items = array(1, 2))
        let stream = class_with_constructor(&[
            tok(TokenKind::Identifier, "array"),
            ws(),
            tok(TokenKind::Variable, "$items"),
            ws(),
            tok(TokenKind::Equals, "="),
            ws(),
            tok(TokenKind::Identifier, "array"),
            tok(TokenKind::OpenParen, "("),
            tok(TokenKind::Other, "1"),
            tok(TokenKind::Comma, ","),
            tok(TokenKind::Other, "2"),
            tok(TokenKind::CloseParen, ")"),
        ]);
        assert_eq!(parameter_types(&stream, 11), vec![Some("array".to_string())]);
    }

    #[test]
    fn default_value_identifiers_are_not_part_of_the_type() {
        // ($code = PHP_INT_MAX)
        let stream = class_with_constructor(&[
            tok(TokenKind::Variable, "$code"),
            ws(),
            tok(TokenKind::Equals, "="),
            ws(),
            tok(TokenKind::Identifier, "PHP_INT_MAX"),
        ]);
        assert_eq!(parameter_types(&stream, 11), vec![None]);
    }

    #[test]
    fn previous_non_whitespace_skips_runs() {
        let stream = TokenStream::new(vec![
            tok(TokenKind::Identifier, "MyClass"),
            tok(TokenKind::DoubleColon, "::"),
            ws(),
            ws(),
            tok(TokenKind::Variable, "$variable"),
        ]);
        assert_eq!(find_previous_non_whitespace(&stream, 4), Some(1));
        assert_eq!(find_previous_non_whitespace(&stream, 0), None);
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert!(ends_with("FooException", "Exception"));
        assert!(ends_with("Exception", "Exception"));
        assert!(!ends_with("FooEXCEPTION", "Exception"));
        assert!(!ends_with("Foo", "Exception"));
    }
}

//! Token types for the lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators (precedence lives in
//!   [`crate::lang::operators`])
//! - `Punct(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing kinds avoid stringly-typed checks in the parser; the exact
//!   matched text travels on the [`Token`] itself.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::lang::keywords::KeywordId;
use crate::lang::operators::OperatorId;
use crate::lang::punctuation::PunctuationId;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punct(PunctuationId),

    // ========== Identifiers and literals ==========
    Name,
    Number,
    Str,

    // ========== Command syntax ==========
    /// A bare-word command line such as `clear x`, recognized lexically.
    Command,

    // ========== Layout ==========
    /// One token per maximal run of `\n` characters.
    Newline,

    // ========== Special ==========
    Eof,
}

/// A token: its kind, the exact matched source text, and the 1-based line
/// number at which the match starts.
///
/// ## Notes
/// - For [`TokenKind::Command`] the text excludes the terminating `;`/newline
///   even though the match consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

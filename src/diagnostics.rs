//! Error types for lexing and parsing.
//!
//! Lexer errors are recoverable: the offending character is skipped, scanning
//! continues, and every incident is reported alongside the (partial) token
//! stream. Parser errors are fatal for the parse in question: the first token
//! no grammar rule can consume aborts the parse and no tree is produced.

use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::TokenKind;

/// A lexical error. Reported, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    /// A character matched no token rule. The character is skipped and
    /// scanning resumes at the next position.
    #[error("illegal character {ch:?} on line {line}")]
    #[diagnostic(code(matlab_syntax::lex::illegal_character))]
    IllegalCharacter { ch: char, line: usize },
}

/// A syntax error. Halts the parse.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    /// A token that no applicable grammar rule could consume.
    #[error("unexpected token {text:?} ({kind:?}) on line {line}: expected {expected}")]
    #[diagnostic(code(matlab_syntax::parse::unexpected_token))]
    UnexpectedToken {
        /// What the grammar would have accepted at this point.
        expected: String,
        kind: TokenKind,
        text: String,
        line: usize,
    },
}

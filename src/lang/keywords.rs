//! Reserved keyword vocabulary.
//!
//! The set matches MATLAB's reserved words as far as this frontend supports
//! them (`iskeyword` minus `classdef`, `global`, `parfor`, `persistent`, and
//! `spmd`; `global` lexes as command syntax instead).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - The lexer additionally requires a non-word character after a keyword, so
//!   identifiers like `forAll` are never mis-tokenized. That boundary rule
//!   lives in the lexer; this module is vocabulary only.
//!
//! ## Examples
//! ```rust
//! use matlab_syntax::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("elseif"), Some(KeywordId::Elseif));
//! assert_eq!(keywords::as_str(KeywordId::Otherwise), "otherwise");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Break,
    Case,
    Catch,
    Continue,
    Else,
    Elseif,
    End,
    For,
    Function,
    If,
    Otherwise,
    Return,
    Switch,
    Try,
    While,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful (the lexer's word-boundary
///   check makes prefix overlaps like `else`/`elseif` unambiguous), but is
///   kept alphabetical for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Break, "break"),
    info(KeywordId::Case, "case"),
    info(KeywordId::Catch, "catch"),
    info(KeywordId::Continue, "continue"),
    info(KeywordId::Else, "else"),
    info(KeywordId::Elseif, "elseif"),
    info(KeywordId::End, "end"),
    info(KeywordId::For, "for"),
    info(KeywordId::Function, "function"),
    info(KeywordId::If, "if"),
    info(KeywordId::Otherwise, "otherwise"),
    info(KeywordId::Return, "return"),
    info(KeywordId::Switch, "switch"),
    info(KeywordId::Try, "try"),
    info(KeywordId::While, "while"),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a
///   programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Resolve a keyword spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(spelling: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == spelling).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo { id, canonical }
}

//! Small helper APIs for working with [`TokenKind`].
//!
//! These helpers keep the parser's token checks short: predicates for the
//! ID-based kinds plus the statement-terminator test the statement grammar
//! leans on.

use crate::lang::keywords::KeywordId;
use crate::lang::operators::OperatorId;
use crate::lang::punctuation::PunctuationId;
use crate::lexer::TokenKind;

impl TokenKind {
    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the operator id, if this is an operator token.
    ///
    /// Pair with [`crate::lang::operators::info_for`] to reach precedence,
    /// associativity, and fixity metadata.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punct(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punct(p) if *p == id)
    }

    /// Return `true` if this token terminates a statement (a semicolon or a
    /// newline).
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Newline) || self.is_punct(PunctuationId::Semicolon)
    }
}

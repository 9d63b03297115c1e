//! Parser for the MATLAB-like scripting language.
//!
//! Converts a token stream into a syntax tree rooted at a [`CodeBlock`].
//! Statements are parsed by recursive descent; expressions by precedence
//! climbing against the operator registry in [`crate::lang::operators`].
//!
//! ## Examples
//!
//! ```rust
//! use matlab_syntax::{lexer, parser};
//!
//! let source = "x = 1 + 2 * 3";
//! let lexed = lexer::lex(source);
//! assert!(lexed.errors.is_empty());
//! let tree = parser::parse(&lexed.tokens).unwrap();
//! assert_eq!(tree.statements.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::SyntaxError;
use crate::lang::keywords::KeywordId;
use crate::lang::operators::{self, Associativity, Fixity, OperatorId};
use crate::lang::punctuation::PunctuationId;
use crate::lexer::{Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");

//! Syntax frontend for a MATLAB-like scripting language: lexer, parser, AST,
//! diagnostics.
//!
//! Source text flows one way through two components: the lexer turns a source
//! string into a token stream (recovering from illegal characters and
//! reporting them), and the parser turns that stream into a single syntax
//! tree (halting at the first token no grammar rule can consume).
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no file loading, no REPL, no
//!   pretty-printing, and no semantic analysis. Function calls and array
//!   indexing share one node on purpose; telling them apart needs symbol
//!   information a pure grammar does not have.
//! - Vocabulary identity (keywords/operators/punctuation) and the operator
//!   precedence table come from the [`lang`] registries.
//! - Lexer and parser instances own all their mutable state, so independent
//!   invocations are safe to run concurrently.
//!
//! ## Examples
//! ```rust
//! use matlab_syntax::{lexer, parser};
//!
//! let lexed = lexer::lex("x = 1 + 2 * 3");
//! assert!(lexed.errors.is_empty());
//! let tree = parser::parse(&lexed.tokens).unwrap();
//! assert_eq!(tree.statements.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lang;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

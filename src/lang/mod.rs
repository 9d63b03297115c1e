//! Language vocabulary registries.
//!
//! This module is the single source of truth for the language's lexical
//! vocabulary: reserved words, operators (with precedence/associativity/
//! fixity metadata), and punctuation. The registries are `const`, immutable,
//! and shared by every lex/parse invocation in the process.

pub mod keywords;
pub mod operators;
pub mod punctuation;

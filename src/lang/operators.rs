//! Operator vocabulary and precedence table.
//!
//! This module defines the canonical operator set along with the precedence,
//! associativity, and fixity metadata the parser consults while climbing.
//! The table is built once at compile time and shared by all parses.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - The level ordering deliberately differs from MATLAB's published table in
//!   places (logical or/and outrank relational, which outranks the colon
//!   range, which outranks additive). Level 15 is reserved for the argument
//!   comma, which the parser treats structurally rather than as an infix
//!   operator.
//! - `+` and `-` double as prefix operators; they bind at their infix
//!   (additive) level, so `-a*b` parses as `-(a*b)`.
//!
//! ## Examples
//! ```rust
//! use matlab_syntax::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str(".*"), Some(OperatorId::DotStar));
//! assert!(operators::info_for(OperatorId::Star).precedence
//!     > operators::info_for(OperatorId::Plus).precedence);
//! ```

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Define whether an operator is infix (binary), prefix, or postfix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
    Postfix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Backslash,
    Caret,
    DotStar,
    DotSlash,
    DotBackslash,
    DotCaret,

    // Postfix transpose
    CTranspose,
    Transpose,

    // Relational
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    AndAnd,
    OrOr,
    And,
    Or,
    Not,

    // Range and assignment
    Colon,
    Assign,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is a relative ordering where higher binds tighter. The
///   absolute scale is an implementation detail, but must be consistent
///   across the parser.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
}

/// Registry of all operators, grouped by precedence level (lowest first).
pub const OPERATORS: &[OperatorInfo] = &[
    // Assignment
    op(OperatorId::Assign, "=", 10, Associativity::Left, Fixity::Infix),
    // (15: argument comma, structural)
    // Short-circuit logical
    op(OperatorId::OrOr, "||", 20, Associativity::Left, Fixity::Infix),
    op(OperatorId::AndAnd, "&&", 25, Associativity::Left, Fixity::Infix),
    // Element-wise logical
    op(OperatorId::Or, "|", 30, Associativity::Left, Fixity::Infix),
    op(OperatorId::And, "&", 35, Associativity::Left, Fixity::Infix),
    // Relational
    op(OperatorId::Lt, "<", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::LtEq, "<=", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::Gt, ">", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::GtEq, ">=", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::EqEq, "==", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::NotEq, "~=", 40, Associativity::Left, Fixity::Infix),
    // Range
    op(OperatorId::Colon, ":", 45, Associativity::Left, Fixity::Infix),
    // Additive
    op(OperatorId::Plus, "+", 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::Minus, "-", 50, Associativity::Left, Fixity::Infix),
    // Multiplicative
    op(OperatorId::DotStar, ".*", 55, Associativity::Left, Fixity::Infix),
    op(OperatorId::DotSlash, "./", 55, Associativity::Left, Fixity::Infix),
    op(OperatorId::DotBackslash, ".\\", 55, Associativity::Left, Fixity::Infix),
    op(OperatorId::Star, "*", 55, Associativity::Left, Fixity::Infix),
    op(OperatorId::Slash, "/", 55, Associativity::Left, Fixity::Infix),
    op(OperatorId::Backslash, "\\", 55, Associativity::Left, Fixity::Infix),
    // Logical negation
    op(OperatorId::Not, "~", 60, Associativity::Left, Fixity::Prefix),
    // Power and transpose share one level
    op(OperatorId::Transpose, ".'", 65, Associativity::Left, Fixity::Postfix),
    op(OperatorId::CTranspose, "'", 65, Associativity::Left, Fixity::Postfix),
    op(OperatorId::Caret, "^", 65, Associativity::Left, Fixity::Infix),
    op(OperatorId::DotCaret, ".^", 65, Associativity::Left, Fixity::Infix),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a
///   programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        fixity,
    }
}

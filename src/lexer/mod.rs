//! Lexer for the MATLAB-like scripting language.
//!
//! Handles tokenization including:
//! - Keywords with word-boundary checks (so `forAll` stays an identifier)
//! - Command syntax (`clear x;` becomes a single token)
//! - Numeric literals with leading/trailing dots and exponents
//! - The apostrophe ambiguity (string delimiter vs. postfix transpose)
//! - Comments (line and block) and newline tracking
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//!
//! Token rules are tried in a fixed priority order at each position, not
//! longest-match-wins across all rules: keywords, command syntax,
//! identifiers, numbers, strings, comments, newlines, then symbols
//! (longest symbol first). A character matching no rule is reported and
//! skipped; lexing never aborts.

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::diagnostics::LexError;
use crate::lang::keywords;
use crate::lang::operators::OperatorId;
use crate::lang::punctuation::PunctuationId;

// ============================================================================
// SYMBOL TABLE
// ----------------------------------------------------------------------------
// Operator and punctuation spellings, longest first so that overlapping
// prefixes resolve correctly (`...` before `.*` before `.`, `==` before `=`,
// `&&` before `&`).
// ============================================================================

const SYMBOLS: &[(&str, TokenKind)] = &[
    ("...", TokenKind::Punct(PunctuationId::Ellipsis)),
    (".*", TokenKind::Operator(OperatorId::DotStar)),
    ("./", TokenKind::Operator(OperatorId::DotSlash)),
    (".\\", TokenKind::Operator(OperatorId::DotBackslash)),
    (".^", TokenKind::Operator(OperatorId::DotCaret)),
    (".'", TokenKind::Operator(OperatorId::Transpose)),
    ("==", TokenKind::Operator(OperatorId::EqEq)),
    ("~=", TokenKind::Operator(OperatorId::NotEq)),
    ("<=", TokenKind::Operator(OperatorId::LtEq)),
    (">=", TokenKind::Operator(OperatorId::GtEq)),
    ("&&", TokenKind::Operator(OperatorId::AndAnd)),
    ("||", TokenKind::Operator(OperatorId::OrOr)),
    ("+", TokenKind::Operator(OperatorId::Plus)),
    ("-", TokenKind::Operator(OperatorId::Minus)),
    ("*", TokenKind::Operator(OperatorId::Star)),
    ("/", TokenKind::Operator(OperatorId::Slash)),
    ("\\", TokenKind::Operator(OperatorId::Backslash)),
    ("^", TokenKind::Operator(OperatorId::Caret)),
    ("'", TokenKind::Operator(OperatorId::CTranspose)),
    ("=", TokenKind::Operator(OperatorId::Assign)),
    ("<", TokenKind::Operator(OperatorId::Lt)),
    (">", TokenKind::Operator(OperatorId::Gt)),
    ("&", TokenKind::Operator(OperatorId::And)),
    ("|", TokenKind::Operator(OperatorId::Or)),
    ("~", TokenKind::Operator(OperatorId::Not)),
    (":", TokenKind::Operator(OperatorId::Colon)),
    ("@", TokenKind::Punct(PunctuationId::At)),
    (".", TokenKind::Punct(PunctuationId::Dot)),
    (",", TokenKind::Punct(PunctuationId::Comma)),
    (";", TokenKind::Punct(PunctuationId::Semicolon)),
    ("(", TokenKind::Punct(PunctuationId::LParen)),
    (")", TokenKind::Punct(PunctuationId::RParen)),
    ("[", TokenKind::Punct(PunctuationId::LBracket)),
    ("]", TokenKind::Punct(PunctuationId::RBracket)),
    ("{", TokenKind::Punct(PunctuationId::LBrace)),
    ("}", TokenKind::Punct(PunctuationId::RBrace)),
];

// ============================================================================
// LEXER STATE
// ============================================================================

/// Output of one tokenization run: the best-effort token stream plus every
/// lexical error encountered along the way.
///
/// The token stream always ends with an [`TokenKind::Eof`] token. Errors do
/// not truncate the stream; the offending characters are simply skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// Lexer for source text.
///
/// Each invocation owns its own cursor (position and line counter); nothing
/// is shared between lexer instances, so independent tokenizations may run
/// concurrently.
pub struct Lexer {
    /// Source text with a synthetic trailing newline, so newline-terminated
    /// constructs can always close.
    text: String,
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl Lexer {
    /// Create a new lexer for the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            text: format!("{source}\n"),
            pos: 0,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    pub fn tokenize(mut self) -> Lexed {
        while !self.is_at_end() {
            self.scan_token();
        }

        let line = self.line;
        self.tokens.push(Token::new(TokenKind::Eof, "", line));

        Lexed {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    // ========================================================================
    // Core cursor handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn rest(&self) -> &str {
        &self.text[self.pos..]
    }

    /// The character immediately before the cursor, if any. Used for the
    /// apostrophe disambiguation.
    fn prev_char(&self) -> Option<char> {
        self.text[..self.pos].chars().next_back()
    }

    fn push(&mut self, kind: TokenKind, len: usize, line: usize) {
        let text = &self.text[self.pos..self.pos + len];
        self.tokens.push(Token::new(kind, text, line));
        self.pos += len;
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        // Skip spaces and tabs (but not newlines)
        while self.rest().starts_with([' ', '\t']) {
            self.pos += 1;
        }
        if self.is_at_end() {
            return;
        }

        let line = self.line;

        // 1. Reserved keywords, which must be followed by a non-word character
        for k in keywords::KEYWORDS {
            if self.rest().starts_with(k.canonical) {
                let after = self.rest().as_bytes().get(k.canonical.len());
                if after.is_some_and(|&b| !is_word_byte(b)) {
                    self.push(TokenKind::Keyword(k.id), k.canonical.len(), line);
                    return;
                }
            }
        }

        // 2. Command syntax: `ident WS+ ident` right before `;` or a newline.
        //    The terminator is consumed by the match but excluded from the
        //    token text. Two-identifier form only.
        if let Some(cmd) = match_command(self.rest()) {
            let text = &self.text[self.pos..self.pos + cmd.text_len];
            self.tokens.push(Token::new(TokenKind::Command, text, line));
            self.pos += cmd.consumed_len;
            if cmd.newline_terminated {
                self.line += 1;
            }
            return;
        }

        // 3. Identifier
        let ident = ident_len(self.rest());
        if ident > 0 {
            self.push(TokenKind::Name, ident, line);
            return;
        }

        // 4. Numeric literal
        if let Some(len) = match_number(self.rest()) {
            self.push(TokenKind::Number, len, line);
            return;
        }

        // 5. String literal. A single-quoted run only counts as a string when
        //    the opening quote sits at input start or after a non-word
        //    character; otherwise the apostrophe is the transpose operator.
        if self.rest().starts_with('"') {
            if let Some(len) = closing_quote(self.rest(), '"') {
                self.push(TokenKind::Str, len, line);
                return;
            }
        } else if self.rest().starts_with('\'')
            && self.prev_char().is_none_or(|c| !is_word_char(c))
        {
            if let Some(len) = closing_quote(self.rest(), '\'') {
                self.push(TokenKind::Str, len, line);
                return;
            }
        }

        // 6. Comments, discarded without producing a token. A line comment
        //    consumes its terminating newline. Newlines inside comments still
        //    advance the line counter.
        if self.rest().starts_with("%{") {
            if let Some(end) = self.rest().find("%}") {
                let consumed = end + 2;
                self.line += self.text[self.pos..self.pos + consumed]
                    .bytes()
                    .filter(|&b| b == b'\n')
                    .count();
                self.pos += consumed;
                return;
            }
        }
        if self.rest().starts_with('%') {
            match self.rest().find('\n') {
                Some(nl) => {
                    self.pos += nl + 1;
                    self.line += 1;
                }
                None => self.pos = self.text.len(),
            }
            return;
        }

        // 7. Newline: a maximal run of '\n' becomes one token
        if self.rest().starts_with('\n') {
            let run = self.rest().bytes().take_while(|&b| b == b'\n').count();
            self.push(TokenKind::Newline, run, line);
            self.line += run;
            return;
        }

        // 8. Operator and punctuation symbols, longest first
        for (spelling, kind) in SYMBOLS {
            if self.rest().starts_with(spelling) {
                self.push(*kind, spelling.len(), line);
                return;
            }
        }

        // No rule matched: report the character and skip it
        let Some(ch) = self.rest().chars().next() else {
            return;
        };
        self.errors.push(LexError::IllegalCharacter { ch, line });
        self.pos += ch.len_utf8();
    }
}

// ============================================================================
// Matching helpers
// ============================================================================

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Length of an identifier (`[A-Za-z_][A-Za-z0-9_]*`) at the start of `s`,
/// or 0 if none.
fn ident_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(&b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return 0,
    }
    bytes.iter().take_while(|&&b| is_word_byte(b)).count()
}

struct CommandMatch {
    /// Length of the command text (terminator excluded).
    text_len: usize,
    /// Length actually consumed (terminator included).
    consumed_len: usize,
    newline_terminated: bool,
}

/// Match the command form `ident WS+ ident` immediately followed by `;` or a
/// newline.
fn match_command(s: &str) -> Option<CommandMatch> {
    let bytes = s.as_bytes();

    let first = ident_len(s);
    if first == 0 {
        return None;
    }

    let mut i = first;
    while matches!(bytes.get(i), Some(&(b' ' | b'\t'))) {
        i += 1;
    }
    if i == first {
        return None;
    }

    let second = ident_len(&s[i..]);
    if second == 0 {
        return None;
    }
    i += second;

    match bytes.get(i) {
        Some(&b';') => Some(CommandMatch {
            text_len: i,
            consumed_len: i + 1,
            newline_terminated: false,
        }),
        Some(&b'\n') => Some(CommandMatch {
            text_len: i,
            consumed_len: i + 1,
            newline_terminated: true,
        }),
        _ => None,
    }
}

/// Length of a numeric literal at the start of `s`, or `None`.
///
/// Mirrors `((\d+\.?\d*)|(\.\d+))(e[+-]*\d+)*`: digits with an optional
/// fractional part (`1`, `1.`, `1.1`) or a bare leading dot (`.5`), followed
/// by any number of exponent groups, each a lowercase `e`, a run of signs,
/// and at least one digit.
fn match_number(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;

    if bytes.first().is_some_and(u8::is_ascii_digit) {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if bytes.get(i) == Some(&b'.') {
            i += 1;
            while bytes.get(i).is_some_and(u8::is_ascii_digit) {
                i += 1;
            }
        }
    } else if bytes.first() == Some(&b'.') && bytes.get(1).is_some_and(u8::is_ascii_digit) {
        i = 1;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
    } else {
        return None;
    }

    loop {
        if bytes.get(i) != Some(&b'e') {
            break;
        }
        let mut j = i + 1;
        while matches!(bytes.get(j), Some(&(b'+' | b'-'))) {
            j += 1;
        }
        let digits_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j == digits_start {
            // A bare `e` with no digits is not part of the literal
            break;
        }
        i = j;
    }

    Some(i)
}

/// Length of a quoted run starting at `s` (which begins with `quote`),
/// including both quotes. The closing quote must appear before the next
/// newline; there is no escape processing.
fn closing_quote(s: &str, quote: char) -> Option<usize> {
    for (idx, c) in s[1..].char_indices() {
        if c == '\n' {
            return None;
        }
        if c == quote {
            return Some(1 + idx + c.len_utf8());
        }
    }
    None
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Lexed {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::keywords::KeywordId;
    use crate::lang::operators;
    use crate::lang::punctuation;

    fn lex_clean(source: &str) -> Vec<Token> {
        let lexed = lex(source);
        assert!(lexed.errors.is_empty(), "unexpected lex errors: {:?}", lexed.errors);
        lexed.tokens
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_numeric_literal_forms() {
        let forms = [
            "1", "1.", "1.1", ".1", "111.111", "1e1", "1e0", "1e-1", ".1e-1", "1.e-1", "1.e+1",
            "123.456e+00789",
        ];
        for form in forms {
            let tokens = lex_clean(form);
            assert_eq!(
                kinds(&tokens),
                vec![TokenKind::Number, TokenKind::Newline, TokenKind::Eof],
                "wrong token kinds for {form:?}"
            );
            assert_eq!(tokens[0].text, form, "literal text must match the input exactly");
        }
    }

    #[test]
    fn test_number_stops_before_bare_exponent_marker() {
        let tokens = lex_clean("1e");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "1");
        assert_eq!(tokens[1].kind, TokenKind::Name);
        assert_eq!(tokens[1].text, "e");
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = lex_clean(k.canonical);
            assert_eq!(
                kinds(&tokens),
                vec![TokenKind::Keyword(k.id), TokenKind::Newline, TokenKind::Eof],
                "keyword {:?} did not lex to a single keyword token",
                k.canonical
            );
        }
    }

    #[test]
    fn test_keyword_requires_word_boundary() {
        let tokens = lex_clean("forAll");
        assert_eq!(tokens[0].kind, TokenKind::Name);
        assert_eq!(tokens[0].text, "forAll");

        let tokens = lex_clean("break2");
        assert_eq!(tokens[0].kind, TokenKind::Name);
    }

    #[test]
    fn test_operator_registry_parity() {
        for o in operators::OPERATORS {
            let tokens = lex_clean(o.spelling);
            assert_eq!(
                tokens[0].kind,
                TokenKind::Operator(o.id),
                "operator {:?} did not lex to its own token",
                o.spelling
            );
            assert_eq!(tokens[0].text, o.spelling);
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for p in punctuation::PUNCTUATION {
            let tokens = lex_clean(p.canonical);
            assert_eq!(
                tokens[0].kind,
                TokenKind::Punct(p.id),
                "punctuation {:?} did not lex to its own token",
                p.canonical
            );
        }
    }

    #[test]
    fn test_longest_symbol_wins() {
        let tokens = lex_clean("1==2");
        assert_eq!(
            kinds(&tokens[..3]),
            vec![
                TokenKind::Number,
                TokenKind::Operator(OperatorId::EqEq),
                TokenKind::Number
            ]
        );

        let tokens = lex_clean("a.*b");
        assert_eq!(tokens[1].kind, TokenKind::Operator(OperatorId::DotStar));

        let tokens = lex_clean("a&&b");
        assert_eq!(tokens[1].kind, TokenKind::Operator(OperatorId::AndAnd));
    }

    #[test]
    fn test_command_with_semicolon() {
        let tokens = lex_clean("clear x;");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Command, TokenKind::Newline, TokenKind::Eof]
        );
        assert_eq!(tokens[0].text, "clear x");
    }

    #[test]
    fn test_command_with_newline_terminator() {
        // The synthetic trailing newline terminates the command and is
        // consumed by the match.
        let tokens = lex_clean("clear x");
        assert_eq!(kinds(&tokens), vec![TokenKind::Command, TokenKind::Eof]);
        assert_eq!(tokens[0].text, "clear x");
    }

    #[test]
    fn test_command_only_matches_two_identifiers() {
        // Three bare words never form one command; the first word falls back
        // to an identifier and the remaining pair matches the command rule.
        let tokens = lex_clean("clear x y;");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Name,
                TokenKind::Command,
                TokenKind::Newline,
                TokenKind::Eof
            ]
        );
        assert_eq!(tokens[0].text, "clear");
        assert_eq!(tokens[1].text, "x y");
    }

    #[test]
    fn test_keyword_never_starts_command() {
        let tokens = lex_clean("for x;");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(KeywordId::For));
        assert_eq!(tokens[1].kind, TokenKind::Name);
    }

    #[test]
    fn test_string_at_start_of_input() {
        let tokens = lex_clean("'abc'");
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, "'abc'");
    }

    #[test]
    fn test_double_quoted_string() {
        let tokens = lex_clean(r#"x = "hello""#);
        assert_eq!(tokens[2].kind, TokenKind::Str);
        assert_eq!(tokens[2].text, "\"hello\"");
    }

    #[test]
    fn test_transpose_after_name() {
        let tokens = lex_clean("x'");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Name,
                TokenKind::Operator(OperatorId::CTranspose),
                TokenKind::Newline,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_transpose_and_string_in_one_line() {
        let tokens = lex_clean("y = x' + 'abc'");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Name,
                TokenKind::Operator(OperatorId::Assign),
                TokenKind::Name,
                TokenKind::Operator(OperatorId::CTranspose),
                TokenKind::Operator(OperatorId::Plus),
                TokenKind::Str,
                TokenKind::Newline,
                TokenKind::Eof
            ]
        );
        assert_eq!(tokens[5].text, "'abc'");
    }

    #[test]
    fn test_unpaired_quote_after_bracket_is_transpose() {
        let tokens = lex_clean("[1 2]'");
        assert_eq!(
            tokens[4].kind,
            TokenKind::Operator(OperatorId::CTranspose),
            "a quote with no closing partner must be a transpose"
        );
    }

    #[test]
    fn test_line_comment_discarded() {
        let tokens = lex_clean("x = 1\n% note\ny = 2");
        let names: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Name)
            .collect();
        assert_eq!(names.len(), 2);
        assert_eq!(names[0].line, 1);
        // The comment consumed line 2; `y` starts line 3 and still reports it.
        assert_eq!(names[1].line, 3);
    }

    #[test]
    fn test_block_comment_advances_lines() {
        let tokens = lex_clean("a\n%{\nnote\n%}\nb");
        let b = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Name && t.text == "b")
            .expect("b token");
        assert_eq!(b.line, 5);
    }

    #[test]
    fn test_blank_lines_collapse_into_one_token() {
        let tokens = lex_clean("a\n\n\nb");
        assert_eq!(tokens[1].kind, TokenKind::Newline);
        assert_eq!(tokens[1].text, "\n\n\n");
        assert_eq!(tokens[2].line, 4);
    }

    #[test]
    fn test_illegal_character_is_reported_and_skipped() {
        let lexed = lex("x = 1$2");
        assert_eq!(
            lexed.errors,
            vec![LexError::IllegalCharacter { ch: '$', line: 1 }]
        );
        // The rest of the stream is still produced
        assert_eq!(
            kinds(&lexed.tokens),
            vec![
                TokenKind::Name,
                TokenKind::Operator(OperatorId::Assign),
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Newline,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_relex_is_idempotent() {
        let source = "if x > 0\n  y = [1 2; 3 4]';\nend\n% tail $";
        assert_eq!(lex(source), lex(source));
    }
}

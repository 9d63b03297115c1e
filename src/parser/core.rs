/// Parser core type and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()`
/// entrypoint; the grammar itself lives in the other parser chunks.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding one “god file”.
/// - The parser is single-pass and does not recover: the first token no rule
///   can consume aborts the parse, and the caller receives no partial tree.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by [`crate::lexer`], ending with an
    ///   `Eof` sentinel.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the entire token stream into the top-level [`CodeBlock`].
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered; parsing halts there.
    pub fn parse(mut self) -> Result<CodeBlock, SyntaxError> {
        self.code_block(&[])
    }
}

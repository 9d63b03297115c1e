/// Parse a token stream into a syntax tree.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by [`crate::lexer`].
///
/// ## Errors
/// Returns the first [`SyntaxError`] encountered. There is no error
/// recovery and no partial tree: either the whole stream parses or the
/// parse is abandoned at the offending token.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<CodeBlock, SyntaxError> {
    if tokens.is_empty() {
        return Ok(CodeBlock {
            statements: Vec::new(),
        });
    }
    Parser::new(tokens).parse()
}

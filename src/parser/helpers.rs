/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// peeking/consuming tokens, matching and expecting keywords or punctuation,
/// statement terminators, and error construction.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        if self.pos + 1 < self.tokens.len() {
            &self.tokens[self.pos + 1]
        } else {
            &self.tokens[self.tokens.len() - 1]
        }
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punct(id)
    }

    /// If the current token is the given keyword, consume it and return `true`.
    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// If the current token is the given punctuation, consume it and return `true`.
    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, expected: &str) -> Result<&Token, SyntaxError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, expected: &str) -> Result<&Token, SyntaxError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Return `true` if the current token terminates a statement.
    fn at_terminator(&self) -> bool {
        self.peek().kind.is_terminator()
    }

    /// Consume a required statement terminator (`;` or newline).
    fn terminator(&mut self) -> Result<(), SyntaxError> {
        if self.at_terminator() {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected("';' or a newline"))
        }
    }

    /// Build an [`SyntaxError::UnexpectedToken`] for the current token.
    fn unexpected(&self, expected: impl Into<String>) -> SyntaxError {
        let token = self.peek();
        SyntaxError::UnexpectedToken {
            expected: expected.into(),
            kind: token.kind,
            text: token.text.clone(),
            line: token.line,
        }
    }

    /// Check if the current token can start an expression.
    fn is_at_expr_start(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Name
                | TokenKind::Number
                | TokenKind::Str
                | TokenKind::Punct(
                    PunctuationId::LParen
                        | PunctuationId::LBracket
                        | PunctuationId::LBrace
                        | PunctuationId::At
                )
                | TokenKind::Operator(OperatorId::Plus | OperatorId::Minus | OperatorId::Not)
        )
    }
}

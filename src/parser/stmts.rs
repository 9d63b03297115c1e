/// Statement and block parsing methods.
///
/// A `code_block` is one-or-more statements; every compound construct reuses
/// it for its bodies and stops at the closing keywords of its context.
/// Construct headers (`if`, `for`, `case`, `catch`, ...) reuse the statement
/// grammar, so `if x > 0` carries the same statement node an ordinary line
/// would.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse statements until end-of-input or one of `closers`.
    ///
    /// A block that would be empty is a syntax error; the grammar has no
    /// empty-block production.
    fn code_block(&mut self, closers: &[KeywordId]) -> Result<CodeBlock, SyntaxError> {
        let mut statements = Vec::new();
        while !self.is_at_end() && !closers.iter().any(|&k| self.check_keyword(k)) {
            statements.push(self.statement()?);
        }
        if statements.is_empty() {
            return Err(self.unexpected("a statement"));
        }
        Ok(CodeBlock { statements })
    }

    fn statement(&mut self) -> Result<Statement, SyntaxError> {
        match self.peek().kind {
            TokenKind::Newline | TokenKind::Punct(PunctuationId::Semicolon) => {
                self.advance();
                Ok(Statement::Empty)
            }
            TokenKind::Command => {
                let text = self.advance().text.clone();
                Ok(Statement::Command(text))
            }
            TokenKind::Keyword(KeywordId::Function) => self.function_def(),
            TokenKind::Keyword(KeywordId::For) => self.for_loop(),
            TokenKind::Keyword(KeywordId::While) => self.while_loop(),
            TokenKind::Keyword(KeywordId::If) => self.if_block(),
            TokenKind::Keyword(KeywordId::Switch) => self.switch_block(),
            TokenKind::Keyword(KeywordId::Try) => self.try_catch(),
            TokenKind::Keyword(KeywordId::Return) => self.return_stmt(),
            TokenKind::Keyword(KeywordId::Break) => {
                self.advance();
                self.terminator()?;
                Ok(Statement::Break)
            }
            TokenKind::Keyword(KeywordId::Continue) => {
                self.advance();
                self.terminator()?;
                Ok(Statement::Continue)
            }
            // Block-closing keywords are consumed by their construct; seeing
            // one here means it has no opening counterpart.
            TokenKind::Keyword(
                KeywordId::End
                | KeywordId::Else
                | KeywordId::Elseif
                | KeywordId::Case
                | KeywordId::Otherwise
                | KeywordId::Catch,
            )
            | TokenKind::Eof => Err(self.unexpected("a statement")),
            _ => {
                let expr = self.expression()?;
                self.terminator()?;
                Ok(Statement::Expr(expr))
            }
        }
    }

    /// Parse a construct header as a statement.
    ///
    /// Unlike a top-level statement, the terminator is optional: the header
    /// ends wherever its expression can no longer continue, so
    /// `if x > 0 y = 1; end` parses with `x > 0` as the header.
    fn header_statement(&mut self) -> Result<Statement, SyntaxError> {
        match self.peek().kind {
            TokenKind::Newline | TokenKind::Punct(PunctuationId::Semicolon) => {
                self.advance();
                Ok(Statement::Empty)
            }
            TokenKind::Command => {
                let text = self.advance().text.clone();
                Ok(Statement::Command(text))
            }
            _ => {
                let expr = self.expression()?;
                if self.at_terminator() {
                    self.advance();
                }
                Ok(Statement::Expr(expr))
            }
        }
    }

    fn function_def(&mut self) -> Result<Statement, SyntaxError> {
        self.advance(); // `function`
        let header = Box::new(self.header_statement()?);
        let body = self.code_block(&[KeywordId::End])?;
        self.expect_keyword(KeywordId::End, "'end' to close the function")?;
        self.terminator()?;
        Ok(Statement::Function(FunctionDef { header, body }))
    }

    fn for_loop(&mut self) -> Result<Statement, SyntaxError> {
        self.advance(); // `for`
        let header = Box::new(self.header_statement()?);
        let body = self.code_block(&[KeywordId::End])?;
        self.expect_keyword(KeywordId::End, "'end' to close the for loop")?;
        self.terminator()?;
        Ok(Statement::For(ForLoop { header, body }))
    }

    fn while_loop(&mut self) -> Result<Statement, SyntaxError> {
        self.advance(); // `while`
        let header = Box::new(self.header_statement()?);
        let body = self.code_block(&[KeywordId::End])?;
        self.expect_keyword(KeywordId::End, "'end' to close the while loop")?;
        self.terminator()?;
        Ok(Statement::While(WhileLoop { header, body }))
    }

    fn if_block(&mut self) -> Result<Statement, SyntaxError> {
        self.advance(); // `if`
        let closers = [KeywordId::Elseif, KeywordId::Else, KeywordId::End];
        let header = Box::new(self.header_statement()?);
        let body = self.code_block(&closers)?;

        let mut elseif_arms = Vec::new();
        let mut else_body = None;
        loop {
            if self.match_keyword(KeywordId::Elseif) {
                let header = self.header_statement()?;
                let body = self.code_block(&closers)?;
                elseif_arms.push(ElseifArm { header, body });
            } else if self.match_keyword(KeywordId::Else) {
                self.terminator()?;
                else_body = Some(self.code_block(&[KeywordId::End])?);
                break;
            } else {
                break;
            }
        }

        self.expect_keyword(KeywordId::End, "'end' to close the if block")?;
        self.terminator()?;
        Ok(Statement::If(IfBlock {
            header,
            body,
            elseif_arms,
            else_body,
        }))
    }

    fn switch_block(&mut self) -> Result<Statement, SyntaxError> {
        self.advance(); // `switch`
        let header = Box::new(self.header_statement()?);

        // At least one case arm is required
        self.expect_keyword(KeywordId::Case, "'case' after the switch header")?;
        let closers = [KeywordId::Case, KeywordId::Otherwise, KeywordId::End];
        let mut cases = Vec::new();
        loop {
            let header = self.header_statement()?;
            let body = self.code_block(&closers)?;
            cases.push(CaseArm { header, body });
            if !self.match_keyword(KeywordId::Case) {
                break;
            }
        }

        let otherwise = if self.match_keyword(KeywordId::Otherwise) {
            self.terminator()?;
            Some(self.code_block(&[KeywordId::End])?)
        } else {
            None
        };

        self.expect_keyword(KeywordId::End, "'end' to close the switch block")?;
        self.terminator()?;
        Ok(Statement::Switch(SwitchBlock {
            header,
            cases,
            otherwise,
        }))
    }

    fn try_catch(&mut self) -> Result<Statement, SyntaxError> {
        self.advance(); // `try`
        // `try` takes no header; the newline after it is an ordinary empty
        // statement of the try body.
        let try_body = self.code_block(&[KeywordId::Catch])?;
        self.expect_keyword(KeywordId::Catch, "'catch' after the try body")?;
        let catch_header = Box::new(self.header_statement()?);
        let catch_body = self.code_block(&[KeywordId::End])?;
        self.expect_keyword(KeywordId::End, "'end' to close the try block")?;
        self.terminator()?;
        Ok(Statement::TryCatch(TryCatch {
            try_body,
            catch_header,
            catch_body,
        }))
    }

    fn return_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.advance(); // `return`
        if self.at_terminator() {
            self.advance();
            return Ok(Statement::Return(None));
        }
        let expr = self.expression()?;
        self.terminator()?;
        Ok(Statement::Return(Some(expr)))
    }
}

/// Expression parsing methods.
///
/// This chunk implements precedence climbing over the operator registry:
/// each infix/postfix operator is accepted while its table precedence stays
/// at or above the current minimum, with the associativity from the table
/// deciding the right-hand minimum. Calls, cell indexing, and field access
/// bind tighter than any table operator.
///
/// ## Notes
/// - Unary `+`/`-`/`~` parse their operand at one level above their own
///   table precedence, so `-a*b` is `-(a*b)` while `-a+b` is `(-a)+b`.
/// - Postfix transpose shares the power level and is left-associative with
///   it: `2^x'` parses as `(2^x)'`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        self.expr_bp(0)
    }

    fn expr_bp(&mut self, min_bp: u8) -> Result<Expr, SyntaxError> {
        let mut lhs = self.unary_expr()?;

        loop {
            // `expr ... <newline>` is line continuation: drop it and keep
            // extending the same expression.
            self.skip_continuation();

            match self.peek().kind {
                TokenKind::Operator(op) => {
                    let info = operators::info_for(op);
                    match info.fixity {
                        Fixity::Infix => {
                            if info.precedence < min_bp {
                                break;
                            }
                            self.advance();
                            let next_min = match info.associativity {
                                Associativity::Left => info.precedence + 1,
                                Associativity::Right => info.precedence,
                            };
                            let rhs = self.expr_bp(next_min)?;
                            lhs = match op {
                                OperatorId::Assign => {
                                    Expr::Assign(Box::new(lhs), Box::new(rhs))
                                }
                                OperatorId::Colon => Expr::Range(Box::new(lhs), Box::new(rhs)),
                                _ => Expr::Binary(Box::new(lhs), binary_op_for(op), Box::new(rhs)),
                            };
                        }
                        Fixity::Postfix => {
                            if info.precedence < min_bp {
                                break;
                            }
                            self.advance();
                            lhs = Expr::Postfix(Box::new(lhs), postfix_op_for(op));
                        }
                        // `~` never binds to an expression on its left
                        Fixity::Prefix => break,
                    }
                }
                TokenKind::Punct(PunctuationId::Dot) => {
                    self.advance();
                    if !matches!(self.peek().kind, TokenKind::Name) {
                        return Err(self.unexpected("a field name"));
                    }
                    let name = self.advance().text.clone();
                    lhs = Expr::Field(Box::new(lhs), name);
                }
                TokenKind::Punct(PunctuationId::LParen) => {
                    self.advance();
                    let args = self.args()?;
                    self.expect_punct(PunctuationId::RParen, "')' after arguments")?;
                    lhs = Expr::CallOrIndex(Box::new(lhs), args);
                }
                TokenKind::Punct(PunctuationId::LBrace) => {
                    self.advance();
                    let args = self.args()?;
                    self.expect_punct(PunctuationId::RBrace, "'}' after arguments")?;
                    lhs = Expr::CellIndex(Box::new(lhs), args);
                }
                _ => break,
            }
        }

        Ok(lhs)
    }

    /// Parse a prefix-operator application or fall through to a primary.
    fn unary_expr(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek().kind {
            TokenKind::Operator(op @ (OperatorId::Plus | OperatorId::Minus | OperatorId::Not)) => {
                self.advance();
                let operand = self.expr_bp(operators::info_for(op).precedence + 1)?;
                let unary = match op {
                    OperatorId::Plus => UnaryOp::Plus,
                    OperatorId::Minus => UnaryOp::Minus,
                    _ => UnaryOp::Not,
                };
                Ok(Expr::Unary(unary, Box::new(operand)))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek().kind {
            TokenKind::Name => {
                let text = self.advance().text.clone();
                Ok(Expr::Name(text))
            }
            TokenKind::Number => {
                let text = self.advance().text.clone();
                Ok(Expr::Number(text))
            }
            TokenKind::Str => {
                let text = self.advance().text.clone();
                Ok(Expr::Str(text))
            }
            TokenKind::Punct(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expr_bp(0)?;
                self.expect_punct(PunctuationId::RParen, "')'")?;
                Ok(Expr::Bracket(Box::new(inner)))
            }
            TokenKind::Punct(PunctuationId::LBracket) => {
                self.advance();
                let rows = self.matrix_body(PunctuationId::RBracket)?;
                Ok(Expr::Matrix(rows))
            }
            TokenKind::Punct(PunctuationId::LBrace) => {
                self.advance();
                let rows = self.matrix_body(PunctuationId::RBrace)?;
                Ok(Expr::Cell(rows))
            }
            TokenKind::Punct(PunctuationId::At) => {
                self.advance();
                self.expect_punct(PunctuationId::LParen, "'(' after '@'")?;
                let params = self.args()?;
                self.expect_punct(PunctuationId::RParen, "')' after parameters")?;
                let body = self.expr_bp(0)?;
                Ok(Expr::AnonFunc {
                    params,
                    body: Box::new(body),
                })
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parse a one-or-more, comma-separated argument list.
    fn args(&mut self) -> Result<Vec<Expr>, SyntaxError> {
        let mut args = vec![self.expr_bp(0)?];
        while self.match_punct(PunctuationId::Comma) {
            args.push(self.expr_bp(0)?);
        }
        Ok(args)
    }

    /// Parse the interior of a `[...]` or `{...}` literal.
    ///
    /// Elements are juxtaposed or comma-separated; rows are separated by `;`
    /// and the last row need not end with one. Empty literals and empty rows
    /// have no production. Newlines have no row-separating role here and are
    /// rejected like any other non-element token.
    fn matrix_body(&mut self, close: PunctuationId) -> Result<Vec<Vec<Expr>>, SyntaxError> {
        let mut rows: Vec<Vec<Expr>> = Vec::new();
        let mut row: Vec<Expr> = Vec::new();
        loop {
            if self.check_punct(close) {
                if !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                }
                if rows.is_empty() {
                    return Err(self.unexpected("a matrix element"));
                }
                self.advance();
                return Ok(rows);
            }
            if self.check_punct(PunctuationId::Semicolon) {
                if row.is_empty() {
                    return Err(self.unexpected("a matrix element"));
                }
                self.advance();
                rows.push(std::mem::take(&mut row));
                continue;
            }
            row.push(self.expr_bp(0)?);
            if self.match_punct(PunctuationId::Comma) && !self.is_at_expr_start() {
                return Err(self.unexpected("an expression"));
            }
        }
    }

    /// Drop `... <newline>` pairs following a complete (sub)expression.
    fn skip_continuation(&mut self) {
        while self.check_punct(PunctuationId::Ellipsis)
            && matches!(self.peek_next().kind, TokenKind::Newline)
        {
            self.advance();
            self.advance();
        }
    }
}

/// Map an infix operator token to its AST operator.
///
/// `=` and `:` build dedicated [`Expr::Assign`] / [`Expr::Range`] nodes and
/// never reach this table.
fn binary_op_for(op: OperatorId) -> BinaryOp {
    match op {
        OperatorId::OrOr => BinaryOp::OrOr,
        OperatorId::AndAnd => BinaryOp::AndAnd,
        OperatorId::Or => BinaryOp::Or,
        OperatorId::And => BinaryOp::And,
        OperatorId::Lt => BinaryOp::Lt,
        OperatorId::LtEq => BinaryOp::LtEq,
        OperatorId::Gt => BinaryOp::Gt,
        OperatorId::GtEq => BinaryOp::GtEq,
        OperatorId::EqEq => BinaryOp::Eq,
        OperatorId::NotEq => BinaryOp::NotEq,
        OperatorId::Plus => BinaryOp::Add,
        OperatorId::Minus => BinaryOp::Sub,
        OperatorId::DotStar => BinaryOp::ElemMul,
        OperatorId::DotSlash => BinaryOp::ElemDiv,
        OperatorId::DotBackslash => BinaryOp::ElemLeftDiv,
        OperatorId::Star => BinaryOp::Mul,
        OperatorId::Slash => BinaryOp::Div,
        OperatorId::Backslash => BinaryOp::LeftDiv,
        OperatorId::Caret => BinaryOp::Pow,
        OperatorId::DotCaret => BinaryOp::ElemPow,
        OperatorId::Assign
        | OperatorId::Colon
        | OperatorId::Not
        | OperatorId::CTranspose
        | OperatorId::Transpose => unreachable!("not an infix operator reaching this table"),
    }
}

/// Map a postfix operator token to its AST operator.
fn postfix_op_for(op: OperatorId) -> PostfixOp {
    match op {
        OperatorId::CTranspose => PostfixOp::CTranspose,
        OperatorId::Transpose => PostfixOp::Transpose,
        _ => unreachable!("not a postfix operator"),
    }
}

use crate::{
    ast::{ElseBody, ElseExpression, Expression, IdentifierExpression},
    error::ParseError,
    interpreter::{
        lexer::token::TokenKind,
        parser::{core::{ParseResult, Parser}, precedence::Precedence},
    },
};

impl Parser {
    /// Prefix handler for identifiers.
    pub(super) fn parse_identifier(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier(IdentifierExpression::new(self.cur_token().clone())))
    }

    /// Prefix handler for integer literals.
    ///
    /// # Errors
    /// `IntegerOverflow` when the literal does not fit in an `i64`.
    pub(super) fn parse_integer_literal(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token().clone();
        let value: i64 =
            token.literal()
                 .parse()
                 .map_err(|_| ParseError::IntegerOverflow { literal:
                                                                token.literal().to_string(), })?;

        Ok(Expression::IntegerLiteral { token, value })
    }

    /// Prefix handler for `true` and `false`.
    pub(super) fn parse_boolean_literal(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token().clone();
        let value = self.cur_token_is(TokenKind::True);

        Ok(Expression::BooleanLiteral { token, value })
    }

    /// Prefix handler for the unary operators `!` and `-`.
    pub(super) fn parse_prefix_expression(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token().clone();
        let operator = token.literal().to_string();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { token,
                                operator,
                                right: Box::new(right) })
    }

    /// Infix handler for the binary operators.
    ///
    /// The operator's own precedence becomes the minimum for the right-hand
    /// side, so stronger operators to the right fold first and equal ones
    /// stay left-associated.
    pub(super) fn parse_infix_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.cur_token().clone();
        let operator = token.literal().to_string();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix { token,
                               operator,
                               left: Box::new(left),
                               right: Box::new(right) })
    }

    /// Prefix handler for `( EXPR )`.
    ///
    /// Grouping produces no node of its own; the parentheses only reset the
    /// minimum precedence for the inner expression.
    pub(super) fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(expression)
    }

    /// Prefix handler for `if (COND) { ... }` with an optional else chain.
    ///
    /// # Errors
    /// - `MissingCondition` when the condition is not wrapped in `(`.
    /// - `UnexpectedToken` for a missing `)` or `{`.
    /// - Whatever the else arm or a nested block reports.
    pub(super) fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token().clone();

        if !self.peek_token_is(TokenKind::LParen) {
            return Err(ParseError::MissingCondition);
        }
        self.next_token();

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let else_branch = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            Some(self.parse_else_expression()?)
        } else {
            None
        };

        Ok(Expression::If { token,
                            condition: Box::new(condition),
                            consequence,
                            else_branch })
    }

    /// Parses the arm after `else`: either a chained `if` or a block,
    /// never both.
    fn parse_else_expression(&mut self) -> ParseResult<ElseExpression> {
        let token = self.cur_token().clone();

        if self.peek_token_is(TokenKind::If) {
            self.next_token();
            let next_if = self.parse_if_expression()?;

            Ok(ElseExpression { token,
                                body: ElseBody::If(Box::new(next_if)) })
        } else if self.peek_token_is(TokenKind::LBrace) {
            self.next_token();
            let block = self.parse_block_statement()?;

            Ok(ElseExpression { token,
                                body: ElseBody::Block(block) })
        } else {
            Err(ParseError::DanglingElse)
        }
    }

    /// Prefix handler for `func NAME(PARAMS) { ... }`.
    ///
    /// Name, parameter list, and body are separate steps so each missing
    /// piece gets its own error.
    pub(super) fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token().clone();

        if !self.peek_token_is(TokenKind::Ident) {
            return Err(ParseError::MissingFunctionName);
        }
        self.next_token();
        let name = IdentifierExpression::new(self.cur_token().clone());

        if !self.peek_token_is(TokenKind::LParen) {
            return Err(ParseError::MissingParameterList);
        }
        self.next_token();
        let parameters = self.parse_function_parameters()?;

        if !self.peek_token_is(TokenKind::LBrace) {
            return Err(ParseError::MissingFunctionBody);
        }
        self.next_token();
        let body = self.parse_block_statement()?;

        Ok(Expression::Function { token,
                                  name,
                                  parameters,
                                  body })
    }

    /// Parses the comma-separated parameter names of a function literal.
    /// The current token is the opening `(`; an empty list is allowed.
    fn parse_function_parameters(&mut self) -> ParseResult<Vec<IdentifierExpression>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(IdentifierExpression::new(self.cur_token().clone()));

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(IdentifierExpression::new(self.cur_token().clone()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }

    /// Infix handler for calls: `(` applied to an expression.
    ///
    /// # Errors
    /// `CallTargetNotIdentifier` when the left-hand expression is anything
    /// but a plain identifier.
    pub(super) fn parse_call_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.cur_token().clone();

        let Expression::Identifier(callee) = left else {
            return Err(ParseError::CallTargetNotIdentifier { found: left.to_string() });
        };

        let arguments = self.parse_call_arguments()?;

        Ok(Expression::Call { token,
                              callee,
                              arguments })
    }

    /// Parses the comma-separated argument expressions of a call. The
    /// current token is the opening `(`; an empty list is allowed.
    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Ok(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(arguments)
    }
}

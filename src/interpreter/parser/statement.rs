use crate::{
    ast::{
        BlockStatement, ExpressionStatement, IdentifierExpression, ReturnStatement, Statement,
        VarStatement,
    },
    error::ParseError,
    interpreter::{
        lexer::token::TokenKind,
        parser::{core::{ParseResult, Parser}, precedence::Precedence},
    },
};

impl Parser {
    /// Parses a single statement, selected by the current token's kind.
    ///
    /// `var` and `return` begin their dedicated statement forms, `{` begins
    /// a free-standing block, and anything else is an expression statement.
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cur_token().kind() {
            TokenKind::Var => self.parse_var_statement().map(Statement::Var),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            TokenKind::LBrace => self.parse_block_statement().map(Statement::Block),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    /// Parses `var NAME = EXPR;`.
    ///
    /// # Errors
    /// - `MissingIdentifier` when no name follows `var`.
    /// - `EmptyVarValue` when nothing stands between `=` and `;`.
    /// - `UnexpectedToken` when `=` or the closing `;` is missing.
    fn parse_var_statement(&mut self) -> ParseResult<VarStatement> {
        let token = self.cur_token().clone();

        if !self.peek_token_is(TokenKind::Ident) {
            return Err(ParseError::MissingIdentifier);
        }
        self.next_token();
        let name = IdentifierExpression::new(self.cur_token().clone());

        self.expect_peek(TokenKind::Assign)?;

        // Move past `=` onto the first token of the value expression.
        self.next_token();
        if self.cur_token_is(TokenKind::Semicolon) {
            return Err(ParseError::EmptyVarValue { name: name.name.clone() });
        }

        let value = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Semicolon)?;

        Ok(VarStatement { token, name, value })
    }

    /// Parses `return EXPR;`.
    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        let token = self.cur_token().clone();

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Semicolon)?;

        Ok(ReturnStatement { token, value })
    }

    /// Parses a bare expression in statement position.
    ///
    /// Expression statements end with `;`, except when the expression is an
    /// `if` or a function literal; those own their own terminator rules and
    /// must not be followed by one.
    fn parse_expression_statement(&mut self) -> ParseResult<ExpressionStatement> {
        let token = self.cur_token().clone();
        let needs_semicolon = !matches!(token.kind(), TokenKind::If | TokenKind::Func);

        let expression = self.parse_expression(Precedence::Lowest)?;
        if needs_semicolon {
            self.expect_peek(TokenKind::Semicolon)?;
        }

        Ok(ExpressionStatement { token, expression })
    }

    /// Parses a brace-delimited block of statements.
    ///
    /// The current token must be the opening `{`; callers establish that.
    /// Statements are parsed until the matching `}`; running into the end
    /// of input instead is a missing-brace error, and a `;` directly after
    /// the block is a stray-semicolon error.
    pub(super) fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        let token = self.cur_token().clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.cur_token_is(TokenKind::RBrace) {
            if self.cur_token().is_eof() {
                return Err(ParseError::MissingClosingBrace);
            }

            statements.push(self.parse_statement()?);
            self.next_token();
        }

        if self.peek_token_is(TokenKind::Semicolon) {
            return Err(ParseError::StraySemicolonAfterBlock);
        }

        Ok(BlockStatement { token, statements })
    }
}

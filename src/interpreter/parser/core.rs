use std::collections::HashMap;

use crate::{
    ast::{Expression, Program},
    error::{ParseError, StatementError},
    interpreter::{
        lexer::{
            core::Lexer,
            token::{Token, TokenKind},
        },
        parser::precedence::{Precedence, precedence_of},
    },
};

/// Result type used by all parsing routines.
pub type ParseResult<T> = Result<T, ParseError>;

/// A handler that starts an expression at the current token.
pub type PrefixParseFn = fn(&mut Parser) -> ParseResult<Expression>;
/// A handler that extends an expression, with the current token as the
/// operator and the given expression as the left-hand side.
pub type InfixParseFn = fn(&mut Parser, Expression) -> ParseResult<Expression>;

/// The syntax analyzer: a Pratt (top-down operator precedence) parser.
///
/// The parser owns the lexer's token sequence and walks it with a current
/// token and one token of lookahead. Which routine parses what is decided
/// by two tables keyed on [`TokenKind`] and populated at construction: one
/// of prefix handlers, one of infix handlers. Operator precedence gates how
/// infix handlers fold expressions together.
///
/// Parsing runs to completion inside [`Parser::new`]; failed statements are
/// recorded (with the raw source slice they cover) and skipped, so one pass
/// reports every statement-level error in the input.
///
/// # Example
/// ```
/// use woclang::interpreter::{lexer::core::Lexer, parser::core::Parser};
///
/// let parser = Parser::new(Lexer::new("1 + 2 * 3;"));
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(parser.program().to_string(), "(1 + (2 * 3));");
/// ```
pub struct Parser {
    /// The token sequence, ending with the end-of-input token.
    tokens:     Vec<Token>,
    /// Index into `tokens` of the next token to read into the lookahead.
    position:   usize,
    /// The token being parsed.
    cur_token:  Token,
    /// One token of lookahead.
    peek_token: Token,
    /// Index of the first token of the statement being parsed.
    base_index: usize,
    /// The root of the tree being built.
    program:    Program,
    /// Statement errors collected during the parse.
    errors:     Vec<StatementError>,

    /// Prefix handlers, keyed by the kind a handler can start from.
    prefix_fns: HashMap<TokenKind, PrefixParseFn>,
    /// Infix handlers, keyed by operator kind.
    infix_fns:  HashMap<TokenKind, InfixParseFn>,
}

impl Parser {
    /// Parses the lexer's token sequence completely.
    ///
    /// The resulting program and error list are available as soon as the
    /// constructor returns. Callers are expected to have checked the
    /// lexer's own error list first; this type only consumes the valid
    /// token stream.
    #[must_use]
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Self { tokens:     lexer.into_tokens(),
                                position:   0,
                                cur_token:  Token::new(TokenKind::Eof, ""),
                                peek_token: Token::new(TokenKind::Eof, ""),
                                base_index: 0,
                                program:    Program::default(),
                                errors:     Vec::new(),
                                prefix_fns: HashMap::new(),
                                infix_fns:  HashMap::new(), };

        // Load cur_token and peek_token.
        parser.next_token();
        parser.next_token();

        parser.register_handlers();
        parser.parse_program();

        parser
    }

    /// The parsed program.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Consumes the parser, handing the program to the caller.
    #[must_use]
    pub fn into_program(self) -> Program {
        self.program
    }

    /// The statement errors collected during parsing.
    ///
    /// Consumers must check this list before trusting [`Self::program`];
    /// statements that produced an error are absent from it.
    #[must_use]
    pub fn errors(&self) -> &[StatementError] {
        &self.errors
    }

    /// Populates the prefix and infix handler tables.
    fn register_handlers(&mut self) {
        self.prefix_fns.insert(TokenKind::Ident, Self::parse_identifier);
        self.prefix_fns.insert(TokenKind::Num, Self::parse_integer_literal);
        self.prefix_fns.insert(TokenKind::True, Self::parse_boolean_literal);
        self.prefix_fns.insert(TokenKind::False, Self::parse_boolean_literal);
        self.prefix_fns.insert(TokenKind::Bang, Self::parse_prefix_expression);
        self.prefix_fns.insert(TokenKind::Minus, Self::parse_prefix_expression);
        self.prefix_fns.insert(TokenKind::LParen, Self::parse_grouped_expression);
        self.prefix_fns.insert(TokenKind::If, Self::parse_if_expression);
        self.prefix_fns.insert(TokenKind::Func, Self::parse_function_literal);

        self.infix_fns.insert(TokenKind::Plus, Self::parse_infix_expression);
        self.infix_fns.insert(TokenKind::Minus, Self::parse_infix_expression);
        self.infix_fns.insert(TokenKind::Asterisk, Self::parse_infix_expression);
        self.infix_fns.insert(TokenKind::Slash, Self::parse_infix_expression);
        self.infix_fns.insert(TokenKind::Lt, Self::parse_infix_expression);
        self.infix_fns.insert(TokenKind::Gt, Self::parse_infix_expression);
        self.infix_fns.insert(TokenKind::Le, Self::parse_infix_expression);
        self.infix_fns.insert(TokenKind::Ge, Self::parse_infix_expression);
        self.infix_fns.insert(TokenKind::Eq, Self::parse_infix_expression);
        self.infix_fns.insert(TokenKind::NotEq, Self::parse_infix_expression);
        self.infix_fns.insert(TokenKind::LParen, Self::parse_call_expression);
    }

    /// Parses statements until the end of input.
    ///
    /// A failed statement is recorded together with the joined literals of
    /// its tokens, then the parser skips ahead to the next statement
    /// boundary and keeps going.
    fn parse_program(&mut self) {
        while !self.cur_token.is_eof() {
            self.base_index = self.cur_index();
            match self.parse_statement() {
                Ok(statement) => self.program.statements.push(statement),
                Err(error) => {
                    self.record_statement_error(error);
                    self.synchronize();
                },
            }
            self.next_token();
        }
    }

    /// Parses an expression with the Pratt algorithm.
    ///
    /// The prefix handler for the current token produces the initial left
    /// expression. Then, while the lookahead is not a statement terminator
    /// and binds more strongly than `min_precedence`, the matching infix
    /// handler folds the left expression into a bigger one. Operators of
    /// equal precedence fail the strict comparison, which is exactly what
    /// makes them left-associative.
    pub(super) fn parse_expression(&mut self, min_precedence: Precedence)
                                   -> ParseResult<Expression> {
        let prefix = self.prefix_fns
                         .get(&self.cur_token.kind())
                         .copied()
                         .ok_or_else(|| ParseError::NoPrefixParser { token: self.describe_cur() })?;

        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::Semicolon) && min_precedence < self.peek_precedence() {
            let Some(infix) = self.infix_fns.get(&self.peek_token.kind()).copied() else {
                return Ok(left);
            };

            self.next_token();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    /// Advances the token window by one token.
    ///
    /// Once the lookahead reaches the end-of-input token it stays there, so
    /// parsing code never runs out of tokens to examine.
    pub(super) fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token,
                                           self.tokens
                                               .get(self.position)
                                               .cloned()
                                               .unwrap_or_else(|| Token::new(TokenKind::Eof, "")));
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// The current token.
    pub(super) const fn cur_token(&self) -> &Token {
        &self.cur_token
    }

    /// Whether the current token has the given kind.
    pub(super) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind() == kind
    }

    /// Whether the lookahead token has the given kind.
    pub(super) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind() == kind
    }

    /// Advances if the lookahead has the expected kind, errors otherwise.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_token_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected: kind,
                                              found:    self.describe_peek(), })
        }
    }

    /// The infix precedence of the current token.
    pub(super) fn cur_precedence(&self) -> Precedence {
        precedence_of(self.cur_token.kind())
    }

    /// The infix precedence of the lookahead token.
    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind())
    }

    /// A printable description of the current token.
    fn describe_cur(&self) -> String {
        describe(&self.cur_token)
    }

    /// A printable description of the lookahead token.
    fn describe_peek(&self) -> String {
        describe(&self.peek_token)
    }

    /// Index of the current token within the token sequence.
    ///
    /// The window was filled with two initial advances, so the current
    /// token always trails the read position by two.
    fn cur_index(&self) -> usize {
        self.position.saturating_sub(2)
    }

    /// Records a statement failure together with the raw literal range of
    /// the statement, from its first token to the current one.
    fn record_statement_error(&mut self, error: ParseError) {
        let statement = self.joined_literals(self.base_index, self.cur_index());
        self.errors.push(StatementError { statement, error });
    }

    /// Joins the literals of the tokens in `start..=end` with spaces.
    fn joined_literals(&self, start: usize, end: usize) -> String {
        let end = end.min(self.tokens.len().saturating_sub(1));
        if start > end {
            return String::new();
        }

        self.tokens[start..=end].iter()
                                .map(Token::literal)
                                .filter(|literal| !literal.is_empty())
                                .collect::<Vec<_>>()
                                .join(" ")
    }

    /// Skips ahead to the next statement boundary after a failure.
    fn synchronize(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token.is_eof() {
            self.next_token();
        }
    }
}

/// The token's literal, or a readable name when the literal is empty.
fn describe(token: &Token) -> String {
    if token.literal().is_empty() {
        token.kind().to_string()
    } else {
        token.literal().to_string()
    }
}

use std::fmt::Display;

use crate::interpreter::lexer::token::Token;

/// An identifier occurrence: a name plus the token it was read from.
///
/// Identifiers appear both as expressions in their own right and as the
/// name slots of declarations, function literals, and calls, so they get a
/// dedicated type instead of living only inside [`Expression`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierExpression {
    /// The identifier token.
    pub token: Token,
    /// The name text.
    pub name:  String,
}

impl IdentifierExpression {
    /// Creates an identifier node from its token.
    #[must_use]
    pub fn new(token: Token) -> Self {
        let name = token.literal().to_string();
        Self { token, name }
    }
}

impl Display for IdentifierExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An abstract syntax tree node representing an expression.
///
/// Each variant owns its children exclusively; the tree is finite and
/// acyclic, and every node retains the token that was current when the node
/// began parsing, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a name, such as `age`.
    Identifier(IdentifierExpression),
    /// An integer literal, such as `42`.
    IntegerLiteral {
        /// The number token.
        token: Token,
        /// The parsed 64-bit value.
        value: i64,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The keyword token.
        token: Token,
        /// The literal's truth value.
        value: bool,
    },
    /// A prefix operation, such as `!ok` or `-5`.
    Prefix {
        /// The operator token.
        token:    Token,
        /// The operator text (`!` or `-`).
        operator: String,
        /// The operand.
        right:    Box<Self>,
    },
    /// An infix operation, such as `a + b`.
    Infix {
        /// The operator token.
        token:    Token,
        /// The operator text.
        operator: String,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A conditional expression with an optional else chain.
    If {
        /// The `if` token.
        token:       Token,
        /// The condition inside the parentheses.
        condition:   Box<Self>,
        /// The block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// The else branch, if any.
        else_branch: Option<ElseExpression>,
    },
    /// A named function literal, such as `func add(x, y) { return x + y; }`.
    Function {
        /// The `func` token.
        token:      Token,
        /// The function's name.
        name:       IdentifierExpression,
        /// Ordered parameter names.
        parameters: Vec<IdentifierExpression>,
        /// The body block.
        body:       BlockStatement,
    },
    /// A call of a named function, such as `add(1, 2)`.
    Call {
        /// The `(` token that started the argument list.
        token:     Token,
        /// The function being called.
        callee:    IdentifierExpression,
        /// Ordered argument expressions.
        arguments: Vec<Self>,
    },
}

/// The `else` arm of an [`Expression::If`].
///
/// An else arm carries exactly one of two forms: a plain block, or another
/// `if` expression chained behind it (`else if ...`). The exclusivity is
/// carried by [`ElseBody`] being a two-variant enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElseExpression {
    /// The `else` token.
    pub token: Token,
    /// The arm's single body form.
    pub body:  ElseBody,
}

/// The two mutually exclusive forms an else arm can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElseBody {
    /// `else { ... }`
    Block(BlockStatement),
    /// `else if (...) ...`, always an [`Expression::If`].
    If(Box<Expression>),
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { operator,
                          left,
                          right,
                          .. } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       else_branch,
                       .. } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(else_exp) = else_branch {
                    write!(f, " {else_exp}")?;
                }
                Ok(())
            },
            Self::Function { name,
                             parameters,
                             body,
                             .. } => {
                let params = parameters.iter()
                                       .map(ToString::to_string)
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f, "func {name}({params}) {body}")
            },
            Self::Call { callee, arguments, .. } => {
                let args = arguments.iter()
                                    .map(ToString::to_string)
                                    .collect::<Vec<_>>()
                                    .join(", ");
                write!(f, "{callee}({args})")
            },
        }
    }
}

impl Display for ElseExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.body {
            ElseBody::Block(block) => write!(f, "else {block}"),
            ElseBody::If(next_if) => write!(f, "else {next_if}"),
        }
    }
}

/// An abstract syntax tree node representing a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A `var` declaration.
    Var(VarStatement),
    /// A `return` statement.
    Return(ReturnStatement),
    /// A bare expression used as a statement.
    Expression(ExpressionStatement),
    /// A free-standing brace-delimited block.
    Block(BlockStatement),
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var(stmt) => write!(f, "{stmt}"),
            Self::Return(stmt) => write!(f, "{stmt}"),
            Self::Expression(stmt) => write!(f, "{stmt}"),
            Self::Block(stmt) => write!(f, "{stmt}"),
        }
    }
}

/// A variable declaration: `var NAME = EXPR;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarStatement {
    /// The `var` keyword token.
    pub token: Token,
    /// The name being bound.
    pub name:  IdentifierExpression,
    /// The bound value expression.
    pub value: Expression,
}

impl Display for VarStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "var {} = {};", self.name, self.value)
    }
}

/// A return statement: `return EXPR;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    /// The `return` keyword token.
    pub token: Token,
    /// The returned value expression.
    pub value: Expression,
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "return {};", self.value)
    }
}

/// An expression in statement position.
///
/// Renders with a trailing `;` except when the expression is an `if` or a
/// function literal, which own their own terminator rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    /// The token the expression started with.
    pub token:      Token,
    /// The expression itself.
    pub expression: Expression,
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.expression {
            Expression::If { .. } | Expression::Function { .. } => {
                write!(f, "{}", self.expression)
            },
            _ => write!(f, "{};", self.expression),
        }
    }
}

/// A brace-delimited sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    /// The opening `{` token.
    pub token:      Token,
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }
        let body = self.statements
                       .iter()
                       .map(ToString::to_string)
                       .collect::<Vec<_>>()
                       .join(" ");
        write!(f, "{{ {body} }}")
    }
}

/// The root of a parsed program: its statements in source order.
///
/// # Example
/// ```
/// use woclang::parse;
///
/// let program = parse("1 + (2 + 3) + 4;").unwrap();
/// assert_eq!(program.to_string(), "((1 + (2 + 3)) + 4);");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self.statements
                       .iter()
                       .map(ToString::to_string)
                       .collect::<Vec<_>>()
                       .join(" ");
        write!(f, "{text}")
    }
}

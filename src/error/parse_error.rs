use crate::interpreter::lexer::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// The current token has no registered prefix handler.
    NoPrefixParser {
        /// Literal of the token nothing could start an expression with.
        token: String,
    },
    /// A specific token kind was required next but something else was found.
    UnexpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// Literal of the token actually found.
        found:    String,
    },
    /// A `var` declaration with no identifier between `var` and `=`.
    MissingIdentifier,
    /// A `var` declaration whose right-hand side is empty (`var x = ;`).
    EmptyVarValue {
        /// Name of the variable being declared.
        name: String,
    },
    /// An `if` whose condition is not wrapped in parentheses.
    MissingCondition,
    /// An `else` followed by neither `if` nor a block.
    DanglingElse,
    /// A block that reached end of input before its closing `}`.
    MissingClosingBrace,
    /// A block followed by a `;`, which the grammar forbids.
    StraySemicolonAfterBlock,
    /// A function literal without a name after `func`.
    MissingFunctionName,
    /// A function literal without a parameter list.
    MissingParameterList,
    /// A function literal without a body block.
    MissingFunctionBody,
    /// A call whose target expression is not a plain identifier.
    CallTargetNotIdentifier {
        /// Rendered form of the non-identifier callee.
        found: String,
    },
    /// An integer literal that does not fit in a 64-bit signed value.
    IntegerOverflow {
        /// The out-of-range literal text.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPrefixParser { token } => {
                write!(f, "No parser for token '{token}'.")
            },

            Self::UnexpectedToken { expected, found } => {
                write!(f, "Expected '{expected}', found '{found}' instead.")
            },

            Self::MissingIdentifier => {
                write!(f, "Variable declaration is missing its identifier.")
            },

            Self::EmptyVarValue { name } => {
                write!(f, "Variable '{name}' is declared without a value.")
            },

            Self::MissingCondition => {
                write!(f, "'if' condition must be wrapped in parentheses: missing '('.")
            },

            Self::DanglingElse => {
                write!(f, "'else' must be followed by 'if' or a block.")
            },

            Self::MissingClosingBrace => write!(f, "Block is missing its closing '}}'."),

            Self::StraySemicolonAfterBlock => {
                write!(f, "A block must not be followed by ';'.")
            },

            Self::MissingFunctionName => write!(f, "Function literal is missing its name."),

            Self::MissingParameterList => {
                write!(f, "Function literal is missing its parameter list: missing '('.")
            },

            Self::MissingFunctionBody => write!(f, "Function literal is missing its body block."),

            Self::CallTargetNotIdentifier { found } => {
                write!(f, "Only identifiers can be called, found '{found}' instead.")
            },

            Self::IntegerOverflow { literal } => {
                write!(f, "Integer literal '{literal}' does not fit in 64 bits.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// A parse failure annotated with the raw text of the statement it occurred
/// in.
///
/// The parser recovers at statement granularity; when a statement fails it
/// joins the literals of every token from the statement's first token up to
/// the point of failure, so the report can show the offending source slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementError {
    /// Joined token literals of the failed statement.
    pub statement: String,
    /// The underlying parse error.
    pub error:     ParseError,
}

impl std::fmt::Display for StatementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.statement.is_empty() {
            write!(f, "{}", self.error)
        } else {
            write!(f, "In statement ({}): {}", self.statement, self.error)
        }
    }
}

impl std::error::Error for StatementError {}

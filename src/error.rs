/// Lexical errors.
///
/// Defines the error values the lexer records while scanning: illegal
/// characters, identifiers that start with a digit, and symbols missing
/// from the token table. Lexical errors carry the offending literal and its
/// character positions.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// an AST, plus [`StatementError`], which pairs an error with the raw text
/// of the statement it occurred in.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised while evaluating an AST,
/// such as division by zero.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::{ParseError, StatementError};
pub use runtime_error::RuntimeError;

/// Aggregates the per-stage error lists for whole-pipeline entry points.
///
/// Each pipeline stage collects its own errors; this enum is what the
/// library's convenience functions return when a stage refuses to hand its
/// output downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterError {
    /// The lexer recorded one or more lexical errors.
    Lex(Vec<LexError>),
    /// The parser recorded one or more statement errors.
    Parse(Vec<StatementError>),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Parse(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for InterpreterError {}

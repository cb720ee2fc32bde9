//! # woclang
//!
//! woclang is a small interpreted programming language written in Rust.
//! Source text flows through the classic three-stage pipeline: a
//! DFA-based lexer produces tokens, a Pratt parser builds an abstract
//! syntax tree, and a tree-walking evaluator reduces the tree to a value.
//! Each stage collects its errors into a list so one pass can report
//! everything wrong with the input.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use crate::{
    ast::Program,
    error::InterpreterError,
    interpreter::{evaluator::core::Evaluator, lexer::core::Lexer, parser::core::Parser, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and traversed by the evaluator; every node keeps the token it
/// started from, and every node renders back to source text.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches the originating token to each node for error reporting.
/// - Renders nodes as re-parseable source via `Display`.
pub mod ast;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code. Errors are collected values, not panics: each stage
/// exposes its list, and downstream stages refuse to run while upstream
/// errors exist.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches offending literals and positions for user feedback.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, and the value
/// representations to provide a complete runtime for source code. It
/// exposes the pipeline stages individually; the crate root adds the
/// whole-pipeline convenience functions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive shell.
///
/// Reads a line, runs the pipeline over it, and prints the printed program
/// and its value, or every collected error. Generic over the reader and
/// writer so it can be driven by tests.
pub mod repl;

/// Lexes and parses source text into a program.
///
/// The parser only runs when the lexer recorded no errors; the first stage
/// with errors claims the result.
///
/// # Errors
/// [`InterpreterError::Lex`] or [`InterpreterError::Parse`] carrying every
/// error the failing stage collected.
///
/// # Examples
/// ```
/// use woclang::parse;
///
/// let program = parse("var age = age_value;").unwrap();
/// assert_eq!(program.to_string(), "var age = age_value;");
///
/// // A digit-led identifier is caught by the lexer.
/// assert!(parse("1abc;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, InterpreterError> {
    let lexer = Lexer::new(source);
    if !lexer.errors().is_empty() {
        return Err(InterpreterError::Lex(lexer.errors().to_vec()));
    }

    let parser = Parser::new(lexer);
    if !parser.errors().is_empty() {
        return Err(InterpreterError::Parse(parser.errors().to_vec()));
    }

    Ok(parser.into_program())
}

/// Runs the whole pipeline over source text and returns the final value.
///
/// # Errors
/// Returns the failing stage's errors: lexical, parse, or runtime.
///
/// # Examples
/// ```
/// use woclang::interpret;
///
/// let value = interpret("(5 + 10 * 2 + 15 / 3) * 2 + -10;").unwrap();
/// assert_eq!(value.to_string(), "50");
///
/// // Division by zero surfaces as a runtime error.
/// assert!(interpret("1 / 0;").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Rc<Value>, InterpreterError> {
    let program = parse(source)?;

    Evaluator::new().eval_program(&program)
                    .map_err(InterpreterError::Runtime)
}

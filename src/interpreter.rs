/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, and produces runtime values.
/// It is the execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Interns the canonical `true`/`false`/`null` values and keeps identity
///   semantics for them.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer is an explicit deterministic finite automaton over the decoded
/// characters of the source. It produces a stream of tokens for meaningful
/// language elements (identifiers, numbers, operators, delimiters, and
/// keywords) and is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into kind/literal tokens.
/// - Recognizes keywords through per-character state chains with an
///   identifier fallback.
/// - Records lexical errors for invalid or malformed input without
///   aborting the scan.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt parser: prefix and infix handler tables keyed by
/// token kind, with numeric operator precedence steering how expressions
/// fold together. It processes the token stream produced by the lexer and
/// constructs the tree the evaluator walks.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting errors with the offending statement's
///   source text.
/// - Recovers at statement granularity so one pass reports every error.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the [`value::Value`] enum covering integers, booleans, and
/// null, together with its display form.
pub mod value;

/// Infix operator evaluation.
///
/// Integer arithmetic and comparison, plus the identity-based `==`/`!=`
/// fallback for non-integer operands.
pub mod binary;
/// Core evaluation logic and state.
///
/// Contains the [`core::Evaluator`] with its interned singletons, the
/// structural dispatch over statements and expressions, conditionals, and
/// truthiness.
pub mod core;
/// Prefix operator evaluation.
///
/// The `!` and `-` tables.
pub mod unary;

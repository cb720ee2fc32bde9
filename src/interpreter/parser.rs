/// Core parsing logic and state.
///
/// Contains the [`core::Parser`] itself: the token window, the prefix and
/// infix handler tables, the precedence-gated expression algorithm, and
/// statement-granular error collection and recovery.
pub mod core;
/// Expression handlers.
///
/// The prefix handlers (literals, identifiers, unary operators, grouping,
/// `if`, function literals) and infix handlers (binary operators, calls)
/// that the parser's tables dispatch to.
pub mod expression;
/// Operator precedence.
///
/// The ordered [`precedence::Precedence`] levels and the table assigning
/// one to each infix-capable token kind.
pub mod precedence;
/// Statement parsing.
///
/// Dispatches on the leading token of each statement and parses the `var`,
/// `return`, block, and expression statement forms.
pub mod statement;

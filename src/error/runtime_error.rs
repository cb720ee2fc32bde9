#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Most type mismatches evaluate to the null value rather than erroring;
/// division by zero is the one operation with no meaningful result at all.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The dividend of the failed division.
        dividend: i64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => {
                write!(f, "Division by zero: {dividend} / 0.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}

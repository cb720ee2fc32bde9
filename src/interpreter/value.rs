/// Represents a runtime value produced by the evaluator.
///
/// Booleans and null are canonicalised: the evaluator interns one shared
/// instance of `true`, `false`, and `Null` and hands out clones of those
/// `Rc`s, so identity comparison (`Rc::ptr_eq`) is meaningful on them.
/// Integers are allocated per result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean, always one of the two interned instances.
    Boolean(bool),
    /// The null value, always the single interned instance.
    Null,
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
        }
    }
}

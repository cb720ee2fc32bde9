use std::rc::Rc;

use crate::interpreter::{evaluator::core::Evaluator, value::Value};

impl Evaluator {
    /// Evaluates a prefix operation on an already-evaluated operand.
    ///
    /// - `!` inverts by identity: the interned `true` becomes `false`, the
    ///   interned `false` and `null` become `true`, and anything else
    ///   (every integer) becomes `false`.
    /// - `-` negates integers; on any other operand the result is null.
    /// - Unknown operators produce null.
    ///
    /// # Example
    /// ```
    /// use woclang::interpret;
    ///
    /// assert_eq!(interpret("!!5;").unwrap().to_string(), "true");
    /// assert_eq!(interpret("-5;").unwrap().to_string(), "-5");
    /// ```
    #[must_use]
    pub fn eval_prefix(&self, operator: &str, right: &Rc<Value>) -> Rc<Value> {
        match operator {
            "!" => self.eval_bang(right),
            "-" => self.eval_negate(right),
            _ => self.null(),
        }
    }

    /// The `!` table, decided by identity against the interned singletons.
    fn eval_bang(&self, right: &Rc<Value>) -> Rc<Value> {
        if Rc::ptr_eq(right, &self.true_value()) {
            self.bool_value(false)
        } else if Rc::ptr_eq(right, &self.false_value()) || Rc::ptr_eq(right, &self.null()) {
            self.bool_value(true)
        } else {
            self.bool_value(false)
        }
    }

    /// Integer negation; null for non-integers. Negation wraps on
    /// `i64::MIN`, like the rest of the integer arithmetic.
    fn eval_negate(&self, right: &Rc<Value>) -> Rc<Value> {
        match **right {
            Value::Integer(value) => Rc::new(Value::Integer(value.wrapping_neg())),
            _ => self.null(),
        }
    }
}

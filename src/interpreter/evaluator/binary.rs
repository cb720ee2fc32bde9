use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates an infix operation on two already-evaluated operands.
    ///
    /// Two integers go through integer arithmetic and comparison. For any
    /// other operand mix, `==` and `!=` fall back to identity comparison of
    /// the operands (meaningful because booleans and null are interned),
    /// and every other operator produces null.
    ///
    /// # Errors
    /// [`RuntimeError::DivisionByZero`] when dividing an integer by zero.
    ///
    /// # Example
    /// ```
    /// use woclang::interpret;
    ///
    /// assert_eq!(interpret("(1 < 2) == true;").unwrap().to_string(), "true");
    /// assert_eq!(interpret("true + true;").unwrap().to_string(), "null");
    /// ```
    pub fn eval_infix(&self,
                      operator: &str,
                      left: &Rc<Value>,
                      right: &Rc<Value>)
                      -> EvalResult<Rc<Value>> {
        if let (Value::Integer(l), Value::Integer(r)) = (&**left, &**right) {
            return self.eval_integer_infix(operator, *l, *r);
        }

        match operator {
            "==" => Ok(self.bool_value(Rc::ptr_eq(left, right))),
            "!=" => Ok(self.bool_value(!Rc::ptr_eq(left, right))),
            _ => Ok(self.null()),
        }
    }

    /// Integer arithmetic and comparison.
    ///
    /// `+ - * /` stay in the integers, with wrapping two's-complement
    /// semantics; `/` truncates toward zero. The four listed comparisons
    /// produce the canonical booleans; anything else is null.
    fn eval_integer_infix(&self, operator: &str, left: i64, right: i64) -> EvalResult<Rc<Value>> {
        match operator {
            "+" => Ok(Rc::new(Value::Integer(left.wrapping_add(right)))),
            "-" => Ok(Rc::new(Value::Integer(left.wrapping_sub(right)))),
            "*" => Ok(Rc::new(Value::Integer(left.wrapping_mul(right)))),
            "/" => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { dividend: left });
                }
                Ok(Rc::new(Value::Integer(left.wrapping_div(right))))
            },
            "<" => Ok(self.bool_value(left < right)),
            ">" => Ok(self.bool_value(left > right)),
            "==" => Ok(self.bool_value(left == right)),
            "!=" => Ok(self.bool_value(left != right)),
            _ => Ok(self.null()),
        }
    }
}

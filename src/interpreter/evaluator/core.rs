use std::rc::Rc;

use crate::{
    ast::{BlockStatement, ElseBody, ElseExpression, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The tree-walking evaluator.
///
/// Reduces an AST to a [`Value`] by structural recursion. The evaluator
/// interns the three canonical values `true`, `false`, and `null` at
/// construction; every boolean or null result aliases one of them, which is
/// what gives the `==`/`!=` fallback its identity semantics.
///
/// # Example
/// ```
/// use woclang::{interpreter::evaluator::core::Evaluator, parse};
///
/// let program = parse("(5 + 10 * 2 + 15 / 3) * 2 + -10;").unwrap();
/// let value = Evaluator::new().eval_program(&program).unwrap();
///
/// assert_eq!(value.to_string(), "50");
/// ```
pub struct Evaluator {
    /// The interned `true`.
    true_value:  Rc<Value>,
    /// The interned `false`.
    false_value: Rc<Value>,
    /// The interned `null`.
    null_value:  Rc<Value>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with freshly interned singletons.
    #[must_use]
    pub fn new() -> Self {
        Self { true_value:  Rc::new(Value::Boolean(true)),
               false_value: Rc::new(Value::Boolean(false)),
               null_value:  Rc::new(Value::Null), }
    }

    /// Evaluates a whole program; the result is the value of its last
    /// statement, or null for an empty program.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] when any evaluated operation fails, such
    /// as a division by zero.
    pub fn eval_program(&self, program: &Program) -> EvalResult<Rc<Value>> {
        self.eval_statements(&program.statements)
    }

    /// Evaluates a single statement.
    ///
    /// `var` declarations and `return` statements parse but need an
    /// environment to mean anything; the runtime does not carry one yet, so
    /// they evaluate to null.
    pub fn eval_statement(&self, statement: &Statement) -> EvalResult<Rc<Value>> {
        match statement {
            Statement::Expression(stmt) => self.eval_expression(&stmt.expression),
            Statement::Block(block) => self.eval_statements(&block.statements),
            Statement::Var(_) | Statement::Return(_) => Ok(self.null()),
        }
    }

    /// Evaluates an expression.
    pub fn eval_expression(&self, expression: &Expression) -> EvalResult<Rc<Value>> {
        match expression {
            Expression::IntegerLiteral { value, .. } => Ok(Rc::new(Value::Integer(*value))),
            Expression::BooleanLiteral { value, .. } => Ok(self.bool_value(*value)),
            Expression::Prefix { operator, right, .. } => {
                let right = self.eval_expression(right)?;
                Ok(self.eval_prefix(operator, &right))
            },
            Expression::Infix { operator,
                                left,
                                right,
                                .. } => {
                let left = self.eval_expression(left)?;
                let right = self.eval_expression(right)?;
                self.eval_infix(operator, &left, &right)
            },
            Expression::If { condition,
                             consequence,
                             else_branch,
                             .. } => self.eval_if(condition, consequence, else_branch.as_ref()),
            // Names and calls need an environment; see eval_statement.
            Expression::Identifier(_) | Expression::Function { .. } | Expression::Call { .. } => {
                Ok(self.null())
            },
        }
    }

    /// Evaluates statements in order; the last value wins, null when there
    /// are none.
    fn eval_statements(&self, statements: &[Statement]) -> EvalResult<Rc<Value>> {
        let mut result = self.null();
        for statement in statements {
            result = self.eval_statement(statement)?;
        }

        Ok(result)
    }

    /// Evaluates an `if` expression: the consequence when the condition is
    /// truthy, the else arm when present, null otherwise.
    fn eval_if(&self,
               condition: &Expression,
               consequence: &BlockStatement,
               else_branch: Option<&ElseExpression>)
               -> EvalResult<Rc<Value>> {
        let condition = self.eval_expression(condition)?;

        if self.is_truthy(&condition) {
            self.eval_statements(&consequence.statements)
        } else if let Some(else_exp) = else_branch {
            self.eval_else(else_exp)
        } else {
            Ok(self.null())
        }
    }

    /// Evaluates an else arm: its block, or the chained `if`.
    fn eval_else(&self, else_exp: &ElseExpression) -> EvalResult<Rc<Value>> {
        match &else_exp.body {
            ElseBody::Block(block) => self.eval_statements(&block.statements),
            ElseBody::If(next_if) => self.eval_expression(next_if),
        }
    }

    /// Whether a value counts as true in a condition.
    ///
    /// The interned `false` and `null` are falsy; everything else,
    /// including every integer, is truthy. The test is by identity, like
    /// the equality fallback.
    #[must_use]
    pub fn is_truthy(&self, value: &Rc<Value>) -> bool {
        !(Rc::ptr_eq(value, &self.false_value) || Rc::ptr_eq(value, &self.null_value))
    }

    /// The interned boolean for `value`.
    #[must_use]
    pub fn bool_value(&self, value: bool) -> Rc<Value> {
        if value {
            Rc::clone(&self.true_value)
        } else {
            Rc::clone(&self.false_value)
        }
    }

    /// The interned null.
    #[must_use]
    pub fn null(&self) -> Rc<Value> {
        Rc::clone(&self.null_value)
    }

    /// The interned `true`; exposed for identity tests.
    #[must_use]
    pub fn true_value(&self) -> Rc<Value> {
        Rc::clone(&self.true_value)
    }

    /// The interned `false`; exposed for identity tests.
    #[must_use]
    pub fn false_value(&self) -> Rc<Value> {
        Rc::clone(&self.false_value)
    }
}

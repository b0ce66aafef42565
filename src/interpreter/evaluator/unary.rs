use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Not`: boolean negation; the operand must be a boolean.
    /// - `Negate`: numeric negation for integers (checked) and reals.
    ///
    /// # Example
    /// ```
    /// use proofscript::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::Bool(false), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(line)?)),
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
                Value::Real(r) => Ok(Value::Real(-r)),
                Value::Bool(_) => {
                    Err(RuntimeError::TypeError { details: "Cannot negate a boolean".to_string(),
                                                  line })
                },
            },
        }
    }
}

use crate::{
    ast::ArithmeticOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// Both operands must be numbers; booleans are a distinct kind and are
    /// never promoted. Exponentiation is routed to `eval_pow`, everything else
    /// to `eval_scalar_op`.
    ///
    /// # Example
    /// ```
    /// use proofscript::{
    ///     ast::ArithmeticOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Evaluator::eval_arithmetic(ArithmeticOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let result = Evaluator::eval_arithmetic(ArithmeticOperator::Add, &left, &Value::Bool(true), 1);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_arithmetic(op: ArithmeticOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        if !left.is_numeric() || !right.is_numeric() {
            return Err(RuntimeError::TypeError { details: format!("Cannot use {op} on {} and {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line });
        }

        match op {
            ArithmeticOperator::Pow => Self::eval_pow(left, right, line),
            _ => Self::eval_scalar_op(op, left, right, line),
        }
    }
}

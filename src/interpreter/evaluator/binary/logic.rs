use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates a short-circuiting logical operation.
    ///
    /// The left operand is always evaluated and must be a boolean. `and`
    /// returns it unchanged when it is `false`, `or` when it is `true`; in
    /// both cases the right operand is never evaluated, so any assignment in
    /// it has no effect. Otherwise the right operand is evaluated, must also
    /// be a boolean, and is the result.
    ///
    /// # Example
    /// ```
    /// use proofscript::{
    ///     ast::{Expr, LogicalOperator},
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let mut evaluator = Evaluator::new();
    ///
    /// // false and (x = 1)
    /// let left = Expr::Literal { value: false.into(),
    ///                            line:  1, };
    /// let right = Expr::Assignment { name:  "x".into(),
    ///                                value: Box::new(Expr::Literal { value: 1.into(),
    ///                                                                line:  1, }),
    ///                                line:  1, };
    ///
    /// let result = evaluator.eval_logic(LogicalOperator::And, &left, &right, 1);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// assert!(!evaluator.environment().contains("x"));
    /// ```
    pub fn eval_logic(&mut self,
                      op: LogicalOperator,
                      left: &Expr,
                      right: &Expr,
                      line: usize)
                      -> EvalResult<Value> {
        let left_value = self.eval_child(left, line)?;
        let decided = match op {
            LogicalOperator::And => !left_value.as_bool(line)?,
            LogicalOperator::Or => left_value.as_bool(line)?,
        };
        if decided {
            return Ok(left_value);
        }

        let right_value = self.eval_child(right, line)?;
        right_value.as_bool(line)?;
        Ok(right_value)
    }
}

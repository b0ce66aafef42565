use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::LoopGuard,
        },
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates a `for` loop over an inclusive integer range.
    ///
    /// `for i in start to end { body }` evaluates `start` and then `end`
    /// exactly once, before the first iteration; both must be integers. The
    /// loop variable is then bound to `start`, `start + 1`, ..., `end` in the
    /// shared environment, and the body runs once per value. Ranges only
    /// ascend: when `start > end` the body never runs and the loop variable is
    /// left as it was.
    ///
    /// After the loop the variable keeps its last value. Assigning to it
    /// inside the body does not change which values are visited.
    ///
    /// Every iteration counts against the configured ceiling, checked after
    /// the loop variable is bound and before the body runs.
    ///
    /// # Returns
    /// The value of the last body execution, or `None` if the loop did not
    /// run.
    ///
    /// # Example
    /// ```
    /// use proofscript::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let mut evaluator = Evaluator::new();
    ///
    /// // for i in 1 to 3 { i }
    /// let start = Expr::Literal { value: 1.into(),
    ///                             line:  1, };
    /// let end = Expr::Literal { value: 3.into(),
    ///                           line:  1, };
    /// let body = Expr::Block { statements: vec![Expr::Variable { name: "i".into(),
    ///                                                            line: 1, }],
    ///                          line:       1, };
    ///
    /// let result = evaluator.eval_for("i", &start, &end, &body, 1).unwrap();
    ///
    /// assert_eq!(result, Some(Value::Integer(3)));
    /// assert_eq!(evaluator.environment().get("i"), Some(&Value::Integer(3)));
    /// ```
    pub fn eval_for(&mut self,
                    var: &str,
                    start: &Expr,
                    end: &Expr,
                    body: &Expr,
                    line: usize)
                    -> EvalResult<Option<Value>> {
        let start_value = self.eval_child(start, line)?.as_integer(line)?;
        let end_value = self.eval_child(end, line)?.as_integer(line)?;

        let mut guard = LoopGuard::new(self.config().max_iterations, line);
        let mut last_value = None;

        for i in start_value..=end_value {
            self.environment_mut().assign(var, Value::Integer(i));
            guard.tick()?;
            last_value = self.eval(body)?;
        }

        tracing::debug!(line, var, iterations = guard.count(), "for loop finished");
        Ok(last_value)
    }
}

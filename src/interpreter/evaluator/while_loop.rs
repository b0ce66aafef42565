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
    /// Evaluates a `while` loop.
    ///
    /// The condition is evaluated before every iteration and must be a
    /// boolean. Each time it holds, the iteration is counted against the
    /// configured ceiling and then the body runs. The value of the last body
    /// execution is returned, or `None` if the body never ran.
    ///
    /// # Errors
    /// `LoopLimitExceeded` when the body would run more than
    /// `max_iterations` times. The error aborts the whole program.
    ///
    /// # Example
    /// ```
    /// use proofscript::{
    ///     ast::Expr,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::{EvalConfig, Evaluator},
    /// };
    ///
    /// let mut evaluator = Evaluator::with_config(EvalConfig { max_iterations: 5 });
    ///
    /// // while true { }
    /// let condition = Expr::Literal { value: true.into(),
    ///                                 line:  1, };
    /// let body = Expr::Block { statements: vec![],
    ///                          line:       1, };
    ///
    /// assert_eq!(evaluator.eval_while(&condition, &body, 1),
    ///            Err(RuntimeError::LoopLimitExceeded { limit: 5, line: 1 }));
    /// ```
    pub fn eval_while(&mut self,
                      condition: &Expr,
                      body: &Expr,
                      line: usize)
                      -> EvalResult<Option<Value>> {
        let mut guard = LoopGuard::new(self.config().max_iterations, line);
        let mut last_value = None;

        while self.eval_child(condition, line)?.as_bool(line)? {
            guard.tick()?;
            last_value = self.eval(body)?;
        }

        tracing::debug!(line, iterations = guard.count(), "while loop finished");
        Ok(last_value)
    }
}

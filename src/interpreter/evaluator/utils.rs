use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Operators, conditions and loop bounds all need an actual value; a
    /// statement that yields nothing (such as a parenthesised assignment) in
    /// one of those positions is a `MissingValue` error.
    pub fn eval_child(&mut self, expr: &Expr, line: usize) -> EvalResult<Value> {
        self.eval(expr)?
            .ok_or(RuntimeError::MissingValue { line })
    }

    /// Looks up a variable by name.
    ///
    /// # Errors
    /// `UnknownVariable` if the name was never assigned. There is no default
    /// value.
    ///
    /// # Example
    /// ```
    /// use proofscript::{error::RuntimeError, interpreter::evaluator::core::Evaluator};
    ///
    /// let evaluator = Evaluator::new();
    ///
    /// assert_eq!(evaluator.eval_variable("never_assigned", 3),
    ///            Err(RuntimeError::UnknownVariable { name: "never_assigned".into(),
    ///                                                line: 3, }));
    /// ```
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment()
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_owned(),
                                                           line })
    }

    /// Evaluates the right-hand side and binds it to `name`.
    ///
    /// The value is computed first, so a failing right-hand side leaves the
    /// environment untouched.
    pub fn eval_assignment(&mut self, name: &str, value: &Expr, line: usize) -> EvalResult<()> {
        let value = self.eval_child(value, line)?;
        self.environment_mut().assign(name, value);
        Ok(())
    }

    /// Evaluates a sequence of statements as a block.
    ///
    /// Blocks do not open a scope; every statement reads and writes the
    /// evaluator's single environment. Each statement is evaluated in order
    /// and the value of the final statement is returned, or `None` if the
    /// block is empty or its last statement produces nothing.
    pub fn eval_block(&mut self, statements: &[Expr]) -> EvalResult<Option<Value>> {
        let mut last = None;

        for statement in statements {
            tracing::trace!(line = statement.line_number(), "statement");
            last = self.eval(statement)?;
        }

        Ok(last)
    }

    /// Evaluates an `if` statement.
    ///
    /// The condition must be a boolean. The value of the taken branch is
    /// returned; with a false condition and no `else` the result is `None`.
    pub fn eval_if(&mut self,
                   condition: &Expr,
                   then_branch: &Expr,
                   else_branch: Option<&Expr>,
                   line: usize)
                   -> EvalResult<Option<Value>> {
        let cond = self.eval_child(condition, line)?.as_bool(line)?;

        let result = if cond {
            self.eval(then_branch)?
        } else if let Some(else_expr) = else_branch {
            self.eval(else_expr)?
        } else {
            None
        };

        Ok(result)
    }
}

/// Counts the iterations of one loop execution.
///
/// A fresh guard is created every time a `while` or `for` statement starts,
/// so nested loops and repeated executions of the same loop each get their
/// own budget.
#[derive(Debug)]
pub struct LoopGuard {
    limit: usize,
    count: usize,
    line:  usize,
}

impl LoopGuard {
    /// Starts counting at zero against `limit`.
    #[must_use]
    pub const fn new(limit: usize, line: usize) -> Self {
        Self { limit,
               count: 0,
               line }
    }

    /// Records one more iteration.
    ///
    /// # Errors
    /// `LoopLimitExceeded` once the count goes past the limit, which means the
    /// body runs at most `limit` times.
    ///
    /// # Example
    /// ```
    /// use proofscript::interpreter::evaluator::utils::LoopGuard;
    ///
    /// let mut guard = LoopGuard::new(2, 1);
    /// assert!(guard.tick().is_ok());
    /// assert!(guard.tick().is_ok());
    /// assert!(guard.tick().is_err());
    /// ```
    pub fn tick(&mut self) -> EvalResult<()> {
        self.count += 1;
        if self.count > self.limit {
            tracing::debug!(limit = self.limit, line = self.line, "loop guard tripped");
            return Err(RuntimeError::LoopLimitExceeded { limit: self.limit,
                                                         line:  self.line, });
        }
        Ok(())
    }

    /// Iterations recorded so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

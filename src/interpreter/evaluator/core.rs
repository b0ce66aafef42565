use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default ceiling on the number of iterations a single loop may run.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Settings fixed for the lifetime of one [`Evaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of iterations of any single `while` or `for` loop
    /// execution. Running past it aborts the program.
    pub max_iterations: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_iterations: DEFAULT_MAX_ITERATIONS, }
    }
}

/// Executes one program.
///
/// The evaluator owns the program's [`Environment`], which starts empty and is
/// dropped together with the evaluator. A new evaluator is built for every
/// run; nothing carries over between programs.
///
/// ## Usage
///
/// Most callers go through [`crate::interpret`]. Building the tree by hand
/// and calling [`Evaluator::eval`] is useful when the AST comes from
/// somewhere other than the bundled parser.
#[derive(Debug, Default)]
pub struct Evaluator {
    environment: Environment,
    config:      EvalConfig,
}

impl Evaluator {
    /// Creates an evaluator with an empty environment and the default
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with an empty environment and the given
    /// configuration.
    #[must_use]
    pub fn with_config(config: EvalConfig) -> Self {
        Self { environment: Environment::new(),
               config }
    }

    /// The configuration this evaluator was built with.
    #[must_use]
    pub const fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    pub(crate) const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Evaluates a node and returns its value.
    ///
    /// This is the main entry point for evaluation. The node kind decides the
    /// behavior: literals, variables, operators, assignments, conditionals,
    /// loops and blocks. The match is exhaustive, so every node kind the
    /// parser can build has a handler here.
    ///
    /// # Returns
    /// `Some(Value)` for nodes that produce a value, or `None` for
    /// assignments, empty blocks, loops whose body never ran and `if` without
    /// a taken branch.
    ///
    /// # Example
    /// ```
    /// use proofscript::{
    ///     ast::{ArithmeticOperator, Expr},
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let mut evaluator = Evaluator::new();
    ///
    /// // 6 / 3
    /// let expr = Expr::Arithmetic { op:    ArithmeticOperator::Div,
    ///                               left:  Box::new(Expr::Literal { value: 6.into(),
    ///                                                               line:  1, }),
    ///                               right: Box::new(Expr::Literal { value: 3.into(),
    ///                                                               line:  1, }),
    ///                               line:  1, };
    ///
    /// assert_eq!(evaluator.eval(&expr).unwrap(), Some(Value::Real(2.0)));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Literal { value, .. } => Ok(Some(Value::from(value))),
            Expr::Variable { name, line } => self.eval_variable(name, *line).map(Some),
            Expr::Arithmetic { op,
                               left,
                               right,
                               line, } => {
                let left = self.eval_child(left, *line)?;
                let right = self.eval_child(right, *line)?;
                Self::eval_arithmetic(*op, &left, &right, *line).map(Some)
            },
            Expr::Comparison { op,
                               left,
                               right,
                               line, } => {
                let left = self.eval_child(left, *line)?;
                let right = self.eval_child(right, *line)?;
                Self::eval_comparison(*op, &left, &right, *line).map(Some)
            },
            Expr::Logical { op,
                            left,
                            right,
                            line, } => self.eval_logic(*op, left, right, *line).map(Some),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval_child(expr, *line)?;
                Self::eval_unary(*op, &value, *line).map(Some)
            },
            Expr::Assignment { name, value, line } => {
                self.eval_assignment(name, value, *line)?;
                Ok(None)
            },
            Expr::If { condition,
                       then_branch,
                       else_branch,
                       line, } => {
                self.eval_if(condition, then_branch, else_branch.as_deref(), *line)
            },
            Expr::While { condition, body, line } => self.eval_while(condition, body, *line),
            Expr::For { var,
                        start,
                        end,
                        body,
                        line, } => self.eval_for(var, start, end, body, *line),
            Expr::Block { statements, .. } => self.eval_block(statements),
        }
    }

    /// Evaluates a sequence of top-level statements.
    ///
    /// Top-level statements run exactly like a block: in order, all of them,
    /// and the program's result is the value of the last one. An empty
    /// program yields `None`.
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
    /// let statements = vec![Expr::Assignment { name:  "a".to_string(),
    ///                                          value: Box::new(Expr::Literal { value: 10.into(),
    ///                                                                          line:  1, }),
    ///                                          line:  1, },
    ///                       Expr::Variable { name: "a".into(),
    ///                                        line: 2, }];
    ///
    /// assert_eq!(evaluator.eval_toplevel(&statements).unwrap(),
    ///            Some(Value::Integer(10)));
    /// assert_eq!(Evaluator::new().eval_toplevel(&[]).unwrap(), None);
    /// ```
    pub fn eval_toplevel(&mut self, statements: &[Expr]) -> EvalResult<Option<Value>> {
        tracing::debug!(statements = statements.len(),
                        max_iterations = self.config.max_iterations,
                        "evaluating program");
        self.eval_block(statements)
    }
}

/// Represents a literal value in the language.
///
/// Source code can only spell integers and booleans directly; real numbers
/// appear at run time as the result of division or negative exponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An abstract syntax tree (AST) node.
///
/// The language does not separate statements from expressions at the type
/// level: assignments, conditionals, loops and blocks are nodes like any other
/// and evaluate to an optional value. Each variant records the source line it
/// was parsed from for error reporting.
///
/// The tree is produced once by the parser and only ever borrowed by the
/// evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (integer or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An arithmetic operation (`+`, `-`, `*`, `/`, `^`, `//`).
    Arithmetic {
        /// The operator.
        op:    ArithmeticOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A comparison producing a boolean (`==`, `!=`, `<`, `>`, `<=`, `>=`).
    Comparison {
        /// The operator.
        op:    ComparisonOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A short-circuiting logical operation (`and`, `or`).
    Logical {
        /// The operator.
        op:    LogicalOperator,
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// Right operand, evaluated only when the left does not decide the
        /// result.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (`not`, `-`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Binds the value of an expression to a name.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Conditional statement with an optional `else` branch.
    If {
        /// The condition, which must evaluate to a boolean.
        condition:   Box<Self>,
        /// Block executed if the condition is true.
        then_branch: Box<Self>,
        /// Block (or chained `if`) executed if the condition is false.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// Condition-controlled loop.
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Counting loop over an inclusive, ascending integer range.
    For {
        /// The loop variable name.
        var:   String,
        /// The first value of the range.
        start: Box<Self>,
        /// The last value of the range (inclusive).
        end:   Box<Self>,
        /// The loop body.
        body:  Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An ordered sequence of statements.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use proofscript::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Arithmetic { line, .. }
            | Self::Comparison { line, .. }
            | Self::Logical { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::Assignment { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::For { line, .. }
            | Self::Block { line, .. } => *line,
        }
    }
}

/// Arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`), always produces a real.
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Floor division (`//`), rounds toward negative infinity.
    FloorDiv,
}

/// Comparison operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Logical operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Unary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`not x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl std::fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::FloorDiv => "//",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

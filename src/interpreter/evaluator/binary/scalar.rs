use crate::{
    ast::ArithmeticOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates a scalar arithmetic operation on two numbers.
    ///
    /// - `+`, `-`, `*` stay in integers when both operands are integers
    ///   (overflow is an error) and produce a real otherwise.
    /// - `/` is true division and always produces a real, even for evenly
    ///   divisible integers.
    /// - `//` rounds toward negative infinity; it produces an integer for two
    ///   integers and a floored real otherwise.
    ///
    /// Division and floor division by zero fail with `DivisionByZero`.
    ///
    /// # Example
    /// ```
    /// use proofscript::{
    ///     ast::ArithmeticOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let floor = Evaluator::eval_scalar_op(ArithmeticOperator::FloorDiv,
    ///                                       &Value::Integer(-7),
    ///                                       &Value::Integer(2),
    ///                                       1).unwrap();
    /// assert_eq!(floor, Value::Integer(-4));
    ///
    /// let div = Evaluator::eval_scalar_op(ArithmeticOperator::Div,
    ///                                     &Value::Integer(6),
    ///                                     &Value::Integer(3),
    ///                                     1).unwrap();
    /// assert_eq!(div, Value::Real(2.0));
    /// ```
    pub fn eval_scalar_op(op: ArithmeticOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use ArithmeticOperator::{Add, Div, FloorDiv, Mul, Pow, Sub};
        use Value::{Integer, Real};

        match op {
            Add | Sub | Mul => match (left, right) {
                (Integer(a), Integer(b)) => {
                    let result = match op {
                        Add => a.checked_add(*b),
                        Sub => a.checked_sub(*b),
                        _ => a.checked_mul(*b),
                    };
                    result.map(Integer).ok_or(RuntimeError::Overflow { line })
                },
                _ => {
                    let left = left.as_real(line)?;
                    let right = right.as_real(line)?;
                    Ok(Real(match op {
                                Add => left + right,
                                Sub => left - right,
                                _ => left * right,
                            }))
                },
            },
            Div => {
                let left = left.as_real(line)?;
                let right = right.as_real(line)?;
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                Ok(Real(left / right))
            },
            FloorDiv => match (left, right) {
                (Integer(a), Integer(b)) => floor_div_integer(*a, *b, line).map(Integer),
                _ => floor_div_real(left.as_real(line)?, right.as_real(line)?, line).map(Real),
            },
            Pow => Self::eval_pow(left, right, line),
        }
    }
}

/// Integer division rounding toward negative infinity.
///
/// `i64::MIN // -1` does not fit and is reported as an overflow.
fn floor_div_integer(a: i64, b: i64, line: usize) -> EvalResult<i64> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    let quotient = a.checked_div(b).ok_or(RuntimeError::Overflow { line })?;
    let remainder = a.checked_rem(b).ok_or(RuntimeError::Overflow { line })?;

    if remainder != 0 && (remainder < 0) != (b < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// Real floor division.
///
/// Derives the quotient from the remainder instead of flooring `a / b`
/// directly, so that `1 // 0.1` is `9.0` like the matching modulo, and not
/// `10.0`.
fn floor_div_real(a: f64, b: f64, line: usize) -> EvalResult<f64> {
    if b == 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    let remainder = a % b;
    let mut quotient = (a - remainder) / b;
    if remainder != 0.0 && (b < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }

    if quotient == 0.0 {
        return Ok(0.0_f64.copysign(a / b));
    }
    let mut floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored += 1.0;
    }
    Ok(floored)
}

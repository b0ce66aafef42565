use std::cmp::Ordering;

use crate::{
    ast::ComparisonOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

/// Equality by underlying value.
///
/// Integers and reals compare by exact numeric value, so `5 == 5.0` but
/// `9007199254740993` differs from the nearest real `9007199254740992.0`.
/// Booleans only equal booleans; `true` is never equal to `1`.
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    use Value::{Bool, Integer, Real};

    match (left, right) {
        (Integer(a), Integer(b)) => a == b,
        (Real(a), Real(b)) => a == b,
        (Integer(a), Real(b)) | (Real(b), Integer(a)) => {
            compare_integer_real(*a, *b) == Some(Ordering::Equal)
        },
        (Bool(a), Bool(b)) => a == b,
        (Bool(_), _) | (_, Bool(_)) => false,
    }
}

impl Evaluator {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any pair of values (see [`values_equal`]).
    /// Ordering operators require two numbers; two integers are compared
    /// exactly and mixed pairs by numeric value. A comparison involving NaN
    /// is false.
    ///
    /// # Example
    /// ```
    /// use proofscript::{
    ///     ast::ComparisonOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let result = Evaluator::eval_comparison(ComparisonOperator::Equal,
    ///                                         &Value::Integer(5),
    ///                                         &Value::Real(5.0),
    ///                                         1);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: ComparisonOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match op {
            Equal => values_equal(left, right),
            NotEqual => !values_equal(left, right),
            Less => numeric_ordering(op, left, right, line)?.is_some_and(Ordering::is_lt),
            Greater => numeric_ordering(op, left, right, line)?.is_some_and(Ordering::is_gt),
            LessEqual => numeric_ordering(op, left, right, line)?.is_some_and(Ordering::is_le),
            GreaterEqual => numeric_ordering(op, left, right, line)?.is_some_and(Ordering::is_ge),
        };

        Ok(Value::Bool(result))
    }
}

fn numeric_ordering(op: ComparisonOperator,
                    left: &Value,
                    right: &Value,
                    line: usize)
                    -> EvalResult<Option<Ordering>> {
    use Value::{Integer, Real};

    match (left, right) {
        (Integer(a), Integer(b)) => Ok(Some(a.cmp(b))),
        (Real(a), Real(b)) => Ok(a.partial_cmp(b)),
        (Integer(a), Real(b)) => Ok(compare_integer_real(*a, *b)),
        (Real(a), Integer(b)) => Ok(compare_integer_real(*b, *a).map(Ordering::reverse)),
        _ => Err(RuntimeError::TypeError { details: format!("Cannot use {op} on {} and {}",
                                                            left.type_name(),
                                                            right.type_name()),
                                           line }),
    }
}

/// 2^63, the first real above `i64::MAX`. Exactly representable.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Orders an integer against a real without rounding the integer.
///
/// `i64 as f64` is inexact above 2^53, so the real is floored and the floor is
/// compared as an integer. A real with a fractional part is greater than its
/// floor. NaN is unordered.
#[allow(clippy::cast_possible_truncation)]
fn compare_integer_real(int: i64, real: f64) -> Option<Ordering> {
    if real.is_nan() {
        return None;
    }

    let floor = real.floor();
    if floor >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if floor < -I64_BOUND {
        return Some(Ordering::Greater);
    }

    match int.cmp(&(floor as i64)) {
        Ordering::Equal if real != floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

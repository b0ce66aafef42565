use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer base with a non-negative integer exponent uses checked integer
    /// arithmetic. A negative exponent, or any real operand, is computed in
    /// floating point. Raising zero to a negative power is a division by
    /// zero, and a negative base with a fractional exponent has no real
    /// result.
    ///
    /// # Example
    /// ```
    /// use proofscript::interpreter::{evaluator::core::Evaluator, value::Value};
    ///
    /// let result = Evaluator::eval_pow(&Value::Integer(2), &Value::Integer(10), 1).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Evaluator::eval_pow(&Value::Integer(2), &Value::Integer(-1), 1).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, line: usize) -> EvalResult<Value> {
        use Value::{Integer, Real};

        if let (Integer(b), Integer(e)) = (base, exponent)
           && *e >= 0
        {
            return integer_pow(*b, *e, line).map(Integer);
        }

        let b = base.as_real(line)?;
        let e = exponent.as_real(line)?;

        if b == 0.0 && e < 0.0 {
            return Err(RuntimeError::DivisionByZero { line });
        }
        if b < 0.0 && e.is_finite() && e.fract() != 0.0 {
            return Err(RuntimeError::TypeError { details: format!("{b} cannot be raised to the fractional power {e}"),
                                                 line });
        }

        Ok(Real(b.powf(e)))
    }
}

fn integer_pow(base: i64, exponent: i64, line: usize) -> EvalResult<i64> {
    match base {
        0 => Ok(i64::from(exponent == 0)),
        1 => Ok(1),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => u32::try_from(exponent).ok()
                                    .and_then(|e| base.checked_pow(e))
                                    .ok_or(RuntimeError::Overflow { line }),
    }
}

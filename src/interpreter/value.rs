use crate::{ast::LiteralValue, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Values are immediate scalars. Statements that do not produce a value
/// (assignments, loops that never ran) are represented by `None` in the
/// evaluator's `Option<Value>` results rather than by a variant here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    /// Produced by true division, negative exponents and any arithmetic that
    /// involves another real.
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by literals, comparisons and logical operators. Conditions of
    /// `if` and `while` must evaluate to `Bool`.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers are converted with the usual rounding to the nearest
    /// representable `f64`.
    ///
    /// # Example
    /// ```
    /// use proofscript::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(1).unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_real(1).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            Self::Bool(_) => {
                Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                               self.type_name()),
                                              line })
            },
        }
    }

    /// Converts the value to `i64`, or returns an error if not an integer.
    pub const fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedInteger { line }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions and logical operators. Numbers have no truthiness:
    /// `0` is not `false`.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }

    /// Returns `true` for integers and reals.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Name of the value kind, as used in type error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Bool(_) => "boolean",
        }
    }
}

/// Formats values the way the command line prints results.
///
/// Integral reals keep a trailing `.0` so that `6 / 3` prints as `2.0` and is
/// distinguishable from the integer `2`. Reals of magnitude below `1e-4` or
/// from `1e16` upwards switch to scientific notation.
///
/// # Example
/// ```
/// use proofscript::interpreter::value::Value;
///
/// assert_eq!(Value::Real(2.0).to_string(), "2.0");
/// assert_eq!(Value::Real(0.5).to_string(), "0.5");
/// assert_eq!(Value::Real(1e-7).to_string(), "1e-07");
/// assert_eq!(Value::Real(1_152_921_504_606_846_976.0).to_string(),
///            "1.152921504606847e+18");
/// assert_eq!(Value::Integer(-4).to_string(), "-4");
/// assert_eq!(Value::Bool(true).to_string(), "true");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if r.is_nan() => write!(f, "nan"),
            Self::Real(r) if r.is_infinite() => {
                write!(f, "{}", if r.is_sign_positive() { "inf" } else { "-inf" })
            },
            Self::Real(r) if *r != 0.0 && !(1e-4..1e16).contains(&r.abs()) => {
                write_scientific(f, *r)
            },
            Self::Real(r) if r.fract() == 0.0 => write!(f, "{r:.1}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Writes `r` as `<mantissa>e<sign><exponent>` with at least two exponent
/// digits.
fn write_scientific(f: &mut std::fmt::Formatter<'_>, r: f64) -> std::fmt::Result {
    let formatted = format!("{r:e}");
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

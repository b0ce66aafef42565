use proofscript::{
    Value,
    error::{Error, RuntimeError},
    interpret,
};
use rstest::rstest;

fn eval(src: &str) -> Value {
    match interpret(src) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("{src} produced no value"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

#[rstest]
#[case("7 // 2", 3)]
#[case("-7 // 2", -4)]
#[case("7 // -2", -4)]
#[case("-7 // -2", 3)]
#[case("6 // 3", 2)]
#[case("0 // 5", 0)]
fn integer_floor_division(#[case] src: &str, #[case] expected: i64) {
    assert_eq!(eval(src), Value::Integer(expected));
}

#[rstest]
#[case("15 / 2 // 2", 3.0)]
#[case("-15 / 2 // 2", -4.0)]
#[case("7 // (1 / 2)", 14.0)]
#[case("1 / 4 // 1", 0.0)]
fn real_floor_division(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), Value::Real(expected));
}

#[rstest]
#[case("6 / 3", 2.0)]
#[case("1 / 4", 0.25)]
#[case("-9 / 2", -4.5)]
#[case("2 ^ -1", 0.5)]
#[case("4 ^ -2", 0.0625)]
#[case("(1 / 4) ^ 2", 0.0625)]
#[case("4 ^ (1 / 2)", 2.0)]
#[case("1 / 2 + 1", 1.5)]
#[case("3 * (1 / 2)", 1.5)]
fn real_results(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), Value::Real(expected));
}

#[rstest]
#[case("2 ^ 3 ^ 2", 64)]
#[case("2 * 3 ^ 2", 36)]
#[case("3 ^ 2 * 2", 18)]
#[case("-3 ^ 2", 9)]
#[case("2 ^ 2 - 1", 3)]
#[case("1 - 2 ^ 2", -3)]
fn power_shares_the_multiplicative_level(#[case] src: &str, #[case] expected: i64) {
    assert_eq!(eval(src), Value::Integer(expected));
}

#[rstest]
#[case("2 ^ 10", 1024)]
#[case("2 ^ 0", 1)]
#[case("0 ^ 0", 1)]
#[case("0 ^ 5", 0)]
#[case("1 ^ 9223372036854775807", 1)]
#[case("(-1) ^ 9223372036854775807", -1)]
#[case("(-1) ^ 9223372036854775806", 1)]
#[case("(-3) ^ 3", -27)]
fn integer_powers(#[case] src: &str, #[case] expected: i64) {
    assert_eq!(eval(src), Value::Integer(expected));
}

#[rstest]
#[case("6 / 3", "2.0")]
#[case("1 / 3", "0.3333333333333333")]
#[case("-6 / 4", "-1.5")]
#[case("2 ^ 62", "4611686018427387904")]
#[case("3 > 2", "true")]
#[case("-0", "0")]
#[case("2 ^ 60 / 1", "1.152921504606847e+18")]
#[case("1 / 10000000", "1e-07")]
#[case("-1 / 10000000", "-1e-07")]
#[case("1 / 10000", "0.0001")]
#[case("10 ^ 15 / 1", "1000000000000000.0")]
#[case("10 ^ 16 / 1", "1e+16")]
#[case("0 / 5", "0.0")]
fn display(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(eval(src).to_string(), expected);
}

#[rstest]
#[case("5 == 10 / 2", true)]
#[case("1 / 2 == 2 / 4", true)]
#[case("1 / 3 < 1 / 2", true)]
#[case("2 >= 4 / 2", true)]
#[case("0 == false", false)]
#[case("true == true", true)]
#[case("true != 1", true)]
#[case("9007199254740993 == 9007199254740993 / 1", false)]
#[case("9007199254740993 > 9007199254740993 / 1", true)]
#[case("9007199254740993 / 1 < 9007199254740993", true)]
#[case("9007199254740992 == 9007199254740992 / 1", true)]
#[case("9007199254740993 != 9007199254740993 / 1", true)]
#[case("9223372036854775807 < 9223372036854775807 / 1", true)]
#[case("-9223372036854775807 - 1 == (-9223372036854775807 - 1) / 1", true)]
#[case("-7 / 2 < -3", true)]
#[case("-7 / 2 > -4", true)]
#[case("-4 <= -7 / 2", true)]
#[case("3 >= 7 / 2", false)]
#[case("1 / 3 == 0", false)]
fn comparisons(#[case] src: &str, #[case] expected: bool) {
    assert_eq!(eval(src), Value::Bool(expected));
}

#[rstest]
#[case("9223372036854775807 + 1")]
#[case("m = -9223372036854775807 - 1\nm - 1")]
#[case("4294967296 * 4294967296")]
#[case("3 ^ 40")]
#[case("m = -9223372036854775807 - 1\nm // -1")]
fn overflow(#[case] src: &str) {
    assert!(matches!(interpret(src), Err(Error::Runtime(RuntimeError::Overflow { .. }))),
            "{src} should overflow");
}

#[rstest]
#[case("1 / 0")]
#[case("1 // 0")]
#[case("(1 / 2) // 0")]
#[case("5 / (3 - 3)")]
#[case("0 ^ -3")]
fn division_by_zero(#[case] src: &str) {
    assert!(matches!(interpret(src),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))),
            "{src} should divide by zero");
}

#[rstest]
#[case("(-8) ^ (1 / 3)")]
#[case("true * 2")]
#[case("2 ^ false")]
#[case("1 < true")]
fn type_errors(#[case] src: &str) {
    assert!(matches!(interpret(src), Err(Error::Runtime(RuntimeError::TypeError { .. }))),
            "{src} should be a type error");
}

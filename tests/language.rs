use std::fs;

use proofscript::{
    EvalConfig, Value,
    ast::Expr,
    error::{Error, ParseError, RuntimeError},
    interpret, interpret_with,
    interpreter::{evaluator::core::Evaluator, parser::core::parse_program},
};

fn assert_value(src: &str, expected: Value) {
    match interpret(src) {
        Ok(Some(value)) => assert_eq!(value, expected, "script: {src}"),
        Ok(None) => panic!("Script produced no value, expected {expected}:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_none(src: &str) {
    match interpret(src) {
        Ok(None) => {},
        Ok(Some(value)) => panic!("Script produced {value}, expected no value:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

/// Runs `src` on a fresh evaluator and hands it back for inspection, along
/// with the result.
fn run_and_keep(src: &str) -> (Evaluator, Result<Option<Value>, RuntimeError>) {
    let Expr::Block { statements, .. } = parse_program(src).expect("script should parse") else {
        panic!("programs parse to a block");
    };
    let mut evaluator = Evaluator::new();
    let result = evaluator.eval_toplevel(&statements);
    (evaluator, result)
}

fn runtime_error(src: &str) -> RuntimeError {
    match interpret(src) {
        Err(Error::Runtime(e)) => e,
        Err(Error::Parse(e)) => panic!("Expected a runtime error, got a parse error: {e}"),
        Ok(v) => panic!("Script succeeded with {v:?} but was expected to fail"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match interpret(src) {
        Err(Error::Parse(e)) => e,
        Err(Error::Runtime(e)) => panic!("Expected a parse error, got a runtime error: {e}"),
        Ok(v) => panic!("Script succeeded with {v:?} but was expected to fail"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_value("x = 1 + 2\nx", Value::Integer(3));
    assert_value("x = 7 * 9\nx", Value::Integer(63));
    assert_value("x = 8 - 5\nx", Value::Integer(3));
    assert_value("x = 10 / 4\nx", Value::Real(2.5));
    assert_value("x = 1; y = x + 1; y", Value::Integer(2));
}

#[test]
fn assignment_alone_has_no_value() {
    assert_none("x = 5");
    assert_none("");
    assert_none("# nothing here\n\n");
}

#[test]
fn reassignment_keeps_one_binding() {
    assert_value("x = 1\nx = x + 1\nx = x * 10\nx", Value::Integer(20));

    let (evaluator, result) = run_and_keep("x = 1\nx = x + 1\nx += 5\ny = x");
    assert_eq!(result, Ok(None));
    assert_eq!(evaluator.environment().len(), 2);
    assert_eq!(evaluator.environment().get("x"), Some(&Value::Integer(7)));
    assert_eq!(evaluator.environment().get("y"), Some(&Value::Integer(7)));

    let (evaluator, _) = run_and_keep("1 + 1");
    assert!(evaluator.environment().is_empty());
}

#[test]
fn compound_assignments() {
    assert_value("x = 2\nx += 3\nx", Value::Integer(5));
    assert_value("x = 7\nx -= 2\nx", Value::Integer(5));
    assert_value("x = 4\nx *= 2\nx", Value::Integer(8));
    assert_value("x = 9\nx /= 3\nx", Value::Real(3.0));
}

#[test]
fn compound_assignment_needs_existing_variable() {
    assert_eq!(runtime_error("x += 1"),
               RuntimeError::UnknownVariable { name: "x".into(),
                                               line: 1, });
}

#[test]
fn precedence_and_associativity() {
    assert_value("1 + 2 * 3", Value::Integer(7));
    assert_value("(1 + 2) * 3", Value::Integer(9));
    assert_value("10 - 4 - 3", Value::Integer(3));
    assert_value("2 ^ 3 ^ 2", Value::Integer(64));
    assert_value("2 ^ (3 ^ 2)", Value::Integer(512));
    assert_value("2 * 3 ^ 2", Value::Integer(36));
    assert_value("2 * (3 ^ 2)", Value::Integer(18));
    assert_value("8 / 2 ^ 2", Value::Real(16.0));
    assert_value("2 ^ 3 // 3", Value::Integer(2));
    assert_value("1 + 2 ^ 2", Value::Integer(5));
    assert_value("-2 ^ 2", Value::Integer(4));
    assert_value("-(2 ^ 2)", Value::Integer(-4));
    assert_value("2 ^ -1", Value::Real(0.5));
    assert_value("1 + 1 == 2", Value::Bool(true));
    assert_value("not 1 == 2", Value::Bool(true));
    assert_value("true or false and false", Value::Bool(true));
}

#[test]
fn logical_and_comparisons() {
    assert_value("2 < 3", Value::Bool(true));
    assert_value("3 > 2", Value::Bool(true));
    assert_value("2 <= 2", Value::Bool(true));
    assert_value("3 >= 4", Value::Bool(false));
    assert_value("2 != 3", Value::Bool(true));
    assert_value("not false", Value::Bool(true));
    assert_value("false == false", Value::Bool(true));
    assert_value("true and false", Value::Bool(false));
}

#[test]
fn mixed_numeric_equality() {
    assert_value("5 == 10 / 2", Value::Bool(true));
    assert_value("10 / 4 == 2", Value::Bool(false));
    assert_value("1 == true", Value::Bool(false));
    assert_value("1 != true", Value::Bool(true));
    assert_value("3 < 7 / 2", Value::Bool(true));
}

#[test]
fn ordering_booleans_is_a_type_error() {
    assert!(matches!(runtime_error("true < false"), RuntimeError::TypeError { line: 1, .. }));
}

#[test]
fn logic_is_short_circuiting() {
    assert_value("false and (x = 1)", Value::Bool(false));
    assert_value("true or (x = 1)", Value::Bool(true));
    assert_eq!(runtime_error("false and (x = 1)\nx"),
               RuntimeError::UnknownVariable { name: "x".into(),
                                               line: 2, });
    assert_eq!(runtime_error("true or (x = 1)\nx"),
               RuntimeError::UnknownVariable { name: "x".into(),
                                               line: 2, });
}

#[test]
fn evaluated_assignment_operand_has_no_value() {
    assert_eq!(runtime_error("true and (x = 1)"), RuntimeError::MissingValue { line: 1 });
}

#[test]
fn conditions_must_be_boolean() {
    assert_eq!(runtime_error("if 1 { 2 }"), RuntimeError::ExpectedBoolean { line: 1 });
    assert_eq!(runtime_error("x = 0\nwhile x { x = 1 }"),
               RuntimeError::ExpectedBoolean { line: 2 });
    assert_eq!(runtime_error("1 and true"), RuntimeError::ExpectedBoolean { line: 1 });
    assert_eq!(runtime_error("not 0"), RuntimeError::ExpectedBoolean { line: 1 });
}

#[test]
fn if_else_and_blocks() {
    assert_value("x = 5\nif x > 3 { y = 1 } else { y = 2 }\ny", Value::Integer(1));
    assert_value("x = 1\nif x > 3 { y = 1 } else { y = 2 }\ny", Value::Integer(2));
    assert_value("if 1 < 2 { 7 } else { 11 }", Value::Integer(7));
    assert_none("if false { 7 }");
    assert_value(r#"
        x = 0
        if x > 0 {
            sign = 1
        }
        else if x < 0 {
            sign = -1
        }
        else {
            sign = 0
        }
        sign
    "#,
                 Value::Integer(0));
}

#[test]
fn blocks_share_one_scope() {
    assert_value("if true { inner = 42 }\ninner", Value::Integer(42));
    assert_value("for i in 1 to 2 { last = i * 10 }\nlast + i", Value::Integer(22));
}

#[test]
fn for_loops_and_sum() {
    assert_value("s = 0\nfor i in 1 to 3 { s = s + i }\ns", Value::Integer(6));
    assert_value("s = 0\nfor i in 1 to 3 { s = s + i }\ni", Value::Integer(3));
    assert_value("s = 0\nfor i in 2 * 2 to 10 - 5 { s += i }\ns", Value::Integer(9));
    assert_value("n = 0\nfor i in 5 to 5 { n += 1 }\nn", Value::Integer(1));
}

#[test]
fn empty_for_range_runs_zero_times() {
    assert_value("n = 0\nfor i in 3 to 1 { n += 1 }\nn", Value::Integer(0));
    assert_eq!(runtime_error("for i in 3 to 1 { }\ni"),
               RuntimeError::UnknownVariable { name: "i".into(),
                                               line: 2, });
}

#[test]
fn for_bounds_are_evaluated_once() {
    assert_value("n = 3\ncount = 0\nfor i in 1 to n { n = 100; count += 1 }\ncount",
                 Value::Integer(3));
}

#[test]
fn for_bounds_must_be_integers() {
    assert_eq!(runtime_error("for i in 1 to 5 / 2 { }"),
               RuntimeError::ExpectedInteger { line: 1 });
    assert_eq!(runtime_error("for i in true to 3 { }"),
               RuntimeError::ExpectedInteger { line: 1 });
}

#[test]
fn while_loops() {
    assert_value("i = 0\nwhile i < 10 { i += 1 }\ni", Value::Integer(10));
    assert_value(r#"
        a = 0
        b = 1
        n = 0
        while n < 10 {
            t = a + b
            a = b
            b = t
            n += 1
        }
        a
    "#,
                 Value::Integer(55));
}

#[test]
fn loops_without_iterations_have_no_value() {
    assert_none("while false { 1 }");
    assert_none("for i in 2 to 1 { 1 }");
}

#[test]
fn nested_loops() {
    assert_value("s = 0\nfor i in 1 to 3 { for j in 1 to 3 { s += i * j } }\ns",
                 Value::Integer(36));
}

#[test]
fn runaway_loop_hits_the_default_limit() {
    let src = "n = 0\nwhile true { n += 1 }";
    assert_eq!(runtime_error(src),
               RuntimeError::LoopLimitExceeded { limit: 10_000,
                                                 line:  2, });
}

#[test]
fn runaway_loop_runs_the_body_exactly_limit_times() {
    let (evaluator, result) = run_and_keep("n = 0\nwhile true { n += 1 }");

    assert!(matches!(result, Err(RuntimeError::LoopLimitExceeded { limit: 10_000, .. })));
    assert_eq!(evaluator.environment().get("n"), Some(&Value::Integer(10_000)));
}

#[test]
fn runaway_for_loop_stops_at_the_limit() {
    let (evaluator, result) = run_and_keep("n = 0\nfor i in 1 to 20000 { n += 1 }");

    assert!(matches!(result, Err(RuntimeError::LoopLimitExceeded { limit: 10_000, .. })));
    assert_eq!(evaluator.environment().get("n"), Some(&Value::Integer(10_000)));
}

#[test]
fn loop_limit_is_configurable() {
    let config = EvalConfig { max_iterations: 5 };

    assert_eq!(interpret_with("s = 0\nfor i in 1 to 5 { s += i }\ns", config).unwrap(),
               Some(Value::Integer(15)));

    let err = interpret_with("s = 0\nfor i in 1 to 6 { s += i }\ns", config).unwrap_err();
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::LoopLimitExceeded { limit: 5, line: 2 })));
}

#[test]
fn loop_limit_is_per_loop_execution() {
    let config = EvalConfig { max_iterations: 3 };
    let src = "s = 0\nfor i in 1 to 3 { for j in 1 to 3 { s += 1 } }\ns";

    assert_eq!(interpret_with(src, config).unwrap(), Some(Value::Integer(9)));
}

#[test]
fn loop_limit_message_names_the_limit() {
    let err = interpret_with("while true { }", EvalConfig { max_iterations: 7 }).unwrap_err();
    assert_eq!(err.to_string(), "Error on line 1: Loop exceeded the maximum of 7 iterations.");
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(runtime_error("x = 1 / 0"), RuntimeError::DivisionByZero { line: 1 });
    assert_eq!(runtime_error("x = 1 // 0"), RuntimeError::DivisionByZero { line: 1 });
    assert_eq!(runtime_error("0 ^ -1"), RuntimeError::DivisionByZero { line: 1 });
}

#[test]
fn unknown_variable_is_error() {
    assert_eq!(runtime_error("a = 1\n\nfoo + a"),
               RuntimeError::UnknownVariable { name: "foo".into(),
                                               line: 3, });
}

#[test]
fn failed_statement_stops_the_program() {
    assert!(matches!(runtime_error("x = 1\ny = x / 0\nz = undefined_name"),
                     RuntimeError::DivisionByZero { line: 2 }));
}

#[test]
fn integer_overflow_is_error() {
    assert_eq!(runtime_error("9223372036854775807 + 1"), RuntimeError::Overflow { line: 1 });
    assert_eq!(runtime_error("x = 2 ^ 64"), RuntimeError::Overflow { line: 1 });
    assert_eq!(runtime_error("m = -9223372036854775807 - 1\n-m"),
               RuntimeError::Overflow { line: 2 });
}

#[test]
fn arithmetic_on_booleans_is_type_error() {
    assert!(matches!(runtime_error("true + 1"), RuntimeError::TypeError { line: 1, .. }));
    assert!(matches!(runtime_error("-false"), RuntimeError::TypeError { line: 1, .. }));
}

#[test]
fn comments_are_ignored() {
    assert_value("# header\nx = 2 # two\n# x = 3\nx", Value::Integer(2));
}

#[test]
fn missing_closing_paren() {
    assert_eq!(parse_error("x = (1 + 2"), ParseError::ExpectedClosingParen { line: 1 });
}

#[test]
fn missing_closing_brace() {
    assert_eq!(parse_error("while true {\n  x = 1\n"),
               ParseError::ExpectedClosingBrace { line: 1 });
}

#[test]
fn unexpected_tokens_report_their_line() {
    assert!(matches!(parse_error("x = 1\ny = 2 3"),
                     ParseError::UnexpectedToken { line: 2, .. }));
    assert!(matches!(parse_error("x = 1\n\n$"), ParseError::UnexpectedToken { line: 3, .. }));
    assert!(matches!(parse_error("for 1 in 1 to 2 { }"),
                     ParseError::UnexpectedToken { line: 1, .. }));
}

#[test]
fn truncated_input_is_end_of_input() {
    assert_eq!(parse_error("x = 1\ny = 2 *"), ParseError::UnexpectedEndOfInput { line: 2 });
}

#[test]
fn oversized_literal_is_rejected() {
    assert_eq!(parse_error("x = 1\n99999999999999999999"),
               ParseError::LiteralTooLarge { line: 2 });
}

#[test]
fn parse_errors_run_nothing() {
    // The unknown variable on line 1 would fail first if anything ran.
    assert!(matches!(interpret("y = nope\nx = (1"), Err(Error::Parse(_))));
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("demos/collatz.proof").expect("missing file");
    assert_value(&script, Value::Integer(111));
}

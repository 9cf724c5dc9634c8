use rpncalc::calculator::registry::UnaryOp;
use rpncalc::calculator::{Calculator, EvalError};

fn eval(expression: &str) -> Result<f64, EvalError> {
    Calculator::new().evaluate(expression)
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_documented_examples() {
    assert_eq!(eval("5 5 +"), Ok(10.0));
    assert_eq!(eval("2 3 ^"), Ok(8.0));
    assert_eq!(eval("9 sqrt"), Ok(3.0));
    assert_eq!(eval("5 fib"), Ok(5.0));
    assert_eq!(eval("0 fib"), Ok(0.0));
    assert_eq!(eval("1 fib"), Ok(1.0));
}

#[test]
fn test_sum_of_two_numbers() {
    let pairs = [(1.0, 2.0), (-3.5, 3.5), (1e10, 0.25), (0.1, 0.2), (-7.0, -8.0)];
    for (a, b) in pairs {
        let mut calc = Calculator::new();
        let result = calc.evaluate(&format!("{} {} +", a, b));
        assert_eq!(result, Ok(a + b), "{} + {}", a, b);
        assert_eq!(calc.stack_snapshot(), vec![a + b]);
    }
}

#[test]
fn test_operand_order_is_left_to_right() {
    assert_eq!(eval("10 4 -"), Ok(6.0));
    assert_eq!(eval("4 10 -"), Ok(-6.0));
    assert_eq!(eval("8 2 /"), Ok(4.0));
    assert_eq!(eval("2 8 /"), Ok(0.25));
    assert_eq!(eval("3 2 ^"), Ok(9.0));
}

#[test]
fn test_chained_expression() {
    // (3 + 4) * (5 - 2) = 21
    assert_eq!(eval("3 4 + 5 2 - *"), Ok(21.0));
    // sqrt(3^2 + 4^2) = 5
    assert_eq!(eval("3 2 ^ 4 2 ^ + sqrt"), Ok(5.0));
    assert_eq!(eval("10 fib 5 fib /"), Ok(11.0));
}

#[test]
fn test_numeric_literal_forms() {
    assert_eq!(eval("-4"), Ok(-4.0));
    assert_eq!(eval("+2.5"), Ok(2.5));
    assert_eq!(eval("1e3"), Ok(1000.0));
    assert_eq!(eval("1.5E-1"), Ok(0.15));
    assert_eq!(eval(".5 .5 +"), Ok(1.0));
}

#[test]
fn test_trigonometry_in_degrees() {
    assert!(approx_eq(eval("30 sin").unwrap(), 0.5));
    assert!(approx_eq(eval("60 cos").unwrap(), 0.5));
    assert!(approx_eq(eval("45 tan").unwrap(), 1.0));
    assert!(approx_eq(eval("-90 sin").unwrap(), -1.0));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(eval("1 0 /"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("0 0 /"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("5 2 2 - /"), Err(EvalError::DivisionByZero));
}

#[test]
fn test_invalid_domain() {
    assert_eq!(
        eval("-4 sqrt"),
        Err(EvalError::InvalidDomain {
            operator: UnaryOp::Sqrt,
            value: -4.0,
        })
    );
    assert!(matches!(
        eval("-1 fib"),
        Err(EvalError::InvalidDomain {
            operator: UnaryOp::Fib,
            ..
        })
    ));
    assert!(matches!(
        eval("2.5 fib"),
        Err(EvalError::InvalidDomain { .. })
    ));
}

#[test]
fn test_fib_integrality_is_exact() {
    // 0.1 + 0.2 is 0.30000000000000004, so ten of them is not exactly 3
    assert!(matches!(
        eval("0.1 0.2 + 10 * fib"),
        Err(EvalError::InvalidDomain { .. })
    ));
    assert_eq!(eval("6 2 / fib"), Ok(2.0));
}

#[test]
fn test_fib_large_values() {
    assert_eq!(eval("50 fib"), Ok(12_586_269_025.0));
    assert!(eval("1476 fib").unwrap().is_finite());
    assert_eq!(eval("5000 fib"), Ok(f64::INFINITY));
}

#[test]
fn test_stack_underflow() {
    assert!(matches!(
        eval("+"),
        Err(EvalError::StackUnderflow {
            required: 2,
            available: 0,
            ..
        })
    ));
    assert!(matches!(
        eval("3 *"),
        Err(EvalError::StackUnderflow { available: 1, .. })
    ));
    assert!(matches!(
        eval("sqrt"),
        Err(EvalError::StackUnderflow { required: 1, .. })
    ));
}

#[test]
fn test_invalid_token() {
    assert_eq!(
        eval("abc"),
        Err(EvalError::InvalidToken {
            token: "abc".to_string()
        })
    );
    // Operators are case-sensitive
    assert!(matches!(eval("9 SQRT"), Err(EvalError::InvalidToken { .. })));
    assert!(matches!(eval("1 2 %"), Err(EvalError::InvalidToken { .. })));
}

#[test]
fn test_out_of_range_literals_are_invalid() {
    assert_eq!(
        eval("1e400"),
        Err(EvalError::InvalidToken {
            token: "1e400".to_string()
        })
    );
    // Rejected before the division runs, so this is not a division by zero
    assert_eq!(
        eval("1 1e-400 /"),
        Err(EvalError::InvalidToken {
            token: "1e-400".to_string()
        })
    );
    assert_eq!(eval("1e308 1e308 +"), Ok(f64::INFINITY));
}

#[test]
fn test_empty_result() {
    assert_eq!(eval(""), Err(EvalError::EmptyResult));
    assert_eq!(eval("1 2 clear"), Err(EvalError::EmptyResult));
    assert_eq!(
        EvalError::EmptyResult.to_string(),
        "Calculation left no value on stack"
    );
}

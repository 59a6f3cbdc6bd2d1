use calcyard::{
    calculator::{lexer::Token, postfix::eval::evaluate_postfix},
    error::{Error, EvalError, ParseError},
    evaluate_pratt, evaluate_shunting_yard,
};

const TOLERANCE: f64 = 1e-9;

fn assert_both(src: &str, expected: f64) {
    let sy = evaluate_shunting_yard(src).unwrap_or_else(|e| {
                                            panic!("shunting-yard failed on {src:?}: {e}")
                                        });
    let pratt =
        evaluate_pratt(src).unwrap_or_else(|e| panic!("pratt failed on {src:?}: {e}"));

    assert!((sy - expected).abs() < TOLERANCE,
            "shunting-yard: {src:?} evaluated to {sy}, expected {expected}");
    assert!((pratt - expected).abs() < TOLERANCE,
            "pratt: {src:?} evaluated to {pratt}, expected {expected}");
}

fn assert_pratt(src: &str, expected: f64) {
    let result =
        evaluate_pratt(src).unwrap_or_else(|e| panic!("pratt failed on {src:?}: {e}"));
    assert!((result - expected).abs() < TOLERANCE,
            "pratt: {src:?} evaluated to {result}, expected {expected}");
}

fn shunting_yard_error(src: &str) -> Error {
    match evaluate_shunting_yard(src) {
        Ok(value) => panic!("shunting-yard: {src:?} evaluated to {value}, expected an error"),
        Err(e) => e,
    }
}

fn pratt_error(src: &str) -> Error {
    match evaluate_pratt(src) {
        Ok(value) => panic!("pratt: {src:?} evaluated to {value}, expected an error"),
        Err(e) => e,
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_both("1+2*3", 7.0);
    assert_both("2*3+1", 7.0);
    assert_both("10-2*3", 4.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_both("(1+2)*3", 9.0);
    assert_both("2*(3+4)", 14.0);
    assert_both("((1+2))*((3))", 9.0);
}

#[test]
fn subtraction_and_division_fold_left() {
    assert_both("1-2-3", -4.0);
    assert_both("8/4/2", 1.0);
    assert_both("7-3-2-1", 1.0);
}

#[test]
fn exponentiation_folds_right() {
    assert_both("2^3^2", 512.0);
    assert_both("2^(3^2)", 512.0);
    assert_both("(2^3)^2", 64.0);
}

#[test]
fn decimal_literals() {
    assert_both("1.5*2", 3.0);
    assert_both("0.1+0.2", 0.3);
    assert_both(".5+.5", 1.0);
}

#[test]
fn whitespace_is_skipped() {
    assert_both("  1 +\t2\n* 3 ", 7.0);
}

#[test]
fn strategies_agree_on_binary_expressions() {
    let cases = ["1+2*3-4/2",
                 "7-3-2-1",
                 "10/4*2",
                 "1.5+2.5*2",
                 "100/5/2",
                 "6*7+8*9",
                 "2^3^2",
                 "(1+2)*(3+4)",
                 "1.5*(2+2.5)",
                 "2^(1+1)/4"];

    for src in cases {
        let sy = evaluate_shunting_yard(src).unwrap_or_else(|e| {
                                                panic!("shunting-yard failed on {src:?}: {e}")
                                            });
        let pratt =
            evaluate_pratt(src).unwrap_or_else(|e| panic!("pratt failed on {src:?}: {e}"));
        assert!((sy - pratt).abs() < TOLERANCE,
                "strategies disagree on {src:?}: shunting-yard {sy}, pratt {pratt}");
    }
}

#[test]
fn unary_minus_and_plus() {
    assert_pratt("-3+4", 1.0);
    assert_pratt("-(3+4)", -7.0);
    assert_pratt("--4", 4.0);
    assert_pratt("+5", 5.0);
    assert_pratt("2*-3", -6.0);
}

#[test]
fn unary_minus_applies_to_the_base_of_an_exponent() {
    // The prefix operator binds tighter than any infix operator, so the
    // negation captures only the base: (-2)^2.
    assert_pratt("-2^2", 4.0);
}

#[test]
fn shunting_yard_has_no_unary_rule() {
    // A leading '-' passes through the converter as a binary operator; the
    // evaluator then runs out of operands.
    let error = shunting_yard_error("-3+4");
    assert!(matches!(error, Error::Eval(EvalError::InsufficientOperands { .. })),
            "unexpected error: {error}");
}

#[test]
fn division_by_zero_is_an_error_under_both_strategies() {
    for src in ["1/0", "1/(2-2)"] {
        let error = shunting_yard_error(src);
        assert!(matches!(error, Error::Eval(EvalError::DivisionByZero)),
                "shunting-yard on {src:?}: unexpected error: {error}");

        let error = pratt_error(src);
        assert!(matches!(error, Error::Eval(EvalError::DivisionByZero)),
                "pratt on {src:?}: unexpected error: {error}");
    }
}

#[test]
fn mismatched_parentheses() {
    let error = shunting_yard_error("(1+2");
    assert!(matches!(error, Error::Parse(ParseError::MismatchedParentheses)),
            "unexpected error: {error}");

    let error = pratt_error("(1+2");
    assert!(matches!(error, Error::Parse(ParseError::MismatchedParentheses)),
            "unexpected error: {error}");

    let error = shunting_yard_error("1+2)");
    assert!(matches!(error, Error::Parse(ParseError::MismatchedParentheses)),
            "unexpected error: {error}");

    // The Pratt parser stops at a complete expression, so the stray ')'
    // surfaces as leftover input instead.
    let error = pratt_error("1+2)");
    assert!(matches!(error, Error::Parse(ParseError::UnexpectedTrailingInput { .. })),
            "unexpected error: {error}");
}

#[test]
fn missing_right_operand() {
    let error = shunting_yard_error("1+");
    assert!(matches!(error, Error::Eval(EvalError::InsufficientOperands { .. })),
            "unexpected error: {error}");

    let error = pratt_error("1+");
    assert!(matches!(error, Error::Parse(ParseError::UnexpectedToken { .. })),
            "unexpected error: {error}");
}

#[test]
fn malformed_number_literal() {
    for src in ["1.2.3", "1.2.3+4", "."] {
        let error = shunting_yard_error(src);
        assert!(matches!(error, Error::Parse(ParseError::InvalidNumber { .. })),
                "shunting-yard on {src:?}: unexpected error: {error}");

        let error = pratt_error(src);
        assert!(matches!(error, Error::Parse(ParseError::InvalidNumber { .. })),
                "pratt on {src:?}: unexpected error: {error}");
    }
}

#[test]
fn invalid_character() {
    let error = shunting_yard_error("1&2");
    assert!(matches!(error, Error::Parse(ParseError::InvalidCharacter { found: '&' })),
            "unexpected error: {error}");

    let error = pratt_error("1 % 2");
    assert!(matches!(error, Error::Parse(ParseError::InvalidCharacter { found: '%' })),
            "unexpected error: {error}");
}

#[test]
fn adjacent_numbers_are_rejected_downstream() {
    // "1 2" tokenizes into two number tokens; each strategy rejects the
    // sequence at its own stage.
    let error = shunting_yard_error("1 2");
    assert!(matches!(error, Error::Eval(EvalError::InvalidExpression)),
            "unexpected error: {error}");

    let error = pratt_error("1 2");
    assert!(matches!(error, Error::Parse(ParseError::UnexpectedTrailingInput { .. })),
            "unexpected error: {error}");
}

#[test]
fn empty_input_fails_deterministically() {
    for src in ["", "   ", "\t\n"] {
        let error = shunting_yard_error(src);
        assert!(matches!(error, Error::Eval(EvalError::InvalidExpression)),
                "shunting-yard on {src:?}: unexpected error: {error}");

        let error = pratt_error(src);
        assert!(matches!(error, Error::Parse(ParseError::UnexpectedToken { .. })),
                "pratt on {src:?}: unexpected error: {error}");
    }
}

#[test]
fn empty_group_is_an_error() {
    let error = shunting_yard_error("()");
    assert!(matches!(error, Error::Eval(EvalError::InvalidExpression)),
            "unexpected error: {error}");

    let error = pratt_error("()");
    assert!(matches!(error, Error::Parse(ParseError::UnexpectedToken { .. })),
            "unexpected error: {error}");
}

#[test]
fn parenthesis_in_a_postfix_sequence_is_an_unknown_operator() {
    // The converter never emits parentheses, but the evaluator still rejects
    // a hand-built sequence containing one.
    let postfix = [Token::Number(1.0), Token::Number(2.0), Token::LParen];
    let error = evaluate_postfix(&postfix).unwrap_err();
    assert!(matches!(error, EvalError::UnknownOperator { .. }),
            "unexpected error: {error}");
}

#[test]
fn non_finite_results_are_not_trapped() {
    // Negative base with a fractional exponent has no real result; both
    // strategies pass the NaN through instead of raising an error.
    let sy = evaluate_shunting_yard("(0-2)^0.5").unwrap();
    assert!(sy.is_nan());

    let pratt = evaluate_pratt("(0-2)^0.5").unwrap();
    assert!(pratt.is_nan());
}

#[test]
fn error_messages_carry_the_offending_fragment() {
    let error = shunting_yard_error("1 # 2");
    assert_eq!(error.to_string(), "Invalid character: '#'.");

    let error = shunting_yard_error("1.2.3");
    assert_eq!(error.to_string(), "Invalid number: '1.2.3'.");

    let error = pratt_error("1+");
    assert_eq!(error.to_string(), "Unexpected token: end of input.");
}

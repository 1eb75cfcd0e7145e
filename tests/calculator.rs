use std::io::Cursor;

use deskcalc::{
    error::{Error, ParseError},
    evaluate,
    interpreter::{lexer::TokenStream, session::Session},
};
use pretty_assertions::assert_eq;

fn assert_value(source: &str, expected: f64) {
    match evaluate(source) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {source:?}"),
        Err(e) => panic!("{source:?} failed: {e}"),
    }
}

fn assert_message(source: &str, message: &str) {
    match evaluate(source) {
        Ok(value) => panic!("{source:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), message, "wrong error for {source:?}"),
    }
}

/// Runs a full interactive session over `input` and returns what it wrote to
/// the output and diagnostic streams.
fn run_session(input: &str) -> (String, String) {
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();
    let mut session = Session::new(Cursor::new(input.as_bytes()), &mut output, &mut diagnostics);
    session.run().expect("session I/O failed");
    (String::from_utf8(output).unwrap(), String::from_utf8(diagnostics).unwrap())
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 - 3 - 4", -5.0);
    assert_value("100 / 10 / 5", 2.0);
}

#[test]
fn division_and_modulus() {
    assert_value("10 / 4", 2.5);
    assert_value("10 % 4", 2.0);
    assert_value("-7 % 3", -1.0);
}

#[test]
fn exponentiation_chains_left_to_right() {
    assert_value("2 ^ 3", 8.0);
    // One grammar level for the whole term, so repeated '^' folds through the
    // loop rather than associating to the right.
    assert_value("2 ^ 3 ^ 2", 64.0);
    // '*' shares the term level with '^', so the product folds in first.
    assert_value("2 * 3 ^ 2", 36.0);
}

#[test]
fn unary_sign_binds_the_immediate_primary() {
    assert_value("-5", -5.0);
    assert_value("+5", 5.0);
    assert_value("- -5", 5.0);
    // '-' recurses into primary, so the negation happens before '^' applies.
    assert_value("-2 ^ 2", 4.0);
    assert_value("3 - -2", 5.0);
}

#[test]
fn trigonometric_functions_in_radians() {
    assert_value("s 0", 0.0);
    assert_value("c 0", 1.0);
    assert_value("t 0", 0.0);
    assert_value("s 1", 1.0_f64.sin());
    assert_value("c(1 + 1)", 2.0_f64.cos());
    // The function argument is one primary, exactly like unary sign.
    assert_value("s 0 + 1", 1.0);
}

#[test]
fn numeric_literal_forms() {
    assert_value(".5", 0.5);
    assert_value("2.", 2.0);
    assert_value("1.25 * 4", 5.0);
    assert_value("2e3", 2000.0);
    assert_value("1.5e-2", 0.015);
    assert_value("1.5E+2", 150.0);
}

#[test]
fn statements_span_lines_and_whitespace() {
    assert_value("1 +\n2", 3.0);
    assert_value("\t( 1\n+ 2 )\n* 3", 9.0);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_message("1 / 0", "divide by zero");
    assert_message("1 % 0", "divide by zero");
    // Only an exactly-zero divisor is rejected.
    assert_value("1 / 0.5", 2.0);
}

#[test]
fn structural_errors() {
    assert_message("(1 + 2", "')' expected");
    assert_message("(1 + 2;", "')' expected");
    assert_message("* 3", "primary expected");
    assert_message("2 + * 3", "primary expected");
    assert_message("", "primary expected");
}

#[test]
fn unrecognized_characters_are_bad_tokens() {
    assert_message("2 + @", "Bad token");
    assert_message("#", "Bad token");
    // Malformed literals recover through the same lexical error.
    assert_message(".", "Bad token");
    assert_message("2e", "Bad token");
    assert_message("1e+;", "Bad token");
}

#[test]
fn pushback_discipline_is_enforced() {
    let mut tokens = TokenStream::new(Cursor::new("1 2".as_bytes()));
    let first = tokens.get().unwrap().expect("token expected");

    tokens.putback(first).unwrap();
    let err = tokens.putback(first).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::FullBuffer)));
    assert_eq!(err.to_string(), "putback() into a full buffer");

    // A fetch drains the buffer and pushback works again.
    assert_eq!(tokens.get().unwrap(), Some(first));
    tokens.putback(first).unwrap();
}

#[test]
fn session_prints_prompt_and_result_markers() {
    let (output, diagnostics) = run_session("2 + 3 * 4;\nq\n");
    assert_eq!(output, "> = 14\n> ");
    assert_eq!(diagnostics, "");
}

#[test]
fn session_evaluates_multiple_statements() {
    let (output, diagnostics) = run_session("1 + 1; 10 / 4; q");
    assert_eq!(output, "> = 2\n> = 2.5\n> ");
    assert_eq!(diagnostics, "");
}

#[test]
fn session_allows_empty_statements() {
    let (output, diagnostics) = run_session(";;; 7; ;q");
    assert_eq!(output, "> = 7\n> ");
    assert_eq!(diagnostics, "");
}

#[test]
fn session_recovers_after_divide_by_zero() {
    let (output, diagnostics) = run_session("1 / 0;\n2 + 2;\nq\n");
    assert_eq!(output, "> > = 4\n> ");
    assert_eq!(diagnostics, "divide by zero\n");
}

#[test]
fn session_resynchronizes_after_syntax_error() {
    // The failed ')' check already consumed the first ';', so recovery skips
    // to the one after it and the session picks up with '5 + 6'.
    let (output, diagnostics) = run_session("(1 + 2; 3 * 4; 5 + 6; q");
    assert_eq!(output, "> > = 11\n> ");
    assert_eq!(diagnostics, "')' expected\n");
}

#[test]
fn session_recovers_after_bad_token() {
    let (output, diagnostics) = run_session("@ # ;\n1 + 1;\nq\n");
    assert_eq!(output, "> > = 2\n> ");
    assert_eq!(diagnostics, "Bad token\n");
}

#[test]
fn quit_stops_without_evaluating_further_input() {
    let (output, diagnostics) = run_session("q 1 / 0;");
    assert_eq!(output, "> ");
    assert_eq!(diagnostics, "");
}

#[test]
fn session_ends_cleanly_on_input_exhaustion() {
    let (output, diagnostics) = run_session("2 + 2");
    assert_eq!(output, "> = 4\n> ");
    assert_eq!(diagnostics, "");
}

#[test]
fn help_is_intercepted_before_the_grammar() {
    let (output, diagnostics) = run_session("h; q");
    assert!(output.contains("Simple Calculator Commands:"));
    assert!(output.contains("- Type 'q' to quit."));
    assert_eq!(diagnostics, "");
}

#[test]
fn leading_c_clears_the_screen_instead_of_taking_cosine() {
    let (output, diagnostics) = run_session("c 0; q");
    // The statement-leading 'c' is the clear command, so '0' starts a fresh
    // statement; cosine never ran.
    assert!(output.contains("\x1b[2J\x1b[1;1H"));
    assert!(output.contains("= 0\n"));
    assert!(!output.contains("= 1\n"));
    assert_eq!(diagnostics, "");
}

#[test]
fn cosine_still_works_inside_an_expression() {
    let (output, diagnostics) = run_session("1 + c 0; q");
    assert_eq!(output, "> = 2\n> ");
    assert_eq!(diagnostics, "");
}

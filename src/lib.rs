//! # deskcalc
//!
//! deskcalc is an interactive arithmetic expression evaluator. It reads
//! statements from a line-oriented input stream, parses them with a
//! recursive-descent grammar, evaluates them to a floating-point result, and
//! prints the result.
//!
//! The grammar supports `+ - * / %` and `^`, parentheses, unary sign, and the
//! functions `s` (sin), `c` (cos) and `t` (tan) in radians. Statements end
//! with `;`; the single-character commands `q`, `h` and `c` quit, print help,
//! and clear the screen.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Cursor;

use crate::interpreter::{lexer::TokenStream, parser::parse_expression};

/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a statement, and the unified [`Error`](error::Error) the
/// session matches against at its recovery boundary.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Produces the exact single-line diagnostic messages the session prints.
/// - Separates the recoverable taxonomy from stream failures.
pub mod error;
/// Orchestrates tokenizing, parsing, evaluation, and the interactive loop.
///
/// This module ties together the token stream, the grammar functions, and the
/// session that drives read-evaluate-print cycles over them.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and session.
/// - Provides the entry points for evaluating user input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates the first expression in `source` and returns its value.
///
/// This is the library entry point behind the command line's `--expr` mode
/// and the integration tests. The expression is read through the same token
/// stream and grammar the interactive session uses; input past the first
/// complete expression is ignored.
///
/// # Errors
/// Returns an [`Error`](error::Error) if the expression is lexically or
/// structurally invalid, or if evaluating it fails.
///
/// # Examples
/// ```
/// use deskcalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
///
/// // Division by zero is an error, not infinity.
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> error::EvalResult<f64> {
    let mut tokens = TokenStream::new(Cursor::new(source.as_bytes()));
    parse_expression(&mut tokens)
}

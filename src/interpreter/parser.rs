use std::io::BufRead;

use crate::{
    error::{EvalResult, ParseError, RuntimeError},
    interpreter::lexer::{Token, TokenStream},
};

/// Parses and evaluates a full expression.
///
/// This is the entry point for expression evaluation. It handles the
/// lowest-precedence level, addition and subtraction, and recursively
/// descends through [`parse_term`] and [`parse_primary`] for everything that
/// binds tighter. Evaluation happens during the descent; no syntax tree is
/// built.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// Any token that is not `+` or `-` ends the expression and is pushed back
/// for the caller, as does end of input.
pub fn parse_expression<R: BufRead>(tokens: &mut TokenStream<R>) -> EvalResult<f64> {
    let mut left = parse_term(tokens)?;
    loop {
        match tokens.get()? {
            Some(Token::Plus) => left += parse_term(tokens)?,
            Some(Token::Minus) => left -= parse_term(tokens)?,
            Some(token) => {
                tokens.putback(token)?;
                break;
            },
            None => break,
        }
    }
    Ok(left)
}

/// Parses and evaluates a term.
///
/// Handles the operators that bind tighter than `+`/`-`: multiplication,
/// division, modulus, and exponentiation, all chained left-to-right through
/// the loop. Exponentiation deliberately gets no level of its own, so
/// `2 ^ 3 ^ 2` evaluates as `(2 ^ 3) ^ 2`, not right-associatively.
///
/// Grammar: `term := primary (("*" | "/" | "%" | "^") primary)*`
///
/// # Errors
/// [`RuntimeError::DivideByZero`] when the right-hand operand of `/` or `%`
/// is exactly zero.
pub fn parse_term<R: BufRead>(tokens: &mut TokenStream<R>) -> EvalResult<f64> {
    let mut left = parse_primary(tokens)?;
    loop {
        match tokens.get()? {
            Some(Token::Star) => left *= parse_primary(tokens)?,
            Some(Token::Slash) => {
                let divisor = parse_primary(tokens)?;
                if divisor == 0.0 {
                    return Err(RuntimeError::DivideByZero.into());
                }
                left /= divisor;
            },
            Some(Token::Percent) => {
                let divisor = parse_primary(tokens)?;
                if divisor == 0.0 {
                    return Err(RuntimeError::DivideByZero.into());
                }
                left %= divisor;
            },
            Some(Token::Caret) => left = left.powf(parse_primary(tokens)?),
            Some(token) => {
                tokens.putback(token)?;
                break;
            },
            None => break,
        }
    }
    Ok(left)
}

/// Parses and evaluates a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - numeric literals
/// - parenthesized sub-expressions
/// - unary `-` and `+`
/// - the functions `s` (sin), `c` (cos), and `t` (tan), in radians
///
/// Grammar:
/// ```text
///     primary := "(" expression ")"
///              | number
///              | ("-" | "+") primary
///              | ("s" | "c" | "t") primary
/// ```
///
/// Unary sign and the function tags recurse into `primary`, not `term`, so
/// they bind exactly one primary: `-2 ^ 2` is `(-2) ^ 2` and `s 1 + 2` is
/// `sin(1) + 2`.
///
/// # Errors
/// - [`ParseError::ExpectedClosingParen`] if a `(` group is not closed.
/// - [`ParseError::PrimaryExpected`] for any other token, or for end of input
///   where a value was required.
pub fn parse_primary<R: BufRead>(tokens: &mut TokenStream<R>) -> EvalResult<f64> {
    match tokens.get()? {
        Some(Token::LParen) => {
            let value = parse_expression(tokens)?;
            match tokens.get()? {
                Some(Token::RParen) => Ok(value),
                _ => Err(ParseError::ExpectedClosingParen.into()),
            }
        },
        Some(Token::Number(value)) => Ok(value),
        Some(Token::Minus) => Ok(-parse_primary(tokens)?),
        Some(Token::Plus) => parse_primary(tokens),
        Some(Token::Sin) => Ok(parse_primary(tokens)?.sin()),
        Some(Token::Cos) => Ok(parse_primary(tokens)?.cos()),
        Some(Token::Tan) => Ok(parse_primary(tokens)?.tan()),
        _ => Err(ParseError::PrimaryExpected.into()),
    }
}

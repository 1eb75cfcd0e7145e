#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while reading or structuring tokens.
pub enum ParseError {
    /// An input character matched neither a symbolic token nor the start of a
    /// numeric literal.
    BadToken(char),
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// A token appeared where a primary expression was required.
    PrimaryExpected,
    /// `putback()` was called while a token was already pending. This is an
    /// invariant violation of the one-token lookahead discipline, not a
    /// recoverable input condition.
    FullBuffer,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadToken(_) => write!(f, "Bad token"),
            Self::ExpectedClosingParen => write!(f, "')' expected"),
            Self::PrimaryExpected => write!(f, "primary expected"),
            Self::FullBuffer => write!(f, "putback() into a full buffer"),
        }
    }
}

impl std::error::Error for ParseError {}

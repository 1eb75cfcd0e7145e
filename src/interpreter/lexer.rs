use std::io::{self, BufRead, Read};

use crate::error::{EvalResult, ParseError};

/// Represents a lexical token read from the input stream.
/// A token is a minimal but meaningful unit of text produced by the token
/// stream. This enum defines all recognized tokens in the calculator grammar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5` or `2.1e-10`.
    Number(f64),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`, the statement separator and resynchronization delimiter.
    Print,
    /// `q`, the quit command.
    Quit,
    /// `h`, the help command.
    Help,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `s`, sine in radians.
    Sin,
    /// `c`, cosine in radians. When this token leads a statement the session
    /// intercepts it as the clear-screen command before it can reach the
    /// grammar.
    Cos,
    /// `t`, tangent in radians.
    Tan,
}

impl Token {
    /// Maps a character to its corresponding symbolic token.
    ///
    /// Returns `Some(Token)` for every character in the fixed symbolic
    /// alphabet `( ) ; q h + - * / % ^ s c t`, and `None` for all other
    /// characters (including digits, which begin numeric literals instead).
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            ';' => Some(Self::Print),
            'q' => Some(Self::Quit),
            'h' => Some(Self::Help),
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            '%' => Some(Self::Percent),
            '^' => Some(Self::Caret),
            's' => Some(Self::Sin),
            'c' => Some(Self::Cos),
            't' => Some(Self::Tan),
            _ => None,
        }
    }

    /// Returns the character a symbolic token was read from, or `None` for
    /// numeric tokens. Inverse of [`Token::from_symbol`].
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Number(_) => None,
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::Print => Some(';'),
            Self::Quit => Some('q'),
            Self::Help => Some('h'),
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Percent => Some('%'),
            Self::Caret => Some('^'),
            Self::Sin => Some('s'),
            Self::Cos => Some('c'),
            Self::Tan => Some('t'),
        }
    }
}

/// Converts a character stream into a sequence of [`Token`]s.
///
/// The stream owns two small pieces of state:
/// - a one-slot token pushback buffer filled by [`TokenStream::putback`], so
///   the grammar functions can return a token they looked at but did not
///   consume;
/// - a one-character pushback onto the underlying input, used internally to
///   hand the first character of a numeric literal back to the literal
///   scanner.
///
/// At most one token may be pending at a time; pushing back a second token
/// without an intervening [`TokenStream::get`] fails with
/// [`ParseError::FullBuffer`].
pub struct TokenStream<R> {
    reader: R,
    pending: Option<Token>,
    lookahead: Option<u8>,
}

impl<R: BufRead> TokenStream<R> {
    /// Creates a token stream over the given input with an empty pushback
    /// buffer.
    pub fn new(reader: R) -> Self {
        Self { reader,
               pending: None,
               lookahead: None }
    }

    /// Fetches the next token.
    ///
    /// A pending pushed-back token is returned first, without consuming any
    /// input. Otherwise whitespace is skipped and one character is read:
    /// characters in the symbolic alphabet become their [`Token`], a digit or
    /// `.` begins a numeric literal, and `Ok(None)` signals that the input is
    /// exhausted.
    ///
    /// # Errors
    /// - [`ParseError::BadToken`] for an unrecognized character or a
    ///   malformed numeric literal.
    /// - [`Error::Io`](crate::error::Error::Io) if the underlying stream
    ///   fails.
    pub fn get(&mut self) -> EvalResult<Option<Token>> {
        if let Some(token) = self.pending.take() {
            return Ok(Some(token));
        }

        let ch = loop {
            match self.read_char()? {
                Some(c) if c.is_ascii_whitespace() => {},
                Some(c) => break c,
                None => return Ok(None),
            }
        };

        if let Some(token) = Token::from_symbol(ch) {
            return Ok(Some(token));
        }
        if ch.is_ascii_digit() || ch == '.' {
            self.unread_char(ch);
            return self.read_number().map(Some);
        }
        Err(ParseError::BadToken(ch).into())
    }

    /// Stores `token` as the single pending token, so the next call to
    /// [`TokenStream::get`] yields it again.
    ///
    /// # Errors
    /// [`ParseError::FullBuffer`] if a token is already pending. Correct
    /// single-token lookahead usage never triggers this; it is surfaced as a
    /// hard error rather than silently overwriting the buffer.
    pub fn putback(&mut self, token: Token) -> EvalResult<()> {
        if self.pending.is_some() {
            return Err(ParseError::FullBuffer.into());
        }
        self.pending = Some(token);
        Ok(())
    }

    /// Discards input up to and including the first occurrence of
    /// `delimiter`, or to the end of input.
    ///
    /// If the pending token was read from `delimiter` it is consumed and no
    /// further input is touched; any other pending token is dropped before
    /// scanning. The session uses this to resynchronize on the next statement
    /// separator after a failed statement.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the stream fails mid-scan.
    pub fn ignore(&mut self, delimiter: char) -> io::Result<()> {
        if let Some(token) = self.pending.take() {
            if token.symbol() == Some(delimiter) {
                return Ok(());
            }
        }

        while let Some(ch) = self.read_char()? {
            if ch == delimiter {
                break;
            }
        }
        Ok(())
    }

    /// Reads one character, honoring the one-character pushback slot.
    /// Returns `Ok(None)` at end of input.
    fn read_char(&mut self) -> io::Result<Option<char>> {
        if let Some(byte) = self.lookahead.take() {
            return Ok(Some(char::from(byte)));
        }

        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(char::from(buf[0]))),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {},
                Err(e) => return Err(e),
            }
        }
    }

    /// Pushes one character back onto the underlying input stream.
    /// The slot must be empty; internal callers only unread the character
    /// they just read.
    fn unread_char(&mut self, ch: char) {
        debug_assert!(self.lookahead.is_none());
        self.lookahead = Some(ch as u8);
    }

    /// Scans a full floating-point literal from the input.
    ///
    /// Accepts the standard decimal grammar
    /// `digits [ '.' digits ] [ ('e' | 'E') [ '+' | '-' ] digits ]` with
    /// either the integer or the fractional digits allowed to be empty (so
    /// `.5` and `2.` both lex). A sign before the literal is not part of it;
    /// unary sign is handled by the grammar's primary rule.
    ///
    /// # Errors
    /// [`ParseError::BadToken`] when the scanned text is not a valid literal,
    /// such as a lone `.` or an exponent marker with no digits.
    fn read_number(&mut self) -> EvalResult<Token> {
        let mut literal = String::new();

        self.scan_digits(&mut literal)?;
        if let Some(ch) = self.read_char()? {
            if ch == '.' {
                literal.push(ch);
                self.scan_digits(&mut literal)?;
            } else {
                self.unread_char(ch);
            }
        }
        if let Some(ch) = self.read_char()? {
            // Once the exponent marker is consumed there is no way to give it
            // back, so a missing exponent makes the whole literal bad.
            if ch == 'e' || ch == 'E' {
                literal.push(ch);
                if let Some(sign) = self.read_char()? {
                    if sign == '+' || sign == '-' {
                        literal.push(sign);
                    } else {
                        self.unread_char(sign);
                    }
                }
                self.scan_digits(&mut literal)?;
            } else {
                self.unread_char(ch);
            }
        }

        match literal.parse::<f64>() {
            Ok(value) => Ok(Token::Number(value)),
            Err(_) => {
                let first = literal.chars().next().unwrap_or('.');
                Err(ParseError::BadToken(first).into())
            },
        }
    }

    /// Appends consecutive ASCII digits to `literal`, stopping at (and
    /// unreading) the first non-digit.
    fn scan_digits(&mut self, literal: &mut String) -> io::Result<()> {
        while let Some(ch) = self.read_char()? {
            if ch.is_ascii_digit() {
                literal.push(ch);
            } else {
                self.unread_char(ch);
                break;
            }
        }
        Ok(())
    }
}

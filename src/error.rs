/// Parsing errors.
///
/// Defines all error types that can occur while turning input characters into
/// tokens and tokens into expressions: unrecognized characters, structural
/// grammar violations, and lookahead-buffer misuse.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an expression,
/// such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type used by the token stream, the grammar functions, and the
/// session.
///
/// All of them return either a value of type `T` or an [`Error`] describing
/// the failure.
pub type EvalResult<T> = Result<T, Error>;

#[derive(Debug)]
/// Unified error type covering every failure the calculator can produce.
///
/// `Parse` and `Runtime` form the recoverable taxonomy: the session catches
/// them at its boundary, reports a single diagnostic line, and resynchronizes
/// to the next statement separator. `Io` is outside that taxonomy and
/// propagates out of the session loop, terminating the process with a nonzero
/// exit code.
pub enum Error {
    /// A lexical or structural failure while reading the statement.
    Parse(ParseError),
    /// A failure while evaluating the statement.
    Runtime(RuntimeError),
    /// A failure of the underlying input or output stream.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

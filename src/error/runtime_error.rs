#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a parsed expression.
pub enum RuntimeError {
    /// The right-hand operand of `/` or `%` was exactly zero.
    DivideByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivideByZero => write!(f, "divide by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}

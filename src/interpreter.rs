/// The lexer module turns the input character stream into tokens.
///
/// It defines the [`Token`](lexer::Token) alphabet and the
/// [`TokenStream`](lexer::TokenStream), the explicit token source with
/// one-token pushback and the `ignore()` resynchronization primitive.
///
/// # Responsibilities
/// - Converts the input character stream into tokens on demand.
/// - Scans numeric literals with the standard decimal floating-point syntax.
/// - Reports lexical errors for unrecognized or malformed input.
pub mod lexer;
/// The parser module implements the expression grammar and evaluates it.
///
/// Three mutually recursive grammar levels (expression, term, primary)
/// consume tokens and produce a numeric result directly; precedence comes
/// from the grammar level rather than a precedence table, and no syntax tree
/// is built.
///
/// # Responsibilities
/// - Parses and evaluates expressions with correct precedence and grouping.
/// - Reports structural errors such as a missing closing parenthesis.
/// - Reports runtime errors such as division by zero.
pub mod parser;
/// The session module drives the interactive read-evaluate-print loop.
///
/// The [`Session`](session::Session) prints the prompt, interprets the
/// quit/help/clear meta-commands, evaluates everything else as an
/// expression, and recovers from per-statement failures by resynchronizing
/// on the statement separator.
///
/// # Responsibilities
/// - Owns the token stream and the output and diagnostic writers.
/// - Catches every recoverable error at the loop boundary.
/// - Ends cleanly on the quit command or input exhaustion.
pub mod session;

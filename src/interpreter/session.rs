use std::io::{self, BufRead, Write};

use crate::{
    error::{Error, EvalResult},
    interpreter::{
        lexer::{Token, TokenStream},
        parser::parse_expression,
    },
};

/// Marker written before each statement is read.
const PROMPT: &str = "> ";
/// Marker written before each printed result.
const RESULT: &str = "= ";
/// ANSI sequence that clears the terminal and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

const HELP: &str = "Simple Calculator Commands:\n\
                    - Enter expressions using numbers and operators: +, -, *, /, % (modulus), ^ (exponentiation).\n\
                    - Use parentheses for grouping, e.g., (3 + 4) * 2.\n\
                    - Supported functions: s (sin), c (cos), t (tan), in radians.\n\
                    - End a statement with ';' to print its value.\n\
                    - Type 'q' to quit.\n\
                    - Type 'c' to clear the screen.";

/// What the session should do after one read-evaluate-print cycle.
enum Flow {
    Continue,
    Quit,
}

/// Drives repeated read-evaluate-print cycles over a token stream.
///
/// The session owns the [`TokenStream`] and passes it into the grammar
/// functions, interprets the meta-commands (`q` quit, `h` help, `c` clear
/// screen, `;` statement separator), and isolates each cycle's failures:
/// every parse or runtime error is reported as a single line on the
/// diagnostic stream and the input is resynchronized to the next `;`, so a
/// malformed statement never terminates the session.
///
/// The reader and the two writers are injected, which keeps the session
/// drivable from tests with in-memory buffers.
pub struct Session<R, W, E> {
    tokens: TokenStream<R>,
    output: W,
    diagnostics: E,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Creates a session reading statements from `input`, printing prompts
    /// and results to `output`, and reporting errors to `diagnostics`.
    pub fn new(input: R, output: W, diagnostics: E) -> Self {
        Self { tokens: TokenStream::new(input),
               output,
               diagnostics }
    }

    /// Runs the session until the quit command or end of input.
    ///
    /// Recoverable errors are handled at this boundary and the loop
    /// continues with the next statement.
    ///
    /// # Errors
    /// Only an I/O failure of the input or output streams escapes; it is
    /// returned to the caller and ends the session abnormally.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            match self.cycle() {
                Ok(Flow::Continue) => {},
                Ok(Flow::Quit) => return Ok(()),
                Err(Error::Io(e)) => return Err(e),
                Err(e) => {
                    writeln!(self.diagnostics, "{e}")?;
                    self.tokens.ignore(';')?;
                },
            }
        }
    }

    /// Executes one cycle: fetch a token, dispatch meta-commands, or push
    /// the token back and evaluate a full expression.
    fn cycle(&mut self) -> EvalResult<Flow> {
        let mut token = self.tokens.get()?;
        // Empty statements and repeated separators are allowed.
        while token == Some(Token::Print) {
            token = self.tokens.get()?;
        }

        let Some(token) = token else {
            // Input exhausted; treated like a quit.
            return Ok(Flow::Quit);
        };

        match token {
            Token::Quit => return Ok(Flow::Quit),
            Token::Help => writeln!(self.output, "{HELP}")?,
            // A statement-leading 'c' is the clear command; cosine only ever
            // applies inside an expression.
            Token::Cos => write!(self.output, "{CLEAR_SCREEN}")?,
            _ => {
                self.tokens.putback(token)?;
                let value = parse_expression(&mut self.tokens)?;
                writeln!(self.output, "{RESULT}{value}")?;
            },
        }
        Ok(Flow::Continue)
    }
}

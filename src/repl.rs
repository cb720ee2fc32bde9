use std::io::{BufRead, Write};

use crate::interpreter::{evaluator::core::Evaluator, lexer::core::Lexer, parser::core::Parser};

/// The prompt printed before each read.
pub const PROMPT: &str = ">> ";

const LOGO: &str = r"
 __        __           _
 \ \      / /___    ___| |     __ _ _ __   __ _
  \ \ /\ / // _ \  / __| |    / _` | '_ \ / _` |
   \ V  V /| (_) || (__| |___| (_| | | | | (_| |
    \_/\_/  \___/  \___|_____|\__,_|_| |_|\__, |
                                          |___/
";

const WELCOME: &str = "Welcome to WocLang! Type a statement to run it, or 'exit' to leave.";
const ERROR_HEADER: &str = "Whoops! The input has some problems:";
const FAREWELL: &str = "Bye! Thanks for stopping by!";

/// Runs the interactive shell until `exit` or end of input.
///
/// Every line runs the full pipeline from scratch. Both the lexer's and
/// the parser's error lists are checked before anything is evaluated; when
/// either has entries they are printed under a header, one per line, and
/// the line is abandoned. A clean line prints the parsed program followed
/// by its value.
///
/// # Errors
/// Returns any I/O error from the reader or writer.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("1 + 2;\nexit\n");
/// let mut output = Vec::new();
///
/// woclang::repl::start(&mut input, &mut output).unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("(1 + 2);"));
/// assert!(text.contains('3'));
/// ```
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<()> {
    writeln!(output, "{LOGO}")?;
    writeln!(output, "{WELCOME}")?;

    let evaluator = Evaluator::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input closes the session like `exit` does.
            writeln!(output, "{FAREWELL}")?;
            return Ok(());
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            writeln!(output, "{FAREWELL}")?;
            return Ok(());
        }

        let lexer = Lexer::new(line);
        if !lexer.errors().is_empty() {
            writeln!(output, "{ERROR_HEADER}")?;
            for error in lexer.errors() {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        let parser = Parser::new(lexer);
        if !parser.errors().is_empty() {
            writeln!(output, "{ERROR_HEADER}")?;
            for error in parser.errors() {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        let program = parser.into_program();
        writeln!(output, "{program}")?;

        match evaluator.eval_program(&program) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(error) => writeln!(output, "\t{error}")?,
        }
    }
}

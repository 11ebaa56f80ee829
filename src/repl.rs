use std::io::{self, BufRead, Write};

use crate::interpreter::{environment::Environment, evaluator::core::Context};

/// Printed before every line of input.
pub const PROMPT: &str = ">> ";

/// Runs an interactive session until `input` is exhausted.
///
/// Every line is parsed on its own. Lines with parse errors print each
/// diagnostic on its own tab-indented line and are skipped. Otherwise the
/// line is evaluated against a scope that lives for the whole session, the
/// lines it printed are written out, and its value is echoed unless it is
/// `null`.
///
/// # Errors
/// Any I/O error from reading `input` or writing `output`.
///
/// # Example
/// ```
/// let input = b"let x = 20;\nx + 1\n";
/// let mut output = Vec::new();
/// tlang::repl::start(&input[..], &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), ">> >> 21\n>> ");
/// ```
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let env = Environment::new_root();
    let mut context = Context::new();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let (program, errors) = crate::parse(&line);
        if !errors.is_empty() {
            for message in errors {
                writeln!(output, "\t{message}")?;
            }
            continue;
        }

        let value = context.eval_program(&program, &env);
        for printed in context.take_output() {
            writeln!(output, "{printed}")?;
        }
        if !value.is_null() {
            writeln!(output, "{value}")?;
        }
    }
}

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::{calculator::session::CalculatorSession, repl::command::Command};

/// Printed before each line is read when prompts are enabled.
pub const PROMPT: &str = "Provide a command (\"help\" for a list)";
/// First line of the `help` reply.
pub const HELP: &str = "help, evaluate [number opcode number], display, restoreMemento, mementoSize, quit";

/// Settings for the command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplOptions {
    /// Whether to print [`PROMPT`] before every read.
    pub prompt: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self { prompt: true }
    }
}

/// What the loop should do after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the text and read the next line.
    Continue(String),
    /// Stop reading.
    Quit,
}

/// Handles one line of input against `session`.
///
/// Malformed lines are answered with the error text and counted as a
/// mistake; they never reach the dispatcher.
///
/// # Example
/// ```
/// use memento_calc::{
///     calculator::session::CalculatorSession,
///     repl::driver::{Step, handle_line},
/// };
///
/// let mut session = CalculatorSession::new();
///
/// assert_eq!(handle_line(&mut session, "evaluate 3 + 4"),
///            Step::Continue("3 + 4 = 7 (total mistakes in history: 0)".to_string()));
/// assert_eq!(handle_line(&mut session, "evaluate 3 +"),
///            Step::Continue("400 bad request".to_string()));
/// assert_eq!(session.mistakes(), 1);
/// ```
pub fn handle_line(session: &mut CalculatorSession, line: &str) -> Step {
    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(e) => {
            debug!(error = ?e, "rejected line");
            session.record_mistake();
            return Step::Continue(e.to_string());
        },
    };
    debug!(?command, "classified line");

    let reply = match command {
        Command::Help => {
            format!("{HELP}\nopcodes: {}", session.dispatcher().opcodes().join(" "))
        },
        Command::Display => session.render(),
        Command::RestoreMemento => session.undo().to_string(),
        Command::MementoSize => {
            let peek = session.peek_prior_snapshot()
                              .map_or_else(|| "(nothing)".to_string(), ToString::to_string);
            format!("Memento stack size: {}\nA peek of what will the state change to if you revert: \n{peek}",
                    session.history_size())
        },
        Command::Evaluate { op1, opcode, op2 } => {
            session.evaluate(&opcode, op1, op2);
            session.render()
        },
        Command::Quit => return Step::Quit,
    };

    Step::Continue(reply)
}

/// Runs the command loop until `quit` or end of input.
///
/// Each reply is written to `output` followed by a newline.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `output`.
///
/// # Example
/// ```
/// use memento_calc::{
///     calculator::session::CalculatorSession,
///     repl::driver::{ReplOptions, run},
/// };
///
/// let mut session = CalculatorSession::new();
/// let mut output = Vec::new();
/// let input = "evaluate 6 * 7\ndisplay\n".as_bytes();
///
/// run(&mut session, input, &mut output, ReplOptions { prompt: false }).unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert_eq!(text,
///            "6 * 7 = 42 (total mistakes in history: 0)\n6 * 7 = 42 (total mistakes in history: 0)\n");
/// ```
pub fn run<R: BufRead, W: Write>(session: &mut CalculatorSession,
                                 input: R,
                                 output: &mut W,
                                 options: ReplOptions)
                                 -> io::Result<()> {
    info!(prompt = options.prompt, "command loop started");
    let mut lines = input.lines();

    loop {
        if options.prompt {
            writeln!(output, "{PROMPT}")?;
            output.flush()?;
        }
        let Some(line) = lines.next().transpose()? else {
            info!("end of input");
            return Ok(());
        };
        match handle_line(session, &line) {
            Step::Continue(reply) => writeln!(output, "{reply}")?,
            Step::Quit => {
                info!("quit requested");
                return Ok(());
            },
        }
    }
}

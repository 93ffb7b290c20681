use std::str::FromStr;

use crate::{error::CommandError, repl::lexer::words};

/// Prefix that introduces an evaluation request, separator included.
const EVALUATE_PREFIX: &str = "evaluate ";

/// A classified line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `help`
    Help,
    /// `display`
    Display,
    /// `restoreMemento`
    RestoreMemento,
    /// `mementoSize`
    MementoSize,
    /// `quit`
    Quit,
    /// `evaluate <op1> <opcode> <op2>`
    Evaluate {
        /// Left operand.
        op1:    i64,
        /// Single-character opcode. It is not checked against the registered
        /// operations; an unknown one is the dispatcher's call.
        opcode: String,
        /// Right operand.
        op2:    i64,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    /// Classifies a line.
    ///
    /// Bare commands must match the whole line. An evaluation needs
    /// `evaluate ` followed by exactly three words: an integer, a
    /// one-character opcode and another integer.
    ///
    /// # Example
    /// ```
    /// use memento_calc::{error::CommandError, repl::command::Command};
    ///
    /// let cmd: Command = "evaluate 3 + 4".parse().unwrap();
    /// assert_eq!(cmd,
    ///            Command::Evaluate { op1:    3,
    ///                                opcode: "+".to_string(),
    ///                                op2:    4, });
    ///
    /// assert!(matches!("evaluate 3 ++ 4".parse::<Command>(),
    ///                  Err(CommandError::BadRequest { .. })));
    /// assert!(matches!("evaluate".parse::<Command>(),
    ///                  Err(CommandError::Unrecognised { .. })));
    /// ```
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line {
            "help" => Ok(Self::Help),
            "display" => Ok(Self::Display),
            "restoreMemento" => Ok(Self::RestoreMemento),
            "mementoSize" => Ok(Self::MementoSize),
            "quit" => Ok(Self::Quit),
            _ => line.strip_prefix(EVALUATE_PREFIX).map_or_else(
                || Err(CommandError::Unrecognised { line: line.to_string() }),
                parse_evaluate,
            ),
        }
    }
}

/// Validates the arguments of an `evaluate` command.
fn parse_evaluate(arguments: &str) -> Result<Command, CommandError> {
    let bad_request = |reason: String| CommandError::BadRequest { reason };

    let tokens = words(arguments)?;
    let [op1, opcode, op2] = tokens[..] else {
        return Err(bad_request(format!("expected 3 arguments in '{arguments}'")));
    };
    if opcode.chars().count() != 1 {
        return Err(bad_request(format!("opcode '{opcode}' is not a single character")));
    }
    let op1 = parse_operand(op1).ok_or_else(|| bad_request(format!("'{op1}' is not an integer")))?;
    let op2 = parse_operand(op2).ok_or_else(|| bad_request(format!("'{op2}' is not an integer")))?;

    Ok(Command::Evaluate { op1,
                           opcode: opcode.to_string(),
                           op2 })
}

fn parse_operand(word: &str) -> Option<i64> {
    word.parse().ok()
}

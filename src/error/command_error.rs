use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents a command line that never reaches the calculator.
///
/// The `Display` text of each variant is exactly what the command loop
/// prints back to the user.
pub enum CommandError {
    /// The line does not name any known command.
    #[error("Unrecognised command")]
    Unrecognised {
        /// The offending line.
        line: String,
    },
    /// An `evaluate` line whose arguments are not `<number> <opcode> <number>`.
    #[error("400 bad request")]
    BadRequest {
        /// Why the arguments were rejected. Only logged, never printed.
        reason: String,
    },
}

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Represents the computational failures an operation can produce.
///
/// These are values, not faults: the dispatcher hands them back in place of a
/// number and the session stores them as the current result, so `render`
/// can print them verbatim.
pub enum ArithmeticError {
    /// The right-hand operand of a division was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// No registered operation uses the requested opcode.
    #[error("No action was found for the given request")]
    NoMatchingOperation,
    /// The exact result does not fit in a signed 64-bit integer.
    #[error("integer overflow")]
    Overflow,
}

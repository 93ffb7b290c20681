/// Computational errors.
///
/// Defines the error values an arithmetic operation can yield, such as
/// division by zero or an opcode that no operation handles. They are stored as
/// results rather than propagated.
pub mod arithmetic_error;
/// Command errors.
///
/// Contains the errors raised while classifying a line of input, before the
/// calculator is involved: unknown commands and malformed `evaluate`
/// arguments.
pub mod command_error;

pub use arithmetic_error::ArithmeticError;
pub use command_error::CommandError;

/// Opcode dispatch.
///
/// Holds the ordered registry of arithmetic operations and applies the one
/// matching an opcode. Arithmetic failures come back as error values.
pub mod dispatcher;
/// Numeric results.
///
/// Defines `Number`, the integer-or-real value an operation yields.
pub mod number;
/// Calculator session and undo history.
///
/// Tracks the last evaluation, the running mistake count and the stack of
/// snapshots used to roll back.
pub mod session;
/// State snapshots.
pub mod snapshot;

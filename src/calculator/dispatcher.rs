use tracing::debug;

use crate::{calculator::number::Number, error::ArithmeticError};

/// Result of applying an operation to two operands.
///
/// Arithmetic failures are carried in the `Err` side as plain values; callers
/// store them rather than bubbling them up.
pub type DispatchResult = Result<Number, ArithmeticError>;

/// Signature of an operation's transform.
pub type OperationFn = fn(i64, i64) -> DispatchResult;

/// A single entry of the dispatch table: an opcode and its transform.
#[derive(Clone, Copy)]
pub struct Operation {
    /// Opcode the operation answers to, such as `+`.
    pub symbol: &'static str,
    /// Transform applied to the operands.
    pub func:   OperationFn,
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation").field("symbol", &self.symbol).finish_non_exhaustive()
    }
}

/// Defines the builtin operations by generating an ordered table and a symbol
/// list.
///
/// Table order is dispatch priority.
macro_rules! builtin_operations {
    (
        $(
            $symbol:literal => $func:expr
        ),* $(,)?
    ) => {
        static OPERATION_TABLE: &[Operation] = &[
            $(
                Operation { symbol: $symbol, func: $func },
            )*
        ];
        /// Opcodes of the builtin operations, in priority order.
        pub const BUILTIN_OPCODES: &[&str] = &[
            $($symbol,)*
        ];
    };
}

builtin_operations! {
    "+" => add,
    "-" => sub,
    "*" => mul,
    "/" => div,
}

fn add(a: i64, b: i64) -> DispatchResult {
    a.checked_add(b).map(Number::Integer).ok_or(ArithmeticError::Overflow)
}

fn sub(a: i64, b: i64) -> DispatchResult {
    a.checked_sub(b).map(Number::Integer).ok_or(ArithmeticError::Overflow)
}

fn mul(a: i64, b: i64) -> DispatchResult {
    a.checked_mul(b).map(Number::Integer).ok_or(ArithmeticError::Overflow)
}

/// True division. Exact quotients stay integral.
#[allow(clippy::cast_precision_loss)]
fn div(a: i64, b: i64) -> DispatchResult {
    if b == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    match a.checked_rem(b) {
        Some(0) => a.checked_div(b).map(Number::Integer).ok_or(ArithmeticError::Overflow),
        Some(_) => Ok(Number::Real(a as f64 / b as f64)),
        // Only `i64::MIN % -1` overflows.
        None => Err(ArithmeticError::Overflow),
    }
}

/// Routes an opcode and two operands to the matching operation.
///
/// The dispatcher owns an ordered registry. Lookup walks it front to back and
/// applies the first operation whose symbol equals the opcode, so earlier
/// registrations shadow later ones with the same symbol.
///
/// ## Usage
///
/// Build it once with [`OperationDispatcher::new`]; dispatching has no side
/// effects and can be repeated freely.
#[derive(Debug, Clone)]
pub struct OperationDispatcher {
    operations: Vec<Operation>,
}

impl Default for OperationDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationDispatcher {
    /// Creates a dispatcher holding addition, subtraction, multiplication and
    /// division, in that order.
    #[must_use]
    pub fn new() -> Self {
        Self { operations: OPERATION_TABLE.to_vec() }
    }

    /// Appends an operation at the lowest priority.
    ///
    /// # Example
    /// ```
    /// use memento_calc::calculator::{dispatcher::OperationDispatcher, number::Number};
    ///
    /// let mut dispatcher = OperationDispatcher::new();
    /// dispatcher.register("%", |a, b| Ok(Number::Integer(a % b)));
    ///
    /// assert_eq!(dispatcher.dispatch("%", 7, 4), Ok(Number::Integer(3)));
    /// ```
    pub fn register(&mut self, symbol: &'static str, func: OperationFn) {
        self.operations.push(Operation { symbol, func });
    }

    /// Registered opcodes in priority order.
    #[must_use]
    pub fn opcodes(&self) -> Vec<&'static str> {
        self.operations.iter().map(|op| op.symbol).collect()
    }

    /// Applies the operation registered for `opcode` to `op1` and `op2`.
    ///
    /// # Returns
    /// - `Ok(Number)`: the exact arithmetic result.
    /// - `Err(ArithmeticError::DivisionByZero)`: `/` with a zero divisor.
    /// - `Err(ArithmeticError::Overflow)`: the result does not fit in `i64`.
    /// - `Err(ArithmeticError::NoMatchingOperation)`: nothing handles
    ///   `opcode`.
    ///
    /// # Example
    /// ```
    /// use memento_calc::{
    ///     calculator::{dispatcher::OperationDispatcher, number::Number},
    ///     error::ArithmeticError,
    /// };
    ///
    /// let dispatcher = OperationDispatcher::new();
    ///
    /// assert_eq!(dispatcher.dispatch("*", 6, 7), Ok(Number::Integer(42)));
    /// assert_eq!(dispatcher.dispatch("/", 7, 2), Ok(Number::Real(3.5)));
    /// assert_eq!(dispatcher.dispatch("/", 1, 0), Err(ArithmeticError::DivisionByZero));
    /// assert_eq!(dispatcher.dispatch("?", 1, 2), Err(ArithmeticError::NoMatchingOperation));
    /// ```
    pub fn dispatch(&self, opcode: &str, op1: i64, op2: i64) -> DispatchResult {
        let result = self.operations
                         .iter()
                         .find(|op| op.symbol == opcode)
                         .map_or(Err(ArithmeticError::NoMatchingOperation), |op| {
                             (op.func)(op1, op2)
                         });
        debug!(opcode, op1, op2, ?result, "dispatched");
        result
    }
}

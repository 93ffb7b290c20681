use crate::calculator::{dispatcher::DispatchResult, number::Number};

/// Immutable record of the calculator state at one point in history.
///
/// The session's live state uses the same shape, so taking a snapshot is a
/// clone and restoring one is an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Opcode of the last evaluation; empty before the first one.
    pub opcode:   String,
    /// Left operand.
    pub op1:      i64,
    /// Right operand.
    pub op2:      i64,
    /// Number or arithmetic error produced by the dispatcher.
    pub result:   DispatchResult,
    /// Cumulative mistake count when the snapshot was taken.
    pub mistakes: u64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self { opcode:   String::new(),
               op1:      0,
               op2:      0,
               result:   Ok(Number::default()),
               mistakes: 0, }
    }
}

impl Snapshot {
    /// Whether no evaluation has been recorded in this state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.opcode.is_empty()
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, ", self.opcode, self.op1, self.op2)?;
        match &self.result {
            Ok(n) => write!(f, "{n}")?,
            Err(e) => write!(f, "{e}")?,
        }
        write!(f, ", {})", self.mistakes)
    }
}

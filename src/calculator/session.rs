use tracing::debug;

use crate::calculator::{dispatcher::OperationDispatcher, snapshot::Snapshot};

/// Reply of [`CalculatorSession::undo`] when a snapshot was restored.
pub const RESTORED: &str = "memento restored";
/// Reply of [`CalculatorSession::undo`] when there is nothing to go back to.
pub const NOTHING_TO_RESTORE: &str = "nothing to restore";
/// What [`CalculatorSession::render`] shows before the first evaluation.
pub const NO_OPERATIONS: &str = "no operations recorded";

/// Holds the calculator state and its undo history.
///
/// Every evaluation that reaches the dispatcher pushes a snapshot of the
/// updated state. Undo discards the newest snapshot and reloads the one below
/// it; there is no redo.
///
/// ## Usage
///
/// Create one session per process and hand it to the command loop by mutable
/// reference.
#[derive(Debug, Default)]
pub struct CalculatorSession {
    dispatcher: OperationDispatcher,
    current:    Snapshot,
    history:    Vec<Snapshot>,
}

impl CalculatorSession {
    /// Creates an empty session with the builtin operations, no history and no
    /// mistakes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dispatcher(OperationDispatcher::new())
    }

    /// Creates an empty session that evaluates through `dispatcher`.
    #[must_use]
    pub fn with_dispatcher(dispatcher: OperationDispatcher) -> Self {
        Self { dispatcher,
               current: Snapshot::default(),
               history: Vec::new() }
    }

    /// The dispatcher used for evaluation.
    #[must_use]
    pub const fn dispatcher(&self) -> &OperationDispatcher {
        &self.dispatcher
    }

    /// Evaluates `op1 opcode op2` and records the outcome.
    ///
    /// The opcode, operands and result replace the current state. An
    /// arithmetic error counts as one mistake. A snapshot of the new state is
    /// pushed whether or not the evaluation succeeded.
    ///
    /// # Example
    /// ```
    /// use memento_calc::calculator::session::CalculatorSession;
    ///
    /// let mut session = CalculatorSession::new();
    /// session.evaluate("+", 3, 4);
    /// assert_eq!(session.render(), "3 + 4 = 7 (total mistakes in history: 0)");
    ///
    /// session.evaluate("/", 5, 0);
    /// assert_eq!(session.render(), "division by zero");
    /// assert_eq!(session.mistakes(), 1);
    /// assert_eq!(session.history_size(), 2);
    /// ```
    pub fn evaluate(&mut self, opcode: &str, op1: i64, op2: i64) {
        let result = self.dispatcher.dispatch(opcode, op1, op2);
        if result.is_err() {
            self.current.mistakes += 1;
        }
        self.current = Snapshot { opcode: opcode.to_string(),
                                  op1,
                                  op2,
                                  result,
                                  mistakes: self.current.mistakes };
        self.history.push(self.current.clone());
        debug!(depth = self.history.len(), mistakes = self.current.mistakes, "snapshot pushed");
    }

    /// Rolls the state back to the previous snapshot.
    ///
    /// With fewer than two snapshots there is nothing earlier to return to
    /// and the state is left alone. Otherwise the newest snapshot is dropped
    /// for good and the one beneath it becomes the current state, mistake
    /// count included.
    ///
    /// # Returns
    /// [`RESTORED`] or [`NOTHING_TO_RESTORE`].
    ///
    /// # Example
    /// ```
    /// use memento_calc::calculator::session::{CalculatorSession, NOTHING_TO_RESTORE, RESTORED};
    ///
    /// let mut session = CalculatorSession::new();
    /// session.evaluate("+", 3, 4);
    /// assert_eq!(session.undo(), NOTHING_TO_RESTORE);
    ///
    /// session.evaluate("/", 5, 0);
    /// assert_eq!(session.undo(), RESTORED);
    /// assert_eq!(session.render(), "3 + 4 = 7 (total mistakes in history: 0)");
    /// ```
    pub fn undo(&mut self) -> &'static str {
        if self.history.len() <= 1 {
            debug!(depth = self.history.len(), "undo skipped");
            return NOTHING_TO_RESTORE;
        }
        self.history.pop();
        if let Some(top) = self.history.last() {
            self.current = top.clone();
        }
        debug!(depth = self.history.len(), mistakes = self.current.mistakes, "snapshot restored");
        RESTORED
    }

    /// Produces the display line for the current state.
    ///
    /// An arithmetic error is shown verbatim. Before any evaluation the
    /// result is [`NO_OPERATIONS`]. Otherwise the line reads
    /// `<op1> <opcode> <op2> = <result> (total mistakes in history: <n>)`.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.current.result {
            Err(e) => e.to_string(),
            Ok(_) if self.current.is_empty() => NO_OPERATIONS.to_string(),
            Ok(value) => format!("{} {} {} = {value} (total mistakes in history: {})",
                                 self.current.op1,
                                 self.current.opcode,
                                 self.current.op2,
                                 self.current.mistakes),
        }
    }

    /// Counts a mistake that never reached the dispatcher, such as a
    /// malformed command line. The history is not touched.
    pub const fn record_mistake(&mut self) {
        self.current.mistakes += 1;
    }

    /// Cumulative mistake count of the current state.
    #[must_use]
    pub const fn mistakes(&self) -> u64 {
        self.current.mistakes
    }

    /// The live state.
    #[must_use]
    pub const fn current(&self) -> &Snapshot {
        &self.current
    }

    /// Number of snapshots on the history stack.
    #[must_use]
    pub fn history_size(&self) -> usize {
        self.history.len()
    }

    /// The snapshot [`undo`](Self::undo) would restore, if any.
    #[must_use]
    pub fn peek_prior_snapshot(&self) -> Option<&Snapshot> {
        self.history.len().checked_sub(2).and_then(|i| self.history.get(i))
    }
}

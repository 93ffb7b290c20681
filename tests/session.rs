use memento_calc::{
    calculator::{
        dispatcher::{BUILTIN_OPCODES, OperationDispatcher},
        number::Number,
        session::{CalculatorSession, NO_OPERATIONS, NOTHING_TO_RESTORE, RESTORED},
        snapshot::Snapshot,
    },
    error::ArithmeticError,
};

fn session_after(steps: &[(&str, i64, i64)]) -> CalculatorSession {
    let mut session = CalculatorSession::new();
    for (opcode, op1, op2) in steps {
        session.evaluate(opcode, *op1, *op2);
    }
    session
}

#[test]
fn builtin_operations_keep_registration_order() {
    assert_eq!(BUILTIN_OPCODES, &["+", "-", "*", "/"]);
    assert_eq!(OperationDispatcher::new().opcodes(), vec!["+", "-", "*", "/"]);
}

#[test]
fn dispatch_basic_arithmetic() {
    let dispatcher = OperationDispatcher::new();

    assert_eq!(dispatcher.dispatch("+", 3, 4), Ok(Number::Integer(7)));
    assert_eq!(dispatcher.dispatch("-", 3, 10), Ok(Number::Integer(-7)));
    assert_eq!(dispatcher.dispatch("*", -6, 7), Ok(Number::Integer(-42)));
    assert_eq!(dispatcher.dispatch("/", 12, 4), Ok(Number::Integer(3)));
    assert_eq!(dispatcher.dispatch("/", -7, 2), Ok(Number::Real(-3.5)));
}

#[test]
fn dispatch_errors_are_values() {
    let dispatcher = OperationDispatcher::new();

    assert_eq!(dispatcher.dispatch("/", 5, 0), Err(ArithmeticError::DivisionByZero));
    assert_eq!(dispatcher.dispatch("?", 5, 1), Err(ArithmeticError::NoMatchingOperation));
    assert_eq!(dispatcher.dispatch("", 5, 1), Err(ArithmeticError::NoMatchingOperation));
    assert_eq!(dispatcher.dispatch("+", i64::MAX, 1), Err(ArithmeticError::Overflow));
    assert_eq!(dispatcher.dispatch("/", i64::MIN, -1), Err(ArithmeticError::Overflow));
}

#[test]
fn dispatch_is_repeatable() {
    let dispatcher = OperationDispatcher::new();

    for _ in 0..3 {
        assert_eq!(dispatcher.dispatch("/", 1, 3), dispatcher.dispatch("/", 1, 3));
    }
}

#[test]
fn first_registered_operation_wins() {
    let mut dispatcher = OperationDispatcher::new();
    dispatcher.register("+", |_, _| Ok(Number::Integer(0)));
    dispatcher.register("^", |a, b| {
                  u32::try_from(b).ok()
                                  .and_then(|b| a.checked_pow(b))
                                  .map(Number::Integer)
                                  .ok_or(ArithmeticError::Overflow)
              });

    assert_eq!(dispatcher.dispatch("+", 1, 1), Ok(Number::Integer(2)));
    assert_eq!(dispatcher.dispatch("^", 2, 10), Ok(Number::Integer(1024)));
    assert_eq!(dispatcher.opcodes(), vec!["+", "-", "*", "/", "+", "^"]);
}

#[test]
fn fresh_session_is_empty() {
    let session = CalculatorSession::new();

    assert_eq!(session.render(), NO_OPERATIONS);
    assert_eq!(session.history_size(), 0);
    assert_eq!(session.mistakes(), 0);
    assert!(session.peek_prior_snapshot().is_none());
}

#[test]
fn successful_evaluation_keeps_mistakes() {
    let mut session = CalculatorSession::new();
    session.record_mistake();
    session.evaluate("*", 6, 7);

    assert_eq!(session.render(), "6 * 7 = 42 (total mistakes in history: 1)");
    assert_eq!(session.mistakes(), 1);
}

#[test]
fn fractional_quotient_renders_as_real() {
    let session = session_after(&[("/", 7, 2)]);

    assert_eq!(session.render(), "7 / 2 = 3.5 (total mistakes in history: 0)");
}

#[test]
fn division_by_zero_counts_one_mistake() {
    let session = session_after(&[("+", 1, 1), ("/", 9, 0)]);

    assert_eq!(session.render(), "division by zero");
    assert_eq!(session.mistakes(), 1);
}

#[test]
fn unknown_opcode_counts_one_mistake() {
    let session = session_after(&[("?", 1, 2)]);

    assert_eq!(session.render(), "No action was found for the given request");
    assert_eq!(session.mistakes(), 1);
    assert_eq!(session.history_size(), 1);
}

#[test]
fn every_evaluation_pushes_a_snapshot() {
    let session = session_after(&[("+", 1, 2), ("/", 1, 0), ("?", 0, 0), ("-", 5, 3)]);

    assert_eq!(session.history_size(), 4);
    assert_eq!(session.mistakes(), 2);
}

#[test]
fn undo_without_prior_snapshot_is_a_no_op() {
    let mut empty = CalculatorSession::new();
    assert_eq!(empty.undo(), NOTHING_TO_RESTORE);
    assert_eq!(empty.render(), NO_OPERATIONS);

    let mut single = session_after(&[("-", 10, 4)]);
    let before = single.current().clone();
    assert_eq!(single.undo(), NOTHING_TO_RESTORE);
    assert_eq!(single.current(), &before);
    assert_eq!(single.history_size(), 1);
}

#[test]
fn undo_restores_the_previous_snapshot() {
    let mut session = session_after(&[("+", 3, 4), ("/", 5, 0)]);
    let prior = session.peek_prior_snapshot().cloned();

    assert_eq!(prior,
               Some(Snapshot { opcode:   "+".to_string(),
                               op1:      3,
                               op2:      4,
                               result:   Ok(Number::Integer(7)),
                               mistakes: 0, }));
    assert_eq!(session.undo(), RESTORED);
    assert_eq!(session.history_size(), 1);
    assert_eq!(Some(session.current().clone()), prior);
    assert_eq!(session.mistakes(), 0);
    assert_eq!(session.render(), "3 + 4 = 7 (total mistakes in history: 0)");
}

#[test]
fn undo_drops_direct_mistakes_made_since_last_snapshot() {
    let mut session = session_after(&[("+", 1, 1), ("*", 2, 2)]);
    session.record_mistake();
    session.record_mistake();
    assert_eq!(session.mistakes(), 2);

    session.undo();
    assert_eq!(session.mistakes(), 0);
}

#[test]
fn undo_is_not_redoable() {
    let mut session = session_after(&[("+", 1, 1), ("+", 2, 2), ("+", 3, 3)]);

    assert_eq!(session.undo(), RESTORED);
    assert_eq!(session.undo(), RESTORED);
    assert_eq!(session.undo(), NOTHING_TO_RESTORE);
    assert_eq!(session.render(), "1 + 1 = 2 (total mistakes in history: 0)");
}

#[test]
fn render_is_idempotent() {
    let session = session_after(&[("-", 2, 9)]);

    assert_eq!(session.render(), session.render());
    assert_eq!(session.render(), "2 - 9 = -7 (total mistakes in history: 0)");
}

#[test]
fn snapshot_display_lists_fields() {
    let session = session_after(&[("/", 1, 0), ("+", 2, 3)]);

    let prior = session.peek_prior_snapshot().map(ToString::to_string);
    assert_eq!(prior.as_deref(), Some("(/, 1, 0, division by zero, 1)"));
    assert_eq!(session.current().to_string(), "(+, 2, 3, 5, 1)");
}

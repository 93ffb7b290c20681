//! # memento-calc
//!
//! A line-oriented integer calculator with undo. Requests of the form
//! `<number> <opcode> <number>` are routed through an ordered table of
//! operations, and every evaluation leaves a snapshot behind so the session
//! can be rolled back one step at a time.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Evaluation and history.
///
/// This module holds the arithmetic core: the operation dispatcher, the
/// numeric result type, snapshots and the session that ties them together.
///
/// # Responsibilities
/// - Maps opcodes to operations and applies them to two integers.
/// - Keeps arithmetic failures as displayable values instead of aborting.
/// - Records a snapshot after each evaluation and restores them on undo.
/// - Counts mistakes across the session.
pub mod calculator;
/// Error types for commands and arithmetic.
///
/// Both kinds are recoverable: arithmetic errors become the session's result,
/// command errors are printed and counted as mistakes.
pub mod error;
/// Logging setup.
pub mod logging;
/// The interactive front end.
///
/// This module reads commands line by line, classifies them and calls into
/// the calculator session.
///
/// # Responsibilities
/// - Tokenizes `evaluate` arguments.
/// - Rejects unknown or malformed commands.
/// - Drives the read/reply loop until `quit` or end of input.
pub mod repl;

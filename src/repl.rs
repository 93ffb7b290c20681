/// Command classification.
///
/// Turns a raw input line into a `Command`, rejecting unknown commands and
/// malformed `evaluate` arguments.
pub mod command;
/// The line loop.
///
/// Reads lines, dispatches them to the session and writes the replies. Generic
/// over the reader and writer so it runs the same on stdin and in tests.
pub mod driver;
/// Tokenizer for command arguments.
pub mod lexer;

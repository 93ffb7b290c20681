use logos::Logos;

use crate::error::CommandError;

/// Represents a lexical token of command arguments.
///
/// Arguments are whitespace separated; the lexer does not interpret them, so
/// `3`, `+` and `3x` are all words. Validation happens in the command parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token<'src> {
    /// A run of non-whitespace characters.
    #[regex(r"\S+", |lex| lex.slice(), allow_greedy = true)]
    Word(&'src str),
}

/// Splits argument text into its whitespace-separated words.
///
/// # Errors
/// Returns `CommandError::BadRequest` if the lexer cannot read the input.
///
/// # Example
/// ```
/// use memento_calc::repl::lexer::words;
///
/// assert_eq!(words("  12 *\t-3 ").unwrap(), vec!["12", "*", "-3"]);
/// assert!(words("").unwrap().is_empty());
/// ```
pub fn words(source: &str) -> Result<Vec<&str>, CommandError> {
    let mut lexer = Token::lexer(source);
    let mut words = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Word(word)) => words.push(word),
            Err(()) => {
                return Err(CommandError::BadRequest { reason: format!("unreadable input near '{}'",
                                                                      lexer.slice()) });
            },
        }
    }

    Ok(words)
}

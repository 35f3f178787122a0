//! Lexer for `.tfc` reversible-logic netlists.

use logos::Logos;
use std::fmt;

/// Tokens of the netlist format.
///
/// The format is line oriented, so newlines are tokens rather than
/// whitespace.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token {
    #[token("\n")]
    Newline,

    #[token(",")]
    Comma,

    /// `.v`, `.i`, `.o`, ... (name without the dot).
    #[regex(r"\.[^ \t\r\f\n,#]*", |lex| lex.slice()[1..].to_string())]
    Directive(String),

    /// Gate mnemonics (`t3`, `f2`), markers (`BEGIN`), wire names and
    /// directive payloads: any run free of whitespace, `,` and `#` that does
    /// not start with `.`.
    #[regex(r"[^ \t\r\f\n,#.][^ \t\r\f\n,#]*", |lex| lex.slice().to_string())]
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Newline => write!(f, "end of line"),
            Token::Comma => write!(f, ","),
            Token::Directive(d) => write!(f, ".{d}"),
            Token::Word(w) => write!(f, "{w}"),
        }
    }
}

/// A token with its 1-based source line.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub line: usize,
}

/// Tokenize a netlist source string.
pub fn tokenize(source: &str) -> Vec<Result<SpannedToken, (usize, String)>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    let mut line = 1;

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => {
                let is_newline = token == Token::Newline;
                tokens.push(Ok(SpannedToken { token, line }));
                if is_newline {
                    line += 1;
                }
            }
            Err(()) => {
                let slice = lexer.slice();
                tokens.push(Err((line, format!("Invalid token: '{slice}'"))));
            }
        }
    }

    tokens
}

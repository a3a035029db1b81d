//! Deck tokens, produced with logos.
//!
//! The deck language has very little lexical structure: whitespace and
//! `--` comments are skipped, `/` terminates a record, single-quoted
//! strings are literal, and everything else is a bare word. Numbers,
//! repeats and keyword names are all words; the reader classifies them.

use logos::Logos;
use std::fmt;

use crate::error::DeckError;

/// A deck token.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"--[^\n]*")]
pub enum Token {
    /// Record terminator.
    #[token("/")]
    Slash,
    /// A quoted string, without its quotes.
    #[regex(r"'[^'\n]*'", |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_owned()
    })]
    Quoted(String),
    /// Any other run of non-space characters.
    #[regex(r"[^ \t\r\n\f/']+", |lex| lex.slice().to_owned())]
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slash => write!(f, "/"),
            Self::Quoted(s) => write!(f, "'{s}'"),
            Self::Word(w) => write!(f, "{w}"),
        }
    }
}

/// A token tagged with its 1-based line number.
#[derive(Clone, Debug, PartialEq)]
pub struct Located {
    /// The token.
    pub token: Token,
    /// Line the token starts on.
    pub line: usize,
}

/// Tokenize a whole deck.
pub fn tokenize(src: &str) -> Result<Vec<Located>, DeckError> {
    let mut out = Vec::new();
    let mut line = 1;
    let mut cursor = 0;
    for (result, span) in Token::lexer(src).spanned() {
        line += src[cursor..span.start].bytes().filter(|&b| b == b'\n').count();
        cursor = span.start;
        let token = result.map_err(|()| DeckError::InvalidToken { line })?;
        out.push(Located { token, line });
    }
    Ok(out)
}

//! Assembles tokens into keywords and records.
//!
//! Text following a record's `/` on the same line is commentary and is
//! dropped, as decks commonly annotate records that way.

use std::iter::Peekable;
use std::vec::IntoIter;

use crate::deck::{Keyword, Record};
use crate::error::DeckError;
use crate::item::Item;
use crate::lexer::{tokenize, Located, Token};
use crate::shape::{keyword_shape, KeywordShape};

pub(crate) fn read_keywords(src: &str) -> Result<Vec<Keyword>, DeckError> {
    let mut reader = Reader {
        tokens: tokenize(src)?.into_iter().peekable(),
    };
    let mut keywords = Vec::new();
    while let Some(located) = reader.tokens.next() {
        keywords.push(reader.keyword(located)?);
    }
    Ok(keywords)
}

struct Reader {
    tokens: Peekable<IntoIter<Located>>,
}

impl Reader {
    fn keyword(&mut self, located: Located) -> Result<Keyword, DeckError> {
        let Located { token, line } = located;
        let name = match token {
            Token::Word(w) if w.starts_with(|c: char| c.is_ascii_alphabetic()) => {
                w.to_ascii_uppercase()
            }
            other => {
                return Err(DeckError::ExpectedKeyword {
                    line,
                    found: other.to_string(),
                })
            }
        };
        let mut keyword = Keyword::new(name, line);
        match keyword_shape(keyword.name()) {
            KeywordShape::NoData => {}
            KeywordShape::Single => {
                let record = self.record(keyword.name(), line)?;
                keyword.push_record(record);
            }
            KeywordShape::Multi => loop {
                let record = self.record(keyword.name(), line)?;
                if record.is_empty() {
                    break;
                }
                keyword.push_record(record);
            },
        }
        Ok(keyword)
    }

    fn record(&mut self, keyword: &str, keyword_line: usize) -> Result<Record, DeckError> {
        let mut items = Vec::new();
        let mut first_line = None;
        loop {
            let Some(Located { token, line }) = self.tokens.next() else {
                return Err(DeckError::UnterminatedRecord {
                    keyword: keyword.to_owned(),
                    line: keyword_line,
                });
            };
            match token {
                Token::Slash => {
                    while self.tokens.next_if(|t| t.line == line).is_some() {}
                    return Ok(Record::new(items, first_line.unwrap_or(line)));
                }
                Token::Quoted(s) => {
                    first_line.get_or_insert(line);
                    items.push(Item::Str(s));
                }
                Token::Word(w) => {
                    first_line.get_or_insert(line);
                    push_word(&mut items, &w, line)?;
                }
            }
        }
    }
}

/// Push one word, expanding `N*value` and `N*`.
fn push_word(items: &mut Vec<Item>, word: &str, line: usize) -> Result<(), DeckError> {
    if let Some((count, value)) = word.split_once('*') {
        if let Ok(count) = count.parse::<usize>() {
            if count == 0 {
                return Err(DeckError::InvalidRepeat {
                    line,
                    text: word.to_owned(),
                });
            }
            let item = if value.is_empty() {
                Item::Default
            } else {
                Item::parse(value)
            };
            items.extend(std::iter::repeat(item).take(count));
            return Ok(());
        }
    }
    items.push(Item::parse(word));
    Ok(())
}

//! The keyword/record model of a parsed deck.

use smallvec::SmallVec;
use std::str::FromStr;

use strata_core::GridExtent;

use crate::error::DeckError;
use crate::item::Item;
use crate::reader;

/// One slash-terminated list of items.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    items: Vec<Item>,
    line: usize,
}

impl Record {
    /// Create a record. `line` is informational.
    pub fn new(items: Vec<Item>, line: usize) -> Self {
        Self { items, line }
    }

    /// All items in order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at `index`, if present.
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the record has no items (a lone `/`).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line the record starts on.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// A keyword occurrence and its records.
///
/// Most keywords carry a single record, so records are stored inline.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyword {
    name: String,
    records: SmallVec<[Record; 1]>,
    line: usize,
}

impl Keyword {
    /// Create a keyword with no records.
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            records: SmallVec::new(),
            line,
        }
    }

    /// Builder-style helper for assembling keywords in code.
    pub fn with_record(mut self, items: Vec<Item>) -> Self {
        let line = self.line;
        self.records.push(Record::new(items, line));
        self
    }

    /// Append a record.
    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Keyword name, upper-cased.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Line the keyword name appears on.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// An ordered sequence of keywords.
///
/// # Examples
///
/// ```
/// use strata_deck::{Deck, Item};
///
/// let deck: Deck = "RUNSPEC\nDIMENS\n 4 3 2 /\nGRID\nPORO\n 24*0.2 /\n".parse().unwrap();
/// assert_eq!(deck.len(), 4);
/// assert_eq!(deck.extent().unwrap().cell_count(), 24);
/// let poro = deck.get("PORO").unwrap();
/// assert_eq!(poro.records()[0].len(), 24);
/// assert_eq!(poro.records()[0].item(0), Some(&Item::Float(0.2)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    keywords: Vec<Keyword>,
}

impl Deck {
    /// Tokenize and assemble `src`.
    pub fn parse(src: &str) -> Result<Self, DeckError> {
        Ok(Self {
            keywords: reader::read_keywords(src)?,
        })
    }

    /// Build a deck from already-assembled keywords.
    pub fn from_keywords(keywords: Vec<Keyword>) -> Self {
        Self { keywords }
    }

    /// Keywords in file order.
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the deck has no keywords.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// First keyword named `name`.
    pub fn get(&self, name: &str) -> Option<&Keyword> {
        self.keywords.iter().find(|kw| kw.name() == name)
    }

    /// Grid extent declared by `DIMENS`.
    pub fn extent(&self) -> Result<GridExtent, DeckError> {
        let dimens = self
            .get("DIMENS")
            .ok_or(DeckError::MissingKeyword { name: "DIMENS" })?;
        let record = dimens
            .records()
            .first()
            .ok_or_else(|| DeckError::InvalidDimens {
                reason: "no record".into(),
            })?;
        let mut dims = [0usize; 3];
        for (axis, dim) in dims.iter_mut().enumerate() {
            let value = record.item(axis).and_then(Item::as_int).ok_or_else(|| {
                DeckError::InvalidDimens {
                    reason: format!("item {} is not an integer", axis + 1),
                }
            })?;
            *dim = usize::try_from(value).map_err(|_| DeckError::InvalidDimens {
                reason: format!("item {} is negative", axis + 1),
            })?;
        }
        Ok(GridExtent::new(dims[0], dims[1], dims[2])?)
    }
}

impl FromStr for Deck {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Keyword;
    type IntoIter = std::slice::Iter<'a, Keyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.keywords.iter()
    }
}

//! Decoding deck records into operator applications.

use strata_core::EditError;
use strata_deck::{Item, Record};
use strata_ops::{OperateFn, RegionOperator};
use strata_region::BoxBounds;

/// The edit keywords, each applying one [`RegionOperator`] per record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditKeyword {
    /// `EQUALS field value [box]`
    Equals,
    /// `COPY source target [box]`
    Copy,
    /// `MULTIPLY field factor [box]`
    Multiply,
    /// `ADD field delta [box]`
    Add,
    /// `MINVALUE field floor [box]`
    MinValue,
    /// `MAXVALUE field ceiling [box]`
    MaxValue,
    /// `OPERATE target box function source [alpha] [beta]`
    Operate,
}

const EDIT_KEYWORDS: &[(&str, EditKeyword)] = &[
    ("EQUALS", EditKeyword::Equals),
    ("COPY", EditKeyword::Copy),
    ("MULTIPLY", EditKeyword::Multiply),
    ("ADD", EditKeyword::Add),
    ("MINVALUE", EditKeyword::MinValue),
    ("MAXVALUE", EditKeyword::MaxValue),
    ("OPERATE", EditKeyword::Operate),
];

/// One decoded edit record.
#[derive(Clone, Debug, PartialEq)]
pub struct EditRecord {
    /// Property written.
    pub target: String,
    /// Transformation applied.
    pub operator: RegionOperator,
    /// The record's own box, if it gives one.
    pub bounds: Option<BoxBounds>,
}

impl EditKeyword {
    /// Look up an edit keyword by name.
    pub fn from_name(name: &str) -> Option<Self> {
        EDIT_KEYWORDS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, k)| k)
    }

    /// The deck name.
    pub fn name(self) -> &'static str {
        EDIT_KEYWORDS
            .iter()
            .find(|&&(_, k)| k == self)
            .map_or("?", |&(n, _)| n)
    }

    /// Decode one record of this keyword.
    pub fn decode(self, record: &Record) -> Result<EditRecord, EditError> {
        let items = Items::new(self.name(), record);
        match self {
            Self::Copy => {
                items.expect_at_most(8)?;
                let source = items.name(0)?;
                Ok(EditRecord {
                    target: items.name(1)?,
                    operator: RegionOperator::Copy { source },
                    bounds: items.bounds(2)?,
                })
            }
            Self::Operate => {
                items.expect_at_most(11)?;
                let target = items.name(0)?;
                let bounds = items.bounds(1)?;
                let function_name = items.name(7)?;
                let function = OperateFn::from_name(&function_name).ok_or_else(|| {
                    EditError::MalformedRecord {
                        reason: format!("unknown OPERATE function '{function_name}'"),
                    }
                })?;
                Ok(EditRecord {
                    target,
                    operator: RegionOperator::Operate {
                        function,
                        source: items.name(8)?,
                        alpha: items.number_or(9, 0.0)?,
                        beta: items.number_or(10, 0.0)?,
                    },
                    bounds,
                })
            }
            Self::Equals => decode_scalar(&items, RegionOperator::Equals),
            Self::Multiply => decode_scalar(&items, RegionOperator::Multiply),
            Self::Add => decode_scalar(&items, RegionOperator::Add),
            Self::MinValue => decode_scalar(&items, RegionOperator::MinLimit),
            Self::MaxValue => decode_scalar(&items, RegionOperator::MaxLimit),
        }
    }
}

/// `field value [box]` records.
fn decode_scalar(
    items: &Items<'_>,
    operator: fn(f64) -> RegionOperator,
) -> Result<EditRecord, EditError> {
    items.expect_at_most(8)?;
    let target = items.name(0)?;
    let value = items.number(1)?;
    Ok(EditRecord {
        target,
        operator: operator(value),
        bounds: items.bounds(2)?,
    })
}

/// Decode the six items of a `BOX` record. Every item is required.
pub fn decode_box(record: &Record) -> Result<BoxBounds, EditError> {
    let items = Items::new("BOX", record);
    items.expect_at_most(6)?;
    match items.bounds(0)? {
        Some(bounds) => Ok(bounds),
        None => Err(EditError::InvalidRegion {
            reason: "BOX requires six bounds".into(),
        }),
    }
}

/// Positional access to a record's items with keyword-aware errors.
struct Items<'a> {
    keyword: &'static str,
    record: &'a Record,
}

impl<'a> Items<'a> {
    fn new(keyword: &'static str, record: &'a Record) -> Self {
        Self { keyword, record }
    }

    /// `None` for both missing and defaulted items.
    fn get(&self, index: usize) -> Option<&'a Item> {
        self.record.item(index).filter(|item| !item.is_default())
    }

    fn malformed(&self, index: usize, what: &str) -> EditError {
        EditError::MalformedRecord {
            reason: format!("{} item {} must be {what}", self.keyword, index + 1),
        }
    }

    fn expect_at_most(&self, count: usize) -> Result<(), EditError> {
        if self.record.len() > count {
            return Err(EditError::MalformedRecord {
                reason: format!(
                    "{} takes at most {count} items, found {}",
                    self.keyword,
                    self.record.len()
                ),
            });
        }
        Ok(())
    }

    fn name(&self, index: usize) -> Result<String, EditError> {
        self.get(index)
            .and_then(Item::as_str)
            .map(str::to_ascii_uppercase)
            .ok_or_else(|| self.malformed(index, "a property name"))
    }

    fn number(&self, index: usize) -> Result<f64, EditError> {
        self.get(index)
            .and_then(Item::as_f64)
            .ok_or_else(|| self.malformed(index, "a number"))
    }

    fn number_or(&self, index: usize, default: f64) -> Result<f64, EditError> {
        match self.get(index) {
            None => Ok(default),
            Some(item) => item.as_f64().ok_or_else(|| self.malformed(index, "a number")),
        }
    }

    /// Six box items starting at `start`: all defaulted gives `None`,
    /// all present gives bounds, anything between is an error.
    fn bounds(&self, start: usize) -> Result<Option<BoxBounds>, EditError> {
        let mut given = [None; 6];
        for (n, slot) in given.iter_mut().enumerate() {
            *slot = match self.get(start + n) {
                None => None,
                Some(item) => Some(
                    item.as_int()
                        .ok_or_else(|| self.malformed(start + n, "an integer box bound"))?,
                ),
            };
        }
        let present = given.iter().filter(|b| b.is_some()).count();
        match present {
            0 => Ok(None),
            6 => {
                let mut b = [0i64; 6];
                for (dst, src) in b.iter_mut().zip(given) {
                    *dst = src.unwrap_or_default();
                }
                Ok(Some(BoxBounds::from_array(b)))
            }
            n => Err(EditError::InvalidRegion {
                reason: format!("{} box gives {n} of 6 bounds", self.keyword),
            }),
        }
    }
}

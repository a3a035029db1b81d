//! The keyword processor: walks a deck and applies it to a property store.
//!
//! Keywords are handled in deck order:
//!
//! - `BOX` / `ENDBOX` and section keywords drive the [`ActiveRegion`].
//! - Edit keywords (`EQUALS`, `COPY`, ...) apply one operator per record,
//!   each to its own box when it gives one, otherwise to the active region.
//! - A keyword naming a declared property loads one value per active cell.
//! - Anything else is skipped or rejected per [`UnknownKeywordPolicy`].
//!
//! The first error aborts the pass. Earlier records stay applied; the
//! failing record changes nothing.

use tracing::{debug, info, instrument, trace, warn};

use strata_core::{EditError, Property, Scalar};
use strata_deck::{Deck, Item, Keyword, Record};
use strata_region::ActiveRegion;

use crate::config::{ConfigError, ProcessorConfig, UnknownKeywordPolicy};
use crate::error::ProcessError;
use crate::record::{decode_box, EditKeyword};
use crate::store::PropertyStore;

/// Counters accumulated over a processing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Keywords seen.
    pub keywords: usize,
    /// Edit records applied.
    pub records: usize,
    /// Cell writes performed by edit records and data keywords.
    pub cells: usize,
    /// Keywords skipped as unknown.
    pub ignored: usize,
}

/// Applies deck keywords to a [`PropertyStore`] under the box rules.
///
/// # Examples
///
/// ```
/// use strata_deck::Deck;
/// use strata_engine::{KeywordProcessor, ProcessorConfig, PropertyStore};
///
/// let deck = Deck::parse(
///     "DIMENS\n 2 2 1 /\n\
///      BOX\n 1 1 1 2 1 1 /\n\
///      PORO\n 0.1 0.2 /\n\
///      ENDBOX\n\
///      MULTIPLY\n PORO 2 /\n/\n",
/// )
/// .unwrap();
/// let mut store = PropertyStore::with_standard_properties(deck.extent().unwrap());
/// let mut processor = KeywordProcessor::new(&mut store, ProcessorConfig::default()).unwrap();
/// processor.process_deck(&deck).unwrap();
///
/// assert_eq!(store.double_field("PORO").unwrap().values(), &[0.2, 0.0, 0.4, 0.0]);
/// ```
#[derive(Debug)]
pub struct KeywordProcessor<'s> {
    store: &'s mut PropertyStore,
    region: ActiveRegion,
    config: ProcessorConfig,
    stats: PassStats,
}

impl<'s> KeywordProcessor<'s> {
    /// A processor editing `store`, starting with the full grid active.
    pub fn new(store: &'s mut PropertyStore, config: ProcessorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let region = ActiveRegion::new(store.extent(), config.index_base);
        Ok(Self {
            store,
            region,
            config,
            stats: PassStats::default(),
        })
    }

    /// The active region as left by the keywords processed so far.
    pub fn region(&self) -> &ActiveRegion {
        &self.region
    }

    /// The store being edited.
    pub fn store(&self) -> &PropertyStore {
        &*self.store
    }

    /// Counters so far.
    pub fn stats(&self) -> PassStats {
        self.stats
    }

    /// Process every keyword of `deck` in order.
    #[instrument(skip_all, name = "process_deck", fields(keywords = deck.len()))]
    pub fn process_deck(&mut self, deck: &Deck) -> Result<PassStats, ProcessError> {
        for keyword in deck {
            self.process_keyword(keyword)?;
        }
        info!(
            keywords = self.stats.keywords,
            records = self.stats.records,
            cells = self.stats.cells,
            ignored = self.stats.ignored,
            "deck processed"
        );
        Ok(self.stats)
    }

    /// Process a single keyword.
    pub fn process_keyword(&mut self, keyword: &Keyword) -> Result<(), ProcessError> {
        let name = keyword.name();
        let line = keyword.line();
        self.stats.keywords += 1;
        debug!(keyword = name, line, records = keyword.records().len(), "keyword");

        if self.config.is_section(name) {
            self.region.reset_to_full();
            return Ok(());
        }
        match name {
            "BOX" => {
                let record = single_record(keyword)
                    .map_err(|kind| ProcessError::new(name, line, None, kind))?;
                decode_box(record)
                    .and_then(|bounds| self.region.apply_box_record(bounds))
                    .map_err(|kind| ProcessError::new(name, line, Some(0), kind))
            }
            "ENDBOX" => {
                self.region.reset_to_full();
                Ok(())
            }
            _ => {
                if let Some(edit) = EditKeyword::from_name(name) {
                    for (index, record) in keyword.records().iter().enumerate() {
                        let cells = self
                            .apply_edit(edit, record)
                            .map_err(|kind| ProcessError::new(name, line, Some(index), kind))?;
                        self.stats.records += 1;
                        self.stats.cells += cells;
                    }
                    Ok(())
                } else if self.store.contains(name) {
                    let cells = single_record(keyword)
                        .and_then(|record| self.load_values(name, record))
                        .map_err(|kind| ProcessError::new(name, line, None, kind))?;
                    self.stats.cells += cells;
                    Ok(())
                } else {
                    self.unknown(keyword)
                }
            }
        }
    }

    fn unknown(&mut self, keyword: &Keyword) -> Result<(), ProcessError> {
        let name = keyword.name();
        let line = keyword.line();
        match self.config.unknown_keywords {
            UnknownKeywordPolicy::Ignore => {
                debug!(keyword = name, line, "keyword ignored");
                if let Some(swallowed) = self.swallowed_keyword(keyword) {
                    warn!(
                        keyword = name,
                        line,
                        swallowed,
                        "ignored keyword's record names a keyword; it may take no data"
                    );
                }
                self.stats.ignored += 1;
                Ok(())
            }
            UnknownKeywordPolicy::Reject => Err(ProcessError::new(
                name,
                line,
                None,
                EditError::UnknownKeyword {
                    name: name.to_owned(),
                },
            )),
        }
    }

    /// The first record item an unlisted no-data keyword would have
    /// swallowed: a property, edit, box or section keyword name.
    fn swallowed_keyword<'k>(&self, keyword: &'k Keyword) -> Option<&'k str> {
        keyword
            .records()
            .iter()
            .flat_map(Record::items)
            .filter_map(Item::as_str)
            .find(|word| {
                let upper = word.to_ascii_uppercase();
                self.store.contains(&upper)
                    || self.config.is_section(&upper)
                    || EditKeyword::from_name(&upper).is_some()
                    || matches!(upper.as_str(), "BOX" | "ENDBOX")
            })
    }

    /// Apply one edit record. Returns the number of cells written.
    fn apply_edit(&mut self, edit: EditKeyword, record: &Record) -> Result<usize, EditError> {
        let decoded = edit.decode(record)?;
        let region = self.region.resolve(decoded.bounds)?;
        let unknown = |name: &str| EditError::UnknownField {
            name: name.to_owned(),
        };
        if !self.store.contains(&decoded.target) {
            return Err(unknown(&decoded.target));
        }
        match decoded.operator.source() {
            Some(source) if !source.eq_ignore_ascii_case(&decoded.target) => {
                let (source, target) = self
                    .store
                    .source_and_target_mut(source, &decoded.target)
                    .ok_or_else(|| unknown(source))?;
                decoded.operator.apply(&region, target, Some(source))?;
            }
            reads_target => {
                let target = self
                    .store
                    .get_mut(&decoded.target)
                    .ok_or_else(|| unknown(&decoded.target))?;
                // A record reading its own target sees pre-record values.
                let snapshot = reads_target.map(|_| target.clone());
                decoded.operator.apply(&region, target, snapshot.as_ref())?;
            }
        }
        trace!(
            operator = decoded.operator.name(),
            target = %decoded.target,
            cells = region.cell_count(),
            "record applied"
        );
        Ok(region.cell_count())
    }

    /// Load a data keyword's values into the active region, i fastest.
    /// Defaulted items leave their cell unchanged.
    fn load_values(&mut self, name: &str, record: &Record) -> Result<usize, EditError> {
        let region = self.region.current();
        let items = record.items();
        if items.len() != region.cell_count() {
            return Err(EditError::DataSizeMismatch {
                expected: region.cell_count(),
                found: items.len(),
            });
        }
        let values = items
            .iter()
            .enumerate()
            .map(|(n, item)| match item {
                Item::Default => Ok(None),
                other => other
                    .as_f64()
                    .map(Some)
                    .ok_or_else(|| EditError::MalformedRecord {
                        reason: format!("{name} value {} is not a number: {other}", n + 1),
                    }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let target = self.store.get_mut(name).ok_or_else(|| EditError::UnknownField {
            name: name.to_owned(),
        })?;
        if let Property::Int(_) = target {
            if let Some(bad) = values.iter().flatten().find(|v| !i32::represents(**v)) {
                return Err(EditError::TypeMismatch {
                    reason: format!("{name} is an integer property but got {bad}"),
                });
            }
        }
        let extent = target.extent();
        let mut written = 0;
        for ((i, j, k), value) in region.iter().zip(values) {
            if let Some(v) = value {
                target.set_f64(extent.flat_index(i, j, k)?, v)?;
                written += 1;
            }
        }
        trace!(keyword = name, cells = written, "values loaded");
        Ok(written)
    }
}

fn single_record(keyword: &Keyword) -> Result<&Record, EditError> {
    match keyword.records() {
        [record] => Ok(record),
        records => Err(EditError::MalformedRecord {
            reason: format!(
                "{} takes exactly one record, found {}",
                keyword.name(),
                records.len()
            ),
        }),
    }
}

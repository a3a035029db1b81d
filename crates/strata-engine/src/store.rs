//! The named property store a processing pass edits.

use indexmap::IndexMap;

use strata_core::{EditError, GridError, GridExtent, Property, PropertyField};

/// Integer properties registered by
/// [`PropertyStore::with_standard_properties`], with their defaults.
pub const STANDARD_INT_PROPERTIES: &[(&str, i32)] = &[
    ("SATNUM", 1),
    ("PVTNUM", 1),
    ("EQLNUM", 1),
    ("FIPNUM", 1),
    ("IMBNUM", 1),
    ("ROCKNUM", 1),
    ("MULTNUM", 1),
    ("FLUXNUM", 1),
    ("ENDNUM", 1),
    ("ACTNUM", 1),
];

/// Double properties registered by
/// [`PropertyStore::with_standard_properties`], with their defaults.
pub const STANDARD_DOUBLE_PROPERTIES: &[(&str, f64)] = &[
    ("PORO", 0.0),
    ("PERMX", 0.0),
    ("PERMY", 0.0),
    ("PERMZ", 0.0),
    ("NTG", 1.0),
    ("MULTX", 1.0),
    ("MULTY", 1.0),
    ("MULTZ", 1.0),
    ("MULTPV", 1.0),
    ("SWATINIT", 0.0),
];

/// Named properties over one grid extent.
///
/// Names are case-insensitive and stored upper-cased. Iteration follows
/// declaration order.
///
/// # Examples
///
/// ```
/// use strata_core::GridExtent;
/// use strata_engine::PropertyStore;
///
/// let extent = GridExtent::new(2, 2, 2).unwrap();
/// let mut store = PropertyStore::new(extent);
/// store.declare_int("satnum", 1).declare_double("PORO", 0.2);
/// assert!(store.contains("SATNUM"));
/// assert_eq!(store.double_field("poro").unwrap().get(1, 1, 1).unwrap(), 0.2);
/// assert_eq!(store.names().collect::<Vec<_>>(), vec!["SATNUM", "PORO"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyStore {
    extent: GridExtent,
    properties: IndexMap<String, Property>,
}

fn key(name: &str) -> String {
    name.to_ascii_uppercase()
}

impl PropertyStore {
    /// An empty store over `extent`.
    pub fn new(extent: GridExtent) -> Self {
        Self {
            extent,
            properties: IndexMap::new(),
        }
    }

    /// A store holding every standard property at its default.
    pub fn with_standard_properties(extent: GridExtent) -> Self {
        let mut store = Self::new(extent);
        for &(name, default) in STANDARD_INT_PROPERTIES {
            store.declare_int(name, default);
        }
        for &(name, default) in STANDARD_DOUBLE_PROPERTIES {
            store.declare_double(name, default);
        }
        store
    }

    /// The grid extent every property is laid out on.
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Declare (or reset) an integer property filled with `default`.
    pub fn declare_int(&mut self, name: &str, default: i32) -> &mut Self {
        self.properties.insert(
            key(name),
            Property::Int(PropertyField::filled(self.extent, default)),
        );
        self
    }

    /// Declare (or reset) a double property filled with `default`.
    pub fn declare_double(&mut self, name: &str, default: f64) -> &mut Self {
        self.properties.insert(
            key(name),
            Property::Double(PropertyField::filled(self.extent, default)),
        );
        self
    }

    /// Insert a prepared property, returning any previous one of that
    /// name. The property must be laid out on this store's extent.
    pub fn insert(
        &mut self,
        name: &str,
        property: Property,
    ) -> Result<Option<Property>, EditError> {
        if property.extent() != self.extent {
            return Err(EditError::OutOfBounds(GridError::LengthMismatch {
                expected: self.extent.cell_count(),
                found: property.extent().cell_count(),
            }));
        }
        Ok(self.properties.insert(key(name), property))
    }

    /// Whether `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(&key(name))
    }

    /// Borrow a property.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(&key(name))
    }

    /// Mutably borrow a property.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.properties.get_mut(&key(name))
    }

    /// Borrow `source` shared and `target` mutably at once. `None` when
    /// either is undeclared or both name the same property.
    pub fn source_and_target_mut(
        &mut self,
        source: &str,
        target: &str,
    ) -> Option<(&Property, &mut Property)> {
        let s = self.properties.get_index_of(&key(source))?;
        let t = self.properties.get_index_of(&key(target))?;
        if s == t {
            return None;
        }
        let mut src = None;
        let mut dst = None;
        for (n, property) in self.properties.values_mut().enumerate() {
            if n == s {
                src = Some(&*property);
            } else if n == t {
                dst = Some(property);
            }
        }
        Some((src?, dst?))
    }

    /// Borrow an integer property.
    pub fn int_field(&self, name: &str) -> Option<&PropertyField<i32>> {
        self.get(name).and_then(Property::as_int)
    }

    /// Borrow a double property.
    pub fn double_field(&self, name: &str) -> Option<&PropertyField<f64>> {
        self.get(name).and_then(Property::as_double)
    }

    /// Property names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no property is declared.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::ScalarKind;

    fn extent() -> GridExtent {
        GridExtent::new(3, 2, 1).unwrap()
    }

    #[test]
    fn standard_properties_have_defaults() {
        let store = PropertyStore::with_standard_properties(extent());
        assert_eq!(
            store.len(),
            STANDARD_INT_PROPERTIES.len() + STANDARD_DOUBLE_PROPERTIES.len()
        );
        assert!(store.int_field("SATNUM").unwrap().values().iter().all(|&v| v == 1));
        assert!(store.double_field("NTG").unwrap().values().iter().all(|&v| v == 1.0));
        assert_eq!(store.get("PORO").unwrap().kind(), ScalarKind::Double);
        assert!(store.double_field("SATNUM").is_none());
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let mut store = PropertyStore::new(extent());
        store.declare_double("Permx", 5.0);
        assert!(store.contains("PERMX"));
        assert!(store.get_mut("permx").is_some());
        assert!(!store.contains("PERMY"));
    }

    #[test]
    fn insert_checks_extent() {
        let mut store = PropertyStore::new(extent());
        let wrong = GridExtent::new(1, 1, 1).unwrap();
        assert!(matches!(
            store.insert("X", Property::Int(PropertyField::filled(wrong, 0))),
            Err(EditError::OutOfBounds(_))
        ));
        let ok = Property::Int(PropertyField::filled(extent(), 3));
        assert_eq!(store.insert("X", ok.clone()), Ok(None));
        assert_eq!(store.insert("x", ok.clone()), Ok(Some(ok)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn source_and_target_borrow_together() {
        let mut store = PropertyStore::with_standard_properties(extent());
        let (source, target) = store.source_and_target_mut("ntg", "PORO").unwrap();
        assert_eq!(source.as_double().unwrap().get(0, 0, 0).unwrap(), 1.0);
        target.set_f64(0, 0.3).unwrap();
        assert_eq!(store.double_field("PORO").unwrap().get_flat(0).unwrap(), 0.3);

        assert!(store.source_and_target_mut("PORO", "poro").is_none());
        assert!(store.source_and_target_mut("PERMQ", "PORO").is_none());
        assert!(store.source_and_target_mut("PORO", "PERMQ").is_none());
    }
}

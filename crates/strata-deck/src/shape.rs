//! How many records each keyword carries.

/// Record layout of a keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeywordShape {
    /// No records follow the keyword name.
    NoData,
    /// Exactly one slash-terminated record.
    Single,
    /// Records until an empty record (a lone `/`).
    Multi,
}

/// Keywords that open a deck section.
pub const SECTION_KEYWORDS: &[&str] = &[
    "RUNSPEC", "GRID", "EDIT", "PROPS", "REGIONS", "SOLUTION", "SUMMARY", "SCHEDULE",
];

const NO_DATA: &[&str] = &[
    "ENDBOX", "ECHO", "NOECHO", "OIL", "WATER", "GAS", "DISGAS", "VAPOIL", "METRIC", "FIELD",
    "LAB", "END",
];

const MULTI: &[&str] = &[
    "EQUALS", "COPY", "MULTIPLY", "ADD", "MINVALUE", "MAXVALUE", "OPERATE",
];

/// Whether `name` opens a deck section.
pub fn is_section_keyword(name: &str) -> bool {
    SECTION_KEYWORDS.contains(&name)
}

/// Record layout for `name`. Unlisted keywords carry a single record.
///
/// The layout is decided by name alone, so an unlisted keyword that
/// really takes no data consumes the following keyword as its record:
/// `NONNC` followed by `PORO 4*0.3 /` reads as one `NONNC` record of
/// `PORO 4*0.3`. Add such keywords to the no-data list.
pub fn keyword_shape(name: &str) -> KeywordShape {
    if is_section_keyword(name) || NO_DATA.contains(&name) {
        KeywordShape::NoData
    } else if MULTI.contains(&name) {
        KeywordShape::Multi
    } else {
        KeywordShape::Single
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes() {
        assert_eq!(keyword_shape("REGIONS"), KeywordShape::NoData);
        assert_eq!(keyword_shape("ENDBOX"), KeywordShape::NoData);
        assert_eq!(keyword_shape("OPERATE"), KeywordShape::Multi);
        assert_eq!(keyword_shape("BOX"), KeywordShape::Single);
        assert_eq!(keyword_shape("SATNUM"), KeywordShape::Single);
    }
}

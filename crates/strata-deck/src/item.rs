//! Typed record items.

use std::fmt;

/// One value of a record after repeat expansion.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// An integer literal.
    Int(i64),
    /// A floating-point literal. `D` exponents (`1.5D3`) are accepted.
    Float(f64),
    /// A quoted string or a bare word that is not a number.
    Str(String),
    /// A defaulted value, written `N*`.
    Default,
}

impl Item {
    /// Classify a bare word.
    ///
    /// ```
    /// use strata_deck::Item;
    ///
    /// assert_eq!(Item::parse("10"), Item::Int(10));
    /// assert_eq!(Item::parse("0.25"), Item::Float(0.25));
    /// assert_eq!(Item::parse("1.5D2"), Item::Float(150.0));
    /// assert_eq!(Item::parse("PERMX"), Item::Str("PERMX".into()));
    /// ```
    pub fn parse(text: &str) -> Self {
        if let Ok(v) = text.parse::<i64>() {
            return Self::Int(v);
        }
        let numeric_start = text
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'));
        if numeric_start {
            if let Ok(v) = text.replace(['D', 'd'], "E").parse::<f64>() {
                return Self::Float(v);
            }
        }
        Self::Str(text.to_owned())
    }

    /// Numeric value of an `Int` or `Float` item.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Value of an `Int` item.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Text of a `Str` item.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this item was written as a default (`N*`).
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Default => write!(f, "1*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_that_look_like_float_specials_stay_strings() {
        assert_eq!(Item::parse("inf"), Item::Str("inf".into()));
        assert_eq!(Item::parse("NaN"), Item::Str("NaN".into()));
        assert_eq!(Item::parse("ADD"), Item::Str("ADD".into()));
    }

    #[test]
    fn signed_and_exponent_floats() {
        assert_eq!(Item::parse("-2.5"), Item::Float(-2.5));
        assert_eq!(Item::parse("+3"), Item::Int(3));
        assert_eq!(Item::parse("1e-3"), Item::Float(0.001));
        assert_eq!(Item::parse(".5"), Item::Float(0.5));
    }

    #[test]
    fn accessors() {
        assert_eq!(Item::Int(4).as_f64(), Some(4.0));
        assert_eq!(Item::Float(4.5).as_int(), None);
        assert_eq!(Item::Str("NTG".into()).as_str(), Some("NTG"));
        assert!(Item::Default.is_default());
        assert_eq!(Item::Default.as_f64(), None);
    }
}

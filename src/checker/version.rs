//! The 4-field version value type.
//!
//! Versions are dotted strings of exactly four non-negative integer fields
//! named, in order, Main, Secondary, Patch, and Fix.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Number of fields in a version.
pub const FIELD_COUNT: usize = 4;

/// Names of the version fields, in field order.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = ["Main", "Secondary", "Patch", "Fix"];

/// Maximum allowed absolute difference between corresponding fields before
/// the result escalates to a mandatory update.
pub const FIELD_DIFF_THRESHOLD: u64 = 2;

static VERSION_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+){3}$").unwrap());

/// A parsed version: four non-negative integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    fields: [u64; FIELD_COUNT],
}

/// Error parsing a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseVersionError {
    /// Not four dotted non-negative integers.
    #[error("version must be four dotted non-negative integers")]
    Syntax,

    /// A field does not fit in 64 bits.
    #[error("version field out of range")]
    FieldOutOfRange,
}

impl Version {
    /// All four fields in order (Main, Secondary, Patch, Fix).
    pub fn fields(&self) -> [u64; FIELD_COUNT] {
        self.fields
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !VERSION_FORMAT.is_match(s) {
            return Err(ParseVersionError::Syntax);
        }

        let mut fields = [0u64; FIELD_COUNT];
        for (slot, part) in fields.iter_mut().zip(s.split('.')) {
            *slot = part
                .parse()
                .map_err(|_| ParseVersionError::FieldOutOfRange)?;
        }

        Ok(Self { fields })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [main, secondary, patch, fix] = self.fields;
        write!(f, "{}.{}.{}.{}", main, secondary, patch, fix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_fields() {
        let version: Version = "1.2.3.4".parse().unwrap();
        assert_eq!(version.fields(), [1, 2, 3, 4]);
    }

    #[test]
    fn parses_zero_fields() {
        let version: Version = "0.0.0.0".parse().unwrap();
        assert_eq!(version.fields(), [0, 0, 0, 0]);
    }

    #[test]
    fn accepts_leading_zeros() {
        let version: Version = "01.002.0.9".parse().unwrap();
        assert_eq!(version.fields(), [1, 2, 0, 9]);
    }

    #[test]
    fn rejects_three_fields() {
        assert_eq!("1.0.0".parse::<Version>(), Err(ParseVersionError::Syntax));
    }

    #[test]
    fn rejects_five_fields() {
        assert_eq!("1.0.0.0.0".parse::<Version>(), Err(ParseVersionError::Syntax));
    }

    #[test]
    fn rejects_signs_and_letters() {
        assert_eq!("-1.0.0.0".parse::<Version>(), Err(ParseVersionError::Syntax));
        assert_eq!("+1.0.0.0".parse::<Version>(), Err(ParseVersionError::Syntax));
        assert_eq!("1.0.0.a".parse::<Version>(), Err(ParseVersionError::Syntax));
        assert_eq!("1.0.0.0-beta".parse::<Version>(), Err(ParseVersionError::Syntax));
    }

    #[test]
    fn rejects_empty_and_partial_strings() {
        assert_eq!("".parse::<Version>(), Err(ParseVersionError::Syntax));
        assert_eq!("1...".parse::<Version>(), Err(ParseVersionError::Syntax));
        assert_eq!("1.0.0.".parse::<Version>(), Err(ParseVersionError::Syntax));
        assert_eq!(".0.0.0".parse::<Version>(), Err(ParseVersionError::Syntax));
    }

    #[test]
    fn rejects_field_overflowing_u64() {
        // 2^64 does not fit, even though the syntax is valid
        assert_eq!(
            "18446744073709551616.0.0.0".parse::<Version>(),
            Err(ParseVersionError::FieldOutOfRange)
        );
    }

    #[test]
    fn display_round_trips() {
        let version: Version = "10.20.30.40".parse().unwrap();
        assert_eq!(version.to_string(), "10.20.30.40");
    }

    #[test]
    fn field_names_are_in_order() {
        assert_eq!(FIELD_NAMES, ["Main", "Secondary", "Patch", "Fix"]);
        assert_eq!(FIELD_NAMES.len(), FIELD_COUNT);
    }
}

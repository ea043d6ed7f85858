//! # Classification Value
//!
//! Records are grouped by their skin type. A record without one falls into the
//! [`Classification::Unknown`] bucket, and remote listings additionally offer
//! [`Classification::All`], which disables filtering.

use std::fmt;

use crate::animal::record::AnimalRecord;
use crate::source::SourceMode;

pub const ALL: &str = "All";
pub const UNKNOWN: &str = "Unknown";

/// The value a record is filtered by.
///
/// The variant order is significant: the derived `Ord` sorts the wildcard
/// first, concrete values lexicographically, and the sentinel last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    /// Matches every record. Only offered for remote sources.
    All,
    Value(String),
    /// The record carries no skin type.
    Unknown,
}

impl Classification {
    /// Derives the classification of a single record.
    pub fn of(record: &AnimalRecord) -> Self {
        match record.skin_type() {
            Some(UNKNOWN) | None => Self::Unknown,
            Some(value) => Self::Value(value.to_string()),
        }
    }

    /// Interprets user-supplied text.
    ///
    /// `"All"` is only the wildcard when reading from a remote source. File
    /// listings never offer it, so there it is taken as a literal value.
    pub fn parse(text: &str, mode: SourceMode) -> Self {
        match text {
            ALL if mode == SourceMode::Remote => Self::All,
            UNKNOWN => Self::Unknown,
            other => Self::Value(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Value(value) => value,
            Self::Unknown => UNKNOWN,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, record: &AnimalRecord) -> bool {
        self.is_wildcard() || Self::of(record) == *self
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

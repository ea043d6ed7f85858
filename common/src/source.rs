//! # Record Source Port
//!
//! The pipeline never reads files or talks to the network itself. It asks a
//! [`RecordSource`] for records, and the binary decides which implementation
//! to hand it (see `animalia_core::sources`).

use crate::animal::record::AnimalRecord;
use crate::error::Result;

/// Where records come from. Changes which classifications are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// A local JSON document holding the full dataset.
    File,
    /// A remote API queried by search term.
    Remote,
}

/// Defines the contract for supplying animal records.
pub trait RecordSource {
    fn mode(&self) -> SourceMode;

    /// Loads the records matching `term`.
    ///
    /// File sources ignore the term and return the whole dataset. An empty
    /// `Vec` is a valid answer meaning "nothing matched", distinct from a
    /// failed load.
    fn load(&self, term: &str) -> Result<Vec<AnimalRecord>>;
}

//! # Animal Models
//!
//! * [`record::AnimalRecord`]: one animal's fact sheet, as delivered by a source.
//! * [`classification::Classification`]: the value records are grouped and filtered by.

pub mod classification;
pub mod record;

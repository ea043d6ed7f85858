//! # Animalia Core
//!
//! The page generation pipeline:
//!
//! ```text
//! RecordSource -> filter -> render (per record) -> assemble -> output file
//! ```
//!
//! * **[`sources`]**: the JSON file and API Ninjas implementations of
//!   [`animalia_common::source::RecordSource`].
//! * **[`classify`]**: lists the classifications present in a record set.
//! * **[`filter`]**: narrows records down to one classification.
//! * **[`render`]**: turns a record into a card fragment.
//! * **[`page`]**: substitutes fragments into the template.
//! * **[`selection`]**: interactive prompts with an explicit retry policy.
//! * **[`generator`]**: the service tying the stages together.

pub mod classify;
pub mod filter;
pub mod generator;
pub mod page;
pub mod render;
pub mod selection;
pub mod sources;

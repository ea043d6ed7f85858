//! # Animalia Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`animal`]**: the record model and its classification value.
//! * **[`source`]**: the port through which records enter the pipeline.
//! * **[`config`]**: process-wide settings, built once at startup.
//! * **[`error`]**: the error taxonomy and its exit-status mapping.

pub mod animal;
pub mod config;
pub mod error;
pub mod source;

pub use error::{Error, Result};

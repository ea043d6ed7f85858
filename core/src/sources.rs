//! Concrete [`RecordSource`] implementations.
//!
//! Callers should depend on the trait and obtain an instance through
//! [`from_config`], which picks the implementation matching the configured
//! [`SourceMode`].

mod api_ninjas;
mod json_file;

pub use api_ninjas::ApiNinjasSource;
pub use json_file::JsonFileSource;

use animalia_common::config::Config;
use animalia_common::source::{RecordSource, SourceMode};
use animalia_common::{Error, Result};

/// Builds the record source selected by `config.mode`.
pub fn from_config(config: &Config) -> Result<Box<dyn RecordSource>> {
    match config.mode {
        SourceMode::File => Ok(Box::new(JsonFileSource::new(&config.data_path))),
        SourceMode::Remote => {
            let api_key = config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .ok_or_else(|| Error::validation("API key is required for API mode"))?;

            Ok(Box::new(ApiNinjasSource::new(
                &config.api_url,
                api_key,
                config.request_timeout,
            )))
        }
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use animalia_common::animal::record::AnimalRecord;
use animalia_common::source::{RecordSource, SourceMode};
use animalia_common::{Error, Result};

/// Reads the full dataset from a JSON array on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for JsonFileSource {
    fn mode(&self) -> SourceMode {
        SourceMode::File
    }

    fn load(&self, _term: &str) -> Result<Vec<AnimalRecord>> {
        debug!("Reading animal data from {}", self.path.display());

        let text = fs::read_to_string(&self.path).map_err(|err| Error::from_io(&self.path, err))?;
        let records: Vec<AnimalRecord> =
            serde_json::from_str(&text).map_err(|source| Error::Parse {
                path: self.path.clone(),
                source,
            })?;

        info!("Loaded {} animals from {}", records.len(), self.path.display());
        Ok(records)
    }
}

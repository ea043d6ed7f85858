use std::path::PathBuf;
use std::time::Duration;

use crate::source::SourceMode;

pub const API_URL: &str = "https://api.api-ninjas.com/v1/animals";
pub const DATA_FILE_PATH: &str = "animals_data.json";
pub const TEMPLATE_FILE_PATH: &str = "animals_template.html";
pub const OUTPUT_FILE_PATH: &str = "animals.html";
pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How many times an interactive prompt asks again after bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// Keep asking until a valid answer arrives or input ends.
    #[default]
    Unbounded,
    /// Give up after this many attempts.
    Limited(u32),
}

impl RetryPolicy {
    /// `0` means unbounded.
    pub fn from_attempts(attempts: u32) -> Self {
        match attempts {
            0 => Self::Unbounded,
            n => Self::Limited(n),
        }
    }

    pub fn allows(&self, attempt: u32) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Limited(max) => attempt < *max,
        }
    }
}

/// Settings for a single run. Built once in `main` and passed down by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    /// Sent as `X-Api-Key`. Required for [`SourceMode::Remote`].
    pub api_key: Option<String>,
    pub data_path: PathBuf,
    pub template_path: PathBuf,
    /// Overwritten on success, never touched on failure.
    pub output_path: PathBuf,
    pub placeholder: String,
    pub request_timeout: Duration,
    pub mode: SourceMode,
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            api_key: None,
            data_path: PathBuf::from(DATA_FILE_PATH),
            template_path: PathBuf::from(TEMPLATE_FILE_PATH),
            output_path: PathBuf::from(OUTPUT_FILE_PATH),
            placeholder: PLACEHOLDER.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            mode: SourceMode::Remote,
            retry: RetryPolicy::Unbounded,
        }
    }
}

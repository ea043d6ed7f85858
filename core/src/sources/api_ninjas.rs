use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};
use ureq::Agent;

use animalia_common::animal::record::AnimalRecord;
use animalia_common::source::{RecordSource, SourceMode};
use animalia_common::{Error, Result};

/// Queries the API Ninjas animals endpoint with a single GET per load.
pub struct ApiNinjasSource {
    url: String,
    api_key: String,
    agent: Agent,
}

impl ApiNinjasSource {
    pub fn new(url: &str, api_key: &str, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            url: url.to_string(),
            api_key: api_key.to_string(),
            agent,
        }
    }
}

impl RecordSource for ApiNinjasSource {
    fn mode(&self) -> SourceMode {
        SourceMode::Remote
    }

    fn load(&self, term: &str) -> Result<Vec<AnimalRecord>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(Error::validation("Animal name cannot be empty"));
        }

        debug!("Querying {} for '{}'", self.url, term);
        let response = self
            .agent
            .get(self.url.as_str())
            .query("name", term)
            .header("X-Api-Key", self.api_key.as_str())
            .call()
            .map_err(|err| Error::Network(err.to_string()))?;

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|err| Error::Network(format!("failed reading response body: {err}")))?;

        let records = parse_response(&body)?;
        info!("API returned {} animals for '{}'", records.len(), term);
        Ok(records)
    }
}

/// Decodes a response body that must be a JSON array of records.
fn parse_response(body: &str) -> Result<Vec<AnimalRecord>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| Error::Format(format!("failed to parse API response: {err}")))?;

    let Value::Array(items) = value else {
        return Err(Error::Format(format!("expected an array, got {}", kind(&value))));
    };

    items
        .into_iter()
        .map(serde_json::from_value::<AnimalRecord>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|err| Error::Format(format!("malformed animal record: {err}")))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

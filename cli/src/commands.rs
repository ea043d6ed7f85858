pub mod generate;
pub mod list;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use animalia_common::animal::classification::Classification;
use animalia_common::animal::record::AnimalRecord;
use animalia_common::config::{
    Config, DATA_FILE_PATH, OUTPUT_FILE_PATH, RetryPolicy, TEMPLATE_FILE_PATH,
};
use animalia_common::source::SourceMode;
use animalia_common::{Error, Result};
use animalia_core::generator::PageService;
use animalia_core::selection;

use crate::terminal::spinner;

#[derive(Parser)]
#[command(name = "animalia")]
#[command(about = "Generate an HTML page of animal fact cards.")]
#[command(version)]
pub struct CommandLine {
    /// Path to the animals JSON data
    #[arg(long, value_name = "PATH", default_value = DATA_FILE_PATH)]
    pub data: PathBuf,

    /// Path to the HTML template
    #[arg(long, value_name = "PATH", default_value = TEMPLATE_FILE_PATH)]
    pub template: PathBuf,

    /// Output HTML file path
    #[arg(short, long, value_name = "PATH", default_value = OUTPUT_FILE_PATH)]
    pub output: PathBuf,

    /// Filter by skin type (skips the interactive prompt)
    #[arg(long = "skin-type", value_name = "VALUE")]
    pub skin_type: Option<String>,

    /// List available skin types and exit
    #[arg(long = "list-skin-types")]
    pub list_skin_types: bool,

    /// Read animals from the local JSON file instead of the API
    #[arg(long)]
    pub json: bool,

    /// Animal to search for in API mode
    #[arg(short, long, value_name = "TERM")]
    pub name: Option<String>,

    /// API Ninjas key
    #[arg(long = "api-key", env = "API_NINJAS_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Prompt attempts before giving up, 0 keeps asking
    #[arg(long = "max-attempts", value_name = "N", default_value_t = 0)]
    pub max_attempts: u32,

    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not print the banner
    #[arg(long = "no-banner")]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn mode(&self) -> SourceMode {
        if self.json { SourceMode::File } else { SourceMode::Remote }
    }

    pub fn log_level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::WARN,
            (_, true) => LevelFilter::DEBUG,
            _ => LevelFilter::INFO,
        }
    }

    /// The `--skin-type` filter, if any. A blank value means no filter was given.
    pub fn requested_skin_type(&self) -> Option<Classification> {
        self.skin_type
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Classification::parse(value, self.mode()))
    }

    pub fn to_config(&self) -> Config {
        Config {
            api_key: self.api_key.clone(),
            data_path: self.data.clone(),
            template_path: self.template.clone(),
            output_path: self.output.clone(),
            mode: self.mode(),
            retry: RetryPolicy::from_attempts(self.max_attempts),
            ..Config::default()
        }
    }
}

/// The search term for this run. File mode has none.
fn search_term(commands: &CommandLine, cfg: &Config) -> Result<String> {
    if cfg.mode == SourceMode::File {
        return Ok(String::new());
    }

    match commands.name.as_deref().map(str::trim) {
        Some("") => Err(Error::validation("Animal name cannot be empty")),
        Some(name) => Ok(name.to_string()),
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            selection::prompt_term(&mut input, &mut io::stdout(), cfg.retry)
        }
    }
}

fn fetch(service: &PageService, term: &str) -> Result<Vec<AnimalRecord>> {
    let span = spinner::fetch_span(service.mode(), term);
    let records = span.in_scope(|| service.fetch(term));
    drop(span);
    records
}

/// Picks the classification to filter by: the flag if given, otherwise an
/// interactive choice. `None` when there is nothing to choose from.
fn choose_classification(
    commands: &CommandLine,
    cfg: &Config,
    service: &PageService,
    records: &[AnimalRecord],
) -> Result<Option<Classification>> {
    if let Some(requested) = commands.requested_skin_type() {
        return Ok(Some(requested));
    }

    let options = service.classifications(records);
    if options.is_empty() {
        return Ok(None);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    selection::write_options(&mut output, &options)?;
    selection::prompt_choice(&mut input, &mut output, &options, cfg.retry).map(Some)
}

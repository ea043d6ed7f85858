use std::io;

use tracing::debug;

use animalia_common::config::Config;
use animalia_core::generator::PageService;
use animalia_core::selection;

use super::{CommandLine, fetch, search_term};

pub fn list(commands: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let service = PageService::from_config(cfg)?;
    service.check_inputs()?;

    let term = search_term(commands, cfg)?;
    let records = fetch(&service, &term)?;
    let options = service.classifications(&records);
    debug!("{} skin types across {} animals", options.len(), records.len());

    if records.is_empty() || options.is_empty() {
        println!("No skin type data found.");
        return Ok(());
    }

    selection::write_options(&mut io::stdout(), &options)?;
    Ok(())
}

use std::time::Instant;

use colored::*;

use animalia_common::config::Config;
use animalia_core::generator::{Outcome, Page, PageService};

use super::{CommandLine, choose_classification, fetch, search_term};
use crate::terminal::{colors, print};

pub fn generate(commands: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let start_time = Instant::now();

    // 1. Wire the source picked by --json
    let service = PageService::from_config(cfg)?;
    service.check_inputs()?;

    // 2. Load
    let term = search_term(commands, cfg)?;
    let records = fetch(&service, &term)?;

    // 3. Narrow down and render
    let target = if records.is_empty() {
        None
    } else {
        choose_classification(commands, cfg, &service, &records)?
    };
    let page = service.build(&records, target.as_ref(), &term)?;

    // 4. Write
    service.publish(&page)?;
    generation_ends(&page, cfg, commands.quiet, start_time);
    Ok(())
}

fn generation_ends(page: &Page, cfg: &Config, quiet: bool, start_time: Instant) {
    let file_name = cfg
        .output_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cfg.output_path.display().to_string());

    if let Outcome::NoResults = page.outcome {
        print::no_results(quiet);
    }

    if !quiet {
        let cards = match page.outcome {
            Outcome::Cards(count) => format!("{count} cards").bold().green(),
            Outcome::NoResults => "no results card".bold().yellow(),
        };
        let elapsed = format!("{:.2}s", start_time.elapsed().as_secs_f64()).bold().yellow();

        print::fat_separator();
        print::aligned_line("Output", cfg.output_path.display().to_string().color(colors::TEXT_DEFAULT));
        print::aligned_line("Content", cards);
        print::aligned_line("Time", elapsed);
        print::fat_separator();
    }

    print::print_status(format!("{} updated.", file_name.color(colors::ACCENT)));
}

//! # Page Generation Service
//!
//! Orchestrates one run of the pipeline: load records from the configured
//! [`RecordSource`], narrow them to a classification, render each record and
//! substitute the cards into the template.

use std::path::Path;

use tracing::{debug, info};

use animalia_common::animal::classification::Classification;
use animalia_common::animal::record::AnimalRecord;
use animalia_common::config::Config;
use animalia_common::source::{RecordSource, SourceMode};
use animalia_common::{Error, Result};

use crate::classify::list_distinct_values;
use crate::filter::filter;
use crate::page::{assemble, read_template, write_page};
use crate::render::{render, render_error};
use crate::sources;

/// What ended up on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// One card per matching record.
    Cards(usize),
    /// The search returned nothing and the "doesn't exist" card was used.
    NoResults,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub html: String,
    pub outcome: Outcome,
}

pub struct PageService<'a> {
    config: &'a Config,
    source: Box<dyn RecordSource>,
}

impl<'a> PageService<'a> {
    pub fn new(config: &'a Config, source: Box<dyn RecordSource>) -> Self {
        Self { config, source }
    }

    /// Builds the service with the source selected by `config.mode`.
    pub fn from_config(config: &'a Config) -> Result<Self> {
        Ok(Self::new(config, sources::from_config(config)?))
    }

    pub fn mode(&self) -> SourceMode {
        self.source.mode()
    }

    /// Fails with [`Error::NotFound`] if an input file is missing.
    pub fn check_inputs(&self) -> Result<()> {
        if self.mode() == SourceMode::File {
            ensure_exists(&self.config.data_path)?;
        }
        ensure_exists(&self.config.template_path)
    }

    pub fn fetch(&self, term: &str) -> Result<Vec<AnimalRecord>> {
        self.source.load(term)
    }

    /// Classifications on offer for `records`, in display order.
    pub fn classifications(&self, records: &[AnimalRecord]) -> Vec<Classification> {
        list_distinct_values(records, self.mode())
    }

    /// Renders `records` into the template.
    ///
    /// `target` of `None` keeps every record. A remote search with no results
    /// produces the "doesn't exist" card for `term` instead of an empty page.
    pub fn build(
        &self,
        records: &[AnimalRecord],
        target: Option<&Classification>,
        term: &str,
    ) -> Result<Page> {
        let (fragments, outcome) = if records.is_empty() && self.mode() == SourceMode::Remote {
            info!("No animals found for '{}'", term);
            (vec![render_error(term)], Outcome::NoResults)
        } else {
            let selected: Vec<&AnimalRecord> = match target {
                Some(target) => filter(records, target)?,
                None => records.iter().collect(),
            };
            let cards: Vec<String> = selected.iter().map(|record| render(record)).collect();
            let count = cards.len();
            (cards, Outcome::Cards(count))
        };

        let template = read_template(&self.config.template_path)?;
        let html = assemble(&fragments, &template, &self.config.placeholder);
        debug!("Assembled page with {} fragments", fragments.len());

        Ok(Page { html, outcome })
    }

    /// Writes `page` to the configured output path.
    pub fn publish(&self, page: &Page) -> Result<&Path> {
        let path = self.config.output_path.as_path();
        write_page(path, &page.html)?;
        info!("Wrote {}", path.display());
        Ok(path)
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::NotFound {
            path: path.to_path_buf(),
        })
    }
}

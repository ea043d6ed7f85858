use tracing::debug;

use animalia_common::animal::classification::Classification;
use animalia_common::animal::record::AnimalRecord;
use animalia_common::{Error, Result};

/// Returns the records whose classification equals `target`, in input order.
///
/// The wildcard returns every record, even when there are none. Any other
/// target that matches nothing is an [`Error::EmptyResult`].
pub fn filter<'a>(records: &'a [AnimalRecord], target: &Classification) -> Result<Vec<&'a AnimalRecord>> {
    let matched: Vec<&AnimalRecord> = records.iter().filter(|record| target.matches(record)).collect();
    debug!("{} of {} animals match '{}'", matched.len(), records.len(), target);

    if matched.is_empty() && !target.is_wildcard() {
        return Err(Error::EmptyResult {
            value: target.to_string(),
        });
    }

    Ok(matched)
}

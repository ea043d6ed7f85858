use std::collections::BTreeSet;

use animalia_common::animal::classification::{ALL, Classification};
use animalia_common::animal::record::AnimalRecord;
use animalia_common::source::SourceMode;

/// Lists the distinct classifications present in `records`.
///
/// Concrete values come out in ascending order with `Unknown` last when any
/// record lacks a skin type. Remote listings always start with `All`; file
/// listings never contain it. A remote record whose skin type is literally
/// `"All"` folds into the wildcard, which still selects it.
pub fn list_distinct_values(records: &[AnimalRecord], mode: SourceMode) -> Vec<Classification> {
    let mut values: BTreeSet<Classification> = records.iter().map(Classification::of).collect();

    if mode == SourceMode::Remote {
        values.remove(&Classification::Value(ALL.to_string()));
        values.insert(Classification::All);
    }

    values.into_iter().collect()
}

#![cfg(test)]
use std::fs;

use animalia_common::animal::classification::Classification;
use animalia_common::source::SourceMode;
use animalia_common::Error;
use animalia_core::generator::{Outcome, PageService};

use crate::util::config_in;

/// Runs the whole file-mode pipeline and checks the written page.
#[test]
fn json_pipeline_writes_filtered_page() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), SourceMode::File);
    let service = PageService::from_config(&config).unwrap();

    service.check_inputs().unwrap();
    let records = service.fetch("").unwrap();
    assert_eq!(records.len(), 5);

    let page = service
        .build(&records, Some(&Classification::Value("Fur".into())), "")
        .unwrap();
    let path = service.publish(&page).unwrap();
    let html = fs::read_to_string(path).unwrap();

    assert_eq!(page.outcome, Outcome::Cards(3));
    assert!(!html.contains("__REPLACE_ANIMALS_INFO__"));
    assert!(html.contains("<title>My Animal Repository</title>"));

    let arctic = html.find("Arctic Fox").unwrap();
    let flying = html.find("Flying Fox").unwrap();
    let red = html.find("Red Fox").unwrap();
    assert!(arctic < flying && flying < red, "cards must keep source order");
    assert!(!html.contains("American Foxhound"));
}

#[test]
fn json_listing_never_offers_all() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), SourceMode::File);
    let service = PageService::from_config(&config).unwrap();

    let records = service.fetch("").unwrap();
    let values = service.classifications(&records);
    let names: Vec<&str> = values.iter().map(Classification::as_str).collect();

    assert_eq!(names, ["Fur", "Hair", "Unknown"]);
}

#[test]
fn unknown_classification_picks_records_without_skin_type() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), SourceMode::File);
    let service = PageService::from_config(&config).unwrap();

    let records = service.fetch("").unwrap();
    let page = service
        .build(&records, Some(&Classification::Unknown), "")
        .unwrap();

    assert_eq!(page.outcome, Outcome::Cards(1));
    assert!(page.html.contains("Darwin&#39;s fox") || page.html.contains("Darwin's fox"));
}

#[test]
fn literal_all_in_file_mode_is_an_empty_result() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), SourceMode::File);
    let service = PageService::from_config(&config).unwrap();

    let records = service.fetch("").unwrap();
    let target = Classification::parse("All", SourceMode::File);
    let err = service.build(&records, Some(&target), "").unwrap_err();

    assert!(matches!(err, Error::EmptyResult { ref value } if value == "All"));
    assert_eq!(err.exit_code(), 2);
    assert!(!config.output_path.exists());
}

#[test]
fn missing_data_file_is_reported_before_loading() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), SourceMode::File);
    fs::remove_file(&config.data_path).unwrap();
    let service = PageService::from_config(&config).unwrap();

    let err = service.check_inputs().unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn malformed_data_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), SourceMode::File);
    fs::write(&config.data_path, "[{\"name\": ").unwrap();
    let service = PageService::from_config(&config).unwrap();

    let err = service.fetch("").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn output_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), SourceMode::File);
    fs::create_dir_all(config.output_path.parent().unwrap()).unwrap();
    fs::write(&config.output_path, "stale").unwrap();
    let service = PageService::from_config(&config).unwrap();

    let records = service.fetch("").unwrap();
    let page = service.build(&records, None, "").unwrap();
    service.publish(&page).unwrap();

    let html = fs::read_to_string(&config.output_path).unwrap();
    assert!(!html.contains("stale"));
    assert_eq!(page.outcome, Outcome::Cards(5));
}

#![cfg(test)]
use std::fs;
use std::net::TcpListener;
use std::time::Duration;

use animalia_common::animal::classification::Classification;
use animalia_common::config::Config;
use animalia_common::source::SourceMode;
use animalia_common::Error;
use animalia_core::generator::{Outcome, PageService};

use crate::util::{config_in, serve_once, serve_silence};

const CHEETAH: &str = r#"[
    {"name": "Cheetah", "locations": ["Africa", "Asia"],
     "characteristics": {"diet": "Carnivore", "skin_type": "Fur", "top_speed": "120km/h"}},
    {"name": "King Cheetah", "locations": ["Africa"],
     "characteristics": {"diet": "Carnivore"}}
]"#;

#[test]
fn api_request_carries_term_and_key() {
    let dir = tempfile::tempdir().unwrap();
    let (url, received) = serve_once("200 OK", CHEETAH);
    let config = Config {
        api_url: url,
        ..config_in(dir.path(), SourceMode::Remote)
    };
    let service = PageService::from_config(&config).unwrap();

    let records = service.fetch("cheetah").unwrap();
    let request = received.recv_timeout(Duration::from_secs(5)).unwrap();

    assert_eq!(records.len(), 2);
    assert!(request.request_line.starts_with("GET /v1/animals?name=cheetah"));
    assert_eq!(request.header("X-Api-Key").as_deref(), Some("test-key"));
}

#[test]
fn api_pipeline_offers_all_and_renders_everything() {
    let dir = tempfile::tempdir().unwrap();
    let (url, _received) = serve_once("200 OK", CHEETAH);
    let config = Config {
        api_url: url,
        ..config_in(dir.path(), SourceMode::Remote)
    };
    let service = PageService::from_config(&config).unwrap();

    let records = service.fetch("cheetah").unwrap();
    let values = service.classifications(&records);
    assert_eq!(values.first(), Some(&Classification::All));
    assert_eq!(values.last(), Some(&Classification::Unknown));

    let page = service.build(&records, Some(&Classification::All), "cheetah").unwrap();
    service.publish(&page).unwrap();

    let html = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(page.outcome, Outcome::Cards(2));
    assert!(html.contains("<strong>Top speed:</strong> 120km/h"));
    assert!(html.contains("King Cheetah"));
}

#[test]
fn empty_api_result_writes_not_found_card() {
    let dir = tempfile::tempdir().unwrap();
    let (url, _received) = serve_once("200 OK", "[]");
    let config = Config {
        api_url: url,
        ..config_in(dir.path(), SourceMode::Remote)
    };
    let service = PageService::from_config(&config).unwrap();

    let records = service.fetch("qwxyz").unwrap();
    let page = service.build(&records, None, "qwxyz").unwrap();
    service.publish(&page).unwrap();

    let html = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(page.outcome, Outcome::NoResults);
    assert!(html.contains("doesn't exist"));
    assert!(html.contains(r#""qwxyz""#));
}

#[test]
fn object_body_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let (url, _received) = serve_once("200 OK", r#"{"error": "Invalid API Key."}"#);
    let config = Config {
        api_url: url,
        ..config_in(dir.path(), SourceMode::Remote)
    };
    let service = PageService::from_config(&config).unwrap();

    let err = service.fetch("cheetah").unwrap_err();
    assert!(matches!(err, Error::Format(_)));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn http_error_status_is_a_network_error() {
    let dir = tempfile::tempdir().unwrap();
    let (url, _received) = serve_once("401 Unauthorized", r#"{"error": "Missing API Key."}"#);
    let config = Config {
        api_url: url,
        ..config_in(dir.path(), SourceMode::Remote)
    };
    let service = PageService::from_config(&config).unwrap();

    let err = service.fetch("cheetah").unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn refused_connection_is_a_network_error() {
    let dir = tempfile::tempdir().unwrap();
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let config = Config {
        api_url: format!("http://127.0.0.1:{port}/v1/animals"),
        ..config_in(dir.path(), SourceMode::Remote)
    };
    let service = PageService::from_config(&config).unwrap();

    assert!(matches!(service.fetch("cheetah"), Err(Error::Network(_))));
}

#[test]
fn silent_server_times_out() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        api_url: serve_silence(),
        request_timeout: Duration::from_millis(300),
        ..config_in(dir.path(), SourceMode::Remote)
    };
    let service = PageService::from_config(&config).unwrap();

    assert!(matches!(service.fetch("cheetah"), Err(Error::Network(_))));
}

#[test]
fn missing_api_key_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        api_key: None,
        ..config_in(dir.path(), SourceMode::Remote)
    };

    let err = PageService::from_config(&config).err().unwrap();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(err.exit_code(), 2);
}

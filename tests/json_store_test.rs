//! Integration test for the JSON file store behind a provider.

use std::fs;
use std::io::Write;

use schedule_ingest::builders::build_provider;
use schedule_ingest::config::ProviderConfig;
use schedule_ingest::core::ConfigError;

const DOC: &str = r#"{
    "scheduling": {
        "schedules": [
            {"name": "nightly", "type": "calendar", "enabled": "true",
             "daysOfMonth": "*", "timeOfDay": "02:00"},
            {"name": "sync", "type": "timer", "enabled": "true",
             "daysOfMonth": "*", "timeOfDay": "00:00",
             "timeRange": "09:00-17:00", "frequency": "10m"},
            {"name": "", "type": "calendar", "enabled": "true",
             "daysOfMonth": "1", "timeOfDay": "12:00"}
        ]
    }
}"#;

fn provider_config(path: &std::path::Path) -> ProviderConfig {
    ProviderConfig::from_json_str(&format!(
        r#"{{"backend": {{"json_file": {{"path": {}}}}}}}"#,
        serde_json::to_string(path).unwrap()
    ))
    .unwrap()
}

#[test]
fn test_file_backed_provider_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOC.as_bytes()).unwrap();
    file.flush().unwrap();

    let provider = build_provider(&provider_config(file.path())).unwrap();
    let section = provider.get_configurations(false).unwrap();

    // The unnamed record is skipped; the rest keep file order.
    assert_eq!(section.len(), 2);
    assert_eq!(section.get(0).unwrap().name(), "nightly");
    assert_eq!(section.get(1).unwrap().name(), "sync");
    assert_eq!(section.find("sync").unwrap().get("Frequency"), Some("10m"));
}

#[test]
fn test_file_edit_flags_staleness() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOC.as_bytes()).unwrap();
    file.flush().unwrap();

    let provider = build_provider(&provider_config(file.path())).unwrap();
    provider.get_configurations(false).unwrap();
    assert!(!provider.schedules_are_stale().unwrap());

    fs::write(
        file.path(),
        r#"{"scheduling": {"schedules": [{"name": "only", "type": "calendar",
            "enabled": "true", "daysOfMonth": "*", "timeOfDay": "06:00"}]}}"#,
    )
    .unwrap();
    assert!(provider.schedules_are_stale().unwrap());

    let fresh = provider.get_configurations(true).unwrap();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh.get(0).unwrap().get("timeOfDay"), Some("06:00"));
    assert!(!provider.schedules_are_stale().unwrap());
}

#[test]
fn test_file_store_delete_unavailable() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOC.as_bytes()).unwrap();
    file.flush().unwrap();

    let provider = build_provider(&provider_config(file.path())).unwrap();
    assert!(matches!(
        provider.delete_schedule("nightly").unwrap_err(),
        ConfigError::Unsupported(_)
    ));
}

#[test]
fn test_document_without_section_propagates() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"logging": {"level": "info"}}"#).unwrap();
    file.flush().unwrap();

    let provider = build_provider(&provider_config(file.path())).unwrap();
    assert!(matches!(
        provider.get_configurations(false).unwrap_err(),
        ConfigError::SectionMissing(_)
    ));
}

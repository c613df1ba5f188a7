use std::path::PathBuf;

use super::constants::{AUDIT_LOG_FILE, DEFAULT_TIMEOUT_SECS};
use super::types::{FileAuditSettings, FileConfig};
use super::validation::validate;
use super::*;

#[test]
fn defaults_are_sane() {
    let config = Config::builder().build().unwrap();

    assert_eq!(config.pipeline.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert!(config.audit.path.ends_with(AUDIT_LOG_FILE));
    validate(&config).unwrap();
}

#[test]
fn builder_closures_override_sections() {
    let config = Config::builder()
        .with_audit(|audit| audit.path = PathBuf::from("/tmp/audit.json"))
        .with_pipeline(|pipeline| pipeline.timeout_secs = 5)
        .build()
        .unwrap();

    assert_eq!(config.audit.path, PathBuf::from("/tmp/audit.json"));
    assert_eq!(config.pipeline.timeout_secs, 5);
}

#[test]
fn file_config_merges_over_defaults() {
    let file = FileConfig {
        audit: Some(FileAuditSettings {
            path: Some(PathBuf::from("/var/log/stagehand/audit.json")),
        }),
        pipeline: None,
    };

    let config = file.apply(ConfigBuilder::new()).build().unwrap();

    assert_eq!(
        config.audit.path,
        PathBuf::from("/var/log/stagehand/audit.json")
    );
    assert_eq!(config.pipeline.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn partial_file_config_parses() {
    let raw = r#"{ "pipeline": { "timeout_secs": 12 } }"#;
    let file: FileConfig = serde_json::from_str(raw).unwrap();

    let config = file.apply(ConfigBuilder::new()).build().unwrap();
    assert_eq!(config.pipeline.timeout_secs, 12);
}

#[test]
fn zero_timeout_is_rejected() {
    let config = Config::builder()
        .with_pipeline(|pipeline| pipeline.timeout_secs = 0)
        .build()
        .unwrap();

    assert!(validate(&config).is_err());
}

#[test]
fn empty_audit_path_is_rejected() {
    let config = Config::builder()
        .with_audit(|audit| audit.path = PathBuf::new())
        .build()
        .unwrap();

    assert!(validate(&config).is_err());
}

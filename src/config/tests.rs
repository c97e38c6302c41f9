//! Tests for config functionality.

use crate::config::{
    BackendIntegration, BackendStatus, Configuration, DEFAULT_WORKING_DIRECTORY,
    default_markup_vocabulary,
};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Configuration::default();

    assert_eq!(config.working_directory, None);
    assert_eq!(config.allowed_markup_vocabulary, None);
    assert_eq!(config.backend_integration, None);
    assert!(!config.has_backend());
}

#[test]
fn test_default_constants() {
    assert_eq!(DEFAULT_WORKING_DIRECTORY, "/home/project");

    let vocab = default_markup_vocabulary();
    assert!(!vocab.is_empty());
    assert!(vocab.contains(&"strong".to_string()));
    assert!(vocab.contains(&"code".to_string()));
    assert!(!vocab.contains(&"script".to_string()));
}

#[test]
fn test_parse_empty_yaml() {
    let config = Configuration::from_yaml("").unwrap();
    assert_eq!(config, Configuration::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
working_directory: /repo
"#;
    let config = Configuration::from_yaml(yaml).unwrap();

    assert_eq!(config.working_directory.as_deref(), Some("/repo"));
    assert_eq!(config.allowed_markup_vocabulary, None);
    assert!(!config.has_backend());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
working_directory: /home/user/app
allowed_markup_vocabulary:
  - strong
  - em
backend_integration:
  status: project_not_selected
"#;
    let config = Configuration::from_yaml(yaml).unwrap();

    assert_eq!(config.working_directory.as_deref(), Some("/home/user/app"));
    assert_eq!(
        config.allowed_markup_vocabulary,
        Some(vec!["strong".to_string(), "em".to_string()])
    );
    assert_eq!(
        config.backend_integration,
        Some(BackendIntegration::new(BackendStatus::ProjectNotSelected))
    );
}

#[test]
fn test_backend_integration_empty_mapping_defaults_to_connected() {
    let yaml = "backend_integration: {}\n";
    let config = Configuration::from_yaml(yaml).unwrap();

    assert!(config.has_backend());
    assert_eq!(
        config.backend_integration.unwrap().status,
        BackendStatus::Connected
    );
}

#[test]
fn test_backend_integration_null_is_absent() {
    let yaml = "backend_integration: null\n";
    let config = Configuration::from_yaml(yaml).unwrap();
    assert!(!config.has_backend());
}

#[test]
fn test_backend_integration_empty_value_is_absent() {
    let config = Configuration::from_yaml("backend_integration:\n").unwrap();
    assert!(!config.has_backend());
}

#[test]
fn test_backend_integration_true_enables_defaults() {
    let config = Configuration::from_yaml("backend_integration: true\n").unwrap();
    assert_eq!(
        config.backend_integration,
        Some(BackendIntegration::default())
    );
}

#[test]
fn test_backend_integration_false_is_absent() {
    let config = Configuration::from_yaml("backend_integration: false\n").unwrap();
    assert!(!config.has_backend());
    assert_eq!(config, Configuration::default());
}

#[test]
fn test_backend_integration_rejects_other_scalars() {
    assert!(Configuration::from_yaml("backend_integration: maybe\n").is_err());
    assert!(Configuration::from_yaml("backend_integration: 1\n").is_err());
}

#[test]
fn test_empty_vocabulary_is_distinct_from_absent() {
    let config = Configuration::from_yaml("allowed_markup_vocabulary: []\n").unwrap();
    assert_eq!(config.allowed_markup_vocabulary, Some(vec![]));
    assert_ne!(config, Configuration::default());
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
working_directory: /repo
future_setting: true
"#;
    let config = Configuration::from_yaml(yaml).unwrap();
    assert_eq!(config.working_directory.as_deref(), Some("/repo"));
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let result = Configuration::from_yaml("working_directory: [unclosed");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_invalid_status_rejected() {
    let result = Configuration::from_yaml("backend_integration:\n  status: sleepy\n");
    assert!(result.is_err());
}

#[test]
fn test_relative_working_directory_rejected() {
    let result = Configuration::from_yaml("working_directory: project\n");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("must be absolute"));
}

#[test]
fn test_multiline_working_directory_rejected() {
    let config = Configuration::new().with_working_directory("/repo\n/other");
    assert!(config.validate().is_err());
}

#[test]
fn test_bracketed_element_rejected() {
    let config = Configuration::new().with_markup_vocabulary(["<b>"]);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("'<b>' is not a valid element name"));
}

#[test]
fn test_empty_element_rejected() {
    let config = Configuration::new().with_markup_vocabulary([""]);
    assert!(config.validate().is_err());
}

#[test]
fn test_duplicate_element_rejected() {
    let config = Configuration::new().with_markup_vocabulary(["b", "em", "b"]);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn test_builder_helpers() {
    let config = Configuration::new()
        .with_working_directory("/repo")
        .with_markup_vocabulary(["b", "h2"])
        .with_backend(BackendIntegration::default());

    assert!(config.validate().is_ok());
    assert_eq!(config.working_directory.as_deref(), Some("/repo"));
    assert_eq!(
        config.allowed_markup_vocabulary,
        Some(vec!["b".to_string(), "h2".to_string()])
    );
    assert!(config.has_backend());
}

#[test]
fn test_yaml_roundtrip_preserves_equality() {
    let config = Configuration::new()
        .with_working_directory("/repo")
        .with_markup_vocabulary(["b"])
        .with_backend(BackendIntegration::new(BackendStatus::Disconnected));

    let yaml = config.to_yaml().unwrap();
    let parsed = Configuration::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_absent_fields_not_serialized() {
    let yaml = Configuration::new().to_yaml().unwrap();
    assert!(!yaml.contains("working_directory"));
    assert!(!yaml.contains("backend_integration"));
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("charter.yaml");
    std::fs::write(&path, "working_directory: /srv/app\n").unwrap();

    let config = Configuration::load(&path).unwrap();
    assert_eq!(config.working_directory.as_deref(), Some("/srv/app"));
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = Configuration::load(temp.path().join("missing.yaml"));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_backend_status_from_str() {
    assert_eq!(
        BackendStatus::from_str("connected"),
        Some(BackendStatus::Connected)
    );
    assert_eq!(
        BackendStatus::from_str("project_not_selected"),
        Some(BackendStatus::ProjectNotSelected)
    );
    assert_eq!(
        BackendStatus::from_str("project-not-selected"),
        Some(BackendStatus::ProjectNotSelected)
    );
    assert_eq!(
        BackendStatus::from_str("disconnected"),
        Some(BackendStatus::Disconnected)
    );
    assert_eq!(BackendStatus::from_str("unknown"), None);
}

#[test]
fn test_backend_status_descriptions_differ() {
    let texts = [
        BackendStatus::Connected.describe(),
        BackendStatus::ProjectNotSelected.describe(),
        BackendStatus::Disconnected.describe(),
    ];
    assert_ne!(texts[0], texts[1]);
    assert_ne!(texts[1], texts[2]);
    assert_ne!(texts[0], texts[2]);
}

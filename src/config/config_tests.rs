use super::*;
use crate::node::NodeId;

#[test]
fn test_default_values() {
    assert!(default_enabled());
    assert_eq!(default_retention_days(), 31);
    assert_eq!(default_container_name(), "Trash");
}

#[test]
fn test_trash_config_default() {
    let config = TrashConfig::default();
    assert!(config.enabled);
    assert_eq!(config.retention_days, 31);
    assert_eq!(config.container_name, "Trash");
    assert!(config.site_root_id.is_none());
}

#[test]
fn test_empty_json_uses_defaults() {
    let config: TrashConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, TrashConfig::default());
}

#[test]
fn test_camel_case_keys() {
    let root = NodeId::new();
    let json = format!(
        r#"{{"enabled": false, "retentionDays": 7, "containerName": "Bin", "siteRootId": "{root}"}}"#
    );
    let config: TrashConfig = serde_json::from_str(&json).unwrap();
    assert!(!config.enabled);
    assert_eq!(config.retention_days, 7);
    assert_eq!(config.container_name, "Bin");
    assert_eq!(config.site_root_id, Some(root));
}

#[test]
fn test_site_root_omitted_when_unset() {
    let json = serde_json::to_value(TrashConfig::default()).unwrap();
    assert!(json.get("siteRootId").is_none());
    assert_eq!(json["retentionDays"], 31);
}

#[tokio::test]
async fn test_read_missing_config_returns_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_config(dir.path()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_write_then_read_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = TrashConfig {
        retention_days: 14,
        ..TrashConfig::default()
    };
    write_config(dir.path(), &config).await.unwrap();
    assert!(get_config_path(dir.path()).exists());

    let read = read_config(dir.path()).await.unwrap().unwrap();
    assert_eq!(read, config);
}

#[tokio::test]
async fn test_read_rejects_blank_container_name() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(get_config_path(dir.path()), r#"{"containerName": "  "}"#)
        .await
        .unwrap();
    let err = read_config(dir.path()).await.unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[tokio::test]
async fn test_read_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(get_config_path(dir.path()), "not json")
        .await
        .unwrap();
    let err = read_config(dir.path()).await.unwrap_err();
    assert!(matches!(err, ConfigError::JsonError(_)));
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::create_site;
use content_trash::logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use content_trash::TrashCoordinator;
use tracing::Level;

// Installs the global subscriber, so this binary holds a single test.
#[tokio::test]
async fn test_init_logging_records_trash_events_in_log_dir() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");
    let config = LogConfig {
        log_dir: log_dir.clone(),
        log_level: Level::DEBUG,
        json_format: true,
        rotation: parse_rotation("never"),
    };

    init_logging(config).expect("First init should succeed");
    let log_file = log_dir.join(LOG_FILENAME);
    assert!(log_file.exists());

    let mut site = create_site().await;
    let trash = TrashCoordinator::new(site.store.clone());
    trash.throw(&mut site.item).await.unwrap();

    if std::env::var("RUST_LOG").is_err() {
        let content = std::fs::read_to_string(&log_file).unwrap();
        assert!(content.contains("Threw node"));
        assert!(content.contains(&site.item.id.to_string()));
    }

    let again = LogConfig {
        log_dir,
        ..LogConfig::default()
    };
    assert!(init_logging(again).is_err());
}

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::path::PathBuf;

use tallylog_server::config::{ServiceConfig, StoreBackend};

fn load(pairs: &[(&str, &str)]) -> ServiceConfig {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServiceConfig::from_lookup(|k| env.get(k).cloned())
}

#[test]
fn defaults_when_unset() {
    let cfg = load(&[]);
    assert_eq!(cfg, ServiceConfig::default());
    assert_eq!(cfg.listen_addr(), "0.0.0.0:8080");
    assert_eq!(cfg.store_url(), "redis://localhost:9090/");
    assert_eq!(cfg.track_file_path(), PathBuf::from("./data").join("track.txt"));
    assert_eq!(cfg.lock_file_path(), PathBuf::from("./data").join("lock_track.txt"));
    assert_eq!(cfg.store_backend, StoreBackend::Redis);
    assert_eq!(cfg.lock.retries, 50);
    assert_eq!(cfg.lock.retry_wait_ms, 100);
}

#[test]
fn overrides_apply_per_field() {
    let cfg = load(&[
        ("APP_PORT", "3000"),
        ("REDIS_URL", "cache.internal"),
        ("DATA_FOLDER", "/var/lib/tally"),
        ("TRACK_FILE_NAME", "events.jsonl"),
        ("STORE_BACKEND", "Memory"),
    ]);
    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
    // REDIS_PORT untouched
    assert_eq!(cfg.store_url(), "redis://cache.internal:9090/");
    assert_eq!(cfg.lock_file_path(), PathBuf::from("/var/lib/tally/lock_events.jsonl"));
    assert_eq!(cfg.store_backend, StoreBackend::Memory);
}

#[test]
fn empty_values_count_as_unset() {
    let cfg = load(&[("APP_PORT", ""), ("DATA_FOLDER", "")]);
    assert_eq!(cfg.listen_port, "8080");
    assert_eq!(cfg.data_dir, PathBuf::from("./data"));
}

#[test]
fn ports_are_not_validated_at_load() {
    let cfg = load(&[("APP_PORT", "not-a-port"), ("REDIS_PORT", "99999")]);
    assert_eq!(cfg.listen_addr(), "0.0.0.0:not-a-port");
    assert_eq!(cfg.store_url(), "redis://localhost:99999/");
}

#[test]
fn unparsable_lock_tuning_falls_back() {
    let cfg = load(&[("LOCK_RETRIES", "many"), ("LOCK_RETRY_WAIT_MS", " 25 ")]);
    assert_eq!(cfg.lock.retries, 50);
    assert_eq!(cfg.lock.retry_wait_ms, 25);
}

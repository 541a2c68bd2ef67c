#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use serde_json::json;

use tallylog_core::error::{Result, TallyError};
use tallylog_server::store::{Counter, KvStore, MemoryStore, COUNT_KEY};

struct DownStore;

#[async_trait::async_trait]
impl KvStore for DownStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(TallyError::Store("connection refused".into()))
    }
    async fn set(&self, _key: &str, _value: String) -> Result<()> {
        Err(TallyError::Store("connection refused".into()))
    }
}

#[tokio::test]
async fn unset_counter_reads_none_not_zero() {
    let counter = Counter::new(Arc::new(MemoryStore::new()));
    assert_eq!(counter.get().await.unwrap(), None);
}

#[tokio::test]
async fn add_accumulates_from_absent() {
    let store = Arc::new(MemoryStore::new());
    let counter = Counter::new(store.clone());

    assert_eq!(counter.add(&json!(10)).await.unwrap(), 10);
    assert_eq!(counter.add(&json!("10")).await.unwrap(), 20);
    assert_eq!(counter.get().await.unwrap(), Some(20));
    assert_eq!(store.get(COUNT_KEY).await.unwrap().as_deref(), Some("20"));
}

#[tokio::test]
async fn loose_values_on_both_sides() {
    let store = Arc::new(MemoryStore::new());
    store.set(COUNT_KEY, "7 apples".into()).await.unwrap();
    let counter = Counter::new(store.clone());

    assert_eq!(counter.get().await.unwrap(), Some(7));
    assert_eq!(counter.add(&json!("abc")).await.unwrap(), 7);
    assert_eq!(counter.add(&json!(2.9)).await.unwrap(), 9);
    assert_eq!(counter.add(&json!("-4")).await.unwrap(), 5);
}

#[tokio::test]
async fn adding_zero_sets_an_absent_counter() {
    let counter = Counter::new(Arc::new(MemoryStore::new()));
    counter.add(&json!(0)).await.unwrap();
    assert_eq!(counter.get().await.unwrap(), Some(0));
}

#[tokio::test]
async fn separate_keys_do_not_interfere() {
    let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    let a = Counter::with_key(store.clone(), "a");
    let b = Counter::with_key(store, "b");

    a.add(&json!(3)).await.unwrap();
    assert_eq!(a.get().await.unwrap(), Some(3));
    assert_eq!(b.get().await.unwrap(), None);
}

#[tokio::test]
async fn store_errors_propagate() {
    let counter = Counter::new(Arc::new(DownStore));
    assert_eq!(counter.get().await.unwrap_err().client_code().as_str(), "STORE");
    assert_eq!(counter.add(&json!(1)).await.unwrap_err().client_code().as_str(), "STORE");
}

#[tokio::test]
async fn flush_clears_memory_store() {
    let store = Arc::new(MemoryStore::new());
    let counter = Counter::new(store.clone());
    counter.add(&json!(5)).await.unwrap();
    store.flush();
    assert_eq!(counter.get().await.unwrap(), None);
}

//! In-memory Storage Gateway
//!
//! Backs tests and any surface without browser storage. Reads and writes can
//! be made to fail to exercise the silent storage-error paths.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use super::traits::{Bucket, StorageGateway};
use crate::domain::{NotesError, NotesResult};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<(Bucket, String), Value>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key without counting it as a write
    pub fn with_value(self, bucket: Bucket, key: &str, value: Value) -> Self {
        self.entries.borrow_mut().insert((bucket, key.to_string()), value);
        self
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful `set` calls
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Current value of a key, bypassing failure injection
    pub fn peek(&self, bucket: Bucket, key: &str) -> Option<Value> {
        self.entries.borrow().get(&(bucket, key.to_string())).cloned()
    }
}

#[async_trait(?Send)]
impl StorageGateway for MemoryStorage {
    async fn get(&self, bucket: Bucket, key: &str) -> NotesResult<Option<Value>> {
        if self.fail_reads.get() {
            return Err(NotesError::storage(format!("read {}.{} failed", bucket.as_str(), key)));
        }
        Ok(self.peek(bucket, key))
    }

    async fn set(&self, bucket: Bucket, key: &str, value: Value) -> NotesResult<()> {
        if self.fail_writes.get() {
            return Err(NotesError::storage(format!("write {}.{} failed", bucket.as_str(), key)));
        }
        self.entries.borrow_mut().insert((bucket, key.to_string()), value);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_buckets_are_separate() {
        let storage = MemoryStorage::new();
        storage.set(Bucket::Synced, "k", json!(1)).await.unwrap();
        assert_eq!(storage.get(Bucket::Synced, "k").await.unwrap(), Some(json!(1)));
        assert_eq!(storage.get(Bucket::Local, "k").await.unwrap(), None);
        assert_eq!(storage.write_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let storage = MemoryStorage::new().with_value(Bucket::Local, "k", json!("v"));
        storage.set_fail_reads(true);
        assert!(matches!(storage.get(Bucket::Local, "k").await, Err(NotesError::Storage(_))));
        storage.set_fail_writes(true);
        assert!(storage.set(Bucket::Local, "k", json!("w")).await.is_err());
        assert_eq!(storage.peek(Bucket::Local, "k"), Some(json!("v")));
    }
}

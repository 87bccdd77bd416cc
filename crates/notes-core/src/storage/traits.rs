//! Storage Gateway Trait
//!
//! Asynchronous key-value persistence with a synced and a local bucket.
//! Implementations: browser `chrome.storage`, in-memory.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::NotesResult;

/// Partition of the storage gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Replicated across the user's browsers
    Synced,
    /// Stays on this device
    Local,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Synced => "sync",
            Bucket::Local => "local",
        }
    }
}

/// Raw JSON key-value access.
///
/// Futures are not `Send`: browser implementations await JS promises on the
/// single UI thread.
#[async_trait(?Send)]
pub trait StorageGateway {
    /// Read a key; `None` when absent
    async fn get(&self, bucket: Bucket, key: &str) -> NotesResult<Option<Value>>;

    /// Overwrite a key
    async fn set(&self, bucket: Bucket, key: &str, value: Value) -> NotesResult<()>;
}

/// Read and deserialize a key
pub async fn read_json<S, T>(storage: &S, bucket: Bucket, key: &str) -> NotesResult<Option<T>>
where
    S: StorageGateway + ?Sized,
    T: DeserializeOwned,
{
    match storage.get(bucket, key).await? {
        Some(Value::Null) | None => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
    }
}

/// Serialize and write a key
pub async fn write_json<S, T>(storage: &S, bucket: Bucket, key: &str, value: &T) -> NotesResult<()>
where
    S: StorageGateway + ?Sized,
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value)?;
    storage.set(bucket, key, value).await
}

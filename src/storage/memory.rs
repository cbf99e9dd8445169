use super::ObjectStore;
use crate::{Error, Result};
use async_trait::async_trait;
use axum::body::Bytes;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tracing::debug;

/// Process-local bucket for running without AWS.
#[derive(Debug, Clone)]
pub struct MemoryObjectStore {
    bucket: String,
    objects: Arc<Mutex<HashMap<String, Bytes>>>,
}

impl MemoryObjectStore {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .ok()
            .and_then(|objects| objects.get(key).map(|data| data.to_vec()))
    }

    pub fn len(&self) -> usize {
        self.objects.lock().map(|objects| objects.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put_object(&self, key: &str, data: Bytes) -> Result<()> {
        debug!("Storing {} bytes at {}/{}", data.len(), self.bucket, key);

        let mut objects = self
            .objects
            .lock()
            .map_err(|e| Error::storage(format!("Object map poisoned: {}", e)))?;
        objects.insert(key.to_string(), data);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_put_and_get() {
        let store = MemoryObjectStore::new("amith-project");
        let data = Bytes::from_static(b"0123456789");
        tokio_test::block_on(store.put_object("a.txt", data)).unwrap();

        assert_eq!(store.bucket(), "amith-project");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a.txt"), Some(b"0123456789".to_vec()));
        assert_eq!(store.get("b.txt"), None);
    }

    #[test]
    fn test_same_key_overwrites() {
        let store = MemoryObjectStore::new("amith-project");
        tokio_test::block_on(store.put_object("a.txt", Bytes::from_static(b"first"))).unwrap();
        tokio_test::block_on(store.put_object("a.txt", Bytes::from_static(b"second"))).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a.txt"), Some(b"second".to_vec()));
    }

    #[test]
    fn test_clones_share_objects() {
        let store = MemoryObjectStore::new("bucket");
        let handle = store.clone();
        tokio_test::block_on(store.put_object("k", Bytes::new())).unwrap();

        assert!(!handle.is_empty());
        assert_eq!(handle.get("k"), Some(Vec::new()));
    }
}

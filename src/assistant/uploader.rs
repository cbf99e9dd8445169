use crate::{Result, storage::ObjectStore};
use axum::body::Bytes;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub filename: String,
    pub size: usize,
}

/// Forwards uploaded files to the object store under their original filename.
#[derive(Clone)]
pub struct Uploader {
    store: Arc<dyn ObjectStore>,
}

impl Uploader {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    pub async fn upload(&self, filename: &str, data: Bytes) -> Result<UploadReceipt> {
        let size = data.len();
        self.store.put_object(filename, data).await?;

        info!("Stored {} ({} bytes)", filename, size);

        Ok(UploadReceipt {
            filename: filename.to_string(),
            size,
        })
    }
}

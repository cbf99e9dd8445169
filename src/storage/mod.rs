mod memory;
mod s3;

pub use memory::MemoryObjectStore;
pub use s3::S3ObjectStore;

use crate::{
    Result,
    config::{StorageBackend, StorageConfig},
};
use async_trait::async_trait;
use aws_config::SdkConfig;
use axum::body::Bytes;
use std::sync::Arc;
use tracing::info;

/// A bucket that objects are written into.
///
/// Writing to an existing key replaces the stored object.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, key: &str, data: Bytes) -> Result<()>;
}

pub fn create_object_store(
    config: &StorageConfig,
    sdk_config: &SdkConfig,
) -> Arc<dyn ObjectStore> {
    match config.backend {
        StorageBackend::S3 => {
            info!("Using S3 storage with bucket {}", config.bucket);
            let s3_config = aws_sdk_s3::config::Builder::from(sdk_config)
                .force_path_style(config.force_path_style)
                .build();
            Arc::new(S3ObjectStore::new(
                aws_sdk_s3::Client::from_conf(s3_config),
                config.bucket.clone(),
            ))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage with bucket {}", config.bucket);
            Arc::new(MemoryObjectStore::new(config.bucket.clone()))
        }
    }
}

use crate::RepositoryError;

use async_trait::async_trait;
use bytes::Bytes;

/// An uploaded photo as received from the client
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Content store for photo bytes; entries only keep the returned reference
#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn store(&self, upload: PhotoUpload) -> Result<String, RepositoryError>;

    /// Drop a photo previously returned by `store`
    async fn remove(&self, photo_ref: &str) -> Result<(), RepositoryError>;
}

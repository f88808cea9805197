//! Photo bytes on the local filesystem, served back under `/uploads`.

use clarity_core::{ErrorLocation, PhotoStore, PhotoUpload, RepositoryError};

use std::panic::Location;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

/// URL prefix the router serves the upload directory under
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

const FILE_NAME_PREFIX: &str = "mood";
const MAX_EXTENSION_LEN: usize = 8;

pub struct LocalPhotoStore {
    dir: PathBuf,
}

impl LocalPhotoStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `mood-<unix millis>-<random>.<ext>`
    fn generate_file_name(upload: &PhotoUpload) -> String {
        let stem = format!(
            "{}-{}-{}",
            FILE_NAME_PREFIX,
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple()
        );

        match extension_for(upload) {
            Some(ext) => format!("{stem}.{ext}"),
            None => stem,
        }
    }
}

#[async_trait]
impl PhotoStore for LocalPhotoStore {
    async fn store(&self, upload: PhotoUpload) -> Result<String, RepositoryError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| storage_error(format!("Failed to create {}: {}", self.dir.display(), e)))?;

        let file_name = Self::generate_file_name(&upload);
        let path = self.dir.join(&file_name);

        debug!(
            "Writing {} byte photo ({}) to {}",
            upload.bytes.len(),
            upload.content_type,
            path.display()
        );

        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|e| storage_error(format!("Failed to write {}: {}", path.display(), e)))?;

        info!("Stored photo {}", file_name);

        Ok(format!("{UPLOADS_URL_PREFIX}/{file_name}"))
    }

    async fn remove(&self, photo_ref: &str) -> Result<(), RepositoryError> {
        let file_name = photo_ref
            .strip_prefix(UPLOADS_URL_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| is_plain_file_name(name))
            .ok_or_else(|| storage_error(format!("Not a stored photo reference: {photo_ref}")))?;

        let path = self.dir.join(file_name);
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| storage_error(format!("Failed to remove {}: {}", path.display(), e)))?;

        info!("Removed photo {}", file_name);

        Ok(())
    }
}

/// Stays inside the upload directory
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}

/// Extension of the client's file name, else the image subtype.
/// Only short alphanumeric extensions survive, so the name stays a plain file.
fn extension_for(upload: &PhotoUpload) -> Option<String> {
    let from_name = upload
        .file_name
        .as_deref()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str());

    let from_type = upload
        .content_type
        .strip_prefix("image/")
        .map(|subtype| subtype.split(['+', ';']).next().unwrap_or(subtype));

    from_name
        .or(from_type)
        .map(|ext| ext.trim().to_ascii_lowercase())
        .filter(|ext| {
            !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

#[track_caller]
fn storage_error(message: String) -> RepositoryError {
    RepositoryError::Storage {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_PHOTO_BYTES, DEFAULT_UPLOADS_DIRECTORY,
    MAX_MAX_PHOTO_BYTES, MIN_MAX_PHOTO_BYTES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    /// Relative to the config directory; served under `/uploads`
    pub dir: String,
    pub max_photo_bytes: usize,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_UPLOADS_DIRECTORY),
            max_photo_bytes: DEFAULT_MAX_PHOTO_BYTES,
        }
    }
}

impl UploadsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_MAX_PHOTO_BYTES..=MAX_MAX_PHOTO_BYTES).contains(&self.max_photo_bytes) {
            return Err(ConfigError::uploads(format!(
                "uploads.max_photo_bytes must be {}-{}, got {}",
                MIN_MAX_PHOTO_BYTES, MAX_MAX_PHOTO_BYTES, self.max_photo_bytes
            )));
        }

        Ok(())
    }
}

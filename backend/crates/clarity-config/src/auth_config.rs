use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_DAYS, MAX_TOKEN_TTL_DAYS,
    MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_DAYS,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; there is no built-in fallback.
    pub jwt_secret: Option<String>,
    pub token_ttl_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
        }
    }
}

// Redacts the secret
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_days", &self.token_ttl_days)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.jwt_secret is required (set CLARITY_AUTH_JWT_SECRET)")
        })?;

        if secret.chars().count() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if !(MIN_TOKEN_TTL_DAYS..=MAX_TOKEN_TTL_DAYS).contains(&self.token_ttl_days) {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_days must be {}-{}, got {}",
                MIN_TOKEN_TTL_DAYS, MAX_TOKEN_TTL_DAYS, self.token_ttl_days
            )));
        }

        Ok(())
    }
}

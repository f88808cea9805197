use crate::{ConfigError, ConfigErrorResult, DEFAULT_CORS_ORIGINS, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed by CORS
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign"
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::config(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::config("server.host cannot be empty"));
        }

        if let Some(origin) = self.cors_origins.iter().find(|o| o.trim().is_empty()) {
            return Err(ConfigError::config(format!(
                "server.cors_origins contains an empty origin: '{}'",
                origin
            )));
        }

        // Credentialed CORS cannot use a wildcard origin
        if self.cors_origins.iter().any(|o| o.trim() == "*") {
            return Err(ConfigError::config(
                "server.cors_origins cannot contain '*'; list each origin explicitly",
            ));
        }

        Ok(())
    }
}

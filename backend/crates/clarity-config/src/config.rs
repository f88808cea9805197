use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, DemoConfig, LoggingConfig, ServerConfig, UploadsConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub uploads: UploadsConfig,
    pub demo: DemoConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. CLARITY_CONFIG_DIR env var, else ./.clarity/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. config.toml if present, else defaults
    /// 4. CLARITY_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: CLARITY_CONFIG_DIR env var > ./.clarity/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.uploads.validate()?;
        self.demo.validate()?;

        Self::validate_relative("database.path", &self.database.path, ConfigError::database)?;
        Self::validate_relative("uploads.dir", &self.uploads.dir, ConfigError::uploads)?;
        Self::validate_relative("logging.dir", &self.logging.dir, ConfigError::config)?;

        Ok(())
    }

    /// Paths must stay inside the config directory
    fn validate_relative(
        key: &str,
        value: &str,
        make_error: fn(String) -> ConfigError,
    ) -> ConfigErrorResult<()> {
        if value.trim().is_empty() || Path::new(value).is_absolute() || value.contains("..") {
            return Err(make_error(format!(
                "{} must be relative and cannot contain '..', got '{}'",
                key, value
            )));
        }
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn uploads_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.uploads.dir))
    }

    /// `None` when logging to stdout
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  cors origins: {}", self.server.cors_origins.join(", "));
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256 ({}), token ttl {}d",
            if self.auth.jwt_secret.is_some() {
                "secret set"
            } else {
                "secret missing"
            },
            self.auth.token_ttl_days
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  uploads: {} (max {} bytes)",
            self.uploads.dir, self.uploads.max_photo_bytes
        );
        if self.demo.seed_user {
            info!("  demo user: {}", self.demo.email);
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CLARITY_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CLARITY_SERVER_PORT", &mut self.server.port);
        Self::apply_env_list("CLARITY_SERVER_CORS_ORIGINS", &mut self.server.cors_origins);

        // Database
        Self::apply_env_string("CLARITY_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("CLARITY_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("CLARITY_AUTH_TOKEN_TTL_DAYS", &mut self.auth.token_ttl_days);

        // Logging
        Self::apply_env_parse("CLARITY_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CLARITY_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CLARITY_LOG_FILE", &mut self.logging.file);

        // Uploads
        Self::apply_env_string("CLARITY_UPLOADS_DIR", &mut self.uploads.dir);
        Self::apply_env_parse(
            "CLARITY_UPLOADS_MAX_PHOTO_BYTES",
            &mut self.uploads.max_photo_bytes,
        );

        // Demo
        Self::apply_env_bool("CLARITY_DEMO_SEED_USER", &mut self.demo.seed_user);
        Self::apply_env_string("CLARITY_DEMO_EMAIL", &mut self.demo.email);
        Self::apply_env_string("CLARITY_DEMO_PASSWORD", &mut self.demo.password);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Comma-separated; blank items are dropped
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();
        }
    }
}

mod auth_config;
mod config;
mod database_config;
mod demo_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod uploads_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use demo_config::DemoConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use uploads_config::UploadsConfig;

pub const CONFIG_DIR_ENV: &str = "CLARITY_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".clarity";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const MIN_PORT: u16 = 1024;
const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:19006",
    "exp://192.168.1.100:19000",
];

const DEFAULT_DATABASE_FILENAME: &str = "clarity.db";

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;
const MIN_TOKEN_TTL_DAYS: i64 = 1;
const MAX_TOKEN_TTL_DAYS: i64 = 365;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_UPLOADS_DIRECTORY: &str = "uploads";
const DEFAULT_MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;
const MIN_MAX_PHOTO_BYTES: usize = 1024;
const MAX_MAX_PHOTO_BYTES: usize = 50 * 1024 * 1024;

const DEFAULT_DEMO_SEED_USER: bool = false;
const DEFAULT_DEMO_EMAIL: &str = "test@clarity.com";
const DEFAULT_DEMO_PASSWORD: &str = "password123";

use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DEMO_EMAIL, DEFAULT_DEMO_PASSWORD,
    DEFAULT_DEMO_SEED_USER,
};

use serde::Deserialize;

/// Optional demo account created at startup
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub seed_user: bool,
    pub email: String,
    pub password: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed_user: DEFAULT_DEMO_SEED_USER,
            email: String::from(DEFAULT_DEMO_EMAIL),
            password: String::from(DEFAULT_DEMO_PASSWORD),
        }
    }
}

impl std::fmt::Debug for DemoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoConfig")
            .field("seed_user", &self.seed_user)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl DemoConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.seed_user {
            return Ok(());
        }

        if !self.email.contains('@') {
            return Err(ConfigError::demo(format!(
                "demo.email is not an email address: '{}'",
                self.email
            )));
        }

        if self.password.len() < 6 {
            return Err(ConfigError::demo(
                "demo.password must be at least 6 characters",
            ));
        }

        Ok(())
    }
}

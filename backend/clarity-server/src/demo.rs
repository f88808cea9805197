//! Optional demo account created at startup.

use crate::{ServerError, ServerErrorResult};

use clarity_config::DemoConfig;
use clarity_core::{CoreError, UserStore};

use log::info;

const DEMO_FIRST_NAME: &str = "Test";
const DEMO_LAST_NAME: &str = "User";

/// Create the demo user unless it already exists. No-op when disabled.
pub async fn ensure_demo_user(users: &UserStore, demo: &DemoConfig) -> ServerErrorResult<()> {
    if !demo.seed_user {
        return Ok(());
    }

    match users
        .create_user(&demo.email, &demo.password, DEMO_FIRST_NAME, DEMO_LAST_NAME)
        .await
    {
        Ok(user) => {
            info!("Created demo user: {} ({})", user.email, user.id);
            Ok(())
        }
        Err(CoreError::Conflict { .. }) => {
            info!("Demo user already exists: {}", demo.email);
            Ok(())
        }
        Err(e) => Err(ServerError::DemoUser {
            message: e.to_string(),
        }),
    }
}

use crate::UserDto;

use serde::Serialize;

/// Signup and login response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserDto,
}

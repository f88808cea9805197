use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserDto,
}

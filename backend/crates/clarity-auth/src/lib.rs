pub mod argon2_password_hasher;
pub mod bearer;
pub mod claims;
pub mod error;
pub mod token_service;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use token_service::{DEFAULT_TOKEN_TTL_DAYS, TokenService};

//! Account records: signup, credential checks and lookups.

use crate::models::user::normalize_email;
use crate::{
    CoreError, ErrorLocation, NewUser, PasswordHasher, Result as CoreErrorResult, User, UserId,
    UserRepository, validation,
};

use std::panic::Location;
use std::sync::Arc;

use log::{info, warn};

/// Well-formed Argon2id digest (default parameters) that matches no password.
/// Verified against when the email is unknown so both rejections cost the same.
pub const DUMMY_DIGEST: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$W7qFvSdLH2Ko9potwmCWXQ$lcifvHVKSzIrTludeXoWGnFUabdaskBaGNB4NQmn8Ro";

#[derive(Clone)]
pub struct UserStore {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserStore {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Register a new account. The email is normalized before the
    /// uniqueness check, so `A@x.com` and `a@x.com` collide.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> CoreErrorResult<User> {
        let email = normalize_email(email);
        validation::validate_email(&email)?;
        validation::validate_password(password)?;
        validation::validate_name("firstName", "First name", first_name)?;
        validation::validate_name("lastName", "Last name", last_name)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(CoreError::Conflict {
                message: "User with this email already exists".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let password_digest = self
            .hasher
            .hash(password)
            .map_err(|e| CoreError::internal(e.to_string()))?;

        let new_user = NewUser::new(
            email,
            password_digest,
            first_name.trim().to_string(),
            last_name.trim().to_string(),
        );

        // A concurrent signup can still win the race; the unique index reports it
        let user = self.users.insert(&new_user).await?;

        info!("Created user {}", user.id);

        Ok(user)
    }

    /// Unknown email and wrong password fail identically
    pub async fn authenticate(&self, email: &str, password: &str) -> CoreErrorResult<User> {
        let email = normalize_email(email);

        let Some(user) = self.users.find_by_email(&email).await? else {
            self.hasher.verify(password, DUMMY_DIGEST);
            warn!("Login rejected: unknown account");
            return Err(CoreError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !self.hasher.verify(password, &user.password_digest) {
            warn!("Login rejected for user {}: password mismatch", user.id);
            return Err(CoreError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(user)
    }

    pub async fn get_by_id(&self, id: UserId) -> CoreErrorResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("User not found"))
    }

    pub async fn get_by_email(&self, email: &str) -> CoreErrorResult<User> {
        self.users
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_else(|| CoreError::not_found("User not found"))
    }
}

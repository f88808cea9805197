use crate::{NewUser, RepositoryError, User, UserId};

use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with its assigned id.
    /// A taken email yields `RepositoryError::Duplicate`.
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// `email` is expected to be normalized already
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}

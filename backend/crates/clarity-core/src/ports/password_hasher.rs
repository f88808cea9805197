use thiserror::Error;

#[derive(Error, Debug)]
#[error("Password hashing failed: {message}")]
pub struct HashError {
    pub message: String,
}

/// One-way password digest
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, secret: &str) -> Result<String, HashError>;

    /// `false` for a wrong secret and for an unreadable digest
    fn verify(&self, secret: &str, digest: &str) -> bool;
}

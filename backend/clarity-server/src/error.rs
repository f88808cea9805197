use thiserror::Error;

/// Startup failures owned by the server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Demo user setup failed: {message}")]
    DemoUser { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;

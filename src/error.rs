use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Shopping list error: {0}")]
    Shopping(#[from] grocery_shared::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Delivery failed: {0}")]
    Sink(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

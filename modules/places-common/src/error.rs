use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Missing(String),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

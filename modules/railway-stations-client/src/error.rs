use thiserror::Error;

pub type Result<T> = std::result::Result<T, RailwayStationsError>;

#[derive(Debug, Error)]
pub enum RailwayStationsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for RailwayStationsError {
    fn from(err: reqwest::Error) -> Self {
        RailwayStationsError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for RailwayStationsError {
    fn from(err: serde_json::Error) -> Self {
        RailwayStationsError::Parse(err.to_string())
    }
}

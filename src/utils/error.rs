use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}")]
    HttpStatusError { status: u16 },

    #[error("Malformed provider response: {message}")]
    MalformedResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DashboardError {
    /// Message shown to the user when a fetch fails. Every fetch error kind
    /// maps to the same generic retry message; details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            DashboardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            _ => "Failed to fetch effectuation data. Please try again later.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

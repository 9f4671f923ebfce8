use thiserror::Error;

/// Failure of a call to the backend API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("backend unreachable: {0}")]
    Transport(String),

    #[error("backend answered with status {0}")]
    Status(u16),

    #[error("unexpected backend payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,

    #[error("quit date is required")]
    MissingQuitDate,

    #[error("{0} must be a non-negative number")]
    Negative(&'static str),

    #[error("cigarettes per pack must be greater than zero")]
    EmptyPack,

    #[error("intensity must be between 1 and 5")]
    Intensity,
}

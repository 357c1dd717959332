use std::fmt;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Unable to reach server.";

// Client-side form checks that block a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    RatingMissing,
    RatingOutOfRange,
    EmptyComment,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationError::EmailRequired => "Please enter your email address.",
            ValidationError::EmailInvalid => "Please enter a valid email address.",
            ValidationError::PasswordRequired => "Please enter your password.",
            ValidationError::RatingMissing => "Please select a rating.",
            ValidationError::RatingOutOfRange => "Rating must be a whole number from 1 to 5.",
            ValidationError::EmptyComment => "Please write a comment.",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationError {}

// Outcome of a failed API call, normalised at the client boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    // Request never completed, or the success body was unreadable.
    Transport(String),
    // Server answered with a failure.
    Application {
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    /// Text shown to the user; `fallback` covers application errors the
    /// server did not describe.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Application {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Application { message: None, .. } => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(detail) => write!(f, "api transport error: {detail}"),
            ApiError::Application { status, message } => {
                if let Some(message) = message {
                    write!(f, "api error {status}: {message}")
                } else {
                    write!(f, "api error {status}")
                }
            }
        }
    }
}

impl std::error::Error for ApiError {}

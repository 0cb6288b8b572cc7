use thiserror::Error;

/// Failure surfaced by the backend API client.
///
/// Every HTTP-level problem is normalized into one of these variants so
/// handlers can branch on the kind of failure instead of inspecting
/// transport details.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Not signed in")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("Backend error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build a status error, deriving a message from the code when the
    /// response body carried none.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => {
                let message = if body.trim().is_empty() {
                    status_message(status).to_string()
                } else {
                    body
                };
                ApiError::Status { status, message }
            }
        }
    }

    /// The rejected-credential signature: only these failures trigger
    /// the member-login fallback after a failed admin-login attempt.
    pub fn is_invalid_credentials(&self) -> bool {
        match self {
            ApiError::Unauthorized => true,
            ApiError::Status { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

/// Human-readable default for a bare HTTP status.
pub fn status_message(status: u16) -> &'static str {
    match status {
        400 => "The request was rejected",
        401 => "Sign-in required",
        403 => "Not allowed",
        404 => "Not found",
        409 => "Already exists",
        422 => "Invalid input",
        500..=599 => "The server had a problem",
        _ => "Request failed",
    }
}

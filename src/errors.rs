use axum::{http::StatusCode, Json};
use serde_json::json;
use std::fmt;
use tracing::error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// Logs the cause and hides it from the caller.
    pub fn internal(err: impl std::error::Error) -> Self {
        error!("internal error: {err}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal Server Error".to_string(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<EmoteError> for AppError {
    fn from(err: EmoteError) -> Self {
        match err {
            EmoteError::TeamNotFound(_) => Self::not_found(err.to_string()),
            EmoteError::MissingField(_) | EmoteError::ReservedEmote => {
                Self::bad_request(err.to_string())
            }
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = json!({
            "statusCode": self.status.as_u16(),
            "error": self.status.canonical_reason().unwrap_or("Error"),
            "message": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

/// Expected, user-facing outcomes of the emote services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmoteError {
    MissingField(&'static str),
    ReservedEmote,
    TeamNotFound(String),
}

impl fmt::Display for EmoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmoteError::MissingField(field) => write!(f, "{field} is required"),
            EmoteError::ReservedEmote => {
                write!(f, "emote may not be named \"{}\"", crate::models::DATE_KEY)
            }
            EmoteError::TeamNotFound(name) => write!(f, "No team with the name \"{name}\" was found."),
        }
    }
}

impl std::error::Error for EmoteError {}

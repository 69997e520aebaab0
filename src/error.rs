//! Error type shared by the library

use thiserror::Error;

/// Everything that can stop a game before or outside the frame loop.
///
/// Loop-level end conditions (timeout, exhaustion, quit, capture failure)
/// are not errors; they are reported through [`crate::types::EndReason`].
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("trivia API returned {status}")]
    HttpStatus { status: u16 },

    #[error("malformed question data: {0}")]
    MalformedQuestions(String),

    #[error("{name} must be a positive number of seconds, got {value}")]
    InvalidTimeout { name: &'static str, value: f64 },

    #[error("invalid source '{0}' (expected 'local' or 'trivia')")]
    InvalidSource(String),

    #[error("invalid trace line {line}: {reason}")]
    InvalidTrace { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, QuizError>;

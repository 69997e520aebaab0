//! Why a game ended

use serde::{Deserialize, Serialize};

/// End reasons for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// Question source ran out of questions
    Exhausted,
    /// Whole-game timeout elapsed
    Timeout,
    /// Player pressed the quit key
    Quit,
    /// Frame source stopped delivering frames
    CaptureFailed,
}

impl EndReason {
    /// Get the code string (for logging and JSON)
    pub fn code(&self) -> &'static str {
        match self {
            Self::Exhausted => "exhausted",
            Self::Timeout => "timeout",
            Self::Quit => "quit",
            Self::CaptureFailed => "capture_failed",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Exhausted => "No more questions",
            Self::Timeout => "Game time is up",
            Self::Quit => "Quit by player",
            Self::CaptureFailed => "Frame acquisition failed",
        }
    }

    /// Normal game ends route to the results screen; quit and capture
    /// failure shut down without it.
    pub fn shows_results(&self) -> bool {
        matches!(self, Self::Exhausted | Self::Timeout)
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

//! Question controller state definitions

use serde::{Deserialize, Serialize};

/// The four states of the question controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ControllerState {
    /// Nothing pulled yet
    Idle,
    /// A question is on screen and can be judged
    QuestionActive,
    /// Current question is done, next pull pending
    Advancing,
    /// Source yielded no further questions (terminal)
    Exhausted,
}

impl ControllerState {
    /// States in which the loop must pull before judging
    pub fn needs_question(&self) -> bool {
        matches!(self, ControllerState::Idle | ControllerState::Advancing)
    }
}

impl std::fmt::Display for ControllerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ControllerState::Idle => "IDLE",
            ControllerState::QuestionActive => "QUESTION_ACTIVE",
            ControllerState::Advancing => "ADVANCING",
            ControllerState::Exhausted => "EXHAUSTED",
        };
        write!(f, "{}", name)
    }
}

//! Per-frame head orientation and the answer it maps to

use serde::{Deserialize, Serialize};
use crate::types::Answer;

/// Output of the orientation collaborator for one frame.
///
/// Only `yaw` drives the answer decision; pitch and roll are carried for
/// display and recording.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrientationReading {
    pub face_detected: bool,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub yaw: f64,
    #[serde(default)]
    pub roll: f64,
}

impl OrientationReading {
    /// Face found with the given rotation angles (degrees)
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self {
            face_detected: true,
            pitch,
            yaw,
            roll,
        }
    }

    /// Face found, only yaw known
    pub fn with_yaw(yaw: f64) -> Self {
        Self::new(0.0, yaw, 0.0)
    }

    /// No face in the frame
    pub fn no_face() -> Self {
        Self::default()
    }
}

/// Discrete answer derived from one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerDecision {
    True,
    False,
    /// No face, or head not tilted far enough
    Undetermined,
}

impl AnswerDecision {
    /// The answer this decision commits to, if any
    pub fn answer(&self) -> Option<Answer> {
        match self {
            AnswerDecision::True => Some(Answer::True),
            AnswerDecision::False => Some(Answer::False),
            AnswerDecision::Undetermined => None,
        }
    }
}

impl std::fmt::Display for AnswerDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AnswerDecision::True => "TRUE",
            AnswerDecision::False => "FALSE",
            AnswerDecision::Undetermined => "NA",
        };
        write!(f, "{}", name)
    }
}

//! Core types for HeadQuiz

mod question;
mod orientation;
mod reason;
mod state;
mod output;

pub use question::{Answer, Question, QuestionSequence};
pub use orientation::{OrientationReading, AnswerDecision};
pub use reason::EndReason;
pub use state::ControllerState;
pub use output::{FrameView, Feedback, KeyAction, GameSummary, GameOutcome};

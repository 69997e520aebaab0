//! What the game loop hands to the display, and what it reports at the end

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{AnswerDecision, EndReason};

/// Descriptor for one in-progress frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView<'a> {
    /// Active question text
    pub question_text: &'a str,
    /// 1-based position of the active question
    pub question_number: usize,
    pub total_questions: usize,
    /// Whole seconds left on the question clock (may go negative by < 1s)
    pub remaining_question_secs: i64,
    /// Whole seconds left on the game clock
    pub remaining_game_secs: i64,
    /// Current head-tilt decision, used for the left/right cue
    pub decision: AnswerDecision,
    pub score: u32,
}

impl<'a> FrameView<'a> {
    /// Format for logs / headless output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "q={}/{} | Q:{} | T:{} | cue={} | score={} | {}",
            self.question_number,
            self.total_questions,
            self.remaining_question_secs,
            self.remaining_game_secs,
            self.decision,
            self.score,
            self.question_text
        )
    }
}

/// Feedback shown after a question is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub correct: bool,
    /// Points awarded (0 when wrong)
    pub points: u32,
}

impl Feedback {
    pub fn correct(points: u32) -> Self {
        Self { correct: true, points }
    }

    pub fn wrong() -> Self {
        Self { correct: false, points: 0 }
    }

    pub fn message(&self) -> String {
        if self.correct {
            format!("Correct! +{} points", self.points)
        } else {
            "Wrong answer!".to_string()
        }
    }
}

/// Key handling result of presenting a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

/// Final result of a game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u32,
    pub total_questions: usize,
    /// Questions judged (correct or wrong); timed-out questions excluded
    pub answered: usize,
    pub correct: usize,
    pub end_reason: EndReason,
    /// Game clock at the end (seconds)
    pub elapsed_secs: f64,
    pub finished_at: DateTime<Utc>,
}

impl GameSummary {
    /// "Score: 4 / 3" line of the results screen
    pub fn score_line(&self) -> String {
        format!("Score: {} / {}", self.score, self.total_questions)
    }

    pub fn to_parseable_string(&self) -> String {
        format!(
            "score={} | questions={} | answered={} | correct={} | elapsed={:.1}s | reason={}",
            self.score,
            self.total_questions,
            self.answered,
            self.correct,
            self.elapsed_secs,
            self.end_reason.code()
        )
    }
}

/// Returned by the game loop once it has released its resources
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub summary: GameSummary,
    /// Whether the results screen was shown
    pub results_shown: bool,
}

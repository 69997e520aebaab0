//! Question controller: state machine over the question sequence
//!
//! State transitions:
//! - IDLE → QUESTION_ACTIVE: first pull (question timer reset)
//! - QUESTION_ACTIVE → ADVANCING: question judged or timed out
//! - ADVANCING → QUESTION_ACTIVE: next pull (question timer reset)
//! - ADVANCING → EXHAUSTED: pull finds the sequence empty

use tracing::info;

use crate::core::clock::{GameClock, TimeSource};
use crate::types::{ControllerState, Question, QuestionSequence};

/// Result of a pull attempt
#[derive(Debug, PartialEq)]
pub enum Pull<'a> {
    Active(&'a Question),
    Exhausted,
}

/// Holds the active question and drives advancement
#[derive(Debug)]
pub struct QuestionController {
    sequence: QuestionSequence,
    state: ControllerState,
    current: Option<Question>,
    /// Questions pulled so far
    pulled: usize,
}

impl QuestionController {
    pub fn new(sequence: QuestionSequence) -> Self {
        Self {
            sequence,
            state: ControllerState::Idle,
            current: None,
            pulled: 0,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Pull is due (on entry, or after an advance)
    pub fn needs_question(&self) -> bool {
        self.state.needs_question()
    }

    /// Question being shown; still available while ADVANCING so the
    /// frame that triggered the advance can be judged and rendered.
    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// 1-based position of the current question
    pub fn question_number(&self) -> usize {
        self.pulled
    }

    pub fn total(&self) -> usize {
        self.sequence.total()
    }

    /// Finish the active question. Idempotent while ADVANCING; ignored
    /// in IDLE and EXHAUSTED.
    pub fn request_advance(&mut self) {
        if self.state == ControllerState::QuestionActive {
            self.state = ControllerState::Advancing;
        }
    }

    /// Pull the next question and restart the question timer, or move to
    /// EXHAUSTED when the sequence is empty.
    pub fn pull<T: TimeSource>(&mut self, clock: &mut GameClock<T>) -> Pull<'_> {
        if self.state == ControllerState::Exhausted {
            return Pull::Exhausted;
        }

        match self.sequence.next() {
            Some(question) => {
                self.pulled += 1;
                info!(
                    number = self.pulled,
                    total = self.sequence.total(),
                    points = question.point_value,
                    "next question"
                );
                self.state = ControllerState::QuestionActive;
                clock.reset_question_timer();
                Pull::Active(self.current.insert(question))
            }
            None => {
                info!("no more questions");
                self.current = None;
                self.state = ControllerState::Exhausted;
                Pull::Exhausted
            }
        }
    }
}

//! Game loop: one iteration per captured frame
//!
//! Per iteration, in order:
//! 1. pull a question if one is due (empty source → EXHAUSTED)
//! 2. game timeout → TIMEOUT (checked before the question timeout)
//! 3. question timeout → advance on the next iteration
//! 4. read a frame (failure → CAPTURE_FAILED, no results screen)
//! 5. orientation → decision → judge against the active question
//! 6. judged: feedback dwell; otherwise render the frame and poll quit

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::core::capture::{FrameSource, OrientationSignal};
use crate::core::classifier::AnswerClassifier;
use crate::core::clock::{GameClock, TimeSource};
use crate::core::controller::{Pull, QuestionController};
use crate::core::render::Display;
use crate::core::score::ScoreKeeper;
use crate::core::source::QuestionBank;
use crate::types::{
    ControllerState, EndReason, Feedback, FrameView, GameOutcome, GameSummary, KeyAction,
};
use crate::{Result, FEEDBACK_DWELL_MS};

/// Orchestrates capture, classification, timers, scoring and display.
///
/// Owns the capture and display handles; both are released exactly once
/// when [`GameLoop::run`] returns, whatever the end reason.
pub struct GameLoop<S, O, D, T>
where
    S: FrameSource,
    O: OrientationSignal<S::Frame>,
    D: Display,
    T: TimeSource,
{
    capture: S,
    orientation: O,
    display: D,
    classifier: AnswerClassifier,
    clock: GameClock<T>,
    controller: QuestionController,
    score: ScoreKeeper,
    feedback_dwell: Duration,
}

impl<S, O, D, T> GameLoop<S, O, D, T>
where
    S: FrameSource,
    O: OrientationSignal<S::Frame>,
    D: Display,
    T: TimeSource,
{
    /// Set up a game; both timers start now
    pub fn new(capture: S, orientation: O, display: D, bank: QuestionBank, time: T) -> Self {
        let score = ScoreKeeper::new(bank.sequence.total());
        Self {
            capture,
            orientation,
            display,
            classifier: AnswerClassifier::new(),
            clock: GameClock::start(time, bank.settings),
            controller: QuestionController::new(bank.sequence),
            score,
            feedback_dwell: Duration::from_millis(FEEDBACK_DWELL_MS),
        }
    }

    pub fn with_classifier(mut self, classifier: AnswerClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_feedback_dwell(mut self, dwell: Duration) -> Self {
        self.feedback_dwell = dwell;
        self
    }

    /// Play until the game ends, show results for normal endings, then
    /// release capture and display.
    pub fn run(mut self) -> Result<GameOutcome> {
        info!(
            questions = self.controller.total(),
            game_timeout = self.clock.settings().game_timeout_secs,
            question_timeout = self.clock.settings().question_timeout_secs,
            "game started"
        );

        let reason = loop {
            if let Some(reason) = self.step()? {
                break reason;
            }
        };

        let summary = self.summary(reason);
        info!("game finished! ({}) {}", reason.code(), summary.to_parseable_string());

        let results_shown = reason.shows_results();
        if results_shown {
            self.display.show_results(&summary)?;
        }

        Ok(GameOutcome {
            summary,
            results_shown,
        })
    }

    /// One frame. Returns the end reason once the game is over.
    fn step(&mut self) -> Result<Option<EndReason>> {
        if self.controller.needs_question() {
            if let Pull::Exhausted = self.controller.pull(&mut self.clock) {
                return Ok(Some(EndReason::Exhausted));
            }
        }

        let remaining_question = self.clock.remaining_question_secs();
        let remaining_game = self.clock.remaining_game_secs();

        // Outer bound first: a simultaneous question timeout is ignored
        if self.clock.game_timed_out() {
            return Ok(Some(EndReason::Timeout));
        }

        if self.controller.state() == ControllerState::QuestionActive && self.clock.question_timed_out() {
            info!(
                number = self.controller.question_number(),
                "skipping to next question (timeout)"
            );
            self.controller.request_advance();
        }

        let Some(mut frame) = self.capture.read_frame() else {
            warn!("frame acquisition failed, stopping");
            return Ok(Some(EndReason::CaptureFailed));
        };

        let reading = self.orientation.process(&mut frame);
        let decision = self.classifier.classify(&reading);
        debug!(face = reading.face_detected, yaw = reading.yaw, %decision, "frame classified");

        let Some(question) = self.controller.current() else {
            return Ok(None);
        };
        let (correct_answer, points) = (question.correct_answer, question.point_value);

        if let Some(answer) = decision.answer() {
            let feedback = if answer == correct_answer {
                self.score.award(points);
                Feedback::correct(points)
            } else {
                self.score.record_wrong();
                Feedback::wrong()
            };
            info!(
                number = self.controller.question_number(),
                %answer,
                correct = feedback.correct,
                score = self.score.score(),
                "question judged"
            );
            self.controller.request_advance();
            self.display.show_feedback(&feedback, self.feedback_dwell)?;
            return Ok(None);
        }

        let view = FrameView {
            question_text: &question.text,
            question_number: self.controller.question_number(),
            total_questions: self.controller.total(),
            remaining_question_secs: remaining_question,
            remaining_game_secs: remaining_game,
            decision,
            score: self.score.score(),
        };

        match self.display.present(&view)? {
            KeyAction::Quit => {
                info!("quit key pressed");
                Ok(Some(EndReason::Quit))
            }
            KeyAction::Continue => Ok(None),
        }
    }

    fn summary(&self, end_reason: EndReason) -> GameSummary {
        GameSummary {
            score: self.score.score(),
            total_questions: self.score.total_questions(),
            answered: self.score.answered(),
            correct: self.score.correct(),
            end_reason,
            elapsed_secs: self.clock.elapsed_game(),
            finished_at: Utc::now(),
        }
    }
}

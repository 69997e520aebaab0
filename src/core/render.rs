//! Display seam and the two built-in displays
//!
//! The game loop hands over a small descriptor per frame; displays never
//! see the state machine.

use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use colored::Colorize;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, info};

use crate::types::{AnswerDecision, Feedback, FrameView, GameSummary, KeyAction};
use crate::{Result, LONG_QUESTION_CHARS, VERSION};

/// Output surface of the game
pub trait Display {
    /// Draw one in-progress frame and poll the quit key
    fn present(&mut self, view: &FrameView<'_>) -> Result<KeyAction>;

    /// Show correct/wrong feedback and hold it for `dwell`
    fn show_feedback(&mut self, feedback: &Feedback, dwell: Duration) -> Result<()>;

    /// Show the final score until dismissed
    fn show_results(&mut self, summary: &GameSummary) -> Result<()>;
}

/// Full-screen terminal display. Raw mode and the alternate screen are
/// held from construction until drop.
pub struct TerminalDisplay {
    out: Stdout,
    key_poll: Duration,
    shown_question: Option<usize>,
}

impl TerminalDisplay {
    pub fn open() -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            out,
            key_poll: Duration::from_millis(1),
            shown_question: None,
        })
    }

    fn line(&mut self, row: u16, text: &str) -> Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        Ok(())
    }

    fn poll_key(&self, timeout: Duration) -> Result<Option<KeyCode>> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key.code));
                }
            }
        }
        Ok(None)
    }
}

/// True when `number` differs from the question on screen; records it.
/// Only a new question wipes the whole screen, other frames redraw in place.
fn question_changed(shown: &mut Option<usize>, number: usize) -> bool {
    if *shown == Some(number) {
        return false;
    }
    *shown = Some(number);
    true
}

/// Bottom bar: the side the head is tilted to lights up, otherwise both
/// directions are hinted.
fn cue_bar(decision: AnswerDecision) -> String {
    match decision {
        AnswerDecision::True => format!("{}", "   TRUE   ".black().on_green().bold()),
        AnswerDecision::False => format!("{:>20}{}", "", "   FALSE   ".white().on_red().bold()),
        AnswerDecision::Undetermined => format!(
            "{}{}",
            "     TRUE <<<   ".black().on_green(),
            "   >>> FALSE     ".white().on_red()
        ),
    }
}

fn question_line(text: &str) -> String {
    let styled = format!(" {} ", text).white().on_blue();
    if text.len() > LONG_QUESTION_CHARS {
        format!("{}", styled)
    } else {
        format!("{}", styled.bold())
    }
}

impl Display for TerminalDisplay {
    fn present(&mut self, view: &FrameView<'_>) -> Result<KeyAction> {
        if question_changed(&mut self.shown_question, view.question_number) {
            queue!(self.out, terminal::Clear(ClearType::All))?;
        }
        self.line(0, &format!("{}", format!("HeadQuiz v{}", VERSION).dimmed()))?;
        self.line(2, &question_line(view.question_text))?;
        self.line(
            4,
            &format!(
                "Question {}/{}   Score: {}",
                view.question_number, view.total_questions, view.score
            ),
        )?;
        self.line(
            5,
            &format!("Q:{}   T:{}", view.remaining_question_secs, view.remaining_game_secs),
        )?;
        self.line(7, &cue_bar(view.decision))?;
        self.line(9, &format!("{}", "tilt your head to answer, q to quit".dimmed()))?;
        self.out.flush()?;

        match self.poll_key(self.key_poll)? {
            Some(KeyCode::Char('q')) | Some(KeyCode::Char('Q')) => Ok(KeyAction::Quit),
            _ => Ok(KeyAction::Continue),
        }
    }

    fn show_feedback(&mut self, feedback: &Feedback, dwell: Duration) -> Result<()> {
        let message = format!("  {}  ", feedback.message());
        let styled = if feedback.correct {
            format!("{}", message.black().on_green().bold())
        } else {
            format!("{}", message.white().on_red().bold())
        };
        self.line(7, &styled)?;
        self.out.flush()?;
        std::thread::sleep(dwell);
        Ok(())
    }

    fn show_results(&mut self, summary: &GameSummary) -> Result<()> {
        self.shown_question = None;
        queue!(self.out, terminal::Clear(ClearType::All))?;
        self.line(2, &format!("{}", format!("  {}  ", summary.score_line()).white().on_red().bold()))?;
        self.line(3, &format!("{}", summary.end_reason.description().dimmed()))?;
        self.line(5, &format!("{}", "press any key to quit!".white().on_blue()))?;
        self.out.flush()?;

        // Block until any key
        while self.poll_key(Duration::from_millis(250))?.is_none() {}
        Ok(())
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        debug!("terminal display closed");
    }
}

/// Display that only logs. Never requests quit and does not wait on the
/// results screen.
#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    frames: u64,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Display for HeadlessDisplay {
    fn present(&mut self, view: &FrameView<'_>) -> Result<KeyAction> {
        self.frames += 1;
        debug!("{}", view.to_parseable_string());
        Ok(KeyAction::Continue)
    }

    fn show_feedback(&mut self, feedback: &Feedback, dwell: Duration) -> Result<()> {
        info!("{}", feedback.message());
        std::thread::sleep(dwell);
        Ok(())
    }

    fn show_results(&mut self, summary: &GameSummary) -> Result<()> {
        info!("{} ({})", summary.score_line(), summary.end_reason.description());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_bar_mentions_side() {
        colored::control::set_override(false);
        assert!(cue_bar(AnswerDecision::True).contains("TRUE"));
        assert!(!cue_bar(AnswerDecision::True).contains("FALSE"));
        assert!(cue_bar(AnswerDecision::False).contains("FALSE"));
        let both = cue_bar(AnswerDecision::Undetermined);
        assert!(both.contains("TRUE <<<") && both.contains(">>> FALSE"));
    }

    #[test]
    fn test_full_clear_only_on_new_question() {
        let mut shown = None;
        assert!(question_changed(&mut shown, 1));
        assert!(!question_changed(&mut shown, 1));
        assert!(!question_changed(&mut shown, 1));
        assert!(question_changed(&mut shown, 2));
        assert!(!question_changed(&mut shown, 2));
        assert_eq!(shown, Some(2));
    }

    #[test]
    fn test_headless_counts_frames() {
        let mut display = HeadlessDisplay::new();
        let view = FrameView {
            question_text: "1 is prime",
            question_number: 1,
            total_questions: 1,
            remaining_question_secs: 9,
            remaining_game_secs: 59,
            decision: AnswerDecision::Undetermined,
            score: 0,
        };
        assert_eq!(display.present(&view).unwrap(), KeyAction::Continue);
        assert_eq!(display.frames(), 1);
    }
}

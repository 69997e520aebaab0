//! HeadQuiz: true/false quiz answered by tilting your head
//!
//! Trace/camera → OrientationSignal → AnswerClassifier → GameLoop → Display

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use error::{QuizError, Result};

// =============================================================================
// CLASSIFICATION POLICY
// =============================================================================

/// Yaw beyond this angle (degrees, strict) counts as an answer.
/// Positive yaw → True, negative yaw → False.
pub const YAW_THRESHOLD_DEG: f64 = 30.0;

// =============================================================================
// TIMING POLICY
// =============================================================================

/// How long the correct/wrong feedback stays on screen (milliseconds)
pub const FEEDBACK_DWELL_MS: u64 = 1500;

/// Whole-game timeout when the question source does not set one (seconds)
pub const DEFAULT_GAME_TIMEOUT_SECS: f64 = 60.0;

/// Per-question timeout when the question source does not set one (seconds)
pub const DEFAULT_QUESTION_TIMEOUT_SECS: f64 = 10.0;

/// Frame interval for recorded trace playback (milliseconds, ~30 fps)
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 33;

// =============================================================================
// QUESTIONS
// =============================================================================

/// Points for a question that carries no point value (all trivia questions)
pub const DEFAULT_POINT: u32 = 1;

/// Questions longer than this are rendered in the compact style
pub const LONG_QUESTION_CHARS: usize = 100;

/// Local question bank location
pub const DEFAULT_DATA_PATH: &str = "app-data/config/data.json";

/// Open Trivia DB: 10 boolean questions, category 19 (mathematics)
pub const DEFAULT_TRIVIA_URL: &str = "https://opentdb.com/api.php?amount=10&category=19&type=boolean";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Core modules for HeadQuiz

pub mod classifier;
pub mod clock;
pub mod controller;
pub mod score;
pub mod game_loop;
pub mod capture;
pub mod render;
pub mod source;
pub mod text;
pub mod replay;

pub use classifier::{AnswerClassifier, classify};
pub use clock::{GameClock, TimeSource, MonotonicTime, ManualTime};
pub use controller::{QuestionController, Pull};
pub use score::ScoreKeeper;
pub use game_loop::GameLoop;
pub use capture::{FrameSource, OrientationSignal};
pub use render::{Display, TerminalDisplay, HeadlessDisplay};
pub use source::{SourceKind, QuestionBank, load_local, parse_local, parse_trivia, fetch_trivia};
pub use text::{clean_question_text, decode_entities, to_ascii};
pub use replay::{TraceReplay, RecordedPose};

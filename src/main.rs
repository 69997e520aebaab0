//! HeadQuiz CLI
//!
//! Usage:
//!   headquiz --trace session.jsonl                  # Local questions, terminal display
//!   headquiz --source trivia --trace session.jsonl  # Open Trivia DB questions
//!   headquiz --trace session.jsonl --headless       # Log-only display
//!   headquiz --trace session.jsonl --json           # Print final summary as JSON

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use headquiz::config::AppConfig;
use headquiz::core::{
    fetch_trivia, load_local, GameLoop, HeadlessDisplay, MonotonicTime, QuestionBank,
    RecordedPose, SourceKind, TerminalDisplay, TraceReplay,
};
use headquiz::types::GameOutcome;
use headquiz::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "headquiz",
    version = VERSION,
    about = "True/false quiz answered by tilting your head",
    long_about = "HeadQuiz shows true/false questions and reads the answer from\n\
                  head orientation: tilt one way for TRUE, the other for FALSE.\n\n\
                  Head pose comes from a recorded trace (JSON lines of\n\
                  {face_detected, pitch, yaw, roll}), one sample per frame.\n\n\
                  The game ends when the questions run out or the game timer\n\
                  expires. Press q to quit early."
)]
struct Args {
    /// Question source: local or trivia
    #[arg(short, long, default_value = "local")]
    source: String,

    /// Local question file (overrides HEADQUIZ_DATA_PATH)
    #[arg(long)]
    data: Option<String>,

    /// Recorded head-pose trace to play back as the camera
    #[arg(short, long)]
    trace: String,

    /// Log frames instead of drawing the terminal display
    #[arg(long)]
    headless: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(args: &Args) {
    // The terminal display owns the screen; keep stderr quiet there
    let default_level = if args.verbose {
        "debug"
    } else if args.headless {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn load_questions(source: SourceKind, config: &AppConfig) -> anyhow::Result<QuestionBank> {
    let bank = match source {
        SourceKind::Local => load_local(&config.data_path)
            .with_context(|| format!("reading questions from {}", config.data_path))?,
        SourceKind::Trivia => {
            let client = reqwest::Client::new();
            fetch_trivia(&client, &config.trivia_url)
                .await
                .context("downloading trivia questions")?
        }
    };
    Ok(bank)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(&args);

    // Reject the source before touching any device
    let source: SourceKind = match args.source.parse() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let mut config = AppConfig::load_or_default();
    if let Some(ref data) = args.data {
        config.data_path = data.clone();
    }
    config.validate().map_err(anyhow::Error::msg)?;

    tracing::info!("HeadQuiz v{} (source: {})", VERSION, source);

    let bank = load_questions(source, &config).await?;
    let capture = TraceReplay::load(&args.trace, config.frame_interval)
        .with_context(|| format!("opening trace {}", args.trace))?;

    let headless = args.headless;
    let dwell = config.feedback_dwell;

    // The frame loop is synchronous and blocks on frames and feedback dwell
    let outcome: GameOutcome = tokio::task::spawn_blocking(move || -> headquiz::Result<GameOutcome> {
        if headless {
            GameLoop::new(capture, RecordedPose, HeadlessDisplay::new(), bank, MonotonicTime::new())
                .with_feedback_dwell(dwell)
                .run()
        } else {
            let display = TerminalDisplay::open()?;
            GameLoop::new(capture, RecordedPose, display, bank, MonotonicTime::new())
                .with_feedback_dwell(dwell)
                .run()
        }
    })
    .await
    .context("game loop panicked")??;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
    } else if outcome.results_shown {
        println!("{}", outcome.summary.score_line());
    }

    Ok(())
}

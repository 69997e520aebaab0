//! Question sources: local JSON bank and the Open Trivia DB endpoint
//!
//! Local document:
//! `{"items": [{"question", "correct_answer", "point"?}], "game_timeout"?, "question_timeout"?}`
//!
//! Trivia response:
//! `{"response_code", "results": [{"question", "correct_answer", ...}]}`

use std::path::Path;
use std::str::FromStr;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::GameSettings;
use crate::core::text::{clean_question_text, to_ascii};
use crate::types::{Answer, Question, QuestionSequence};
use crate::{QuizError, Result, DEFAULT_POINT};

/// Where questions come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Local,
    Trivia,
}

impl FromStr for SourceKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(SourceKind::Local),
            "trivia" => Ok(SourceKind::Trivia),
            other => Err(QuizError::InvalidSource(other.to_string())),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SourceKind::Local => "local",
            SourceKind::Trivia => "trivia",
        };
        write!(f, "{}", name)
    }
}

/// Questions plus the timeouts that came with them
#[derive(Debug)]
pub struct QuestionBank {
    pub sequence: QuestionSequence,
    pub settings: GameSettings,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    correct_answer: Answer,
    #[serde(default)]
    point: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct LocalDocument {
    items: Vec<RawQuestion>,
    #[serde(default)]
    game_timeout: Option<f64>,
    #[serde(default)]
    question_timeout: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    #[serde(default)]
    response_code: Option<u32>,
    results: Vec<RawQuestion>,
    #[serde(default)]
    game_timeout: Option<f64>,
    #[serde(default)]
    question_timeout: Option<f64>,
}

fn build_questions<F>(raw: Vec<RawQuestion>, clean: F) -> Result<Vec<Question>>
where
    F: Fn(&str) -> String,
{
    raw.into_iter()
        .enumerate()
        .map(|(i, item)| {
            let point_value = item.point.unwrap_or(DEFAULT_POINT);
            if point_value == 0 {
                return Err(QuizError::MalformedQuestions(format!(
                    "question {} has point 0 (must be at least 1)",
                    i + 1
                )));
            }
            Ok(Question::new(clean(&item.question), item.correct_answer, point_value))
        })
        .collect()
}

/// Parse a local question document
pub fn parse_local(json: &str) -> Result<QuestionBank> {
    let doc: LocalDocument = serde_json::from_str(json)?;
    let settings = GameSettings::from_overrides(doc.game_timeout, doc.question_timeout)?;
    let questions = build_questions(doc.items, to_ascii)?;
    Ok(QuestionBank {
        sequence: QuestionSequence::new(questions),
        settings,
    })
}

/// Read and parse a local question file
pub fn load_local(path: impl AsRef<Path>) -> Result<QuestionBank> {
    let path = path.as_ref();
    info!("loading questions from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    parse_local(&json)
}

/// Parse an Open Trivia DB response body
pub fn parse_trivia(json: &str) -> Result<QuestionBank> {
    let response: TriviaResponse = serde_json::from_str(json)?;
    if let Some(code) = response.response_code.filter(|&c| c != 0) {
        return Err(QuizError::MalformedQuestions(format!(
            "trivia API response_code {}",
            code
        )));
    }
    let settings = GameSettings::from_overrides(response.game_timeout, response.question_timeout)?;
    let questions = build_questions(response.results, clean_question_text)?;
    Ok(QuestionBank {
        sequence: QuestionSequence::new(questions),
        settings,
    })
}

/// Download questions from the trivia endpoint. No retry: a failed
/// download is fatal at startup.
pub async fn fetch_trivia(client: &Client, url: &str) -> Result<QuestionBank> {
    info!("downloading questions from trivia API");
    debug!(url, "GET");

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        let status = response.status();
        warn!("trivia API error: {}", status);
        return Err(QuizError::HttpStatus { status: status.as_u16() });
    }

    let body = response.text().await?;
    parse_trivia(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_kind_parse() {
        assert_eq!("local".parse::<SourceKind>().unwrap(), SourceKind::Local);
        assert_eq!("trivia".parse::<SourceKind>().unwrap(), SourceKind::Trivia);
        assert!(matches!(
            "remote".parse::<SourceKind>(),
            Err(QuizError::InvalidSource(s)) if s == "remote"
        ));
    }

    #[test]
    fn test_parse_local_with_points_and_timeouts() {
        let bank = parse_local(
            r#"{
                "game_timeout": 45,
                "question_timeout": 5.5,
                "items": [
                    {"question": "2 + 2 = 4", "correct_answer": "True", "point": 2},
                    {"question": "Zero is odd", "correct_answer": "false"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(bank.settings.game_timeout_secs, 45.0);
        assert_eq!(bank.settings.question_timeout_secs, 5.5);
        assert_eq!(bank.sequence.total(), 2);

        let questions: Vec<Question> = bank.sequence.collect();
        assert_eq!(
            questions,
            vec![
                Question::new("2 + 2 = 4", Answer::True, 2),
                Question::new("Zero is odd", Answer::False, 1),
            ]
        );
    }

    #[test]
    fn test_parse_local_defaults() {
        let bank = parse_local(r#"{"items": []}"#).unwrap();
        assert_eq!(bank.settings, GameSettings::default());
        assert_eq!(bank.sequence.total(), 0);
    }

    #[test]
    fn test_parse_local_rejects_bad_answer() {
        let result = parse_local(r#"{"items": [{"question": "x", "correct_answer": "Maybe"}]}"#);
        assert!(matches!(result, Err(QuizError::Json(_))));
    }

    #[test]
    fn test_parse_local_rejects_zero_point() {
        let result = parse_local(r#"{"items": [{"question": "x", "correct_answer": "True", "point": 0}]}"#);
        assert!(matches!(result, Err(QuizError::MalformedQuestions(_))));
    }

    #[test]
    fn test_parse_local_missing_items() {
        assert!(parse_local(r#"{"game_timeout": 10}"#).is_err());
    }

    #[test]
    fn test_parse_trivia_defaults_point_and_cleans_text() {
        let bank = parse_trivia(
            r#"{
                "response_code": 0,
                "results": [{
                    "type": "boolean",
                    "difficulty": "easy",
                    "category": "Science: Mathematics",
                    "question": "&quot;&pi;&quot; is irrational",
                    "correct_answer": "True",
                    "incorrect_answers": ["False"]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(bank.settings, GameSettings::default());
        let questions: Vec<Question> = bank.sequence.collect();
        assert_eq!(questions, vec![Question::new("\"pi\" is irrational", Answer::True, 1)]);
    }

    #[test]
    fn test_parse_trivia_error_code() {
        let result = parse_trivia(r#"{"response_code": 1, "results": []}"#);
        assert!(matches!(result, Err(QuizError::MalformedQuestions(_))));
    }
}

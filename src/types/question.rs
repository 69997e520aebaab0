//! Question records and the forward-only question sequence

use serde::{Deserialize, Serialize};

/// Correct answer of a true/false question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Answer {
    #[serde(rename = "True")]
    True,
    #[serde(rename = "False")]
    False,
}

impl TryFrom<String> for Answer {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Answer::True),
            "false" => Ok(Answer::False),
            _ => Err(format!("correct_answer must be True or False, got '{}'", value)),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Answer::True => "TRUE",
            Answer::False => "FALSE",
        };
        write!(f, "{}", name)
    }
}

/// A single true/false question, immutable once read from its source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text, already ASCII-safe for rendering
    pub text: String,
    /// The answer that scores
    pub correct_answer: Answer,
    /// Points awarded when answered correctly (≥ 1)
    pub point_value: u32,
}

impl Question {
    pub fn new(text: impl Into<String>, correct_answer: Answer, point_value: u32) -> Self {
        Self {
            text: text.into(),
            correct_answer,
            point_value,
        }
    }
}

/// Finite, ordered, forward-only sequence of questions.
///
/// The total is fixed at construction; traversal cannot be restarted.
#[derive(Debug)]
pub struct QuestionSequence {
    items: std::vec::IntoIter<Question>,
    total: usize,
}

impl QuestionSequence {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            total: questions.len(),
            items: questions.into_iter(),
        }
    }

    /// Number of questions the source produced
    pub fn total(&self) -> usize {
        self.total
    }
}

impl Iterator for QuestionSequence {
    type Item = Question;

    fn next(&mut self) -> Option<Question> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl ExactSizeIterator for QuestionSequence {}

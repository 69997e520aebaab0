//! Score keeper: append-only scoring for one session

/// Running score and answer counts
#[derive(Debug, Clone, Default)]
pub struct ScoreKeeper {
    score: u32,
    total_questions: usize,
    answered: usize,
    correct: usize,
}

impl ScoreKeeper {
    pub fn new(total_questions: usize) -> Self {
        Self {
            total_questions,
            ..Self::default()
        }
    }

    /// Record a correct answer worth `points`
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.answered += 1;
        self.correct += 1;
    }

    /// Record a wrong answer (no points)
    pub fn record_wrong(&mut self) {
        self.answered += 1;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn correct(&self) -> usize {
        self.correct
    }
}

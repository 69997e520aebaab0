//! Answer classifier: head yaw → True / False / Undetermined
//!
//! - no face → Undetermined
//! - yaw < -threshold → False
//! - yaw > +threshold → True
//! - otherwise (threshold itself included) → Undetermined

use crate::YAW_THRESHOLD_DEG;
use crate::types::{AnswerDecision, OrientationReading};

/// Stateless classifier with a fixed yaw threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerClassifier {
    threshold_deg: f64,
}

impl Default for AnswerClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerClassifier {
    /// Classifier with the standard ±30° threshold
    pub fn new() -> Self {
        Self::with_threshold(YAW_THRESHOLD_DEG)
    }

    /// Classifier with a custom threshold (degrees, compared strictly)
    pub fn with_threshold(threshold_deg: f64) -> Self {
        Self {
            threshold_deg: threshold_deg.abs(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold_deg
    }

    /// Map one reading to a decision
    pub fn classify(&self, reading: &OrientationReading) -> AnswerDecision {
        if !reading.face_detected {
            return AnswerDecision::Undetermined;
        }

        let yaw = reading.yaw;
        if yaw < -self.threshold_deg {
            AnswerDecision::False
        } else if yaw > self.threshold_deg {
            AnswerDecision::True
        } else {
            AnswerDecision::Undetermined
        }
    }
}

/// Classify with the standard threshold
pub fn classify(reading: &OrientationReading) -> AnswerDecision {
    AnswerClassifier::new().classify(reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_face_is_undetermined() {
        let mut reading = OrientationReading::no_face();
        reading.yaw = 80.0;
        assert_eq!(classify(&reading), AnswerDecision::Undetermined);
    }

    #[test]
    fn test_tilts() {
        assert_eq!(classify(&OrientationReading::with_yaw(45.0)), AnswerDecision::True);
        assert_eq!(classify(&OrientationReading::with_yaw(-45.0)), AnswerDecision::False);
        assert_eq!(classify(&OrientationReading::with_yaw(0.0)), AnswerDecision::Undetermined);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(classify(&OrientationReading::with_yaw(30.0)), AnswerDecision::Undetermined);
        assert_eq!(classify(&OrientationReading::with_yaw(-30.0)), AnswerDecision::Undetermined);
        assert_eq!(classify(&OrientationReading::with_yaw(30.001)), AnswerDecision::True);
        assert_eq!(classify(&OrientationReading::with_yaw(-30.001)), AnswerDecision::False);
    }

    #[test]
    fn test_pitch_and_roll_ignored() {
        let reading = OrientationReading::new(70.0, 10.0, -70.0);
        assert_eq!(classify(&reading), AnswerDecision::Undetermined);
    }

    #[test]
    fn test_custom_threshold() {
        let classifier = AnswerClassifier::with_threshold(-15.0);
        assert_eq!(classifier.threshold(), 15.0);
        assert_eq!(classifier.classify(&OrientationReading::with_yaw(20.0)), AnswerDecision::True);
        assert_eq!(classifier.classify(&OrientationReading::with_yaw(15.0)), AnswerDecision::Undetermined);
    }
}

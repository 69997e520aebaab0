use std::time::Duration;

use crate::{
    QuizError, Result, DEFAULT_DATA_PATH, DEFAULT_FRAME_INTERVAL_MS, DEFAULT_GAME_TIMEOUT_SECS,
    DEFAULT_QUESTION_TIMEOUT_SECS, DEFAULT_TRIVIA_URL, FEEDBACK_DWELL_MS,
};

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Local question bank file
    pub data_path: String,
    /// Remote trivia endpoint
    pub trivia_url: String,
    /// Feedback dwell after a judged answer
    pub feedback_dwell: Duration,
    /// Pace of recorded trace playback
    pub frame_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            trivia_url: DEFAULT_TRIVIA_URL.to_string(),
            feedback_dwell: Duration::from_millis(FEEDBACK_DWELL_MS),
            frame_interval: Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS),
        }
    }
}

impl AppConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (environment in production)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("HEADQUIZ_DATA_PATH") {
            config.data_path = path;
        }

        if let Some(url) = lookup("HEADQUIZ_TRIVIA_URL") {
            config.trivia_url = url;
        }

        if let Some(ms) = lookup("HEADQUIZ_FEEDBACK_MS") {
            match ms.parse::<u64>() {
                Ok(parsed) => config.feedback_dwell = Duration::from_millis(parsed),
                Err(_) => tracing::warn!("Invalid HEADQUIZ_FEEDBACK_MS '{}', using default", ms),
            }
        }

        if let Some(ms) = lookup("HEADQUIZ_FRAME_MS") {
            match ms.parse::<u64>() {
                Ok(parsed) if parsed > 0 => config.frame_interval = Duration::from_millis(parsed),
                Ok(_) => tracing::warn!("HEADQUIZ_FRAME_MS must be > 0, using default"),
                Err(_) => tracing::warn!("Invalid HEADQUIZ_FRAME_MS '{}', using default", ms),
            }
        }

        config
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.data_path.is_empty() {
            return Err("data path cannot be empty".to_string());
        }
        if self.trivia_url.is_empty() {
            return Err("trivia URL cannot be empty".to_string());
        }
        if self.frame_interval.is_zero() {
            return Err("frame interval must be at least 1ms".to_string());
        }
        Ok(())
    }
}

/// Timeouts for one game, read from the question source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSettings {
    pub game_timeout_secs: f64,
    pub question_timeout_secs: f64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            game_timeout_secs: DEFAULT_GAME_TIMEOUT_SECS,
            question_timeout_secs: DEFAULT_QUESTION_TIMEOUT_SECS,
        }
    }
}

impl GameSettings {
    /// Apply optional overrides from a question document; missing values
    /// keep their defaults, present values must be finite and positive.
    pub fn from_overrides(game_timeout: Option<f64>, question_timeout: Option<f64>) -> Result<Self> {
        let defaults = Self::default();
        let settings = Self {
            game_timeout_secs: game_timeout.unwrap_or(defaults.game_timeout_secs),
            question_timeout_secs: question_timeout.unwrap_or(defaults.question_timeout_secs),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        check_timeout("game_timeout", self.game_timeout_secs)?;
        check_timeout("question_timeout", self.question_timeout_secs)
    }
}

fn check_timeout(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(QuizError::InvalidTimeout { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.data_path, DEFAULT_DATA_PATH);
        assert_eq!(config.feedback_dwell, Duration::from_millis(1500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HEADQUIZ_DATA_PATH", "bank.json"),
            ("HEADQUIZ_FEEDBACK_MS", "200"),
            ("HEADQUIZ_FRAME_MS", "10"),
        ]));
        assert_eq!(config.data_path, "bank.json");
        assert_eq!(config.feedback_dwell, Duration::from_millis(200));
        assert_eq!(config.frame_interval, Duration::from_millis(10));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HEADQUIZ_FEEDBACK_MS", "soon"),
            ("HEADQUIZ_FRAME_MS", "0"),
        ]));
        assert_eq!(config.feedback_dwell, Duration::from_millis(FEEDBACK_DWELL_MS));
        assert_eq!(config.frame_interval, Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS));
    }

    #[test]
    fn test_settings_defaults_and_overrides() {
        assert_eq!(
            GameSettings::from_overrides(None, None).unwrap(),
            GameSettings { game_timeout_secs: 60.0, question_timeout_secs: 10.0 }
        );
        let settings = GameSettings::from_overrides(Some(30.0), None).unwrap();
        assert_eq!(settings.game_timeout_secs, 30.0);
        assert_eq!(settings.question_timeout_secs, 10.0);
    }

    #[test]
    fn test_settings_reject_non_positive() {
        assert!(matches!(
            GameSettings::from_overrides(Some(0.0), None),
            Err(QuizError::InvalidTimeout { name: "game_timeout", .. })
        ));
        assert!(GameSettings::from_overrides(None, Some(-1.0)).is_err());
        assert!(GameSettings::from_overrides(None, Some(f64::NAN)).is_err());
    }
}

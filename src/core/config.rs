use crate::models::exercise::ExerciseKind;
use crate::models::landmark::PoseConfig;
use crate::models::workout::{SessionBlock, WorkoutPlan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Pose estimator settings
    pub pose: PoseConfig,
    /// Seconds of counting per exercise block (default: 60)
    pub exercise_duration_secs: u64,
    /// Seconds of rest between exercise blocks (default: 10)
    pub rest_duration_secs: u64,
    /// Seconds of countdown shown before each block (default: 10)
    pub countdown_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pose: PoseConfig::default(),
            exercise_duration_secs: 60,
            rest_duration_secs: 10,
            countdown_secs: 10,
        }
    }
}

impl Config {
    /// Load configuration from file, creating with defaults if it doesn't exist
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::get_config_path();

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            // Create default config and save it
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> ConfigResult<()> {
        self.validate()?;

        let config_path = Self::get_config_path();

        // Create parent directories if they don't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)?;

        Ok(())
    }

    /// The workout the original tracker runs: push-ups, sit-ups, and curls,
    /// separated by rest intervals
    pub fn default_plan(&self) -> WorkoutPlan {
        let exercise = Duration::from_secs(self.exercise_duration_secs);
        let rest = Duration::from_secs(self.rest_duration_secs);

        WorkoutPlan::new(vec![
            SessionBlock::exercise(ExerciseKind::Pushup, exercise),
            SessionBlock::rest(rest),
            SessionBlock::exercise(ExerciseKind::Situp, exercise),
            SessionBlock::rest(rest),
            SessionBlock::exercise(ExerciseKind::Curl, exercise),
        ])
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.exercise_duration_secs == 0 {
            return Err(ConfigError::Invalid(
                "exercise_duration_secs must be at least 1".to_string(),
            ));
        }

        for (name, value) in [
            ("min_detection_confidence", self.pose.min_detection_confidence),
            ("min_tracking_confidence", self.pose.min_tracking_confidence),
            ("min_visibility", self.pose.min_visibility),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    name, value
                )));
            }
        }

        if self.pose.target_fps == 0 {
            return Err(ConfigError::Invalid(
                "target_fps must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    fn get_config_path() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());

        let mut path = PathBuf::from(home);
        path.push(".fittrack");
        path.push("config.json");
        path
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.exercise_duration_secs, 60);
        assert_eq!(config.rest_duration_secs, 10);
        assert_eq!(config.pose.min_detection_confidence, 0.7);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.exercise_duration_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.pose.min_visibility = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.pose.target_fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_plan_order() {
        let plan = Config::default().default_plan();

        assert_eq!(plan.blocks.len(), 5);
        assert_eq!(plan.exercise_count(), 3);
        assert_eq!(
            plan.blocks[0],
            SessionBlock::exercise(ExerciseKind::Pushup, Duration::from_secs(60))
        );
        assert_eq!(plan.blocks[1], SessionBlock::rest(Duration::from_secs(10)));
        assert_eq!(
            plan.blocks[4],
            SessionBlock::exercise(ExerciseKind::Curl, Duration::from_secs(60))
        );
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}

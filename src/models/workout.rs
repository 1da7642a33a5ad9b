// Data models for workout plans, session events, and summaries

use crate::models::exercise::{Advisory, ExerciseKind};
use crate::models::landmark::PoseError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ==============================================================================
// Workout Plans
// ==============================================================================

/// One block of a workout: either a timed exercise window or a rest interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionBlock {
    Exercise { kind: ExerciseKind, duration: Duration },
    Rest { duration: Duration },
}

impl SessionBlock {
    pub fn exercise(kind: ExerciseKind, duration: Duration) -> Self {
        SessionBlock::Exercise { kind, duration }
    }

    pub fn rest(duration: Duration) -> Self {
        SessionBlock::Rest { duration }
    }
}

/// An ordered sequence of session blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub blocks: Vec<SessionBlock>,
}

impl WorkoutPlan {
    pub fn new(blocks: Vec<SessionBlock>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of exercise blocks (rest intervals excluded)
    pub fn exercise_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, SessionBlock::Exercise { .. }))
            .count()
    }
}

// ==============================================================================
// Results and Summaries
// ==============================================================================

/// Outcome of one exercise block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResult {
    pub kind: ExerciseKind,
    pub reps: u32,
    pub planned_duration_ms: u64,
    pub actual_duration_ms: u64,
    pub frames_processed: u64,
    pub frames_with_detection: u64,
    pub advisories_emitted: u64,
}

/// Final tally for a whole workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub session_id: String,
    pub start_timestamp: i64,
    pub end_timestamp: i64,
    pub results: Vec<ExerciseResult>,
}

impl WorkoutSummary {
    pub fn total_reps(&self) -> u32 {
        self.results.iter().map(|r| r.reps).sum()
    }

    /// Reps across all blocks of one exercise
    pub fn reps_for(&self, kind: ExerciseKind) -> u32 {
        self.results
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.reps)
            .sum()
    }
}

// ==============================================================================
// Session Events
// ==============================================================================

/// Progress events emitted while a session runs, rendered by the UI layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum SessionEvent {
    ExerciseStarted { kind: ExerciseKind, duration_secs: u64 },
    RestStarted { duration_secs: u64 },
    RepCounted { kind: ExerciseKind, count: u32 },
    AdvisoryIssued { kind: ExerciseKind, advisory: Advisory },
    ExerciseFinished { result: ExerciseResult },
    SessionFinished { summary: WorkoutSummary },
}

// ==============================================================================
// Error Types
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Frame source closed before any frame was processed")]
    FrameSourceClosed,

    #[error("Pose estimator error: {0}")]
    Estimator(#[from] PoseError),
}

pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kind: ExerciseKind, reps: u32) -> ExerciseResult {
        ExerciseResult {
            kind,
            reps,
            planned_duration_ms: 60_000,
            actual_duration_ms: 60_000,
            frames_processed: 100,
            frames_with_detection: 90,
            advisories_emitted: 0,
        }
    }

    #[test]
    fn test_summary_totals() {
        let summary = WorkoutSummary {
            session_id: "test".to_string(),
            start_timestamp: 0,
            end_timestamp: 140_000,
            results: vec![
                result(ExerciseKind::Pushup, 12),
                result(ExerciseKind::Situp, 15),
                result(ExerciseKind::Curl, 20),
            ],
        };

        assert_eq!(summary.total_reps(), 47);
        assert_eq!(summary.reps_for(ExerciseKind::Situp), 15);
    }

    #[test]
    fn test_plan_exercise_count_skips_rest() {
        let plan = WorkoutPlan::new(vec![
            SessionBlock::exercise(ExerciseKind::Pushup, Duration::from_secs(60)),
            SessionBlock::rest(Duration::from_secs(10)),
            SessionBlock::exercise(ExerciseKind::Situp, Duration::from_secs(60)),
        ]);

        assert_eq!(plan.exercise_count(), 2);
        assert!(!plan.is_empty());
    }
}

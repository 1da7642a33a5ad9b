// Pose estimation bridge
// Abstraction over MediaPipe-class models that turn camera frames into
// per-frame body landmark snapshots

use crate::models::capture::RawFrame;
use crate::models::landmark::{LandmarkSnapshot, PoseError, PoseResult};

/// Pose estimator bridge trait
///
/// Real backends (in-process model runtimes, subprocess bridges) live
/// outside this crate and are configured with the detection and tracking
/// confidence thresholds from `PoseConfig`.
pub trait PoseEstimator: Send {
    /// Run inference on a frame; `Ok(None)` when no person is detected
    fn process_frame(&mut self, frame: &RawFrame) -> PoseResult<Option<LandmarkSnapshot>>;

    /// Check if the model is loaded
    fn is_initialized(&self) -> bool;

    /// Get model info
    fn model_info(&self) -> String;
}

// ==============================================================================
// Replay Estimator (recorded landmark streams)
// ==============================================================================

/// Plays back a pre-recorded sequence of landmark snapshots, one per frame
///
/// Used by tests and by offline re-runs of recorded workouts; the pixel
/// content of the frames it is handed is ignored.
pub struct ReplayEstimator {
    snapshots: Vec<Option<LandmarkSnapshot>>,
    cursor: usize,
}

impl ReplayEstimator {
    pub fn new(snapshots: Vec<Option<LandmarkSnapshot>>) -> Self {
        Self {
            snapshots,
            cursor: 0,
        }
    }

    /// Load a recording serialized as a JSON array of optional snapshots
    pub fn from_json(json: &str) -> PoseResult<Self> {
        let snapshots = serde_json::from_str(json)
            .map_err(|e| PoseError::ModelLoadFailed(format!("Failed to parse recording: {}", e)))?;
        Ok(Self::new(snapshots))
    }

    pub fn remaining(&self) -> usize {
        self.snapshots.len().saturating_sub(self.cursor)
    }
}

impl PoseEstimator for ReplayEstimator {
    fn process_frame(&mut self, _frame: &RawFrame) -> PoseResult<Option<LandmarkSnapshot>> {
        match self.snapshots.get(self.cursor) {
            Some(snapshot) => {
                self.cursor += 1;
                Ok(snapshot.clone())
            }
            None => Err(PoseError::ReplayExhausted),
        }
    }

    fn is_initialized(&self) -> bool {
        true
    }

    fn model_info(&self) -> String {
        format!("Replay estimator ({} recorded frames)", self.snapshots.len())
    }
}

// ==============================================================================
// Null Estimator (no inference)
// ==============================================================================

/// Placeholder backend that never detects anyone
pub struct NullEstimator;

impl PoseEstimator for NullEstimator {
    fn process_frame(&mut self, _frame: &RawFrame) -> PoseResult<Option<LandmarkSnapshot>> {
        Ok(None)
    }

    fn is_initialized(&self) -> bool {
        false
    }

    fn model_info(&self) -> String {
        "Null estimator (no model loaded, never detects)".to_string()
    }
}

// Data models for pose estimation landmarks

use serde::{Deserialize, Serialize};

// ==============================================================================
// Body Landmarks (33 keypoints)
// ==============================================================================

/// MediaPipe Pose landmark indices (33 total)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BodyLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

/// Total number of body landmarks reported per detection
pub const LANDMARK_COUNT: usize = 33;

impl BodyLandmark {
    /// Position of this landmark in a snapshot's keypoint vector
    pub fn index(self) -> usize {
        self as usize
    }
}

// ==============================================================================
// Keypoint
// ==============================================================================

/// A 2D keypoint in normalized image-plane coordinates with a visibility score
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f32, // Normalized [0, 1]
    pub y: f32, // Normalized [0, 1]
    pub visibility: f32, // Detection confidence [0, 1]
}

impl Keypoint {
    pub fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self { x, y, visibility }
    }

    pub fn is_visible(&self, threshold: f32) -> bool {
        self.visibility >= threshold
    }
}

// ==============================================================================
// Landmark Snapshot (per-frame detection result)
// ==============================================================================

/// The landmark set the pose estimator produced for one frame
///
/// Read-only to the counting core; discarded after the frame is processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkSnapshot {
    pub timestamp: i64,
    pub keypoints: Vec<Keypoint>,
}

impl LandmarkSnapshot {
    pub fn new(timestamp: i64, keypoints: Vec<Keypoint>) -> Self {
        Self {
            timestamp,
            keypoints,
        }
    }

    /// Look up a landmark, `None` if the estimator output is short or malformed
    pub fn keypoint(&self, landmark: BodyLandmark) -> Option<Keypoint> {
        self.keypoints.get(landmark.index()).copied()
    }

    /// Look up a landmark, additionally requiring a minimum visibility score
    pub fn visible_keypoint(&self, landmark: BodyLandmark, min_visibility: f32) -> Option<Keypoint> {
        self.keypoint(landmark)
            .filter(|kp| kp.is_visible(min_visibility))
    }

    /// Whether every listed landmark is present with sufficient visibility
    pub fn has_landmarks(&self, landmarks: &[BodyLandmark], min_visibility: f32) -> bool {
        landmarks
            .iter()
            .all(|lm| self.visible_keypoint(*lm, min_visibility).is_some())
    }
}

// ==============================================================================
// Configuration
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoseConfig {
    /// Minimum confidence for initial person detection (default: 0.7)
    pub min_detection_confidence: f32,
    /// Minimum confidence for landmark tracking between frames (default: 0.7)
    pub min_tracking_confidence: f32,
    /// Per-landmark visibility floor; 0.0 trusts every reported landmark
    pub min_visibility: f32,
    /// Frames per second the capture layer is asked for (default: 30)
    pub target_fps: u32,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.7,
            min_visibility: 0.0,
            target_fps: 30,
        }
    }
}

// ==============================================================================
// Error Types
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PoseError {
    #[error("Pose estimator not initialized")]
    NotInitialized,

    #[error("Model loading failed: {0}")]
    ModelLoadFailed(String),

    #[error("Inference failed: {0}")]
    InferenceFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Replay recording exhausted")]
    ReplayExhausted,
}

pub type PoseResult<T> = Result<T, PoseError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn full_snapshot(visibility: f32) -> LandmarkSnapshot {
        let keypoints = (0..LANDMARK_COUNT)
            .map(|_| Keypoint::new(0.5, 0.5, visibility))
            .collect();
        LandmarkSnapshot::new(0, keypoints)
    }

    #[test]
    fn test_keypoint_visibility() {
        let keypoint = Keypoint::new(0.5, 0.5, 0.8);
        assert!(keypoint.is_visible(0.5));
        assert!(keypoint.is_visible(0.8));
        assert!(!keypoint.is_visible(0.9));
    }

    #[test]
    fn test_landmark_index_matches_mediapipe_layout() {
        assert_eq!(BodyLandmark::Nose.index(), 0);
        assert_eq!(BodyLandmark::LeftShoulder.index(), 11);
        assert_eq!(BodyLandmark::RightShoulder.index(), 12);
        assert_eq!(BodyLandmark::LeftHip.index(), 23);
        assert_eq!(BodyLandmark::RightFootIndex.index(), 32);
    }

    #[test]
    fn test_snapshot_lookup_on_short_output() {
        // A malformed estimator result with too few keypoints must not panic
        let snapshot = LandmarkSnapshot::new(0, vec![Keypoint::new(0.1, 0.2, 1.0)]);

        assert!(snapshot.keypoint(BodyLandmark::Nose).is_some());
        assert!(snapshot.keypoint(BodyLandmark::LeftShoulder).is_none());
        assert!(!snapshot.has_landmarks(&[BodyLandmark::LeftShoulder], 0.0));
    }

    #[test]
    fn test_snapshot_visibility_floor() {
        let snapshot = full_snapshot(0.3);

        assert!(snapshot
            .visible_keypoint(BodyLandmark::LeftElbow, 0.0)
            .is_some());
        assert!(snapshot
            .visible_keypoint(BodyLandmark::LeftElbow, 0.5)
            .is_none());
        assert!(snapshot.has_landmarks(
            &[BodyLandmark::LeftShoulder, BodyLandmark::LeftElbow],
            0.3
        ));
    }

    #[test]
    fn test_pose_config_default() {
        let config = PoseConfig::default();
        assert_eq!(config.min_detection_confidence, 0.7);
        assert_eq!(config.min_tracking_confidence, 0.7);
        assert_eq!(config.min_visibility, 0.0);
        assert_eq!(config.target_fps, 30);
    }
}

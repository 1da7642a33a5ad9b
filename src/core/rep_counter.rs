// Repetition counting - thresholded state machines over per-frame joint angles

use crate::core::geometry::joint_angle;
use crate::models::exercise::{Advisory, ExerciseKind, RepPhase};
use crate::models::landmark::{BodyLandmark, Keypoint, LandmarkSnapshot};

/// Shoulder-span boundary separating side-view from front-view frames
/// (normalized image-plane units)
const SHOULDER_SPAN_GATE: f32 = 0.10;

/// Arm or torso counts as fully extended past this angle (degrees),
/// shared by all three exercises
const EXTENDED_ANGLE: f32 = 160.0;

/// Elbow angle below which a push-up bottoms out
const PUSHUP_FLEXED_ANGLE: f32 = 90.0;

/// Hip angle below which a sit-up tops out
const SITUP_FLEXED_ANGLE: f32 = 100.0;

/// Elbow angle below which a curl tops out
const CURL_FLEXED_ANGLE: f32 = 50.0;

/// Counts repetitions of one exercise across the frames of a session
///
/// Every exercise uses the same alternation debounce: the counter must see
/// the reset extremum (arm extended, torso flat) before the opposite
/// extremum counts. A single noisy frame reporting a low angle out of
/// nowhere therefore never increments the count.
///
/// Frames whose required landmarks are missing or below the visibility
/// floor leave the state untouched; that is the ordinary no-detection path,
/// not an error.
#[derive(Debug, Clone)]
pub struct RepCounter {
    exercise: ExerciseKind,
    phase: Option<RepPhase>,
    count: u32,
    min_visibility: f32,
}

impl RepCounter {
    pub fn new(exercise: ExerciseKind) -> Self {
        Self::with_min_visibility(exercise, 0.0)
    }

    /// Create a counter that ignores landmarks below a visibility floor
    pub fn with_min_visibility(exercise: ExerciseKind, min_visibility: f32) -> Self {
        Self {
            exercise,
            phase: None,
            count: 0,
            min_visibility,
        }
    }

    pub fn exercise(&self) -> ExerciseKind {
        self.exercise
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn phase(&self) -> Option<RepPhase> {
        self.phase
    }

    /// Clear phase and count for a fresh session window
    pub fn reset(&mut self) {
        self.phase = None;
        self.count = 0;
    }

    /// Advance the state machine with one frame's landmarks
    ///
    /// Returns an advisory when the frame was rejected for orientation or
    /// incomplete range of motion. Called once per frame by the session
    /// driver; synchronous and non-blocking.
    pub fn observe(&mut self, snapshot: &LandmarkSnapshot) -> Option<Advisory> {
        match self.exercise {
            ExerciseKind::Pushup => self.observe_pushup(snapshot),
            ExerciseKind::Situp => self.observe_situp(snapshot),
            ExerciseKind::Curl => self.observe_curl(snapshot),
        }
    }

    fn observe_pushup(&mut self, snapshot: &LandmarkSnapshot) -> Option<Advisory> {
        let (shoulder, elbow, wrist) = self.arm_triple(snapshot)?;
        let span = self.shoulder_span(snapshot)?;

        // Push-ups are judged from the side; a wide span means the subject
        // is facing the camera
        if span >= SHOULDER_SPAN_GATE {
            return Some(Advisory::TurnSideways);
        }

        self.advance_pushup(joint_angle(shoulder, elbow, wrist))
    }

    fn observe_situp(&mut self, snapshot: &LandmarkSnapshot) -> Option<Advisory> {
        let min = self.min_visibility;
        let shoulder = snapshot.visible_keypoint(BodyLandmark::LeftShoulder, min)?;
        let hip = snapshot.visible_keypoint(BodyLandmark::LeftHip, min)?;
        let knee = snapshot.visible_keypoint(BodyLandmark::LeftKnee, min)?;

        self.advance_situp(joint_angle(shoulder, hip, knee))
    }

    fn observe_curl(&mut self, snapshot: &LandmarkSnapshot) -> Option<Advisory> {
        let (shoulder, elbow, wrist) = self.arm_triple(snapshot)?;
        let span = self.shoulder_span(snapshot)?;

        // Inverse gate from push-ups: curls are judged facing the camera
        if span <= SHOULDER_SPAN_GATE {
            return Some(Advisory::FaceCamera);
        }

        self.advance_curl(joint_angle(shoulder, elbow, wrist))
    }

    fn advance_pushup(&mut self, angle: f32) -> Option<Advisory> {
        if angle > EXTENDED_ANGLE {
            self.phase = Some(RepPhase::Up);
        } else if angle < PUSHUP_FLEXED_ANGLE && self.phase == Some(RepPhase::Up) {
            // One rep completes on the descent from a recognized up position
            self.phase = Some(RepPhase::Down);
            self.count += 1;
        } else if angle >= PUSHUP_FLEXED_ANGLE {
            return Some(Advisory::LowerBody);
        }

        None
    }

    fn advance_situp(&mut self, angle: f32) -> Option<Advisory> {
        if angle > EXTENDED_ANGLE {
            self.phase = Some(RepPhase::Down);
        } else if angle < SITUP_FLEXED_ANGLE && self.phase == Some(RepPhase::Down) {
            self.phase = Some(RepPhase::Up);
            self.count += 1;
        }

        None
    }

    fn advance_curl(&mut self, angle: f32) -> Option<Advisory> {
        if angle > EXTENDED_ANGLE {
            self.phase = Some(RepPhase::Down);
        } else if angle < CURL_FLEXED_ANGLE && self.phase == Some(RepPhase::Down) {
            self.phase = Some(RepPhase::Up);
            self.count += 1;
        }

        None
    }

    fn arm_triple(&self, snapshot: &LandmarkSnapshot) -> Option<(Keypoint, Keypoint, Keypoint)> {
        let min = self.min_visibility;
        let shoulder = snapshot.visible_keypoint(BodyLandmark::LeftShoulder, min)?;
        let elbow = snapshot.visible_keypoint(BodyLandmark::LeftElbow, min)?;
        let wrist = snapshot.visible_keypoint(BodyLandmark::LeftWrist, min)?;

        Some((shoulder, elbow, wrist))
    }

    fn shoulder_span(&self, snapshot: &LandmarkSnapshot) -> Option<f32> {
        crate::core::geometry::shoulder_span(snapshot, self.min_visibility)
    }
}

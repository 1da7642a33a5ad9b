// Data models for exercise classification and rep counting

use crate::models::landmark::BodyLandmark;
use serde::{Deserialize, Serialize};

// ==============================================================================
// Exercise Kinds
// ==============================================================================

/// The exercises the counter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Pushup,
    Situp,
    Curl,
}

impl ExerciseKind {
    pub fn to_string(&self) -> &'static str {
        match self {
            ExerciseKind::Pushup => "pushup",
            ExerciseKind::Situp => "situp",
            ExerciseKind::Curl => "curl",
        }
    }

    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pushup" => Some(ExerciseKind::Pushup),
            "situp" => Some(ExerciseKind::Situp),
            "curl" => Some(ExerciseKind::Curl),
            _ => None,
        }
    }

    /// Display name used on summary screens
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseKind::Pushup => "Push-ups",
            ExerciseKind::Situp => "Sit-ups",
            ExerciseKind::Curl => "Curls",
        }
    }

    /// The landmarks a frame must carry for this exercise to be evaluated
    pub fn required_landmarks(&self) -> &'static [BodyLandmark] {
        match self {
            ExerciseKind::Pushup | ExerciseKind::Curl => &[
                BodyLandmark::LeftShoulder,
                BodyLandmark::RightShoulder,
                BodyLandmark::LeftElbow,
                BodyLandmark::LeftWrist,
            ],
            ExerciseKind::Situp => &[
                BodyLandmark::LeftShoulder,
                BodyLandmark::LeftHip,
                BodyLandmark::LeftKnee,
            ],
        }
    }
}

// ==============================================================================
// Rep Phases
// ==============================================================================

/// Phase of the repetition cycle; a counter starts with no phase at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepPhase {
    Up,
    Down,
}

impl RepPhase {
    pub fn to_string(&self) -> &'static str {
        match self {
            RepPhase::Up => "up",
            RepPhase::Down => "down",
        }
    }
}

// ==============================================================================
// Advisories
// ==============================================================================

/// Form and orientation guidance surfaced to the UI layer
///
/// An advisory is never a fault: the frame simply did not qualify for
/// counting and the user is told why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    TurnSideways,
    FaceCamera,
    LowerBody,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::TurnSideways => "Turn 90 degrees for side view (Push-ups)",
            Advisory::FaceCamera => "Face the camera for curls (Front View)",
            Advisory::LowerBody => "Lower your body more for a full push-up",
        }
    }
}

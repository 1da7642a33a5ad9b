pub mod core;
pub mod models;
pub mod platform;

pub use crate::core::config::Config;
pub use crate::core::geometry::{joint_angle, shoulder_span};
pub use crate::core::rep_counter::RepCounter;
pub use crate::core::session::{StopHandle, WorkoutSession};
pub use crate::models::exercise::{Advisory, ExerciseKind, RepPhase};
pub use crate::models::landmark::{
    BodyLandmark, Keypoint, LandmarkSnapshot, PoseConfig, PoseError, PoseResult,
};
pub use crate::models::workout::{
    ExerciseResult, SessionBlock, SessionError, SessionEvent, SessionResult, WorkoutPlan,
    WorkoutSummary,
};
pub use crate::platform::capture::{ChannelFrameSource, FrameSource};
pub use crate::platform::pose::estimator::{NullEstimator, PoseEstimator, ReplayEstimator};

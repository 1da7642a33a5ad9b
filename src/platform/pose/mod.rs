// Pose estimation integration
// Provides the estimator bridge and replay backends

pub mod estimator;

pub use estimator::{NullEstimator, PoseEstimator, ReplayEstimator};

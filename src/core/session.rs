// Workout session driver - timed exercise windows over a live frame stream

use crate::core::config::Config;
use crate::core::rep_counter::RepCounter;
use crate::models::exercise::ExerciseKind;
use crate::models::landmark::PoseError;
use crate::models::workout::{
    ExerciseResult, SessionBlock, SessionError, SessionEvent, SessionResult, WorkoutPlan,
    WorkoutSummary,
};
use crate::platform::capture::FrameSource;
use crate::platform::pose::estimator::PoseEstimator;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};
use tokio::time::Instant;
use uuid::Uuid;

/// Interval at which rest blocks re-check the stop flag
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Capacity of the session event channel consumed by the UI layer
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Handle for asking a running session to stop at the next frame boundary
///
/// Cancellation is cooperative: a stopped session finishes the frame it is
/// on, records the partial block result, and returns its summary.
#[derive(Clone)]
pub struct StopHandle {
    stop: Arc<RwLock<bool>>,
}

impl StopHandle {
    pub async fn stop(&self) {
        *self.stop.write().await = true;
    }
}

/// Drives a workout plan over a frame stream
///
/// Owns the estimator and the rep counter exclusively; every frame is
/// processed to completion before the next one is pulled, so the counting
/// core needs no locking at all.
pub struct WorkoutSession {
    estimator: Box<dyn PoseEstimator>,
    frames: Box<dyn FrameSource>,
    config: Config,
    event_tx: mpsc::Sender<SessionEvent>,
    stop: Arc<RwLock<bool>>,
    source_closed: bool,
    total_frames: u64,
}

impl WorkoutSession {
    /// Create a session; the returned receiver carries progress events
    /// for the UI layer
    pub fn new(
        estimator: Box<dyn PoseEstimator>,
        frames: Box<dyn FrameSource>,
        config: Config,
    ) -> (Self, mpsc::Receiver<SessionEvent>) {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        let session = Self {
            estimator,
            frames,
            config,
            event_tx,
            stop: Arc::new(RwLock::new(false)),
            source_closed: false,
            total_frames: 0,
        };

        (session, event_rx)
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            stop: self.stop.clone(),
        }
    }

    /// Run the plan to completion (or early stop) and return the summary
    pub async fn run(mut self, plan: WorkoutPlan) -> SessionResult<WorkoutSummary> {
        if !self.estimator.is_initialized() {
            return Err(SessionError::Estimator(PoseError::NotInitialized));
        }

        let session_id = Uuid::new_v4().to_string();
        let start_timestamp = chrono::Utc::now().timestamp_millis();
        let mut results = Vec::new();

        println!("Started workout session {}", session_id);

        for block in plan.blocks {
            if *self.stop.read().await || self.source_closed {
                break;
            }

            match block {
                SessionBlock::Rest { duration } => self.run_rest(duration).await,
                SessionBlock::Exercise { kind, duration } => {
                    let result = self.run_exercise(kind, duration).await;
                    results.push(result);
                }
            }
        }

        if self.source_closed && self.total_frames == 0 {
            return Err(SessionError::FrameSourceClosed);
        }

        let summary = WorkoutSummary {
            session_id,
            start_timestamp,
            end_timestamp: chrono::Utc::now().timestamp_millis(),
            results,
        };

        let _ = self
            .event_tx
            .send(SessionEvent::SessionFinished {
                summary: summary.clone(),
            })
            .await;

        println!(
            "Finished workout session {}: {} reps total",
            summary.session_id,
            summary.total_reps()
        );

        Ok(summary)
    }

    async fn run_rest(&mut self, duration: Duration) {
        let _ = self
            .event_tx
            .send(SessionEvent::RestStarted {
                duration_secs: duration.as_secs(),
            })
            .await;

        let deadline = Instant::now() + duration;
        loop {
            if *self.stop.read().await {
                break;
            }

            let now = Instant::now();
            if now >= deadline {
                break;
            }

            tokio::time::sleep((deadline - now).min(STOP_POLL_INTERVAL)).await;
        }
    }

    async fn run_exercise(&mut self, kind: ExerciseKind, duration: Duration) -> ExerciseResult {
        let _ = self
            .event_tx
            .send(SessionEvent::ExerciseStarted {
                kind,
                duration_secs: duration.as_secs(),
            })
            .await;

        let mut counter = RepCounter::with_min_visibility(kind, self.config.pose.min_visibility);
        let started = Instant::now();
        let deadline = started + duration;

        let mut frames_processed = 0u64;
        let mut frames_with_detection = 0u64;
        let mut advisories_emitted = 0u64;

        loop {
            if *self.stop.read().await {
                break;
            }

            let pulled = tokio::time::timeout_at(deadline, self.frames.next_frame()).await;
            let frame = match pulled {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    // Camera stream ended; finish with what we have
                    self.source_closed = true;
                    break;
                }
                Err(_) => break, // Block deadline reached
            };

            frames_processed += 1;

            match self.estimator.process_frame(&frame) {
                Ok(Some(snapshot)) => {
                    frames_with_detection += 1;

                    let before = counter.count();
                    let advisory = counter.observe(&snapshot);

                    if counter.count() > before {
                        let _ = self
                            .event_tx
                            .send(SessionEvent::RepCounted {
                                kind,
                                count: counter.count(),
                            })
                            .await;
                    }

                    if let Some(advisory) = advisory {
                        advisories_emitted += 1;
                        let _ = self
                            .event_tx
                            .send(SessionEvent::AdvisoryIssued { kind, advisory })
                            .await;
                    }
                }
                Ok(None) => {} // Nobody in frame
                Err(e) => {
                    eprintln!("Pose inference failed, skipping frame: {}", e);
                }
            }
        }

        self.total_frames += frames_processed;

        let result = ExerciseResult {
            kind,
            reps: counter.count(),
            planned_duration_ms: duration.as_millis() as u64,
            actual_duration_ms: started.elapsed().as_millis() as u64,
            frames_processed,
            frames_with_detection,
            advisories_emitted,
        };

        let _ = self
            .event_tx
            .send(SessionEvent::ExerciseFinished {
                result: result.clone(),
            })
            .await;

        println!(
            "{}: {} reps across {} frames",
            kind.display_name(),
            result.reps,
            result.frames_processed
        );

        result
    }
}

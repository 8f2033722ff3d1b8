//! Exercise-form analysis over a stream of video frames.
//!
//! Frames come from a `video::FrameSource`, poses from a `PoseDetector`.
//! Each detected pose is smoothed against the previous frame's pose,
//! checked by the rules of an `AnalysisEngine`, and reported as one
//! `FrameAnalysis` per frame on a pull-based, cancellable stream.

pub mod analysis;
pub mod config;
pub mod detector;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod pipeline;
pub mod pose;
pub mod rules;
pub mod smoothing;

pub use analysis::FrameAnalysis;
pub use config::FormConfig;
pub use detector::{ConfidenceFilter, DEFAULT_MIN_CONFIDENCE, PoseDetector};
pub use engine::AnalysisEngine;
pub use error::FormError;
pub use feedback::FormFeedback;
pub use pipeline::{AnalysisStream, CancelHandle, Pipeline, RunStatus};
pub use pose::{COCO_JOINT_COUNT, Joint, JointName, Pose};
pub use rules::{BackStraightRule, ExerciseRule, RuleKind, SquatDepthRule};
pub use smoothing::{DEFAULT_SMOOTHING_FACTOR, SmoothingState, TemporalSmoother, TrackingMode};

#![allow(dead_code)]

use base::{Tensor, Vec2};
use form::{FormError, Joint, JointName, Pose, PoseDetector};
use image::Image;
use std::{
    collections::VecDeque,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};
use video::{FrameSource, VideoError, VideoFrame};

pub fn joint(name: JointName, x: f32, y: f32) -> Joint {
    Joint::new(name, Vec2::new(x, y), 0.9)
}

/// Both sides of a squatter, y pointing up.
pub fn squat_pose(shoulder_y: f32, hip_y: f32, knee_y: f32) -> Pose {
    Pose::new()
        .with_joint(joint(JointName::LeftShoulder, 0.4, shoulder_y))
        .with_joint(joint(JointName::RightShoulder, 0.6, shoulder_y))
        .with_joint(joint(JointName::LeftHip, 0.42, hip_y))
        .with_joint(joint(JointName::RightHip, 0.58, hip_y))
        .with_joint(joint(JointName::LeftKnee, 0.4, knee_y))
        .with_joint(joint(JointName::RightKnee, 0.6, knee_y))
}

/// Upright back, hips below knees.
pub fn good_pose() -> Pose {
    squat_pose(0.8, 0.4, 0.45)
}

/// Upright back, hips still above knees.
pub fn shallow_pose() -> Pose {
    squat_pose(0.8, 0.6, 0.45)
}

/// Shoulders dropped below the hips, hips below knees.
pub fn hunched_pose() -> Pose {
    squat_pose(0.3, 0.4, 0.45)
}

pub fn blank_image() -> Image {
    Image::U8(Tensor::new(vec![2, 2, 3], vec![0u8; 12]).unwrap())
}

pub fn frame(timestamp: f64) -> VideoFrame {
    VideoFrame::new(timestamp, blank_image())
}

pub type FrameItems = futures_util::stream::Iter<std::vec::IntoIter<Result<VideoFrame, VideoError>>>;

/// Frame source replaying a fixed list, or failing to open.
pub struct ScriptedSource {
    frames: Option<Vec<Result<VideoFrame, VideoError>>>,
    pub opened: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new(frames: Vec<Result<VideoFrame, VideoError>>) -> Self {
        Self {
            frames: Some(frames),
            opened: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn from_timestamps(timestamps: &[f64]) -> Self {
        Self::new(timestamps.iter().map(|&t| Ok(frame(t))).collect())
    }

    pub fn unopenable() -> Self {
        Self {
            frames: None,
            opened: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl FrameSource for ScriptedSource {
    type Frames = FrameItems;

    fn open(&mut self, location: &str) -> Result<FrameItems, VideoError> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        match self.frames.take() {
            Some(frames) => Ok(futures_util::stream::iter(frames)),
            None => Err(VideoError::NoVideoTrack(location.to_string())),
        }
    }
}

/// Detector answering each call from a script, counting calls.
pub struct ScriptedDetector {
    responses: VecDeque<Result<Vec<Pose>, FormError>>,
    pub calls: Arc<AtomicUsize>,
}

impl ScriptedDetector {
    pub fn new(responses: Vec<Result<Vec<Pose>, FormError>>) -> Self {
        Self {
            responses: responses.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn poses(per_frame: Vec<Vec<Pose>>) -> Self {
        Self::new(per_frame.into_iter().map(Ok).collect())
    }
}

impl PoseDetector for ScriptedDetector {
    async fn detect(&mut self, _image: &Image) -> Result<Vec<Pose>, FormError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

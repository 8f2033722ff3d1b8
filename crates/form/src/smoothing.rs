use {
    crate::{Joint, Pose},
    serde::{Deserialize, Serialize},
};

/// Weight given to the newest observation when none is configured.
pub const DEFAULT_SMOOTHING_FACTOR: f32 = 0.15;

/// Exponential moving average over joint positions.
///
/// `alpha = 1` disables smoothing; smaller values trade latency for
/// steadier positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalSmoother {
    alpha: f32,
}

impl Default for TemporalSmoother {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_SMOOTHING_FACTOR,
        }
    }
}

impl TemporalSmoother {
    /// `alpha` is clamped to `[0, 1]`; NaN falls back to the default.
    pub fn new(alpha: f32) -> Self {
        if alpha.is_nan() {
            log::warn!("smoothing factor is NaN, using {DEFAULT_SMOOTHING_FACTOR}");
            return Self::default();
        }
        let clamped = alpha.clamp(0.0, 1.0);
        if clamped != alpha {
            log::warn!("smoothing factor {alpha} clamped to {clamped}");
        }
        Self { alpha: clamped }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Blend `pose` with the previously smoothed pose.
    ///
    /// Without history the pose is returned as is. Joints new in `pose`
    /// pass through unchanged, joints only in `previous` are dropped, and
    /// confidence always comes from `pose`.
    pub fn smooth(&self, pose: &Pose, previous: Option<&Pose>) -> Pose {
        let Some(previous) = previous else {
            return pose.clone();
        };
        pose.joints()
            .map(|joint| match previous.joint(joint.name) {
                Some(prev) => Joint::new(
                    joint.name,
                    prev.position.lerp(joint.position, self.alpha),
                    joint.confidence,
                ),
                None => *joint,
            })
            .collect()
    }
}

/// How detected poses are matched to smoothing history across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingMode {
    /// One history slot for a single primary subject. Each pose in a frame
    /// is smoothed against the most recent smoothed pose and replaces it.
    #[default]
    Single,
    /// Detection order is the track identity: pose `i` is smoothed against
    /// the pose at index `i` of the previous frame.
    ByIndex,
}

/// Smoothing history of one analysis run.
#[derive(Debug, Clone, Default)]
pub struct SmoothingState {
    mode: TrackingMode,
    slots: Vec<Pose>,
}

impl SmoothingState {
    pub fn new(mode: TrackingMode) -> Self {
        Self {
            mode,
            slots: Vec::new(),
        }
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    /// Smoothed history for track `index`.
    pub fn previous(&self, index: usize) -> Option<&Pose> {
        self.slots.get(index)
    }

    pub fn reset(&mut self) {
        self.slots.clear();
    }

    /// Smooth one frame's detections and record them as history.
    ///
    /// In `Single` mode a frame without poses keeps the slot; in `ByIndex`
    /// mode tracks without a detection in this frame are forgotten.
    pub fn apply(&mut self, smoother: &TemporalSmoother, poses: Vec<Pose>) -> Vec<Pose> {
        match self.mode {
            TrackingMode::Single => {
                let mut smoothed = Vec::with_capacity(poses.len());
                for pose in &poses {
                    let current = smoother.smooth(pose, self.slots.first());
                    self.slots = vec![current.clone()];
                    smoothed.push(current);
                }
                smoothed
            }
            TrackingMode::ByIndex => {
                let smoothed: Vec<Pose> = poses
                    .iter()
                    .enumerate()
                    .map(|(index, pose)| smoother.smooth(pose, self.slots.get(index)))
                    .collect();
                self.slots = smoothed.clone();
                smoothed
            }
        }
    }
}

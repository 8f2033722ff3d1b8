use {
    crate::{FormFeedback, Pose},
    serde::Serialize,
};

/// Everything the pipeline has to say about one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameAnalysis {
    /// Frame time in seconds, as delivered by the frame source.
    pub timestamp: f64,
    /// Smoothed poses, in detection order.
    pub poses: Vec<Pose>,
    /// Feedback for every pose, concatenated in pose order.
    pub feedback: Vec<FormFeedback>,
}

impl FrameAnalysis {
    /// True when at least one pose was judged and nothing negative was reported.
    pub fn is_good_form(&self) -> bool {
        !self.feedback.is_empty() && self.feedback.iter().all(|f| f.is_positive())
    }
}

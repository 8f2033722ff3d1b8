use {
    crate::{FormError, Pose},
    image::Image,
};

/// Minimum joint confidence kept by `ConfidenceFilter` unless configured.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.1;

/// Finds people in one image.
///
/// Returns one `Pose` per person, or an empty list when nobody is found.
/// Errors are reserved for failures of the detector itself.
#[allow(async_fn_in_trait)]
pub trait PoseDetector {
    async fn detect(&mut self, image: &Image) -> Result<Vec<Pose>, FormError>;
}

/// Wraps a detector and drops joints below a confidence threshold.
///
/// Poses left with no joints are dropped as well.
#[derive(Debug, Clone)]
pub struct ConfidenceFilter<D> {
    inner: D,
    min_confidence: f32,
}

impl<D> ConfidenceFilter<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Set the threshold, clamped to `[0, 1]`. NaN keeps the default.
    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        if min_confidence.is_nan() {
            log::warn!("minimum confidence is NaN, using {DEFAULT_MIN_CONFIDENCE}");
            self.min_confidence = DEFAULT_MIN_CONFIDENCE;
        } else {
            self.min_confidence = min_confidence.clamp(0.0, 1.0);
        }
        self
    }

    pub fn min_confidence(&self) -> f32 {
        self.min_confidence
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: PoseDetector> PoseDetector for ConfidenceFilter<D> {
    async fn detect(&mut self, image: &Image) -> Result<Vec<Pose>, FormError> {
        let poses = self.inner.detect(image).await?;
        Ok(poses
            .iter()
            .map(|pose| pose.retain_confident(self.min_confidence))
            .filter(|pose| !pose.is_empty())
            .collect())
    }
}

use {
    crate::{AnalysisEngine, FormError, RuleKind, TemporalSmoother, TrackingMode, smoothing::DEFAULT_SMOOTHING_FACTOR},
    serde::{Deserialize, Serialize},
    std::path::Path,
};

/// Analysis settings, loadable from JSON. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Weight of the newest observation, clamped to `[0, 1]` when used.
    pub smoothing_factor: f32,
    /// Rules to evaluate, in reporting order.
    pub rules: Vec<RuleKind>,
    pub tracking: TrackingMode,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            rules: RuleKind::squat(),
            tracking: TrackingMode::Single,
        }
    }
}

impl FormConfig {
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| FormError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_json(&json)?;
        log::debug!("loaded form config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn smoother(&self) -> TemporalSmoother {
        TemporalSmoother::new(self.smoothing_factor)
    }

    pub fn engine(&self) -> AnalysisEngine {
        AnalysisEngine::from_kinds(&self.rules)
    }
}

use {
    crate::{ExerciseRule, FormFeedback, Pose, RuleKind},
    std::fmt,
};

/// Runs an ordered rule set against poses.
///
/// Holds nothing but its rules, so one engine can serve any number of
/// concurrent analyses.
pub struct AnalysisEngine {
    rules: Vec<Box<dyn ExerciseRule>>,
}

impl AnalysisEngine {
    pub fn new(rules: Vec<Box<dyn ExerciseRule>>) -> Self {
        Self { rules }
    }

    /// Back-straightness followed by squat depth.
    pub fn squat() -> Self {
        Self::from_kinds(&RuleKind::squat())
    }

    pub fn from_kinds(kinds: &[RuleKind]) -> Self {
        Self::new(kinds.iter().map(|kind| kind.build()).collect())
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Feedback of every failing rule in configured order, or exactly
    /// `[GoodForm]` when every rule passes.
    pub fn analyze(&self, pose: &Pose) -> Vec<FormFeedback> {
        let failures: Vec<FormFeedback> = self
            .rules
            .iter()
            .filter(|rule| !rule.evaluate(pose))
            .map(|rule| rule.feedback())
            .collect();
        if failures.is_empty() {
            vec![FormFeedback::GoodForm]
        } else {
            failures
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::squat()
    }
}

impl fmt::Debug for AnalysisEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let feedback: Vec<FormFeedback> = self.rules.iter().map(|rule| rule.feedback()).collect();
        f.debug_struct("AnalysisEngine").field("rules", &feedback).finish()
    }
}

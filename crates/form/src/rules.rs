use {
    crate::{FormFeedback, Joint, JointName, Pose},
    serde::{Deserialize, Serialize},
};

/// A single independent check on a pose.
///
/// `evaluate` returns `true` when the pose passes. A rule whose joints are
/// missing from the pose has no evidence against it and must pass.
pub trait ExerciseRule: Send + Sync {
    /// Feedback reported when the rule fails.
    fn feedback(&self) -> FormFeedback;

    fn evaluate(&self, pose: &Pose) -> bool;
}

/// Checks `holds` on every body side where both joints were detected.
/// Passes trivially when no side can be judged.
fn every_visible_side(
    pose: &Pose,
    sides: &[(JointName, JointName)],
    holds: impl Fn(&Joint, &Joint) -> bool,
) -> bool {
    sides
        .iter()
        .filter_map(|&(upper, lower)| Some((pose.joint(upper)?, pose.joint(lower)?)))
        .all(|(upper, lower)| holds(upper, lower))
}

/// Shoulders must stay at or above hip height.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackStraightRule;

impl ExerciseRule for BackStraightRule {
    fn feedback(&self) -> FormFeedback {
        FormFeedback::KeepBackStraight
    }

    fn evaluate(&self, pose: &Pose) -> bool {
        every_visible_side(
            pose,
            &[
                (JointName::LeftShoulder, JointName::LeftHip),
                (JointName::RightShoulder, JointName::RightHip),
            ],
            |shoulder, hip| shoulder.position.y >= hip.position.y,
        )
    }
}

/// Hips must reach knee height or lower.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquatDepthRule;

impl ExerciseRule for SquatDepthRule {
    fn feedback(&self) -> FormFeedback {
        FormFeedback::SquatDeeper
    }

    fn evaluate(&self, pose: &Pose) -> bool {
        every_visible_side(
            pose,
            &[
                (JointName::LeftHip, JointName::LeftKnee),
                (JointName::RightHip, JointName::RightKnee),
            ],
            |hip, knee| hip.position.y <= knee.position.y,
        )
    }
}

/// Rule selection as it appears in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    BackStraight,
    SquatDepth,
}

impl RuleKind {
    /// The squat rule set, in reporting order.
    pub fn squat() -> Vec<RuleKind> {
        vec![RuleKind::BackStraight, RuleKind::SquatDepth]
    }

    pub fn build(self) -> Box<dyn ExerciseRule> {
        match self {
            RuleKind::BackStraight => Box::new(BackStraightRule),
            RuleKind::SquatDepth => Box::new(SquatDepthRule),
        }
    }
}

mod common;

use base::Vec2;
use common::{ScriptedDetector, blank_image};
use form::{ConfidenceFilter, DEFAULT_MIN_CONFIDENCE, FormError, Joint, JointName, Pose, PoseDetector};

fn weak_and_strong() -> Pose {
    Pose::new()
        .with_joint(Joint::new(JointName::LeftHip, Vec2::new(0.4, 0.5), 0.05))
        .with_joint(Joint::new(JointName::LeftKnee, Vec2::new(0.4, 0.3), 0.8))
}

#[tokio::test]
async fn test_filter_drops_low_confidence_joints() {
    let mut detector = ConfidenceFilter::new(ScriptedDetector::poses(vec![vec![weak_and_strong()]]));
    assert_eq!(detector.min_confidence(), DEFAULT_MIN_CONFIDENCE);

    let poses = detector.detect(&blank_image()).await.unwrap();
    assert_eq!(poses.len(), 1);
    assert!(!poses[0].contains(JointName::LeftHip));
    assert!(poses[0].contains(JointName::LeftKnee));
}

#[tokio::test]
async fn test_filter_drops_poses_left_empty() {
    let faint = Pose::new().with_joint(Joint::new(JointName::Nose, Vec2::zero(), 0.2));
    let mut detector =
        ConfidenceFilter::new(ScriptedDetector::poses(vec![vec![faint, weak_and_strong()]])).with_min_confidence(0.5);
    let poses = detector.detect(&blank_image()).await.unwrap();
    assert_eq!(poses.len(), 1);
    assert!(poses[0].contains(JointName::LeftKnee));
}

#[tokio::test]
async fn test_filter_passes_errors_through() {
    let inner = ScriptedDetector::new(vec![Err(FormError::Detection("model crashed".to_string()))]);
    let calls = inner.calls.clone();
    let mut detector = ConfidenceFilter::new(inner);
    let result = detector.detect(&blank_image()).await;
    assert!(matches!(result, Err(FormError::Detection(msg)) if msg == "model crashed"));
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn test_min_confidence_is_clamped() {
    let detector = ConfidenceFilter::new(ScriptedDetector::poses(Vec::new())).with_min_confidence(2.0);
    assert_eq!(detector.min_confidence(), 1.0);
}

#[tokio::test]
async fn test_nan_min_confidence_keeps_default() {
    let mut detector =
        ConfidenceFilter::new(ScriptedDetector::poses(vec![vec![weak_and_strong()]])).with_min_confidence(f32::NAN);
    assert_eq!(detector.min_confidence(), DEFAULT_MIN_CONFIDENCE);

    let poses = detector.detect(&blank_image()).await.unwrap();
    assert_eq!(poses.len(), 1);
    assert!(poses[0].contains(JointName::LeftKnee));
}

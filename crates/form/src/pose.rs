use {
    base::Vec2,
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Number of landmarks in the COCO body layout.
pub const COCO_JOINT_COUNT: usize = 17;

/// Skeletal landmarks, declared in COCO keypoint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointName {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl JointName {
    pub const ALL: [JointName; COCO_JOINT_COUNT] = [
        JointName::Nose,
        JointName::LeftEye,
        JointName::RightEye,
        JointName::LeftEar,
        JointName::RightEar,
        JointName::LeftShoulder,
        JointName::RightShoulder,
        JointName::LeftElbow,
        JointName::RightElbow,
        JointName::LeftWrist,
        JointName::RightWrist,
        JointName::LeftHip,
        JointName::RightHip,
        JointName::LeftKnee,
        JointName::RightKnee,
        JointName::LeftAnkle,
        JointName::RightAnkle,
    ];
}

impl TryFrom<usize> for JointName {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        JointName::ALL.get(index).copied().ok_or_else(|| {
            format!("Invalid joint index: {index}. Must be in range 0-{}.", COCO_JOINT_COUNT - 1)
        })
    }
}

/// One detected landmark.
///
/// Positions are normalized image coordinates with y pointing up, so a
/// larger `y` is higher in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub name: JointName,
    pub position: Vec2<f32>,
    /// Detection confidence in `[0.0, 1.0]`.
    pub confidence: f32,
}

impl Joint {
    pub fn new(name: JointName, position: Vec2<f32>, confidence: f32) -> Self {
        Self {
            name,
            position,
            confidence,
        }
    }
}

/// The joints detected for one person in one frame.
///
/// A missing entry means the joint was not detected. Joints are always
/// stored under their own `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Pose {
    joints: BTreeMap<JointName, Joint>,
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_joint(mut self, joint: Joint) -> Self {
        self.insert(joint);
        self
    }

    /// Add or replace a joint, returning the one it replaced.
    pub fn insert(&mut self, joint: Joint) -> Option<Joint> {
        self.joints.insert(joint.name, joint)
    }

    pub fn joint(&self, name: JointName) -> Option<&Joint> {
        self.joints.get(&name)
    }

    pub fn contains(&self, name: JointName) -> bool {
        self.joints.contains_key(&name)
    }

    pub fn joints(&self) -> impl Iterator<Item = &Joint> {
        self.joints.values()
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Build a pose from keypoints in COCO order, as `(position, confidence)`.
    /// Entries past the 17th are ignored.
    pub fn from_coco(keypoints: &[(Vec2<f32>, f32)]) -> Self {
        keypoints
            .iter()
            .zip(JointName::ALL)
            .map(|(&(position, confidence), name)| Joint::new(name, position, confidence))
            .collect()
    }

    /// Copy of this pose keeping only joints with at least `min_confidence`.
    pub fn retain_confident(&self, min_confidence: f32) -> Self {
        self.joints()
            .filter(|joint| joint.confidence >= min_confidence)
            .copied()
            .collect()
    }

    /// Convert from y-down coordinates (e.g. pixel rows) to y-up, where
    /// `height` is the extent of the vertical axis.
    pub fn flip_vertical(&self, height: f32) -> Self {
        self.joints()
            .map(|joint| {
                Joint::new(
                    joint.name,
                    Vec2::new(joint.position.x, height - joint.position.y),
                    joint.confidence,
                )
            })
            .collect()
    }
}

impl FromIterator<Joint> for Pose {
    fn from_iter<I: IntoIterator<Item = Joint>>(iter: I) -> Self {
        let mut pose = Pose::new();
        for joint in iter {
            pose.insert(joint);
        }
        pose
    }
}

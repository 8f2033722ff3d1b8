use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// A single piece of form feedback shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFeedback {
    KeepBackStraight,
    SquatDeeper,
    GoodForm,
}

impl FormFeedback {
    pub fn message(self) -> &'static str {
        match self {
            FormFeedback::KeepBackStraight => "Keep your back straight",
            FormFeedback::SquatDeeper => "Squat deeper",
            FormFeedback::GoodForm => "Good form!",
        }
    }

    /// Stable identifier, matching the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            FormFeedback::KeepBackStraight => "keep_back_straight",
            FormFeedback::SquatDeeper => "squat_deeper",
            FormFeedback::GoodForm => "good_form",
        }
    }

    pub fn is_positive(self) -> bool {
        match self {
            FormFeedback::GoodForm => true,
            FormFeedback::KeepBackStraight | FormFeedback::SquatDeeper => false,
        }
    }
}

impl fmt::Display for FormFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

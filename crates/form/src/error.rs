use {std::fmt, video::VideoError};

#[derive(Debug)]
pub enum FormError {
    /// The frame source failed to open or to deliver a frame.
    Video(VideoError),
    /// The pose detector failed on a frame.
    Detection(String),
    Config(String),
    Io(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Video(err) => write!(f, "video error: {err}"),
            FormError::Detection(msg) => write!(f, "detection error: {msg}"),
            FormError::Config(msg) => write!(f, "config error: {msg}"),
            FormError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Video(err) => Some(err),
            _ => None,
        }
    }
}

impl From<VideoError> for FormError {
    fn from(err: VideoError) -> Self {
        FormError::Video(err)
    }
}

impl From<std::io::Error> for FormError {
    fn from(err: std::io::Error) -> Self {
        FormError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::Config(err.to_string())
    }
}

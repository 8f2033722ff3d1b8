use std::fmt;

#[derive(Debug)]
pub enum VideoError {
    /// The resource holds nothing that can be served as frames.
    NoVideoTrack(String),
    /// The resource could not be opened or reading could not begin.
    Open(String),
    /// The reader failed after frames started flowing. Ends the stream.
    Stream(String),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::NoVideoTrack(location) => write!(f, "no decodable video track in {location}"),
            VideoError::Open(msg) => write!(f, "failed to begin reading: {msg}"),
            VideoError::Stream(msg) => write!(f, "stream error: {msg}"),
        }
    }
}

impl std::error::Error for VideoError {}

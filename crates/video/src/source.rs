use {
    crate::{VideoError, VideoFrame},
    futures_core::Stream,
};

/// Supplier of timestamped frames from a video resource.
///
/// `open` resolves `location` and returns a lazy stream of frames in
/// presentation order. The stream ends at end of media, or yields an
/// error when reading fails partway through. Dropping the stream
/// releases the resource.
pub trait FrameSource {
    type Frames: Stream<Item = Result<VideoFrame, VideoError>> + Unpin;

    fn open(&mut self, location: &str) -> Result<Self::Frames, VideoError>;
}

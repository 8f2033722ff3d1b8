//! Timed frame sources for the form pipeline.
//!
//! A `FrameSource` opens a resource and hands back a `Stream` of
//! `VideoFrame`s in presentation order.

pub mod error;
pub mod sequence;
pub mod source;
pub mod videoframe;

pub use error::VideoError;
pub use sequence::{ImageSequence, ImageSequenceSource};
pub use source::FrameSource;
pub use videoframe::VideoFrame;

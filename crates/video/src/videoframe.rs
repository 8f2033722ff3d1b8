use image::Image;

/// One sample pulled from a frame source.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// Presentation time in seconds from the start of the resource.
    pub timestamp: f64,
    /// `None` when the pixel buffer for this sample could not be obtained.
    pub image: Option<Image>,
}

impl VideoFrame {
    pub fn new(timestamp: f64, image: Image) -> Self {
        Self {
            timestamp,
            image: Some(image),
        }
    }

    pub fn missing(timestamp: f64) -> Self {
        Self {
            timestamp,
            image: None,
        }
    }
}

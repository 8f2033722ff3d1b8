use {
    crate::*,
    futures_core::Stream,
    std::{
        path::{Path, PathBuf},
        pin::Pin,
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        task::{Context, Poll},
    },
    tokio::{
        runtime::Handle,
        sync::mpsc,
        task::JoinHandle,
    },
};

// capacity of the frame channel between the decode worker and the stream
const CHANNEL_CAPACITY: usize = 1;

const DEFAULT_FRAME_RATE: f32 = 30.0;

const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "bmp", "gif", "tif", "tiff", "webp"];

/// Serves a directory of still images as a video.
///
/// Files with an image extension, sorted by file name, become consecutive
/// frames spaced `1 / frame_rate` seconds apart. A file that cannot be
/// read or decoded still produces a frame, with no image.
#[derive(Debug, Clone)]
pub struct ImageSequenceSource {
    frame_rate: f32,
}

impl Default for ImageSequenceSource {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl ImageSequenceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the playback rate. Non-positive or non-finite rates are ignored.
    pub fn with_frame_rate(mut self, frame_rate: f32) -> Self {
        if frame_rate.is_finite() && frame_rate > 0.0 {
            self.frame_rate = frame_rate;
        } else {
            log::warn!("ignoring invalid frame rate {frame_rate}, keeping {}", self.frame_rate);
        }
        self
    }

    pub fn frame_rate(&self) -> f32 {
        self.frame_rate
    }

    fn list_frames(dir: &Path) -> Result<Vec<PathBuf>, VideoError> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| VideoError::Open(format!("{}: {e}", dir.display())))?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && has_image_extension(path))
            .collect();
        paths.sort();
        Ok(paths)
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn load_frame(path: &Path) -> Option<image::Image> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("image sequence: cannot read {}: {e}", path.display());
            return None;
        }
    };
    match image::decode_image_blocking(&bytes) {
        Ok(image) => Some(image),
        Err(e) => {
            log::warn!("image sequence: cannot decode {}: {e}", path.display());
            None
        }
    }
}

impl FrameSource for ImageSequenceSource {
    type Frames = ImageSequence;

    fn open(&mut self, location: &str) -> Result<ImageSequence, VideoError> {
        let paths = Self::list_frames(Path::new(location))?;
        if paths.is_empty() {
            return Err(VideoError::NoVideoTrack(location.to_string()));
        }
        let runtime = Handle::try_current()
            .map_err(|e| VideoError::Open(format!("no async runtime: {e}")))?;
        log::info!("image sequence: {} frames from {location}", paths.len());
        Ok(ImageSequence::spawn(&runtime, paths, self.frame_rate))
    }
}

/// Frame stream produced by `ImageSequenceSource`.
///
/// Reading and decoding happen on a blocking worker. The worker reads ahead
/// of the consumer by at most two frames: one queued in the channel and one
/// decoded and waiting for the queue to drain.
pub struct ImageSequence {
    receiver: mpsc::Receiver<VideoFrame>,
    cancel: Arc<AtomicBool>,
    frame_count: usize,
    join_handle: Option<JoinHandle<()>>,
}

impl ImageSequence {
    fn spawn(runtime: &Handle, paths: Vec<PathBuf>, frame_rate: f32) -> Self {
        let (sender, receiver) = mpsc::channel::<VideoFrame>(CHANNEL_CAPACITY);
        let cancel = Arc::new(AtomicBool::new(false));
        let frame_count = paths.len();

        let join_handle = runtime.spawn_blocking({
            let cancel = Arc::clone(&cancel);
            move || {
                for (index, path) in paths.iter().enumerate() {
                    if cancel.load(Ordering::Relaxed) {
                        break;
                    }
                    let timestamp = index as f64 / frame_rate as f64;
                    let frame = match load_frame(path) {
                        Some(image) => VideoFrame::new(timestamp, image),
                        None => VideoFrame::missing(timestamp),
                    };
                    if sender.blocking_send(frame).is_err() {
                        // consumer dropped the stream
                        return;
                    }
                }
                log::debug!("image sequence worker: done");
            }
        });

        Self {
            receiver,
            cancel,
            frame_count,
            join_handle: Some(join_handle),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

impl std::fmt::Debug for ImageSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageSequence")
            .field("frame_count", &self.frame_count)
            .field("cancelled", &self.cancel.load(Ordering::Relaxed))
            .finish()
    }
}

impl Stream for ImageSequence {
    type Item = Result<VideoFrame, VideoError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().receiver.poll_recv(cx).map(|frame| frame.map(Ok))
    }
}

impl Drop for ImageSequence {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        self.receiver.close();
        if let Some(handle) = self.join_handle.take() {
            handle.abort();
        }
    }
}

use {
    crate::*,
    futures_core::{FusedStream, Stream},
    futures_util::StreamExt,
    std::{
        pin::Pin,
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, Ordering},
        },
        task::{Context, Poll},
    },
    video::FrameSource,
};

/// Lifecycle of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Created, not yet polled.
    Idle,
    Running,
    /// The frame source ran out of frames.
    Completed,
    /// A frame source or detector error ended the run.
    Failed,
    Cancelled,
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed | RunStatus::Cancelled)
    }
}

/// Requests cooperative cancellation of a run.
///
/// The run checks the flag before each frame, so a detection already in
/// progress finishes but no further frame is pulled.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancel: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
}

/// Ties a frame source, a pose detector and an analysis engine together.
///
/// Nothing happens until the stream returned by `analyze` is polled.
pub struct Pipeline<S, D> {
    source: S,
    detector: D,
    engine: AnalysisEngine,
    smoother: TemporalSmoother,
    tracking: TrackingMode,
}

impl<S: FrameSource, D: PoseDetector> Pipeline<S, D> {
    pub fn new(source: S, detector: D, engine: AnalysisEngine) -> Self {
        Self {
            source,
            detector,
            engine,
            smoother: TemporalSmoother::default(),
            tracking: TrackingMode::default(),
        }
    }

    pub fn from_config(source: S, detector: D, config: &FormConfig) -> Self {
        Self::new(source, detector, config.engine())
            .with_smoother(config.smoother())
            .with_tracking(config.tracking)
    }

    pub fn with_smoother(mut self, smoother: TemporalSmoother) -> Self {
        self.smoother = smoother;
        self
    }

    pub fn with_tracking(mut self, tracking: TrackingMode) -> Self {
        self.tracking = tracking;
        self
    }

    /// Start a run over the resource at `location`.
    ///
    /// The returned stream yields one `FrameAnalysis` per frame that had
    /// an image, in source order. It ends after the last frame, after the
    /// first error, or after cancellation. Every run owns its own smoothing
    /// history.
    pub fn analyze<'a>(self, location: impl Into<String>) -> AnalysisStream<'a>
    where
        S: 'a,
        S::Frames: 'a,
        D: 'a,
    {
        let cancel = CancelHandle::default();
        let status = Arc::new(Mutex::new(RunStatus::Idle));
        let run = Run {
            location: location.into(),
            source: self.source,
            frames: None,
            detector: self.detector,
            engine: self.engine,
            smoother: self.smoother,
            smoothing: SmoothingState::new(self.tracking),
            cancel: cancel.clone(),
            status: Arc::clone(&status),
            last_timestamp: None,
            emitted: 0,
        };
        let inner = futures_util::stream::unfold(run, |mut run| async move {
            let item = run.next().await?;
            Some((item, run))
        })
        .fuse();
        AnalysisStream {
            inner: Box::pin(inner),
            cancel,
            status,
        }
    }
}

struct Run<S: FrameSource, D> {
    location: String,
    source: S,
    frames: Option<S::Frames>,
    detector: D,
    engine: AnalysisEngine,
    smoother: TemporalSmoother,
    smoothing: SmoothingState,
    cancel: CancelHandle,
    status: Arc<Mutex<RunStatus>>,
    last_timestamp: Option<f64>,
    emitted: usize,
}

impl<S: FrameSource, D: PoseDetector> Run<S, D> {
    fn status(&self) -> RunStatus {
        *self.status.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn set_status(&self, status: RunStatus) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = status;
    }

    // releases the frame source before reporting the terminal state
    fn finish(&mut self, status: RunStatus) {
        self.frames = None;
        self.set_status(status);
        match status {
            RunStatus::Completed => log::info!(
                "analysis of {} completed after {} frames",
                self.location,
                self.emitted
            ),
            RunStatus::Cancelled => log::info!(
                "analysis of {} cancelled after {} frames",
                self.location,
                self.emitted
            ),
            _ => {}
        }
    }

    fn fail(&mut self, error: FormError) -> Option<Result<FrameAnalysis, FormError>> {
        log::error!("analysis of {} failed: {error}", self.location);
        self.finish(RunStatus::Failed);
        Some(Err(error))
    }

    fn note_timestamp(&mut self, timestamp: f64) {
        if let Some(last) = self.last_timestamp {
            if timestamp <= last {
                log::warn!("frame timestamp {timestamp} does not follow {last}");
            }
        }
        self.last_timestamp = Some(timestamp);
    }

    async fn next(&mut self) -> Option<Result<FrameAnalysis, FormError>> {
        match self.status() {
            RunStatus::Idle => {
                self.set_status(RunStatus::Running);
                log::info!("analysis of {} started", self.location);
                match self.source.open(&self.location) {
                    Ok(frames) => self.frames = Some(frames),
                    Err(e) => return self.fail(e.into()),
                }
            }
            RunStatus::Running => {}
            _ => return None,
        }

        loop {
            if self.cancel.is_cancelled() {
                self.finish(RunStatus::Cancelled);
                return None;
            }

            let Some(frames) = self.frames.as_mut() else {
                self.finish(RunStatus::Completed);
                return None;
            };
            let next = frames.next().await;
            let frame = match next {
                Some(Ok(frame)) => frame,
                Some(Err(e)) => return self.fail(e.into()),
                None => {
                    self.finish(RunStatus::Completed);
                    return None;
                }
            };

            let Some(image) = frame.image else {
                log::debug!("skipping frame at {}s: no image", frame.timestamp);
                continue;
            };

            if self.cancel.is_cancelled() {
                self.finish(RunStatus::Cancelled);
                return None;
            }

            self.note_timestamp(frame.timestamp);
            let poses = match self.detector.detect(&image).await {
                Ok(poses) => poses,
                Err(e) => return self.fail(e),
            };

            let poses = self.smoothing.apply(&self.smoother, poses);
            let feedback = poses.iter().flat_map(|pose| self.engine.analyze(pose)).collect();
            self.emitted += 1;
            return Some(Ok(FrameAnalysis {
                timestamp: frame.timestamp,
                poses,
                feedback,
            }));
        }
    }
}

/// Pull-based stream of per-frame results from one run.
///
/// No frame is read and no detection runs until the stream is polled.
/// Dropping the stream ends the run and releases the frame source and
/// detector.
pub struct AnalysisStream<'a> {
    inner: Pin<Box<dyn Stream<Item = Result<FrameAnalysis, FormError>> + 'a>>,
    cancel: CancelHandle,
    status: Arc<Mutex<RunStatus>>,
}

impl AnalysisStream<'_> {
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn status(&self) -> RunStatus {
        *self.status.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Stream for AnalysisStream<'_> {
    type Item = Result<FrameAnalysis, FormError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().inner.as_mut().poll_next(cx)
    }
}

impl FusedStream for AnalysisStream<'_> {
    fn is_terminated(&self) -> bool {
        self.status().is_terminal()
    }
}

impl std::fmt::Debug for AnalysisStream<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisStream")
            .field("status", &self.status())
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

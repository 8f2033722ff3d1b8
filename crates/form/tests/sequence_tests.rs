mod common;

use common::{good_pose, shallow_pose};
use form::{AnalysisEngine, ConfidenceFilter, FormError, FormFeedback, Pipeline, Pose, PoseDetector, TemporalSmoother};
use futures_util::StreamExt;
use image::Image;
use std::{fs, path::PathBuf};
use video::{ImageSequenceSource, VideoError};

/// Reads the "pose" off the image width: narrow frames show a deep squat.
struct WidthDetector;

impl PoseDetector for WidthDetector {
    async fn detect(&mut self, image: &Image) -> Result<Vec<Pose>, FormError> {
        Ok(match image.width() {
            1 => Vec::new(),
            2 => vec![good_pose()],
            _ => vec![shallow_pose()],
        })
    }
}

fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("form-sequence-test-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(path: PathBuf, width: u32) {
    crates_image::RgbImage::from_pixel(width, 2, crates_image::Rgb([90, 90, 90]))
        .save(path)
        .unwrap();
}

#[tokio::test]
async fn test_image_directory_end_to_end() {
    let dir = fixture_dir("e2e");
    write_png(dir.join("f0.png"), 1);
    write_png(dir.join("f1.png"), 2);
    fs::write(dir.join("f2.png"), b"truncated").unwrap();
    write_png(dir.join("f3.png"), 3);

    let source = ImageSequenceSource::new().with_frame_rate(4.0);
    let analyses: Vec<_> = Pipeline::new(source, ConfidenceFilter::new(WidthDetector), AnalysisEngine::squat())
        .with_smoother(TemporalSmoother::new(1.0))
        .analyze(dir.to_str().unwrap())
        .map(|r| r.unwrap())
        .collect()
        .await;

    let timestamps: Vec<f64> = analyses.iter().map(|a| a.timestamp).collect();
    assert_eq!(timestamps, vec![0.0, 0.25, 0.75]);
    let feedback: Vec<Vec<FormFeedback>> = analyses.iter().map(|a| a.feedback.clone()).collect();
    assert_eq!(
        feedback,
        vec![vec![], vec![FormFeedback::GoodForm], vec![FormFeedback::SquatDeeper]]
    );

    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_empty_directory_ends_with_resource_error() {
    let dir = fixture_dir("empty");
    let results: Vec<_> = Pipeline::new(ImageSequenceSource::new(), WidthDetector, AnalysisEngine::squat())
        .analyze(dir.to_str().unwrap())
        .collect()
        .await;

    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(FormError::Video(VideoError::NoVideoTrack(_)))));
    fs::remove_dir_all(&dir).ok();
}

//! Replays recorded keypoints over a directory of frames and prints one
//! JSON line of analysis per frame.
//!
//! usage: squat_check <frames-dir> <keypoints.json> [config.json]
//!
//! `keypoints.json` holds one entry per decodable frame, in frame order.
//! Each entry lists the people in that frame, and each person is 17 COCO
//! `[x, y, confidence]` triples in pixel coordinates with y pointing down.

use {
    base::{Vec2, init_stdout_logger, log_fatal},
    form::{ConfidenceFilter, FormConfig, FormError, Pipeline, Pose, PoseDetector},
    futures_util::StreamExt,
    image::Image,
    std::collections::VecDeque,
    video::ImageSequenceSource,
};

type Keypoints = Vec<[f32; 3]>;

struct KeypointReplay {
    frames: VecDeque<Vec<Keypoints>>,
}

impl KeypointReplay {
    fn load(path: &str) -> Result<Self, FormError> {
        let json = std::fs::read_to_string(path).map_err(|e| FormError::Io(format!("{path}: {e}")))?;
        let frames: Vec<Vec<Keypoints>> = serde_json::from_str(&json)?;
        log::info!("loaded keypoints for {} frames from {path}", frames.len());
        Ok(Self { frames: frames.into() })
    }
}

impl PoseDetector for KeypointReplay {
    async fn detect(&mut self, image: &Image) -> Result<Vec<Pose>, FormError> {
        let Some(people) = self.frames.pop_front() else {
            return Err(FormError::Detection("ran out of keypoints before frames".to_string()));
        };
        let height = image.height() as f32;
        Ok(people
            .iter()
            .map(|keypoints| {
                let coco: Vec<(Vec2<f32>, f32)> = keypoints
                    .iter()
                    .map(|&[x, y, confidence]| (Vec2::new(x, y), confidence))
                    .collect();
                Pose::from_coco(&coco).flip_vertical(height)
            })
            .collect())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        log_fatal!("usage: squat_check <frames-dir> <keypoints.json> [config.json]");
    }

    let config = match args.get(3) {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::default(),
    };
    let detector = ConfidenceFilter::new(KeypointReplay::load(&args[2])?);

    let mut analyses = Pipeline::from_config(ImageSequenceSource::new(), detector, &config).analyze(args[1].as_str());
    while let Some(analysis) = analyses.next().await {
        println!("{}", serde_json::to_string(&analysis?)?);
    }

    Ok(())
}

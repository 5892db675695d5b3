use super::*;
use crate::FRAME_RATE;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::time::Duration;

/// Recognizer labels that never map to a throw.
const NOISE: &[&str] = &["Thumb_Up", "Pointing_Up", "ILoveYou", "None"];

/// Stand-in for a camera and recognizer.
///
/// Holds a pose for a number of frames, then switches to another one.
/// Individual frames may lose the hand entirely (`dropout`) or be misread
/// as some other label (`confusion`). Seeded, so runs are reproducible.
#[derive(Debug, Clone)]
pub struct Simulated {
    rng: SmallRng,
    labels: Vec<String>,
    pose: Option<String>,
    interval: Duration,
    hold: usize,
    held: usize,
    dropout: f64,
    confusion: f64,
    limit: Option<usize>,
    frames: usize,
}

impl Simulated {
    pub fn new(seed: u64, gestures: &Gestures) -> Self {
        let labels = gestures
            .rock
            .iter()
            .chain(gestures.paper.iter())
            .chain(gestures.scissors.iter())
            .cloned()
            .chain(NOISE.iter().map(|s| s.to_string()))
            .collect();
        Self {
            rng: SmallRng::seed_from_u64(seed),
            labels,
            pose: None,
            interval: Duration::from_millis(1000 / FRAME_RATE),
            hold: FRAME_RATE as usize,
            held: 0,
            dropout: 0.1,
            confusion: 0.05,
            limit: None,
            frames: 0,
        }
    }
    /// Frames a pose is held before switching.
    pub fn hold(mut self, frames: usize) -> Self {
        self.hold = frames.max(1);
        self
    }
    pub fn dropout(mut self, p: f64) -> Self {
        self.dropout = p.clamp(0., 1.);
        self
    }
    pub fn confusion(mut self, p: f64) -> Self {
        self.confusion = p.clamp(0., 1.);
        self
    }
    /// Close after this many frames.
    pub fn limit(mut self, frames: usize) -> Self {
        self.limit = Some(frames);
        self
    }
    /// Produces the next frame without waiting.
    pub fn frame(&mut self) -> Recognition {
        self.frames += 1;
        if self.pose.is_none() || self.held >= self.hold {
            self.pose = self.labels.choose(&mut self.rng).cloned();
            self.held = 0;
        }
        self.held += 1;
        if self.rng.random_bool(self.dropout) {
            return Recognition::empty();
        }
        let (label, score) = if self.rng.random_bool(self.confusion) {
            let label = self.labels.choose(&mut self.rng).cloned();
            (label, self.rng.random_range(0.2..0.7))
        } else {
            (self.pose.clone(), self.rng.random_range(0.6..1.0))
        };
        match label {
            Some(label) => Recognition::single(&label, score),
            None => Recognition::empty(),
        }
    }
}

#[async_trait::async_trait]
impl Sensor for Simulated {
    async fn capture(&mut self) -> Capture {
        if self.limit.is_some_and(|limit| self.frames >= limit) {
            return Capture::Closed;
        }
        tokio::time::sleep(self.interval).await;
        Capture::Frame(self.frame())
    }
}

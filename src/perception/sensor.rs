use super::*;

/// What a sensor produced on one poll.
#[derive(Debug, Clone, PartialEq)]
pub enum Capture {
    /// Recognizer output for one frame. May hold no hands at all.
    Frame(Recognition),
    /// Transient failure; the sensor stays usable.
    Fault(String),
    /// The sensor is gone for good.
    Closed,
}

/// Camera plus gesture recognizer, as seen from the match.
///
/// Implementations pace themselves: `capture` resolves when the next frame is
/// ready. Latency and frame rate are the sensor's business, the room only
/// sees the labels that come out.
#[async_trait::async_trait]
pub trait Sensor: Send {
    async fn capture(&mut self) -> Capture;
}

/// Sensor replaying a fixed sequence of captures, then closing.
#[derive(Debug, Clone, Default)]
pub struct Replay {
    captures: std::collections::VecDeque<Capture>,
}

impl Replay {
    pub fn new(captures: impl IntoIterator<Item = Capture>) -> Self {
        Self {
            captures: captures.into_iter().collect(),
        }
    }
    /// One single-hand frame per label.
    pub fn labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(
            labels
                .into_iter()
                .map(|label| Capture::Frame(Recognition::single(label, 1.0))),
        )
    }
}

#[async_trait::async_trait]
impl Sensor for Replay {
    async fn capture(&mut self) -> Capture {
        self.captures.pop_front().unwrap_or(Capture::Closed)
    }
}

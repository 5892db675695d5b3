use super::*;
use crate::gameroom::Handle;
use crate::gameroom::RoomError;
use tokio::task::JoinHandle;

/// Pumps frames from a [`Sensor`] into a room.
///
/// Each frame is reduced to its top label and submitted with the current
/// round tag. A full inbox costs one frame and nothing else. The pump ends
/// when the sensor closes or the room does.
pub struct Pipeline {
    sensor: Box<dyn Sensor>,
    handle: Handle,
    dropped: usize,
}

impl Pipeline {
    pub fn spawn(sensor: Box<dyn Sensor>, handle: Handle) -> JoinHandle<()> {
        let pipeline = Self {
            sensor,
            handle,
            dropped: 0,
        };
        tokio::spawn(pipeline.run())
    }
    async fn run(mut self) {
        log::debug!("[pipeline] started");
        loop {
            match self.sensor.capture().await {
                Capture::Frame(frame) => match self.handle.observe(frame.top()) {
                    Ok(()) => {}
                    Err(RoomError::Busy) => {
                        log::trace!("[pipeline] inbox full, frame dropped");
                        self.dropped += 1;
                    }
                    Err(RoomError::Closed) => break,
                },
                Capture::Fault(message) => {
                    if self.handle.fault(message).await.is_err() {
                        break;
                    }
                }
                Capture::Closed => break,
            }
        }
        log::debug!("[pipeline] stopped, {} frames dropped", self.dropped);
    }
}

use super::*;
use crate::Generation;
use crate::gameplay::Move;
use crate::perception::Classifier;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TrySendError;

/// Cloneable entry point into a running [`Room`].
///
/// Perception calls [`Handle::observe`] once per frame; it never waits. If
/// the inbox is full the frame is dropped and [`RoomError::Busy`] returned.
/// Control calls (`reset`, `quit`, ...) wait for inbox space instead.
#[derive(Debug, Clone)]
pub struct Handle {
    inbox: Sender<Inbound>,
    generation: Arc<AtomicU64>,
    classifier: Arc<Classifier>,
}

impl Handle {
    pub(super) fn new(
        inbox: Sender<Inbound>,
        generation: Arc<AtomicU64>,
        classifier: Arc<Classifier>,
    ) -> Self {
        Self {
            inbox,
            generation,
            classifier,
        }
    }
    /// Round most recently started by the room.
    pub fn generation(&self) -> Generation {
        self.generation.load(Ordering::Acquire)
    }
    pub fn classify(&self, label: Option<&str>) -> Move {
        self.classifier.classify(label)
    }
    /// Submit a frame label observed during round `generation`.
    /// Labels that map to no move are not forwarded.
    pub fn classified(&self, generation: Generation, label: Option<&str>) -> Result<(), RoomError> {
        let gesture = self.classify(label);
        if gesture.is_none() {
            return Ok(());
        }
        self.inbox
            .try_send(Inbound::Gesture {
                generation,
                gesture,
            })
            .map_err(|e| match e {
                TrySendError::Full(_) => RoomError::Busy,
                TrySendError::Closed(_) => RoomError::Closed,
            })
    }
    /// Submit a frame label, tagged with the current round.
    pub fn observe(&self, label: Option<&str>) -> Result<(), RoomError> {
        self.classified(self.generation(), label)
    }
    pub async fn reset(&self) -> Result<(), RoomError> {
        self.send(Inbound::Reset).await
    }
    pub async fn quit(&self) -> Result<(), RoomError> {
        self.send(Inbound::Quit).await
    }
    pub async fn shutdown(&self) -> Result<(), RoomError> {
        self.send(Inbound::Shutdown).await
    }
    pub async fn fault(&self, message: impl Into<String>) -> Result<(), RoomError> {
        self.send(Inbound::Fault(message.into())).await
    }
    /// Registers a presentation subscriber. The first update received is the
    /// current snapshot.
    pub async fn subscribe(&self) -> Result<UnboundedReceiver<Update>, RoomError> {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        self.send(Inbound::Subscribe(tx)).await?;
        Ok(rx)
    }
    pub fn is_closed(&self) -> bool {
        self.inbox.is_closed()
    }
    async fn send(&self, msg: Inbound) -> Result<(), RoomError> {
        self.inbox.send(msg).await.map_err(|_| RoomError::Closed)
    }
}

use super::*;
use crate::Generation;
use crate::gameplay::Move;
use tokio::sync::mpsc::UnboundedSender;

/// Messages from handles into the room inbox.
#[derive(Debug)]
pub enum Inbound {
    /// A classified gesture, tagged with the round it was observed in.
    Gesture { generation: Generation, gesture: Move },
    /// Full match restart.
    Reset,
    /// Abandon the match and go back to the menu.
    Quit,
    /// Transient perception failure to pass on to presentation.
    Fault(String),
    /// Register a presentation subscriber.
    Subscribe(UnboundedSender<Update>),
    /// Tear the room down.
    Shutdown,
}

impl std::fmt::Display for Inbound {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Gesture {
                generation,
                gesture,
            } => write!(f, "gesture {} (#{})", gesture, generation),
            Self::Reset => write!(f, "reset"),
            Self::Quit => write!(f, "quit"),
            Self::Fault(message) => write!(f, "fault: {}", message),
            Self::Subscribe(_) => write!(f, "subscribe"),
            Self::Shutdown => write!(f, "shutdown"),
        }
    }
}

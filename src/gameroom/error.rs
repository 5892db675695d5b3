/// Errors returned by a [`super::Handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomError {
    /// The room has shut down. It will never emit again.
    Closed,
    /// The inbox is full and the frame was dropped.
    Busy,
}

impl std::fmt::Display for RoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "room closed"),
            Self::Busy => write!(f, "room inbox full"),
        }
    }
}

impl std::error::Error for RoomError {}

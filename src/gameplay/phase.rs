use crate::Seconds;
use serde::Deserialize;
use serde::Serialize;

/// Where the current round stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", content = "remaining", rename_all = "snake_case")]
pub enum Phase {
    /// No match running.
    #[default]
    Idle,
    /// Counting down; gestures are being collected.
    Countdown(Seconds),
    /// Countdown over, grace window before the round freezes. Still collecting.
    Resolving,
    /// Round decided, result on display.
    Resolved,
    /// A side reached the target. Only a reset leaves this phase.
    MatchOver,
}

impl Phase {
    /// True while classified gestures may still change the committed move.
    pub fn is_collecting(&self) -> bool {
        matches!(self, Self::Countdown(_) | Self::Resolving)
    }
    /// True once the match has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, Self::MatchOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Countdown(n) => write!(f, "countdown({})", n),
            Self::Resolving => write!(f, "resolving"),
            Self::Resolved => write!(f, "resolved"),
            Self::MatchOver => write!(f, "match over"),
        }
    }
}

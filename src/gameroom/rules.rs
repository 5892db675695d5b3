use crate::COUNTDOWN;
use crate::POINTS_TO_WIN;
use crate::Points;
use crate::Seconds;
use serde::Deserialize;
use serde::Serialize;

/// Which classified gesture a round keeps when the player changes hands
/// mid-countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Commit {
    /// Every recognized gesture replaces the previous one until the round freezes.
    #[default]
    Latest,
    /// The first recognized gesture sticks for the rest of the round.
    First,
}

impl TryFrom<&str> for Commit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" | "last" => Ok(Self::Latest),
            "first" => Ok(Self::First),
            _ => Err(format!("unknown commit policy: {}", s)),
        }
    }
}

impl std::fmt::Display for Commit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::First => write!(f, "first"),
        }
    }
}

/// Match rules fixed for the lifetime of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub points_to_win: Points,
    pub countdown: Seconds,
    pub commit: Commit,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            points_to_win: POINTS_TO_WIN,
            countdown: COUNTDOWN,
            commit: Commit::default(),
        }
    }
}

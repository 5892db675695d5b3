use serde::Deserialize;
use serde::Serialize;

/// A hand shape thrown in a round.
///
/// `None` is the placeholder for "nothing committed yet". It is a normal
/// value while a round is running and doubles as the forfeit signal when a
/// round resolves without any recognized gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    #[default]
    None,
}

impl Move {
    /// The three real throws, in display order.
    pub const THROWS: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// True if no throw is committed.
    pub fn is_none(&self) -> bool {
        matches!(self, Move::None)
    }
    /// True for Rock, Paper or Scissors.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }
    /// The throw this one defeats.
    pub fn beats(&self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Scissors),
            Move::Paper => Some(Move::Rock),
            Move::Scissors => Some(Move::Paper),
            Move::None => None,
        }
    }
    /// Single-character symbol for compact rendering.
    pub fn symbol(&self) -> &'static str {
        match self {
            Move::Rock => "R",
            Move::Paper => "P",
            Move::Scissors => "S",
            Move::None => "-",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Move::Rock => write!(f, "Rock"),
            Move::Paper => write!(f, "Paper"),
            Move::Scissors => write!(f, "Scissors"),
            Move::None => write!(f, "nothing"),
        }
    }
}

/// Error for text that names no move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError(String);

impl std::fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "not a move: {:?}", self.0)
    }
}

impl std::error::Error for ParseMoveError {}

/// Case-insensitive names and one-letter shorthands ("r", "p", "s", "-").
impl TryFrom<&str> for Move {
    type Error = ParseMoveError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            "none" | "-" => Ok(Move::None),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}

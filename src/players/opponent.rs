use crate::gameplay::Move;

/// Source of the computer's throw for each round.
///
/// Called exactly once per round, at the resolve instant, so an
/// implementation never sees the player's move before choosing.
/// Implementations must return Rock, Paper or Scissors, never `None`.
pub trait Opponent: Send {
    fn next(&mut self) -> Move;
}


use super::*;
use crate::Generation;
use serde::Serialize;

/// Externally observable state of a match at one instant.
///
/// A new snapshot is produced on every transition; consumers replace their
/// view wholesale instead of patching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    generation: Generation,
    phase: Phase,
    player: Move,
    bot: Move,
    score: Score,
    message: String,
}

impl Snapshot {
    pub fn new(
        generation: Generation,
        phase: Phase,
        player: Move,
        bot: Move,
        score: Score,
        message: String,
    ) -> Self {
        Self {
            generation,
            phase,
            player,
            bot,
            score,
            message,
        }
    }
    /// Round this snapshot belongs to. Perception frames should carry it.
    pub fn generation(&self) -> Generation {
        self.generation
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Committed player move so far (final once resolved).
    pub fn player(&self) -> Move {
        self.player
    }
    /// Bot move; `None` until the round resolves.
    pub fn bot(&self) -> Move {
        self.bot
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "#{} {:<14} {} | you {} vs bot {} | {}",
            self.generation,
            self.phase.to_string(),
            self.score,
            self.player.symbol(),
            self.bot.symbol(),
            self.message
        )
    }
}

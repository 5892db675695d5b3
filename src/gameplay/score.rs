use super::*;
use crate::POINTS_TO_WIN;
use crate::Points;
use serde::Deserialize;
use serde::Serialize;

/// Which side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Bot,
}

/// Running match score against a fixed target.
///
/// Values are immutable: [`Score::apply`] returns the next score and leaves
/// the current one untouched, so counters only ever grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    player: Points,
    bot: Points,
    target: Points,
}

impl Score {
    /// Fresh 0:0 score racing to `target` round wins.
    pub fn new(target: Points) -> Self {
        Self {
            player: 0,
            bot: 0,
            target,
        }
    }
    pub fn player(&self) -> Points {
        self.player
    }
    pub fn bot(&self) -> Points {
        self.bot
    }
    pub fn target(&self) -> Points {
        self.target
    }
    /// Score after a round ends with `outcome`.
    pub fn apply(&self, outcome: Outcome) -> Self {
        match outcome {
            o if o.is_player_point() => Self {
                player: self.player.saturating_add(1),
                ..*self
            },
            o if o.is_bot_point() => Self {
                bot: self.bot.saturating_add(1),
                ..*self
            },
            _ => *self,
        }
    }
    /// True once either side has reached the target.
    pub fn is_over(&self) -> bool {
        self.player >= self.target || self.bot >= self.target
    }
    /// The side that reached the target, if any.
    pub fn winner(&self) -> Option<Side> {
        if self.player >= self.target {
            Some(Side::Player)
        } else if self.bot >= self.target {
            Some(Side::Bot)
        } else {
            None
        }
    }
    /// Same target, counters back to zero.
    pub fn cleared(&self) -> Self {
        Self::new(self.target)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new(POINTS_TO_WIN)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "You {} : {} Bot", self.player, self.bot)
    }
}

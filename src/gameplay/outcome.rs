use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Result of a single round, seen from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerWins,
    BotWins,
    Draw,
    /// No gesture was committed before the round froze. Scores like a bot win.
    PlayerForfeits,
}

impl Outcome {
    /// Decides a round. Rules apply in priority order:
    ///
    /// 1. no player move forfeits, whatever the bot threw
    /// 2. equal throws draw
    /// 3. otherwise the cyclic dominance table picks the winner
    ///
    /// A bot `None` against a real throw falls through to rule 3 and goes
    /// to the bot, since the player's throw defeats nothing there.
    pub fn resolve(player: Move, bot: Move) -> Self {
        if player.is_none() {
            Self::PlayerForfeits
        } else if player == bot {
            Self::Draw
        } else if player.beats() == Some(bot) {
            Self::PlayerWins
        } else {
            Self::BotWins
        }
    }
    /// True when the round adds a point to the player.
    pub fn is_player_point(&self) -> bool {
        matches!(self, Self::PlayerWins)
    }
    /// True when the round adds a point to the bot.
    pub fn is_bot_point(&self) -> bool {
        matches!(self, Self::BotWins | Self::PlayerForfeits)
    }
    /// Status line shown after the round resolves.
    pub fn message(&self) -> &'static str {
        match self {
            Self::PlayerWins => "You won the round!",
            Self::BotWins => "The bot won the round.",
            Self::Draw => "Draw!",
            Self::PlayerForfeits => "No gesture shown! Point for the bot.",
        }
    }
}

/// Free-function form of [`Outcome::resolve`].
pub fn resolve(player: Move, bot: Move) -> Outcome {
    Outcome::resolve(player, bot)
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PlayerWins => write!(f, "player wins"),
            Self::BotWins => write!(f, "bot wins"),
            Self::Draw => write!(f, "draw"),
            Self::PlayerForfeits => write!(f, "player forfeits"),
        }
    }
}

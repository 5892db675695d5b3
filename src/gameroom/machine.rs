use super::*;
use crate::Generation;
use crate::Seconds;
use crate::gameplay::*;
use crate::players::Opponent;

const IDLE: &str = "Press play to start";
const SHOW: &str = "Show!";
const VICTORY: &str = "VICTORY!";
const DEFEAT: &str = "DEFEAT!";

/// What applying an event did to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Tagged with a generation other than the current one. Dropped.
    Stale,
    /// Valid but meaningless in the current phase, or no observable change.
    Ignored,
    /// State moved within the current round.
    Advanced,
    /// A round began under this generation and needs a schedule.
    Started(Generation),
    /// The round was decided and the match goes on.
    Resolved(Outcome),
    /// The round was decided and ended the match.
    Finished(Outcome),
    /// The match was abandoned.
    Stopped,
}

impl Transition {
    /// True if the machine's observable state changed.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Stale | Self::Ignored)
    }
}

/// Round orchestration core.
///
/// Owns the phase, the committed player move and the score. Consumes
/// gestures and schedule signals one at a time and never blocks; time and
/// concurrency live in [`Room`], which feeds this machine from its inbox.
///
/// Every round runs under its own generation. Events carrying any other
/// generation are stale and leave the machine untouched.
pub struct Machine {
    rules: Rules,
    opponent: Box<dyn Opponent>,
    generation: Generation,
    phase: Phase,
    player: Move,
    bot: Move,
    score: Score,
    message: String,
}

impl Machine {
    pub fn new(rules: Rules, opponent: Box<dyn Opponent>) -> Self {
        Self {
            rules,
            opponent,
            generation: 0,
            phase: Phase::Idle,
            player: Move::None,
            bot: Move::None,
            score: Score::new(rules.points_to_win),
            message: IDLE.to_string(),
        }
    }
    pub fn rules(&self) -> Rules {
        self.rules
    }
    pub fn generation(&self) -> Generation {
        self.generation
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Committed player move for the round in progress.
    pub fn player(&self) -> Move {
        self.player
    }
    pub fn bot(&self) -> Move {
        self.bot
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.generation,
            self.phase,
            self.player,
            self.bot,
            self.score,
            self.message.clone(),
        )
    }
}

impl Machine {
    /// Full match restart from any phase: scores zeroed, first round begins.
    pub fn reset(&mut self) -> Transition {
        log::info!("[machine] new match to {}", self.rules.points_to_win);
        self.score = self.score.cleared();
        self.begin()
    }
    /// Abandon the match. Pending signals and gestures become stale.
    pub fn quit(&mut self) -> Transition {
        log::info!("[machine] match abandoned at {}", self.score);
        self.generation += 1;
        self.phase = Phase::Idle;
        self.player = Move::None;
        self.bot = Move::None;
        self.message = IDLE.to_string();
        Transition::Stopped
    }
    /// A classified gesture observed during round `generation`.
    ///
    /// Only counts while the round is collecting. `None` never clears a
    /// committed move; otherwise the [`Commit`] policy decides whether the
    /// new gesture replaces the committed one.
    pub fn gesture(&mut self, generation: Generation, gesture: Move) -> Transition {
        if generation != self.generation {
            return Transition::Stale;
        }
        if !self.phase.is_collecting() || gesture.is_none() {
            return Transition::Ignored;
        }
        match self.rules.commit {
            Commit::First if self.player.is_some() => Transition::Ignored,
            _ if self.player == gesture => Transition::Ignored,
            _ => {
                log::debug!("[machine] #{} committed {}", generation, gesture);
                self.player = gesture;
                Transition::Advanced
            }
        }
    }
    /// A schedule signal for round `generation`.
    pub fn signal(&mut self, generation: Generation, signal: Signal) -> Transition {
        if generation != self.generation {
            return Transition::Stale;
        }
        match (self.phase, signal) {
            (Phase::Countdown(k), Signal::Tick(r)) if r < k => {
                self.phase = Phase::Countdown(r);
                self.message = Self::countdown(r);
                Transition::Advanced
            }
            (Phase::Countdown(0), Signal::Expire) => {
                self.phase = Phase::Resolving;
                Transition::Advanced
            }
            (Phase::Resolving, Signal::Resolve) => self.resolve(),
            (Phase::Resolved, Signal::Next) => self.begin(),
            (phase, signal) => {
                log::debug!("[machine] {} ignored in {}", signal, phase);
                Transition::Ignored
            }
        }
    }
}

impl Machine {
    fn begin(&mut self) -> Transition {
        let n = self.rules.countdown;
        self.generation += 1;
        self.phase = Phase::Countdown(n);
        self.player = Move::None;
        self.bot = Move::None;
        self.message = Self::countdown(n);
        log::debug!("[machine] #{} round begins", self.generation);
        Transition::Started(self.generation)
    }
    /// The freeze point. The committed move is final from here on.
    fn resolve(&mut self) -> Transition {
        self.bot = self.opponent.next();
        let outcome = Outcome::resolve(self.player, self.bot);
        self.score = self.score.apply(outcome);
        log::info!(
            "[machine] #{} {} vs {}: {} ({})",
            self.generation,
            self.player,
            self.bot,
            outcome,
            self.score
        );
        match self.score.winner() {
            Some(side) => {
                self.phase = Phase::MatchOver;
                self.message = match side {
                    Side::Player => VICTORY,
                    Side::Bot => DEFEAT,
                }
                .to_string();
                Transition::Finished(outcome)
            }
            None => {
                self.phase = Phase::Resolved;
                self.message = outcome.message().to_string();
                Transition::Resolved(outcome)
            }
        }
    }
    fn countdown(n: Seconds) -> String {
        match n {
            0 => SHOW.to_string(),
            n => n.to_string(),
        }
    }
}

impl std::fmt::Debug for Machine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Machine")
            .field("rules", &self.rules)
            .field("generation", &self.generation)
            .field("phase", &self.phase)
            .field("player", &self.player)
            .field("bot", &self.bot)
            .field("score", &self.score)
            .finish()
    }
}

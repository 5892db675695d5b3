use crate::Generation;
use crate::NEXT_ROUND_DELAY_MS;
use crate::RESOLVE_DELAY_MS;
use crate::Seconds;
use crate::TICK_INTERVAL_MS;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/// Round pacing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Spacing between countdown ticks.
    pub tick_ms: u64,
    /// Grace window from countdown expiry to the resolve instant.
    pub grace_ms: u64,
    /// Result display time before the next round starts.
    pub pause_ms: u64,
}

impl Timing {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tick_ms: TICK_INTERVAL_MS,
            grace_ms: RESOLVE_DELAY_MS,
            pause_ms: NEXT_ROUND_DELAY_MS,
        }
    }
}

/// Phase-advance signal emitted on a round's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// One countdown second elapsed; carries the seconds now remaining.
    Tick(Seconds),
    /// Final countdown tick: the window at zero has elapsed.
    Expire,
    /// Freeze the round and decide it.
    Resolve,
    /// Start the following round.
    Next,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Tick(n) => write!(f, "tick({})", n),
            Self::Expire => write!(f, "expire"),
            Self::Resolve => write!(f, "resolve"),
            Self::Next => write!(f, "next"),
        }
    }
}

/// A signal due at an offset from the round start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    at: Duration,
    generation: Generation,
    signal: Signal,
}

impl Step {
    /// Offset from the start of the round.
    pub fn at(&self) -> Duration {
        self.at
    }
    pub fn generation(&self) -> Generation {
        self.generation
    }
    pub fn signal(&self) -> Signal {
        self.signal
    }
}

/// Lazy timeline for one round.
///
/// With countdown `n`: `n` ticks one interval apart counting down to zero,
/// `Expire` one interval after the last tick, `Resolve` after the grace
/// window, `Next` after the pause. Whether `Next` is acted upon is the state
/// machine's call; the schedule knows nothing about scores.
#[derive(Debug, Clone)]
pub struct Schedule {
    generation: Generation,
    countdown: Seconds,
    timing: Timing,
    cursor: u64,
}

impl Schedule {
    pub fn new(generation: Generation, countdown: Seconds, timing: Timing) -> Self {
        Self {
            generation,
            countdown,
            timing,
            cursor: 0,
        }
    }
    pub fn generation(&self) -> Generation {
        self.generation
    }
    /// Offset of the countdown's end, or `None` if it does not fit a `Duration`.
    fn expiry(&self) -> Option<Duration> {
        self.timing.tick().checked_mul(self.countdown.checked_add(1)?)
    }
}

/// Offsets that overflow end the schedule early.
impl Iterator for Schedule {
    type Item = Step;
    fn next(&mut self) -> Option<Step> {
        let n = u64::from(self.countdown);
        let i = self.cursor;
        let (at, signal) = match i.checked_sub(n) {
            None => (
                self.timing.tick().checked_mul((i + 1) as u32)?,
                Signal::Tick((n - i - 1) as Seconds),
            ),
            Some(0) => (self.expiry()?, Signal::Expire),
            Some(1) => (
                self.expiry()?.checked_add(self.timing.grace())?,
                Signal::Resolve,
            ),
            Some(2) => (
                self.expiry()?
                    .checked_add(self.timing.grace())?
                    .checked_add(self.timing.pause())?,
                Signal::Next,
            ),
            Some(_) => return None,
        };
        self.cursor += 1;
        Some(Step {
            at,
            generation: self.generation,
            signal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }
    #[test]
    fn default_timeline() {
        let steps = Schedule::new(7, 3, Timing::default()).collect::<Vec<_>>();
        let expected = vec![
            (ms(1000), Signal::Tick(2)),
            (ms(2000), Signal::Tick(1)),
            (ms(3000), Signal::Tick(0)),
            (ms(4000), Signal::Expire),
            (ms(4500), Signal::Resolve),
            (ms(6500), Signal::Next),
        ];
        assert_eq!(
            steps.iter().map(|s| (s.at(), s.signal())).collect::<Vec<_>>(),
            expected
        );
        assert!(steps.iter().all(|s| s.generation() == 7));
    }
    #[test]
    fn offsets_strictly_increase() {
        let timing = Timing {
            tick_ms: 250,
            grace_ms: 100,
            pause_ms: 1,
        };
        let steps = Schedule::new(1, 5, timing).collect::<Vec<_>>();
        assert_eq!(steps.len(), 5 + 3);
        assert!(steps.windows(2).all(|w| w[0].at() < w[1].at()));
    }
    #[test]
    fn zero_countdown_expires_after_one_interval() {
        let steps = Schedule::new(1, 0, Timing::default())
            .map(|s| s.signal())
            .collect::<Vec<_>>();
        assert_eq!(steps, vec![Signal::Expire, Signal::Resolve, Signal::Next]);
    }
    #[test]
    fn overflowing_offsets_end_the_schedule() {
        let timing = Timing {
            tick_ms: u64::MAX,
            grace_ms: 0,
            pause_ms: 0,
        };
        let steps = Schedule::new(1, 1000, timing).collect::<Vec<_>>();
        assert_eq!(steps.len(), 1000);
        assert_eq!(steps.last().map(Step::signal), Some(Signal::Tick(0)));
        let mut huge = Schedule::new(1, Seconds::MAX, Timing::default());
        assert_eq!(huge.next().map(|s| s.signal()), Some(Signal::Tick(Seconds::MAX - 1)));
        assert_eq!(huge.next().map(|s| s.at()), Some(ms(2000)));
    }
    #[test]
    fn exhausted_schedule_stays_empty() {
        let mut schedule = Schedule::new(1, 1, Timing::default());
        assert_eq!(schedule.by_ref().count(), 4);
        assert_eq!(schedule.next(), None);
    }
}

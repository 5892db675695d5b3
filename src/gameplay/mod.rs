//! Pure match data: throws, round outcomes, scores, phases and snapshots.
//! Nothing here touches time, channels or randomness.
mod moves;
mod outcome;
mod phase;
mod score;
mod snapshot;

pub use moves::*;
pub use outcome::*;
pub use phase::*;
pub use score::*;
pub use snapshot::*;

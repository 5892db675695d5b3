//! Computer opponents.
mod opponent;
mod random;
mod scripted;

pub use opponent::*;
pub use random::*;
pub use scripted::*;

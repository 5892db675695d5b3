//! Round orchestration: the pure state machine, its schedule and timer,
//! and the room actor that serializes every event for one match.
mod error;
mod event;
mod handle;
mod machine;
mod message;
mod room;
mod rules;
mod schedule;
mod timer;

pub use error::*;
pub use event::*;
pub use handle::*;
pub use machine::*;
pub use message::*;
pub use room::*;
pub use rules::*;
pub use schedule::*;
pub use timer::*;

//! Everything between the camera and the room: recognizer output, the label
//! table that turns it into throws, and the pump that feeds a room.
mod classifier;
mod gestures;
mod pipeline;
mod recognition;
mod sensor;
mod simulated;

pub use classifier::*;
pub use gestures::*;
pub use pipeline::*;
pub use recognition::*;
pub use sensor::*;
pub use simulated::*;

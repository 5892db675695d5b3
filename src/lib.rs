//! Real-time rock-paper-scissors against a computer opponent, driven by a
//! stream of classified hand gestures.
//!
//! A recognition pipeline delivers gesture labels at whatever rate the camera
//! produces them, while a wall-clock schedule drives each round's countdown.
//! The [`gameroom::Room`] actor merges both into one ordered sequence of
//! [`gameplay::Snapshot`]s.
//!
//! ## Modules
//!
//! - [`gameplay`]: moves, outcomes, scores, phases and snapshots (pure data)
//! - [`players`]: the bot opponent
//! - [`perception`]: label classification and the recognition pipeline
//! - [`gameroom`]: scheduler, state machine, timer and the room actor
//! - [`config`]: runtime configuration
pub mod config;
pub mod gameplay;
pub mod gameroom;
pub mod perception;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Round-win counter for either side of the match.
pub type Points = u8;
/// Whole seconds left on the round countdown.
pub type Seconds = u32;
/// Monotonic tag separating the current round from superseded ones.
pub type Generation = u64;

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Round wins needed to take the match.
pub const POINTS_TO_WIN: Points = 3;
/// Countdown length at the start of every round.
pub const COUNTDOWN: Seconds = 3;
/// Longest countdown a configuration may ask for.
pub const MAX_COUNTDOWN: Seconds = 60;

// ============================================================================
// ROUND TIMING
// The countdown ticks once per interval; after the final tick a short grace
// window lets the recognizer land one last classification before the round
// is frozen, then the result stays on screen before the next round.
// ============================================================================
/// Spacing between countdown ticks (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 1000;
/// Grace window between the countdown closing and the resolve instant (milliseconds).
pub const RESOLVE_DELAY_MS: u64 = 500;
/// Pause between a resolved round and the next countdown (milliseconds).
pub const NEXT_ROUND_DELAY_MS: u64 = 2000;
/// Upper bound on any configured delay (milliseconds).
pub const MAX_DELAY_MS: u64 = 60 * 60 * 1000;

// ============================================================================
// PERCEPTION
// Default label table of the hand gesture recognizer.
// ============================================================================
/// Labels read as Paper.
pub const PAPER_LABELS: &[&str] = &["Open_Palm"];
/// Labels read as Rock.
pub const ROCK_LABELS: &[&str] = &["Closed_Fist", "Thumb_Down"];
/// Labels read as Scissors.
pub const SCISSORS_LABELS: &[&str] = &["Victory"];
/// Recognizer confidence below which a frame counts as no gesture.
pub const MIN_CONFIDENCE: f32 = 0.5;
/// Nominal camera frame rate for simulated sensors.
pub const FRAME_RATE: u64 = 30;

// ============================================================================
// RUNTIME
// ============================================================================
/// Room inbox capacity. Perception frames beyond this are dropped, never queued.
pub const INBOX_CAPACITY: usize = 256;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so log lines do not interleave with the rendered game.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "cli")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("violent interrupt received, exiting immediately");
        std::process::exit(0);
    });
}

use crate::PAPER_LABELS;
use crate::ROCK_LABELS;
use crate::SCISSORS_LABELS;
use serde::Deserialize;
use serde::Serialize;

/// Recognizer labels that count as each throw.
/// Several labels may name the same throw; anything unlisted reads as no throw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gestures {
    pub rock: Vec<String>,
    pub paper: Vec<String>,
    pub scissors: Vec<String>,
}

impl Default for Gestures {
    fn default() -> Self {
        let owned = |labels: &[&str]| labels.iter().map(|s| s.to_string()).collect();
        Self {
            rock: owned(ROCK_LABELS),
            paper: owned(PAPER_LABELS),
            scissors: owned(SCISSORS_LABELS),
        }
    }
}

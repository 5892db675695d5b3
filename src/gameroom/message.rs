use crate::gameplay::Snapshot;
use serde::Serialize;

/// Messages from the room to presentation subscribers.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Update {
    /// Complete state after a transition. Replaces any previous snapshot.
    Snapshot(Snapshot),
    /// Transient notification; does not change match state.
    Notice { message: String },
}

impl Update {
    pub fn notice(message: impl Into<String>) -> Self {
        Self::Notice {
            message: message.into(),
        }
    }
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Self::Snapshot(s) => Some(s),
            Self::Notice { .. } => None,
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize update")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::*;
    #[test]
    fn snapshot_json_shape() {
        let update = Update::Snapshot(Snapshot::new(
            2,
            Phase::Countdown(1),
            Move::Scissors,
            Move::None,
            Score::new(3),
            "1".into(),
        ));
        let json = serde_json::from_str::<serde_json::Value>(&update.to_json()).unwrap();
        assert_eq!(json["type"], "snapshot");
        assert_eq!(json["generation"], 2);
        assert_eq!(json["phase"]["phase"], "countdown");
        assert_eq!(json["phase"]["remaining"], 1);
        assert_eq!(json["player"], "scissors");
        assert_eq!(json["bot"], "none");
        assert_eq!(json["score"]["target"], 3);
    }
    #[test]
    fn notice_json_shape() {
        let json = Update::notice("camera lost").to_json();
        assert_eq!(json, r#"{"type":"notice","message":"camera lost"}"#);
    }
}

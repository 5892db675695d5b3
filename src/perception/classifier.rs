use super::*;
use crate::gameplay::Move;
use std::collections::HashMap;

/// Errors in a gesture label table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureError {
    /// The same label is listed under two different throws.
    Ambiguous { label: String, first: Move, second: Move },
    /// An empty label would swallow frames with no recognition at all.
    Blank(Move),
}

impl std::fmt::Display for GestureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ambiguous {
                label,
                first,
                second,
            } => write!(f, "label {:?} maps to both {} and {}", label, first, second),
            Self::Blank(m) => write!(f, "blank label listed for {}", m),
        }
    }
}

impl std::error::Error for GestureError {}

/// Maps raw recognizer labels onto throws.
///
/// Unknown, empty and absent labels all classify as [`Move::None`]: a frame
/// without a recognizable hand is routine, not a failure.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: HashMap<String, Move>,
}

impl Classifier {
    pub fn classify(&self, label: Option<&str>) -> Move {
        label
            .and_then(|l| self.table.get(l))
            .copied()
            .unwrap_or(Move::None)
    }
    /// Number of distinct labels recognized.
    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl TryFrom<&Gestures> for Classifier {
    type Error = GestureError;
    fn try_from(gestures: &Gestures) -> Result<Self, Self::Error> {
        let mut table = HashMap::new();
        let sets = [
            (Move::Rock, &gestures.rock),
            (Move::Paper, &gestures.paper),
            (Move::Scissors, &gestures.scissors),
        ];
        for (throw, labels) in sets {
            for label in labels {
                if label.is_empty() {
                    return Err(GestureError::Blank(throw));
                }
                match table.insert(label.clone(), throw) {
                    Some(prior) if prior != throw => {
                        return Err(GestureError::Ambiguous {
                            label: label.clone(),
                            first: prior,
                            second: throw,
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(Self { table })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::try_from(&Gestures::default()).expect("default gesture table is unambiguous")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_table() {
        let c = Classifier::default();
        assert_eq!(c.classify(Some("Open_Palm")), Move::Paper);
        assert_eq!(c.classify(Some("Closed_Fist")), Move::Rock);
        assert_eq!(c.classify(Some("Thumb_Down")), Move::Rock);
        assert_eq!(c.classify(Some("Victory")), Move::Scissors);
        assert_eq!(c.len(), 4);
    }
    #[test]
    fn unknown_is_none() {
        let c = Classifier::default();
        assert_eq!(c.classify(Some("Thumb_Up")), Move::None);
        assert_eq!(c.classify(Some("victory")), Move::None);
        assert_eq!(c.classify(Some("")), Move::None);
        assert_eq!(c.classify(None), Move::None);
    }
    #[test]
    fn ambiguous_table_rejected() {
        let gestures = Gestures {
            rock: vec!["Closed_Fist".into()],
            paper: vec!["Closed_Fist".into()],
            scissors: vec![],
        };
        assert!(matches!(
            Classifier::try_from(&gestures),
            Err(GestureError::Ambiguous { .. })
        ));
    }
    #[test]
    fn blank_label_rejected() {
        let gestures = Gestures {
            scissors: vec![String::new()],
            ..Gestures::default()
        };
        assert_eq!(
            Classifier::try_from(&gestures).unwrap_err(),
            GestureError::Blank(Move::Scissors)
        );
    }
    #[test]
    fn duplicate_within_one_throw_is_fine() {
        let gestures = Gestures {
            rock: vec!["Closed_Fist".into(), "Closed_Fist".into()],
            ..Gestures::default()
        };
        assert!(Classifier::try_from(&gestures).is_ok());
    }
}

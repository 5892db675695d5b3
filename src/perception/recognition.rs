use crate::MIN_CONFIDENCE;
use serde::Deserialize;
use serde::Serialize;

/// One candidate gesture for a hand, with the recognizer's confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub score: f32,
}

/// Recognizer output for one camera frame: for every detected hand, its
/// candidate gestures ranked best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    hands: Vec<Vec<Category>>,
}

impl Recognition {
    pub fn new(hands: Vec<Vec<Category>>) -> Self {
        Self { hands }
    }
    /// A frame with no hand in view.
    pub fn empty() -> Self {
        Self::default()
    }
    /// A frame with one hand and a single candidate.
    pub fn single(name: &str, score: f32) -> Self {
        Self::new(vec![vec![Category {
            name: name.to_string(),
            score,
        }]])
    }
    /// Best label of the first detected hand. Other hands are ignored, and
    /// so is a best guess scored under [`MIN_CONFIDENCE`].
    pub fn top(&self) -> Option<&str> {
        self.hands
            .first()
            .and_then(|hand| hand.first())
            .filter(|c| c.score >= MIN_CONFIDENCE)
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn top_takes_first_hand_first_category() {
        let frame = Recognition::new(vec![
            vec![
                Category {
                    name: "Victory".into(),
                    score: 0.8,
                },
                Category {
                    name: "Open_Palm".into(),
                    score: 0.1,
                },
            ],
            vec![Category {
                name: "Closed_Fist".into(),
                score: 0.99,
            }],
        ]);
        assert_eq!(frame.top(), Some("Victory"));
    }
    #[test]
    fn empty_frames_have_no_label() {
        assert_eq!(Recognition::empty().top(), None);
        assert_eq!(Recognition::new(vec![vec![]]).top(), None);
        assert_eq!(Recognition::single("", 0.5).top(), None);
    }
    #[test]
    fn unsure_frames_have_no_label() {
        assert_eq!(Recognition::single("Victory", 0.49).top(), None);
        assert_eq!(Recognition::single("Victory", MIN_CONFIDENCE).top(), Some("Victory"));
        let frame = Recognition::new(vec![vec![
            Category {
                name: "Open_Palm".into(),
                score: 0.3,
            },
            Category {
                name: "Victory".into(),
                score: 0.2,
            },
        ]]);
        assert_eq!(frame.top(), None);
    }
}

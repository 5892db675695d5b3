use super::*;
use crate::gameplay::Move;

/// Opponent that replays a fixed list of throws, wrapping around.
#[derive(Debug, Clone)]
pub struct Scripted {
    throws: Vec<Move>,
    cursor: usize,
}

impl Scripted {
    /// `None` entries are skipped; an empty script throws Rock forever.
    pub fn new(throws: impl IntoIterator<Item = Move>) -> Self {
        let throws = throws
            .into_iter()
            .filter(Move::is_some)
            .collect::<Vec<_>>();
        Self { throws, cursor: 0 }
    }
}

impl Opponent for Scripted {
    fn next(&mut self) -> Move {
        let throw = self
            .throws
            .get(self.cursor % self.throws.len().max(1))
            .copied()
            .unwrap_or(Move::Rock);
        self.cursor += 1;
        throw
    }
}

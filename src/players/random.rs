use super::*;
use crate::gameplay::Move;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// CPU opponent that throws uniformly at random.
/// Seed it for reproducible matches; the default draws its seed from the
/// process-wide generator.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: SmallRng,
}

impl RandomBot {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Opponent for RandomBot {
    fn next(&mut self) -> Move {
        let ref mut rng = self.rng;
        Move::THROWS
            .choose(rng)
            .copied()
            .expect("non empty throw table")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn seeded_bots_agree() {
        let mut a = RandomBot::seeded(7);
        let mut b = RandomBot::seeded(7);
        for _ in 0..64 {
            assert_eq!(a.next(), b.next());
        }
    }
    #[test]
    fn covers_all_throws_and_never_none() {
        let mut bot = RandomBot::seeded(42);
        let mut seen = [0usize; 3];
        for _ in 0..3000 {
            match bot.next() {
                Move::Rock => seen[0] += 1,
                Move::Paper => seen[1] += 1,
                Move::Scissors => seen[2] += 1,
                Move::None => panic!("bot threw nothing"),
            }
        }
        assert!(seen.iter().all(|&n| n > 800), "{:?}", seen);
    }
}

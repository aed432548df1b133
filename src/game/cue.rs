use rand::{Rng, SeedableRng, rngs::StdRng};

use super::direction::Direction;

/// Picks the next cue uniformly among the four directions.
///
/// The previous cue is not excluded, so the same direction can come up twice
/// in a row.
#[derive(Debug)]
pub struct CueSequencer {
    rng: StdRng,
}

impl CueSequencer {
    /// Sequencer seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequencer, handy for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the next cue.
    pub fn next_cue(&mut self) -> Direction {
        Direction::ALL[self.rng.random_range(0..Direction::ALL.len())]
    }
}

impl Default for CueSequencer {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn seeded_sequencers_agree() {
        let mut a = CueSequencer::seeded(7);
        let mut b = CueSequencer::seeded(7);
        for _ in 0..32 {
            assert_eq!(a.next_cue(), b.next_cue());
        }
    }

    #[test]
    fn every_direction_comes_up() {
        let mut sequencer = CueSequencer::seeded(42);
        let mut seen: HashMap<Direction, usize> = HashMap::new();
        for _ in 0..400 {
            *seen.entry(sequencer.next_cue()).or_default() += 1;
        }
        assert_eq!(seen.len(), 4);
        assert!(seen.values().all(|count| *count > 50));
    }
}

use serde::{Deserialize, Serialize};

/// Cumulative points and attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCounts {
    /// Correct presses.
    pub points: u64,
    /// All recognised presses, correct or not.
    pub attempts: u64,
}

impl ScoreCounts {
    /// Build a counts pair.
    pub fn new(points: u64, attempts: u64) -> Self {
        Self { points, attempts }
    }
}

/// Local score buffer plus the last values the remote store acknowledged.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    current: ScoreCounts,
    acknowledged: ScoreCounts,
    sync_in_flight: bool,
}

impl ScoreBoard {
    /// Seed the board from a persisted profile. The seed counts as acknowledged.
    ///
    /// A profile with fewer attempts than points is repaired by raising the
    /// attempts so `points <= attempts` holds from the start.
    pub fn seeded(seed: ScoreCounts) -> Self {
        let seed = ScoreCounts {
            attempts: seed.attempts.max(seed.points),
            ..seed
        };
        Self {
            current: seed,
            acknowledged: seed,
            sync_in_flight: false,
        }
    }

    /// Current local counts.
    pub fn counts(&self) -> ScoreCounts {
        self.current
    }

    /// Correct presses so far.
    pub fn points(&self) -> u64 {
        self.current.points
    }

    /// Recognised presses so far.
    pub fn attempts(&self) -> u64 {
        self.current.attempts
    }

    /// Last counts confirmed by the remote store.
    pub fn acknowledged(&self) -> ScoreCounts {
        self.acknowledged
    }

    /// Record a correct press.
    pub fn record_hit(&mut self) {
        self.current.points += 1;
        self.current.attempts += 1;
    }

    /// Record an incorrect press.
    pub fn record_miss(&mut self) {
        self.current.attempts += 1;
    }

    /// Counts that still need pushing, or `None` when the remote is up to date.
    pub fn pending(&self) -> Option<ScoreCounts> {
        (self.current != self.acknowledged).then_some(self.current)
    }

    /// Whether a sync attempt currently holds the lock.
    pub fn sync_in_flight(&self) -> bool {
        self.sync_in_flight
    }

    /// Take the sync lock. Returns `false` if another attempt already holds it.
    pub fn begin_sync(&mut self) -> bool {
        if self.sync_in_flight {
            return false;
        }
        self.sync_in_flight = true;
        true
    }

    /// Release the sync lock, recording `sent` as acknowledged when the push succeeded.
    ///
    /// `sent` is clamped to the local counts so the remote can never appear ahead.
    pub fn finish_sync(&mut self, sent: Option<ScoreCounts>) {
        if let Some(sent) = sent {
            self.acknowledged = ScoreCounts {
                points: sent.points.min(self.current.points),
                attempts: sent.attempts.min(self.current.attempts),
            };
        }
        self.sync_in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_and_misses_keep_points_below_attempts() {
        let mut board = ScoreBoard::default();
        board.record_hit();
        board.record_miss();
        board.record_miss();
        board.record_hit();
        assert_eq!(board.counts(), ScoreCounts::new(2, 4));
        assert!(board.points() <= board.attempts());
    }

    #[test]
    fn seed_is_acknowledged() {
        let board = ScoreBoard::seeded(ScoreCounts::new(8, 10));
        assert_eq!(board.acknowledged(), ScoreCounts::new(8, 10));
        assert_eq!(board.pending(), None);
    }

    #[test]
    fn inconsistent_seed_is_repaired() {
        let board = ScoreBoard::seeded(ScoreCounts::new(5, 3));
        assert_eq!(board.counts(), ScoreCounts::new(5, 5));
    }

    #[test]
    fn sync_lock_is_exclusive() {
        let mut board = ScoreBoard::default();
        assert!(board.begin_sync());
        assert!(!board.begin_sync());
        board.finish_sync(None);
        assert!(!board.sync_in_flight());
        assert!(board.begin_sync());
    }

    #[test]
    fn acknowledging_sent_counts_keeps_later_presses_pending() {
        let mut board = ScoreBoard::seeded(ScoreCounts::new(8, 10));
        board.record_hit();
        board.record_hit();
        board.record_miss();
        board.record_miss();
        let sent = board.pending().unwrap();
        assert_eq!(sent, ScoreCounts::new(10, 14));

        assert!(board.begin_sync());
        board.record_miss();
        board.finish_sync(Some(sent));

        assert_eq!(board.acknowledged(), sent);
        assert_eq!(board.pending(), Some(ScoreCounts::new(10, 15)));
    }

    #[test]
    fn failed_sync_leaves_acknowledged_untouched() {
        let mut board = ScoreBoard::seeded(ScoreCounts::new(1, 1));
        board.record_hit();
        assert!(board.begin_sync());
        board.finish_sync(None);
        assert_eq!(board.acknowledged(), ScoreCounts::new(1, 1));
        assert_eq!(board.pending(), Some(ScoreCounts::new(2, 2)));
    }
}

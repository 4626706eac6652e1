//! Score ledger: the running point total for a session.

/// Non-negative, monotonically increasing point counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    total: u64,
}

impl ScoreLedger {
    pub fn add(&mut self, points: u32) {
        self.total += points as u64;
        log::debug!("Score: {} (+{})", self.total, points);
    }

    /// Zero the total, returning what it was.
    pub fn reset(&mut self) -> u64 {
        std::mem::take(&mut self.total)
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_awards() {
        let mut ledger = ScoreLedger::default();
        let awards = [10, 15, 15, 20, 0, 20, 1];
        for points in awards {
            ledger.add(points);
        }
        assert_eq!(ledger.total(), awards.iter().map(|&p| p as u64).sum::<u64>());
    }

    #[test]
    fn test_total_never_decreases_on_add() {
        let mut ledger = ScoreLedger::default();
        let mut last = 0;
        for points in [3, 0, 7, 20] {
            ledger.add(points);
            assert!(ledger.total() >= last);
            last = ledger.total();
        }
    }

    #[test]
    fn test_reset_returns_to_zero() {
        let mut ledger = ScoreLedger::default();
        ledger.add(u32::MAX);
        ledger.add(u32::MAX);
        assert_eq!(ledger.reset(), 2 * u32::MAX as u64);
        assert_eq!(ledger.total(), 0);
        assert_eq!(ledger.reset(), 0);
    }
}

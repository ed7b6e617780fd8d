//! One-shot reveal bookkeeping for elements entering the viewport.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Mark the target revealed and stop observing it.
    Reveal,
    Ignore,
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize, threshold: f64) -> Self {
        Self {
            threshold,
            revealed: vec![false; count],
        }
    }

    pub fn observe(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> RevealOutcome {
        match self.revealed.get_mut(index) {
            Some(revealed) if !*revealed && is_intersecting && ratio >= self.threshold => {
                *revealed = true;
                RevealOutcome::Reveal
            }
            _ => RevealOutcome::Ignore,
        }
    }

    /// Fallback when no visibility primitive exists: everything shows at once.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        let newly: Vec<usize> = self.unrevealed().collect();
        for &index in &newly {
            self.revealed[index] = true;
        }
        newly
    }

    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Targets still waiting to be shown.
    pub fn pending(&self) -> usize {
        self.unrevealed().count()
    }

    fn unrevealed(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed
            .iter()
            .enumerate()
            .filter(|(_, revealed)| !**revealed)
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reveals_once_past_threshold() {
        let mut tracker = RevealTracker::new(2, 0.1);
        assert_eq!(tracker.observe(0, true, 0.05), RevealOutcome::Ignore);
        assert_eq!(tracker.observe(0, true, 0.1), RevealOutcome::Reveal);
        assert_eq!(tracker.observe(0, true, 0.9), RevealOutcome::Ignore);
        assert!(tracker.is_revealed(0));
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn leaving_entries_are_ignored() {
        let mut tracker = RevealTracker::new(1, 0.1);
        assert_eq!(tracker.observe(0, false, 0.5), RevealOutcome::Ignore);
        assert!(!tracker.is_revealed(0));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new(1, 0.1);
        assert_eq!(tracker.observe(7, true, 1.0), RevealOutcome::Ignore);
        assert!(!tracker.is_revealed(7));
    }

    #[test]
    fn fallback_reveals_remaining_targets() {
        let mut tracker = RevealTracker::new(3, 0.1);
        tracker.observe(1, true, 1.0);
        assert_eq!(tracker.reveal_all(), vec![0, 2]);
        assert_eq!(tracker.pending(), 0);
        assert!(tracker.reveal_all().is_empty());
    }

    #[test]
    fn nothing_pending_after_last_target_reveals() {
        let mut tracker = RevealTracker::new(2, 0.1);
        tracker.observe(1, true, 0.5);
        assert_eq!(tracker.pending(), 1);
        tracker.observe(0, true, 0.2);
        assert_eq!(tracker.pending(), 0);
    }

    proptest! {
        #[test]
        fn each_target_reveals_at_most_once(
            entries in proptest::collection::vec((0usize..8, any::<bool>(), 0.0f64..=1.0), 0..128)
        ) {
            let mut tracker = RevealTracker::new(8, 0.1);
            let mut reveals = [0u32; 8];
            for (index, intersecting, ratio) in entries {
                let was = tracker.is_revealed(index);
                if tracker.observe(index, intersecting, ratio) == RevealOutcome::Reveal {
                    prop_assert!(!was && intersecting && ratio >= 0.1);
                    reveals[index] += 1;
                }
                if was {
                    prop_assert!(tracker.is_revealed(index));
                }
            }
            prop_assert!(reveals.iter().all(|&n| n <= 1));
        }
    }
}

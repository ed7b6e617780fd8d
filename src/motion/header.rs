//! Show/hide policy for the fixed header.
//!
//! Scrolling down past the threshold tucks the header away and any upward
//! scroll brings it back. Near the top of the page it is always shown. The
//! background flag is tracked separately and only depends on the offset.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPhase {
    Top,
    Visible,
    Hidden,
}

#[derive(Debug, Clone)]
pub struct HeaderState {
    threshold: f64,
    scrolled_offset: f64,
    last_offset: f64,
    phase: HeaderPhase,
    scrolled: bool,
}

impl HeaderState {
    pub fn new(threshold: f64, scrolled_offset: f64) -> Self {
        Self {
            threshold,
            scrolled_offset,
            last_offset: 0.0,
            phase: HeaderPhase::Top,
            scrolled: false,
        }
    }

    /// Feeds one scroll notification. Returns true if either the phase or
    /// the background flag moved.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let previous = (self.phase, self.scrolled);

        self.scrolled = offset > self.scrolled_offset;
        self.phase = if offset <= self.threshold {
            HeaderPhase::Top
        } else if offset > self.last_offset {
            HeaderPhase::Hidden
        } else if offset < self.last_offset {
            HeaderPhase::Visible
        } else {
            match self.phase {
                HeaderPhase::Top => HeaderPhase::Visible,
                other => other,
            }
        };
        self.last_offset = offset;

        previous != (self.phase, self.scrolled)
    }

    #[cfg(test)]
    pub fn phase(&self) -> HeaderPhase {
        self.phase
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == HeaderPhase::Hidden
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn header() -> HeaderState {
        HeaderState::new(100.0, 50.0)
    }

    #[test]
    fn stays_visible_below_threshold_while_scrolling_down() {
        let mut state = header();
        for offset in [10.0, 40.0, 80.0, 100.0] {
            state.on_scroll(offset);
            assert_eq!(state.phase(), HeaderPhase::Top);
        }
    }

    #[test]
    fn hides_on_downward_scroll_past_threshold() {
        let mut state = header();
        state.on_scroll(90.0);
        assert!(state.on_scroll(120.0));
        assert_eq!(state.phase(), HeaderPhase::Hidden);
        assert!(state.is_hidden());
    }

    #[test]
    fn any_upward_scroll_reveals() {
        let mut state = header();
        state.on_scroll(400.0);
        assert!(state.is_hidden());
        state.on_scroll(399.0);
        assert_eq!(state.phase(), HeaderPhase::Visible);
        state.on_scroll(500.0);
        assert!(state.is_hidden());
    }

    #[test]
    fn returning_to_top_clears_hidden() {
        let mut state = header();
        state.on_scroll(300.0);
        state.on_scroll(600.0);
        assert!(state.is_hidden());
        state.on_scroll(50.0);
        assert_eq!(state.phase(), HeaderPhase::Top);
        assert!(!state.is_hidden());
    }

    #[test]
    fn repeated_offset_does_not_toggle() {
        let mut state = header();
        state.on_scroll(300.0);
        assert!(!state.on_scroll(300.0));
        assert_eq!(state.phase(), HeaderPhase::Hidden);
    }

    #[test]
    fn background_flag_is_independent_of_direction() {
        let mut state = header();
        state.on_scroll(50.0);
        assert!(!state.is_scrolled());
        assert!(state.on_scroll(51.0));
        assert!(state.is_scrolled());
        assert_eq!(state.phase(), HeaderPhase::Top);
        assert!(state.on_scroll(30.0));
        assert!(!state.is_scrolled());
    }

    proptest! {
        #[test]
        fn hidden_only_after_increase_past_threshold(
            offsets in proptest::collection::vec(0u32..2_000, 1..64)
        ) {
            let mut state = header();
            let mut previous = 0.0;
            let mut was_hidden = false;
            for offset in offsets.into_iter().map(f64::from) {
                state.on_scroll(offset);
                if state.is_hidden() {
                    prop_assert!(offset > 100.0);
                    prop_assert!(offset > previous || (offset == previous && was_hidden));
                }
                if offset <= 100.0 {
                    prop_assert_eq!(state.phase(), HeaderPhase::Top);
                }
                prop_assert_eq!(state.is_scrolled(), offset > 50.0);
                previous = offset;
                was_hidden = state.is_hidden();
            }
        }
    }
}

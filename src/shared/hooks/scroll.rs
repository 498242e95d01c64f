use dioxus::prelude::*;
use std::rc::Rc;

use crate::shared::hooks::listener::WindowListener;

/// Edge produced by [`ThresholdTracker::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// Scrolled past the threshold (downward crossing)
    Passed,
    /// Scrolled back above the threshold (reverse crossing)
    Reversed,
}

/// Tracks which side of a scroll threshold the page is on and reports only
/// the observations that actually cross it. Repeated observations on the
/// same side report nothing, so downstream state setters stay idempotent.
#[derive(Debug, Default)]
pub struct ThresholdTracker {
    passed: bool,
}

impl ThresholdTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn observe(&mut self, offset: f64, threshold: f64) -> Option<Crossing> {
        let now_passed = offset >= threshold;
        if now_passed == self.passed {
            return None;
        }
        self.passed = now_passed;
        Some(if now_passed {
            Crossing::Passed
        } else {
            Crossing::Reversed
        })
    }
}

/// Current vertical scroll offset in CSS pixels.
#[cfg(target_arch = "wasm32")]
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_offset() -> f64 {
    0.0
}

/// Scroll-position observer.
///
/// Fires `on_passed` once when the page scrolls past `threshold` pixels and
/// `on_reversed` once when it scrolls back above it. The underlying `scroll`
/// listener is attached on mount and removed when the component unmounts.
pub fn use_scroll_threshold(
    threshold: f64,
    mut on_passed: impl FnMut() + 'static,
    mut on_reversed: impl FnMut() + 'static,
) {
    use_hook(move || {
        let mut tracker = ThresholdTracker::new();
        Rc::new(WindowListener::attach("scroll", move || {
            match tracker.observe(scroll_offset(), threshold) {
                Some(Crossing::Passed) => on_passed(),
                Some(Crossing::Reversed) => on_reversed(),
                None => {}
            }
        }))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_below_the_threshold() {
        let tracker = ThresholdTracker::new();
        assert!(!tracker.passed());
    }

    #[test]
    fn crossing_down_fires_passed_once() {
        let mut tracker = ThresholdTracker::new();
        assert_eq!(tracker.observe(800.0, 700.0), Some(Crossing::Passed));
        assert!(tracker.passed());
        // Same side again: nothing fires
        assert_eq!(tracker.observe(900.0, 700.0), None);
        assert_eq!(tracker.observe(800.0, 700.0), None);
        assert!(tracker.passed());
    }

    #[test]
    fn crossing_back_fires_reversed_once() {
        let mut tracker = ThresholdTracker::new();
        tracker.observe(800.0, 700.0);
        assert_eq!(tracker.observe(100.0, 700.0), Some(Crossing::Reversed));
        assert!(!tracker.passed());
        assert_eq!(tracker.observe(50.0, 700.0), None);
    }

    #[test]
    fn staying_above_the_threshold_fires_nothing() {
        let mut tracker = ThresholdTracker::new();
        assert_eq!(tracker.observe(10.0, 700.0), None);
        assert_eq!(tracker.observe(699.9, 700.0), None);
        assert!(!tracker.passed());
    }

    #[test]
    fn exact_threshold_counts_as_passed() {
        let mut tracker = ThresholdTracker::new();
        assert_eq!(tracker.observe(700.0, 700.0), Some(Crossing::Passed));
    }

    #[test]
    fn toggles_indefinitely() {
        let mut tracker = ThresholdTracker::new();
        for _ in 0..3 {
            assert_eq!(tracker.observe(750.0, 700.0), Some(Crossing::Passed));
            assert_eq!(tracker.observe(650.0, 700.0), Some(Crossing::Reversed));
        }
    }
}

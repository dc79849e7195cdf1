/// Tolerance for intersection ratios the browser reports a hair under the
/// threshold it just crossed.
const RATIO_EPSILON: f64 = 1e-6;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClassChange {
    Add,
    Remove,
}

/// Reveal-on-scroll: an element is "in view" while at least `threshold` of
/// its area is visible. Re-triggers in both directions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reveal {
    threshold: f64,
}

impl Reveal {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn in_view(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio + RATIO_EPSILON >= self.threshold
    }

    /// Class change for one intersection observer entry.
    pub fn class_change(&self, is_intersecting: bool, ratio: f64) -> ClassChange {
        if self.in_view(is_intersecting, ratio) {
            ClassChange::Add
        } else {
            ClassChange::Remove
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassChange, Reveal};
    use pretty_assertions::assert_eq;

    #[test]
    fn crossing_threshold_toggles_marker() {
        let reveal = Reveal::new(0.12);
        assert_eq!(reveal.class_change(true, 0.12), ClassChange::Add);
        assert_eq!(reveal.class_change(true, 0.5), ClassChange::Add);
        assert_eq!(reveal.class_change(true, 0.05), ClassChange::Remove);
        assert_eq!(reveal.class_change(false, 0.0), ClassChange::Remove);
    }

    #[test]
    fn ratio_just_under_threshold_still_counts() {
        let reveal = Reveal::new(0.12);
        assert!(reveal.in_view(true, 0.119_999_9));
        assert!(!reveal.in_view(true, 0.11));
    }

    #[test]
    fn repeated_crossings_stay_consistent() {
        let reveal = Reveal::new(0.12);
        let ratios = [0.0, 0.2, 0.0, 0.3, 0.1, 1.0];
        let mut seen = Vec::new();
        for ratio in ratios {
            seen.push(reveal.class_change(ratio > 0.0, ratio) == ClassChange::Add);
        }
        assert_eq!(seen, vec![false, true, false, true, false, true]);
    }
}

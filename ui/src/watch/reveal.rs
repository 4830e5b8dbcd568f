//! One-shot "animate on first sight".

use std::collections::BTreeSet;

use super::Intersection;

/// Share of the element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Set of elements already shown. Membership never goes away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    shown: BTreeSet<String>,
}

impl RevealTracker {
    /// Returns the elements revealed by this batch, in delivery order. The
    /// caller stops observing exactly these.
    pub fn observe(&mut self, entries: &[Intersection]) -> Vec<String> {
        entries
            .iter()
            .filter(|entry| entry.is_intersecting)
            .filter(|entry| self.shown.insert(entry.target.clone()))
            .map(|entry| entry.target.clone())
            .collect()
    }

    pub fn is_shown(&self, target: &str) -> bool {
        self.shown.contains(target)
    }

    /// Element class: hidden until revealed, then `animate show` for good.
    pub fn class(&self, target: &str) -> &'static str {
        if self.is_shown(target) {
            "animate show"
        } else {
            "animate"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_reveals() {
        let mut tracker = RevealTracker::default();
        assert_eq!(tracker.class("hero"), "animate");
        assert_eq!(tracker.observe(&[Intersection::entered("hero")]), vec!["hero"]);
        assert_eq!(tracker.class("hero"), "animate show");
    }

    #[test]
    fn each_element_is_reported_once() {
        let mut tracker = RevealTracker::default();
        tracker.observe(&[Intersection::entered("card-1")]);
        let again = tracker.observe(&[
            Intersection::entered("card-1"),
            Intersection::entered("card-1"),
            Intersection::entered("card-2"),
        ]);
        assert_eq!(again, vec!["card-2"]);
    }

    #[test]
    fn leaving_does_not_hide() {
        let mut tracker = RevealTracker::default();
        tracker.observe(&[Intersection::entered("card-1")]);
        assert!(tracker.observe(&[Intersection::left("card-1")]).is_empty());
        assert!(tracker.is_shown("card-1"));
    }

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.observe(&[Intersection::left("card-3")]).is_empty());
        assert!(!tracker.is_shown("card-3"));
    }
}

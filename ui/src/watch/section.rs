//! Scroll-spy: which section owns the central viewport band.

use super::Intersection;

/// Shrinks the viewport to its middle 20% band.
pub const SECTION_ROOT_MARGIN: &str = "-40% 0px -40% 0px";

/// Tracks the section whose nav link is styled active.
///
/// Several sections can sit inside the band at once (short sections, tall
/// viewports). No priority is defined between them: entries are handled in
/// the order the observer delivers them and the last intersecting one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionWatcher {
    active: Option<String>,
}

impl SectionWatcher {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Feed one observer batch. Returns the new active section when the
    /// batch changed it.
    pub fn observe(&mut self, entries: &[Intersection]) -> Option<&str> {
        let winner = entries.iter().rev().find(|entry| entry.is_intersecting)?;
        if self.active.as_deref() == Some(winner.target.as_str()) {
            return None;
        }
        self.active = Some(winner.target.clone());
        self.active.as_deref()
    }

    /// Nav link class for `section_id`.
    pub fn link_class(&self, section_id: &str) -> &'static str {
        if self.active.as_deref() == Some(section_id) {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

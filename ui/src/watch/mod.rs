//! Viewport watchers: scroll-spy for the nav and one-shot reveal animations.
//!
//! The state machines (`section`, `reveal`) are pure and consume
//! [`Intersection`] records in delivery order. `observer` turns browser
//! `IntersectionObserver` callbacks into those records on wasm32.

mod observer;
mod reveal;
mod section;

pub use observer::{ObserverHandle, ObserverSpec, TargetKey};
pub use reveal::{RevealTracker, REVEAL_THRESHOLD};
pub use section::{SectionWatcher, SECTION_ROOT_MARGIN};

/// One intersection change, reduced to what the watchers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection {
    /// Section `id` or `data-reveal` value of the observed element.
    pub target: String,
    pub is_intersecting: bool,
}

impl Intersection {
    pub fn entered(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_intersecting: true,
        }
    }

    pub fn left(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_intersecting: false,
        }
    }
}

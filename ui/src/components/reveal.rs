use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::watch::{
    ObserverHandle, ObserverSpec, RevealTracker, SectionWatcher, TargetKey, REVEAL_THRESHOLD,
    SECTION_ROOT_MARGIN,
};

const SECTIONS: ObserverSpec = ObserverSpec {
    selector: "section[id]",
    root_margin: SECTION_ROOT_MARGIN,
    threshold: 0.0,
    key: TargetKey::Id,
};

const REVEALS: ObserverSpec = ObserverSpec {
    selector: "[data-reveal]",
    root_margin: "0px",
    threshold: REVEAL_THRESHOLD,
    key: TargetKey::Attribute("data-reveal"),
};

pub fn use_section_watcher() -> Signal<SectionWatcher> {
    try_use_context::<Signal<SectionWatcher>>().unwrap_or_else(|| use_signal(SectionWatcher::default))
}

pub fn use_reveal_tracker() -> Signal<RevealTracker> {
    try_use_context::<Signal<RevealTracker>>().unwrap_or_else(|| use_signal(RevealTracker::default))
}

/// Attach the scroll-spy and reveal observers once the page is mounted.
/// Both disconnect when the calling component unmounts.
pub fn use_viewport_watchers() {
    let sections = use_section_watcher();
    let reveals = use_reveal_tracker();
    let handles = use_hook(|| Rc::new(RefCell::new(Vec::<ObserverHandle>::new())));

    use_effect(move || {
        if !handles.borrow().is_empty() {
            return;
        }
        let mut sections = sections;
        let spy = ObserverHandle::attach(SECTIONS, move |batch| {
            let mut next = sections.peek().clone();
            if next.observe(batch).is_some() {
                sections.set(next);
            }
            Vec::new()
        });

        let mut reveals = reveals;
        let reveal = ObserverHandle::attach(REVEALS, move |batch| {
            let mut next = reveals.peek().clone();
            let shown = next.observe(batch);
            if !shown.is_empty() {
                reveals.set(next);
            }
            shown
        });

        handles.borrow_mut().extend(spy.into_iter().chain(reveal));
    });
}

/// Wrapper that fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(id: &'static str, children: Element) -> Element {
    let tracker = use_reveal_tracker();
    let class = tracker.read().class(id);

    rsx! {
        div { class: "{class}", "data-reveal": "{id}", {children} }
    }
}

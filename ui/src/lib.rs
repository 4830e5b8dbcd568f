//! Shared UI crate for the LDC site: page sections, localization, viewport
//! watchers and the contact form. The `web` crate only launches it.

pub mod contact;
pub mod core;
pub mod i18n;
pub mod views;
pub mod watch;

pub mod components {
    // Catalog-driven text and the language switcher glue (components/localized.rs)
    mod localized;
    pub use localized::{
        activate_language, restore_localization, switch_language, use_localization, Localized,
    };

    // Reveal wrapper and observer wiring (components/reveal.rs)
    mod reveal;
    pub use reveal::{use_reveal_tracker, use_section_watcher, use_viewport_watchers, Reveal};

    // Navigation with scroll-spy and language picker (components/site_navbar.rs)
    mod site_navbar;
    pub use site_navbar::{LanguagePicker, SiteNavbar};
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}

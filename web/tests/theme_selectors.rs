#![cfg(test)]
/*!
Stylesheet selector lint for the web build.

Purpose:
- The watchers and the contact form only toggle class names; the visible
  effect lives entirely in `web/assets/main.css`. If a refactor drops one of
  these selectors, the page still renders but the behaviour silently
  disappears (nothing highlights, revealed blocks stay invisible).
- A lightweight substring presence check is enough as an early warning.

If you intentionally rename a class:
    1. Update the component markup in `ui/`.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

/// Selectors the `ui` components rely on.
const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    // Scroll-spy
    ".nav-link {",
    ".nav-link.active",
    // Reveal on scroll: hidden until `show` is added
    ".animate {",
    ".animate.show",
    // Language picker
    ".idioma-btn",
    ".dropdown-menu {",
    ".dropdown-menu.show",
    // Contact feedback
    "#contact-form",
    ".alert-success",
    ".alert-danger",
    ".mt-2",
    ".button--primary",
    "@media (max-width: 720px)",
];

#[test]
fn stylesheet_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !MAIN_CSS.contains(**sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in main.css:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn revealed_elements_end_fully_opaque() {
    let show = MAIN_CSS
        .split(".animate.show")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect(".animate.show block");
    assert!(
        show.contains("opacity: 1"),
        "`.animate.show` must make revealed blocks visible"
    );
}

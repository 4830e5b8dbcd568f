use dioxus::prelude::*;

use crate::core::{config, storage};
use crate::i18n::{Catalog, Lang, Localization, CATALOG};

/// Switcher state shared through context. Falls back to a fresh primary
/// language state when no provider is mounted (previews, isolated tests).
pub fn use_localization() -> Signal<Localization> {
    match try_use_context::<Signal<Localization>>() {
        Some(signal) => signal,
        None => {
            tracing::debug!("[i18n] no Localization provider; using primary language");
            use_signal(|| Localization::new(&CATALOG))
        }
    }
}

/// Page-load state: the saved language (or the primary one) already applied.
pub fn restore_localization(
    catalog: &Catalog,
    store: &impl storage::PreferenceStore,
    key: &str,
) -> Localization {
    let mut loc = Localization::new(catalog);
    let lang = storage::load_language(store, key);
    loc.set_language(catalog, lang.code());
    loc
}

/// Switch `loc` to `code` and persist the choice under `key`. Unknown codes
/// change nothing and store nothing.
pub fn switch_language(
    loc: &mut Localization,
    catalog: &Catalog,
    store: &impl storage::PreferenceStore,
    key: &str,
    code: &str,
) -> Option<Lang> {
    let Some(lang) = loc.set_language(catalog, code) else {
        tracing::debug!("[i18n] ignoring unknown language `{code}`");
        return None;
    };
    if let Err(err) = storage::save_language(store, key, lang) {
        tracing::warn!("[i18n] language preference not saved: {err}");
    }
    Some(lang)
}

/// Picker activation against the page's signal and `localStorage`.
/// `<html lang>` follows through the app-level effect.
pub fn activate_language(mut loc: Signal<Localization>, code: &str) {
    let key = &config::site().language.storage_key;
    loc.with_mut(|l| switch_language(l, &CATALOG, &storage::BrowserStorage, key, code));
}

/// Element content driven by a catalog key (`data-i18n`). The text may
/// carry markup and is rendered as HTML.
#[component]
pub fn Localized(slot: &'static str) -> Element {
    let loc = use_localization();
    let html = loc.read().text(slot).to_string();

    rsx! {
        span { "data-i18n": "{slot}", dangerous_inner_html: "{html}" }
    }
}

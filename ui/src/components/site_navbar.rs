use dioxus::prelude::*;

use super::localized::{activate_language, use_localization};
use super::reveal::use_section_watcher;
use super::Localized;
use crate::core::config;
use crate::i18n::Lang;

/// Top navigation: brand, scroll-spy links and the language picker.
///
/// Link targets must match the `id` of a rendered `section`; the active link
/// follows whichever section the scroll-spy reports.
#[component]
pub fn SiteNavbar() -> Element {
    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#home",
                    span { class: "navbar__brand-mark", "LDC" }
                    span { class: "navbar__brand-subtitle", "Business & Consultants" }
                }

                nav { id: "mainNav", class: "navbar__links",
                    NavLink { section: "home", slot: "nav-home" }
                    NavLink { section: "sobre", slot: "nav-about" }
                    NavLink { section: "areas", slot: "nav-areas" }
                    NavLink { section: "servicos", slot: "nav-services" }
                    NavLink { section: "produtos", slot: "nav-products" }
                    NavLink { section: "parceiros", slot: "nav-partners" }
                    NavLink { section: "equipe", slot: "nav-team" }
                    NavLink { section: "contato", slot: "nav-contact" }
                }

                LanguagePicker {}
            }
        }
    }
}

#[component]
fn NavLink(section: &'static str, slot: &'static str) -> Element {
    let watcher = use_section_watcher();
    let class = watcher.read().link_class(section);

    rsx! {
        a { class: "{class}", href: "#{section}", Localized { slot } }
    }
}

/// Flag + code button with a two-entry dropdown. Choosing an entry switches
/// the page language and remembers it for the next visit.
#[component]
pub fn LanguagePicker() -> Element {
    let loc = use_localization();
    let mut open = use_signal(|| false);

    let flags = &config::site().language.flags;
    let current = loc.read().picker(flags);
    let menu_class = if open() { "dropdown-menu show" } else { "dropdown-menu" };
    let menu_label = loc.read().text("language-label").to_string();

    rsx! {
        div { class: "navbar__locale dropdown",
            button {
                r#type: "button",
                class: "idioma-btn",
                aria_haspopup: "true",
                aria_expanded: "{open()}",
                onclick: move |_| open.set(!open()),
                img { src: "{current.flag_url}", alt: "", width: 20 }
                span { "{current.label}" }
            }
            ul { class: "{menu_class}",
                aria_label: "{menu_label}",
                for lang in Lang::ALL {
                    li { key: "{lang.code()}",
                        a {
                            class: "dropdown-item",
                            href: "#",
                            "data-lang": "{lang.code()}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                open.set(false);
                                activate_language(loc, lang.code());
                            },
                            img { src: "{lang.flag_url(flags)}", alt: "", width: 20 }
                            " {language_name(lang)}"
                        }
                    }
                }
            }
        }
    }
}

/// Endonyms; the dropdown shows them the same in both languages.
fn language_name(lang: Lang) -> &'static str {
    match lang {
        Lang::Pt => "Português",
        Lang::En => "English",
    }
}

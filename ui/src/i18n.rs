//! Localization for the site.
//!
//! The catalog is authored as Fluent files, one per language:
//! ```text
//! i18n/
//!   pt/ldc-site.ftl   (primary; the page's initial text)
//!   en/ldc-site.ftl   (secondary)
//! ```
//! Both are embedded with `rust-embed` and formatted once through a
//! `fluent` bundle into a flat `key -> text` map per language.
//!
//! Switching languages never falls back to another language: a key that is
//! missing (or empty) for the requested language leaves whatever text the
//! slot already shows. That is the reason this module does not use
//! `i18n-embed`'s loader, whose fallback chain would fill the gap.
//!
//! Public API surface:
//! - [`Lang`] – the two supported languages.
//! - [`Catalog`] – parsed messages; [`CATALOG`] holds the embedded one.
//! - [`Slots`] / [`apply_translations`] – pure text substitution.
//! - [`Localization`] – the switcher state the page keeps in a signal.
use std::collections::{BTreeMap, HashMap};

use fluent::{FluentBundle, FluentResource};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::{langid, LanguageIdentifier};

use crate::core::config::FlagConfig;

/// Canonical FTL filename inside every locale folder.
const DOMAIN: &str = "ldc-site";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lang {
    Pt,
    En,
}

impl Lang {
    pub const PRIMARY: Lang = Lang::Pt;
    pub const ALL: [Lang; 2] = [Lang::Pt, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Pt => "pt",
            Lang::En => "en",
        }
    }

    /// Upper-cased code shown next to the picker flag.
    pub fn label(self) -> &'static str {
        match self {
            Lang::Pt => "PT",
            Lang::En => "EN",
        }
    }

    /// Accepts bare codes and region variants (`pt-BR`, `en_GB`, ...).
    pub fn from_code(code: &str) -> Option<Self> {
        let id: LanguageIdentifier = code.trim().parse().ok()?;
        match id.language.as_str() {
            "pt" => Some(Lang::Pt),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn flag_url(self, flags: &FlagConfig) -> &str {
        match self {
            Lang::Pt => &flags.pt,
            Lang::En => &flags.en,
        }
    }

    fn langid(self) -> LanguageIdentifier {
        match self {
            Lang::Pt => langid!("pt"),
            Lang::En => langid!("en"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("missing catalog file {0}")]
    MissingFile(String),
    #[error("catalog file {0} is not valid UTF-8")]
    Encoding(String),
    #[error("{file}: {count} Fluent syntax error(s)")]
    Syntax { file: String, count: usize },
}

/// Flat per-language message table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    messages: HashMap<Lang, HashMap<String, String>>,
}

impl Catalog {
    /// Load both embedded languages. Broken files are logged and whatever
    /// parsed cleanly is kept.
    pub fn embedded() -> Self {
        let mut catalog = Self::default();
        for lang in Lang::ALL {
            let path = format!("{}/{DOMAIN}.ftl", lang.code());
            let source = match read_embedded(&path) {
                Ok(source) => source,
                Err(err) => {
                    tracing::error!("[i18n] {err}");
                    continue;
                }
            };
            let (messages, err) = parse_ftl(lang, &path, source);
            if let Some(err) = err {
                tracing::warn!("[i18n] {err}; keeping {} well-formed messages", messages.len());
            }
            catalog.messages.insert(lang, messages);
        }
        catalog
    }

    /// Builds a catalog from literal tables (mainly for tests and previews).
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (Lang, &'a str, &'a str)>,
    ) -> Self {
        let mut catalog = Self::default();
        for (lang, key, text) in entries {
            catalog
                .messages
                .entry(lang)
                .or_default()
                .insert(key.to_string(), text.to_string());
        }
        catalog
    }

    /// Non-empty text for `(lang, key)`; empty entries count as missing.
    pub fn get(&self, lang: Lang, key: &str) -> Option<&str> {
        self.messages
            .get(&lang)
            .and_then(|m| m.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    pub fn keys(&self, lang: Lang) -> impl Iterator<Item = &str> {
        self.messages
            .get(&lang)
            .into_iter()
            .flat_map(|m| m.keys().map(String::as_str))
    }
}

/// The embedded catalog, parsed on first use.
pub static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::embedded);

/// List embedded language folders (for completeness checks).
pub fn embedded_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

fn read_embedded(path: &str) -> Result<String, CatalogError> {
    let file = Localizations::get(path).ok_or_else(|| CatalogError::MissingFile(path.into()))?;
    String::from_utf8(file.data.into_owned()).map_err(|_| CatalogError::Encoding(path.into()))
}

/// Format every message of one FTL source into plain text.
fn parse_ftl(
    lang: Lang,
    file: &str,
    source: String,
) -> (HashMap<String, String>, Option<CatalogError>) {
    let ids = message_ids(&source);
    let (resource, syntax_errors) = match FluentResource::try_new(source) {
        Ok(resource) => (resource, 0),
        Err((resource, errors)) => (resource, errors.len()),
    };

    let mut bundle = FluentBundle::new(vec![lang.langid()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!("[i18n] {file}: {} duplicate message(s)", errors.len());
    }

    let mut messages = HashMap::with_capacity(ids.len());
    for id in ids {
        let Some(pattern) = bundle.get_message(&id).and_then(|m| m.value()) else {
            continue;
        };
        let mut errors = Vec::new();
        let text = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::debug!("[i18n] {file}: `{id}` formatted with {} error(s)", errors.len());
        }
        messages.insert(id, text.into_owned());
    }

    let err = (syntax_errors > 0).then(|| CatalogError::Syntax {
        file: file.to_string(),
        count: syntax_errors,
    });
    (messages, err)
}

/// Message identifiers are the unindented `id =` lines; terms, comments and
/// continuation lines are skipped.
fn message_ids(source: &str) -> Vec<String> {
    source
        .lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| {
            !id.is_empty()
                && id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
        .map(str::to_string)
        .collect()
}

/// Current content of every localized element, keyed by its string key.
/// Content is markup and is rendered as inner HTML.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slots(BTreeMap<String, String>);

impl Slots {
    /// One slot per key known to any language, holding `lang`'s text (empty
    /// where `lang` has none) so a later switch can still fill it.
    pub fn seeded(catalog: &Catalog, lang: Lang) -> Self {
        Self(
            Lang::ALL
                .into_iter()
                .flat_map(|l| catalog.keys(l))
                .map(|key| (key.to_string(), catalog.get(lang, key).unwrap_or_default().to_string()))
                .collect(),
        )
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Replace every slot whose key has a non-empty entry for `lang`; other
/// slots keep their current (possibly stale) content.
pub fn apply_translations(catalog: &Catalog, lang: Lang, slots: Slots) -> Slots {
    Slots(
        slots
            .0
            .into_iter()
            .map(|(key, content)| match catalog.get(lang, &key) {
                Some(text) => (key, text.to_string()),
                None => {
                    tracing::debug!("[i18n] no `{}` text for `{key}`", lang.code());
                    (key, content)
                }
            })
            .collect(),
    )
}

/// What the language picker button shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerDisplay {
    pub flag_url: String,
    pub label: &'static str,
}

/// Language switcher state: the active language and the slot contents it
/// produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Localization {
    lang: Lang,
    slots: Slots,
}

impl Localization {
    /// Initial page state: primary language text everywhere.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            lang: Lang::PRIMARY,
            slots: Slots::seeded(catalog, Lang::PRIMARY),
        }
    }

    pub fn with_slots(slots: Slots) -> Self {
        Self {
            lang: Lang::PRIMARY,
            slots,
        }
    }

    /// Switch to `code`. Unknown codes leave everything untouched and return
    /// `None`.
    pub fn set_language(&mut self, catalog: &Catalog, code: &str) -> Option<Lang> {
        let lang = Lang::from_code(code)?;
        self.lang = lang;
        self.slots = apply_translations(catalog, lang, std::mem::take(&mut self.slots));
        Some(lang)
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Slot content, or an empty string for keys no element was seeded with.
    pub fn text(&self, key: &str) -> &str {
        self.slots.get(key).unwrap_or_default()
    }

    pub fn picker(&self, flags: &FlagConfig) -> PickerDisplay {
        PickerDisplay {
            flag_url: self.lang.flag_url(flags).to_string(),
            label: self.lang.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::from_entries([
            (Lang::Pt, "title", "Olá"),
            (Lang::Pt, "body", "<em>Corpo</em>"),
            (Lang::Pt, "only-pt", "Só português"),
            (Lang::En, "title", "Hello"),
            (Lang::En, "body", "<em>Body</em>"),
            (Lang::En, "only-pt", ""),
        ])
    }

    #[test]
    fn fallback_language_is_present() {
        let langs = embedded_languages();
        assert!(langs.iter().any(|l| l == "pt"));
        assert!(langs.iter().any(|l| l == "en"));
    }

    #[test]
    fn embedded_catalog_formats_markup_verbatim() {
        let about = CATALOG.get(Lang::En, "about-text-1").expect("about-text-1 in en");
        assert!(about.starts_with("<strong>LDC Business &amp; Consultants</strong>"));
        assert_eq!(CATALOG.get(Lang::Pt, "nav-about"), Some("Sobre"));
        assert_eq!(CATALOG.get(Lang::En, "nav-about"), Some("About"));
    }

    #[test]
    fn lang_codes_parse_with_regions() {
        assert_eq!(Lang::from_code("pt"), Some(Lang::Pt));
        assert_eq!(Lang::from_code("pt-BR"), Some(Lang::Pt));
        assert_eq!(Lang::from_code("EN"), Some(Lang::En));
        assert_eq!(Lang::from_code("en-GB"), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn message_ids_skip_comments_terms_and_continuations() {
        let src = "# comment\n-brand = LDC\nhello = Hi\n    continued = no\nbye=Bye\n";
        assert_eq!(message_ids(src), vec!["hello".to_string(), "bye".to_string()]);
    }

    #[test]
    fn apply_replaces_every_slot_with_an_entry() {
        let catalog = sample_catalog();
        let slots = Slots::from_pairs([("title", "Olá"), ("body", "<em>Corpo</em>")]);
        let out = apply_translations(&catalog, Lang::En, slots);
        assert_eq!(out.get("title"), Some("Hello"));
        assert_eq!(out.get("body"), Some("<em>Body</em>"));
    }

    #[test]
    fn missing_or_empty_entries_leave_stale_text() {
        let catalog = sample_catalog();
        let slots = Slots::from_pairs([("only-pt", "Só português"), ("unknown", "static")]);
        let out = apply_translations(&catalog, Lang::En, slots);
        assert_eq!(out.get("only-pt"), Some("Só português"));
        assert_eq!(out.get("unknown"), Some("static"));
    }

    #[test]
    fn switching_round_trips_through_both_languages() {
        let catalog = sample_catalog();
        let mut loc = Localization::new(&catalog);
        assert_eq!(loc.lang(), Lang::Pt);
        assert_eq!(loc.text("title"), "Olá");

        assert_eq!(loc.set_language(&catalog, "en"), Some(Lang::En));
        assert_eq!(loc.text("title"), "Hello");
        assert_eq!(loc.text("only-pt"), "Só português");

        assert_eq!(loc.set_language(&catalog, "pt"), Some(Lang::Pt));
        assert_eq!(loc.text("title"), "Olá");
    }

    #[test]
    fn keys_only_the_secondary_language_defines_fill_on_switch() {
        let catalog = Catalog::from_entries([
            (Lang::Pt, "hero-title", "Olá"),
            (Lang::En, "hero-title", "Hello"),
            (Lang::En, "en-only", "English text"),
        ]);
        let mut loc = Localization::new(&catalog);
        assert_eq!(loc.text("en-only"), "");

        loc.set_language(&catalog, "en");
        assert_eq!(loc.text("en-only"), "English text");

        loc.set_language(&catalog, "pt");
        assert_eq!(loc.text("hero-title"), "Olá");
        assert_eq!(loc.text("en-only"), "English text");
    }

    #[test]
    fn unknown_code_is_a_no_op() {
        let catalog = sample_catalog();
        let mut loc = Localization::new(&catalog);
        loc.set_language(&catalog, "en");
        let before = loc.clone();
        assert_eq!(loc.set_language(&catalog, "zz"), None);
        assert_eq!(loc, before);
    }

    #[test]
    fn picker_tracks_active_language() {
        let catalog = sample_catalog();
        let flags = FlagConfig::default();
        let mut loc = Localization::new(&catalog);
        assert_eq!(
            loc.picker(&flags),
            PickerDisplay {
                flag_url: "https://flagcdn.com/w20/pt.png".into(),
                label: "PT"
            }
        );
        loc.set_language(&catalog, "en");
        assert_eq!(loc.picker(&flags).flag_url, "https://flagcdn.com/w20/gb.png");
        assert_eq!(loc.picker(&flags).label, "EN");
    }

    #[test]
    fn every_embedded_slot_resolves_in_both_languages() {
        for lang in Lang::ALL {
            let mut loc = Localization::new(&CATALOG);
            loc.set_language(&CATALOG, lang.code());
            for (key, content) in loc.slots().iter() {
                assert_eq!(Some(content), CATALOG.get(lang, key), "{key} in {lang:?}");
            }
        }
    }
}

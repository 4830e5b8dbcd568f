use dioxus::prelude::*;

use ui::components::{restore_localization, SiteNavbar};
use ui::core::{config, platform, storage::BrowserStorage};
use ui::i18n::CATALOG;
use ui::views::Home;
use ui::watch::{RevealTracker, SectionWatcher};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Saved language (or Portuguese) is applied before the first render.
    let loc = use_context_provider(|| {
        let key = &config::site().language.storage_key;
        Signal::new(restore_localization(&CATALOG, &BrowserStorage, key))
    });
    use_context_provider(|| Signal::new(SectionWatcher::default()));
    use_context_provider(|| Signal::new(RevealTracker::default()));

    use_effect(move || {
        let code = loc.read().lang().code();
        tracing::info!("[i18n] page language {code}");
        platform::set_document_lang(code);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SiteNavbar {}
        Home {}
        footer { class: "footer",
            p { "© LDC Business & Consultants · Nampula, Moçambique" }
        }
    }
}

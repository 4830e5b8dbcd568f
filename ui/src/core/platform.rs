//! Browser side effects that have no reactive equivalent in Dioxus.
//!
//! Every helper is a no-op off the web so the shared crate still builds and
//! tests natively.

/// Set `<html lang>` so assistive tech and hyphenation follow the switch.
pub fn set_document_lang(code: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        match root {
            Some(root) => {
                if let Err(err) = root.set_attribute("lang", code) {
                    tracing::warn!("failed to set document lang: {err:?}");
                }
            }
            None => tracing::warn!("document element unavailable"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("set_document_lang({code}) outside the browser");
    }
}

/// Point the window at `uri` (used for `mailto:` hand-off).
pub fn navigate(uri: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            tracing::warn!("window unavailable; cannot open {uri}");
            return;
        };
        if let Err(err) = window.location().set_href(uri) {
            tracing::error!("navigation to {uri} failed: {err:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("navigate({uri}) outside the browser");
    }
}

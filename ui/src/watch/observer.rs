//! `IntersectionObserver` glue.
//!
//! The observer lives as long as its [`ObserverHandle`]; dropping the handle
//! disconnects it. Off the web no observer is created and watchers simply
//! never fire.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use super::Intersection;

/// How an observed element is named in [`Intersection::target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKey {
    /// The element's `id`.
    Id,
    /// The value of the given attribute.
    Attribute(&'static str),
}

/// What to observe and with which options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverSpec {
    pub selector: &'static str,
    pub root_margin: &'static str,
    pub threshold: f64,
    pub key: TargetKey,
}

#[cfg(target_arch = "wasm32")]
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

pub struct ObserverHandle {
    #[cfg(target_arch = "wasm32")]
    observer: web_sys::IntersectionObserver,
    #[cfg(target_arch = "wasm32")]
    _callback: ObserverCallback,
}

impl ObserverHandle {
    /// Observe every element matching `spec.selector`. `on_batch` receives
    /// each delivered batch and returns the targets to stop observing.
    #[cfg(target_arch = "wasm32")]
    pub fn attach(
        spec: ObserverSpec,
        mut on_batch: impl FnMut(&[Intersection]) -> Vec<String> + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let mut batch = Vec::new();
                let mut elements = Vec::new();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let element = entry.target();
                    let Some(target) = read_key(spec.key, &element) else {
                        continue;
                    };
                    batch.push(Intersection {
                        target,
                        is_intersecting: entry.is_intersecting(),
                    });
                    elements.push(element);
                }

                let finished = on_batch(&batch);
                for (item, element) in batch.iter().zip(&elements) {
                    if finished.contains(&item.target) {
                        observer.unobserve(element);
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(spec.root_margin);
        init.set_threshold(&JsValue::from_f64(spec.threshold));

        let observer = match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                tracing::warn!("IntersectionObserver unavailable for {}: {err:?}", spec.selector);
                return None;
            }
        };

        let nodes = document.query_selector_all(spec.selector).ok()?;
        let mut observed = 0;
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            {
                observer.observe(&element);
                observed += 1;
            }
        }
        tracing::debug!("observing {observed} element(s) for {}", spec.selector);

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn attach(
        spec: ObserverSpec,
        on_batch: impl FnMut(&[Intersection]) -> Vec<String> + 'static,
    ) -> Option<Self> {
        let _ = on_batch;
        tracing::debug!("no IntersectionObserver off the web ({})", spec.selector);
        None
    }
}

#[cfg(target_arch = "wasm32")]
fn read_key(key: TargetKey, element: &web_sys::Element) -> Option<String> {
    let value = match key {
        TargetKey::Id => element.id(),
        TargetKey::Attribute(name) => element.get_attribute(name)?,
    };
    (!value.is_empty()).then_some(value)
}

#[cfg(target_arch = "wasm32")]
impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

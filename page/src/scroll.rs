//! Smooth scroll to an in-page anchor.
//!
//! The nav's "Garantir Vaga" control scrolls to the offer section. The DOM
//! access sits behind [`Viewport`] so the action can run (and be tested)
//! outside a browser.

use leptos::prelude::Callback;

/// Element id of the offer section.
pub const OFFER_ANCHOR: &str = "offer";

/// Something that can bring an element into view by id.
pub trait Viewport {
    /// Smoothly scroll the element with `id` into view.
    ///
    /// Returns `false` when no such element exists; that is not an error.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// The live browser document.
///
/// Outside `wasm32` there is no document, so every lookup misses.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    #[cfg(target_arch = "wasm32")]
    fn scroll_into_view(&self, id: &str) -> bool {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn scroll_into_view(&self, _id: &str) -> bool {
        false
    }
}

/// Scroll `viewport` to the offer section. A missing section is a no-op.
pub fn scroll_to_offer<V: Viewport + ?Sized>(viewport: &V) -> bool {
    let found = viewport.scroll_into_view(OFFER_ANCHOR);
    if !found {
        tracing::debug!(anchor = OFFER_ANCHOR, "scroll target not found");
    }
    found
}

/// The nav's "Garantir Vaga" action: each run scrolls `viewport` to the offer.
pub fn offer_scroll_action<V>(viewport: V) -> Callback<()>
where
    V: Viewport + Send + Sync + 'static,
{
    Callback::new(move |_: ()| {
        scroll_to_offer(&viewport);
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use leptos::prelude::*;
    use std::sync::{Arc, Mutex};

    /// Records scroll requests against a fixed set of element ids.
    ///
    /// Clones share one log, so a copy can be moved into a callback and
    /// inspected afterwards.
    #[derive(Clone)]
    pub(crate) struct FakeViewport {
        ids: Vec<&'static str>,
        scrolled: Arc<Mutex<Vec<String>>>,
    }

    impl FakeViewport {
        pub(crate) fn with_ids(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                scrolled: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub(crate) fn scrolled(&self) -> Vec<String> {
            self.scrolled.lock().unwrap().clone()
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_into_view(&self, id: &str) -> bool {
            if self.ids.contains(&id) {
                self.scrolled.lock().unwrap().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn scrolls_to_offer_anchor() {
        let viewport = FakeViewport::with_ids(&["hero", OFFER_ANCHOR]);

        assert!(scroll_to_offer(&viewport));
        assert_eq!(viewport.scrolled(), vec!["offer".to_string()]);
    }

    #[test]
    fn missing_anchor_is_noop() {
        let viewport = FakeViewport::with_ids(&["hero"]);

        assert!(!scroll_to_offer(&viewport));
        assert!(viewport.scrolled().is_empty());
    }

    #[test]
    fn each_call_scrolls_once() {
        let viewport = FakeViewport::with_ids(&[OFFER_ANCHOR]);
        scroll_to_offer(&viewport);
        scroll_to_offer(&viewport);
        assert_eq!(viewport.scrolled().len(), 2);
    }

    #[test]
    fn action_scrolls_on_every_run() {
        let owner = Owner::new();
        owner.with(|| {
            let viewport = FakeViewport::with_ids(&[OFFER_ANCHOR]);
            let action = offer_scroll_action(viewport.clone());

            action.run(());
            action.run(());
            assert_eq!(viewport.scrolled(), vec!["offer".to_string(), "offer".to_string()]);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_viewport_misses_outside_browser() {
        assert!(!scroll_to_offer(&BrowserViewport));
    }
}

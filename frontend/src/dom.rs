use js_sys::Array;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
};
use yew::Callback;

use crate::anchor::Anchor;
use crate::error::DomError;
use crate::state::visibility::{intersecting_ids, GateGuard, ObserverGate};

/// Attribute carrying the reveal id of a marked element.
pub const REVEAL_ATTR: &str = "data-reveal";

pub fn document() -> Result<Document, DomError> {
    window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Smooth-scrolls the section into view without touching history.
pub fn scroll_to_anchor(anchor: Anchor) -> Result<(), DomError> {
    let element = document()?
        .get_element_by_id(anchor.id())
        .ok_or_else(|| DomError::MissingElement(anchor.href()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

fn reveal_id(element: &Element) -> String {
    element
        .get_attribute(REVEAL_ATTR)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| element.id())
}

/// An intersection observer over every element matching a selector.
///
/// Dropping it disconnects the observer and, through the guard, closes the
/// gate the callback forwards through.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _guard: GateGuard,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn observe(
        selector: &str,
        threshold: f64,
        on_enter: Callback<Vec<String>>,
    ) -> Result<Self, DomError> {
        let gate = ObserverGate::new();
        let callback = {
            let gate = gate.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, _observer: IntersectionObserver| {
                    let reports = entries.iter().filter_map(|entry| {
                        let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
                        Some((reveal_id(&entry.target()), entry.is_intersecting()))
                    });
                    gate.forward(&on_enter, intersecting_ids(reports));
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let marked = document()?.query_selector_all(selector)?;
        for index in 0..marked.length() {
            if let Some(element) = marked.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }
        debug!("observing {} element(s) for {}", marked.length(), selector);

        Ok(Self { observer, _guard: gate.guard(), _callback: callback })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

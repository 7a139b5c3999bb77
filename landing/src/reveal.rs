//! Browser side of reveal-on-scroll.
//!
//! Every `[data-reveal]` element gets a numeric `data-reveal-id`, is registered
//! in a [`RevealTracker`] and watched by one `IntersectionObserver`. The first
//! intersection reveals the element and stops observing it.

use std::cell::RefCell;
use std::rc::Rc;

use eduverify_page::reveal::{READY_CLASS, REVEAL_ATTR, REVEAL_ID_ATTR, REVEALED_CLASS, RevealTracker};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{LandingError, Result};

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Start observing reveal targets. Returns how many were found.
///
/// `<body>` only gets the ready class once the observer exists, so any
/// failure before that leaves the page fully visible.
pub fn install() -> Result<usize> {
    let document = web_sys::window()
        .ok_or(LandingError::NoWindow)?
        .document()
        .ok_or(LandingError::NoDocument)?;

    let targets = tag_targets(&document)?;
    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    for (id, _) in &targets {
        tracker.borrow_mut().register(*id);
    }

    let observer = observer(Rc::clone(&tracker))?;
    for (_, element) in &targets {
        observer.observe(element);
    }

    document
        .body()
        .ok_or(LandingError::NoBody)?
        .class_list()
        .add_1(READY_CLASS)?;

    tracing::debug!(targets = targets.len(), "reveal observer installed");
    Ok(targets.len())
}

/// Assign sequential reveal ids in document order.
pub(crate) fn tag_targets(document: &Document) -> Result<Vec<(usize, Element)>> {
    let nodes = document.query_selector_all(&format!("[{}]", REVEAL_ATTR))?;
    let mut targets = Vec::with_capacity(nodes.length() as usize);

    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let id = targets.len();
        element.set_attribute(REVEAL_ID_ATTR, &id.to_string())?;
        targets.push((id, element));
    }

    Ok(targets)
}

fn reveal_id(element: &Element) -> Option<usize> {
    element.get_attribute(REVEAL_ID_ATTR)?.parse().ok()
}

fn observer(tracker: Rc<RefCell<RevealTracker>>) -> Result<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(id) = reveal_id(&target) else {
                    continue;
                };
                if tracker.borrow_mut().observe(id, entry.is_intersecting()).is_none() {
                    continue;
                }
                if let Err(err) = target.class_list().add_1(REVEALED_CLASS) {
                    tracing::warn!(id, error = ?err, "could not mark element revealed");
                }
                observer.unobserve(&target);
                tracing::debug!(id, remaining = tracker.borrow().hidden(), "revealed");
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // The observer lives as long as the page.
    callback.forget();
    Ok(observer)
}

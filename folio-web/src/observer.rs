use crate::dom;
use crate::mount::SharedPage;
use folio_core::SectionEntry;
use js_sys::Array;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

fn section_entry(entry: &IntersectionObserverEntry) -> SectionEntry {
    SectionEntry::new(
        entry.target().id(),
        entry.intersection_ratio(),
        entry.is_intersecting(),
    )
}

/// Feed intersection batches for every `selector` match into the page.
///
/// Browsers without `IntersectionObserver` simply get no highlighting.
pub fn observe_sections(
    document: &Document,
    selector: &str,
    thresholds: &[f64],
    page: &SharedPage,
) {
    let sections = dom::query_all(document, selector);
    if sections.is_empty() {
        return;
    }

    let handle = Rc::clone(page);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let batch: Vec<SectionEntry> = entries
                .iter()
                .filter_map(|raw| raw.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| section_entry(&entry))
                .collect();
            handle.borrow_mut().observe_sections(&batch);
        },
    );

    let init = IntersectionObserverInit::new();
    let steps: Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
    init.set_threshold(&steps);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for section in &sections {
                observer.observe(section);
            }
            callback.forget();
        }
        Err(err) => log::warn!(
            "section highlighting disabled: {}",
            dom::js_error_message(&err)
        ),
    }
}

//! Wire the DOM events of the portfolio page to a shared [`Page`].

use crate::dom;
use crate::observer;
use crate::storage::LocalStore;
use crate::view::DomPage;
use folio_core::{NavEvent, Page, PageConfig, Translations};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, KeyboardEvent, MouseEvent, Node};

pub type SharedPage = Rc<RefCell<Page<DomPage, LocalStore>>>;

/// Build the page over `document`, apply the stored language and attach
/// every listener.
pub fn mount(document: &Document, config: PageConfig, translations: Translations) -> SharedPage {
    let view = DomPage::query(document, &config);
    let sections = config.selectors.sections.clone();
    let thresholds = config.thresholds.clone();

    let mut page = Page::new(view, LocalStore::open(), translations, config);
    let lang = page.init();
    log::debug!("page mounted in {lang}");
    let page = Rc::new(RefCell::new(page));

    wire_nav(document, &page);
    wire_language(&page);
    wire_contact(&page);
    observer::observe_sections(document, &sections, &thresholds, &page);
    page
}

fn wire_nav(document: &Document, page: &SharedPage) {
    let shared = page.borrow();
    let view = shared.view();
    if let Some(toggle) = view.nav_toggle() {
        let handle = Rc::clone(page);
        dom::listen(toggle, "click", move |_: MouseEvent| {
            handle.borrow_mut().nav_event(&NavEvent::ToggleClicked);
        });
    }
    for link in view.nav_links() {
        let handle = Rc::clone(page);
        dom::listen(link, "click", move |_: MouseEvent| {
            handle.borrow_mut().nav_event(&NavEvent::LinkClicked);
        });
    }

    let target: &EventTarget = document.as_ref();
    let handle = Rc::clone(page);
    dom::listen(target, "click", move |event: MouseEvent| {
        let node = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let mut page = handle.borrow_mut();
        let inside = page.view().contains_nav_target(node.as_ref());
        page.nav_event(&NavEvent::DocumentClick { inside });
    });
    let handle = Rc::clone(page);
    dom::listen(target, "keydown", move |event: KeyboardEvent| {
        handle.borrow_mut().nav_event(&NavEvent::key(event.key()));
    });
}

fn wire_language(page: &SharedPage) {
    let shared = page.borrow();
    let Some(toggle) = shared.view().lang_toggle() else {
        return;
    };
    let handle = Rc::clone(page);
    dom::listen(toggle, "click", move |_: MouseEvent| {
        handle.borrow_mut().toggle_language();
    });
}

fn wire_contact(page: &SharedPage) {
    let shared = page.borrow();
    let Some(form) = shared.view().form() else {
        return;
    };
    let handle = Rc::clone(page);
    dom::listen(form, "submit", move |event: Event| {
        event.prevent_default();
        let handle = Rc::clone(&handle);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = handle.borrow_mut().submit_contact();
            log::debug!("contact submit ready: {}", outcome.is_ready());
        });
    });
}

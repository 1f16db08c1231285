//! `window.__folioTest`, installed only when the page is opened with
//! `?test=1`. The browser tester reads state through it.

use crate::dom;
use crate::mount::SharedPage;
use serde::Serialize;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

pub const BRIDGE_NAME: &str = "__folioTest";

pub fn install(page: &SharedPage) {
    if !dom::test_mode_enabled() {
        return;
    }
    let Some(window) = dom::window() else {
        return;
    };

    let state_page = Rc::clone(page);
    let state = Closure::<dyn FnMut() -> JsValue>::new(move || {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        state_page
            .borrow()
            .state()
            .serialize(&serializer)
            .unwrap_or(JsValue::NULL)
    });

    let lang_page = Rc::clone(page);
    let set_language = Closure::<dyn FnMut(JsValue) -> bool>::new(move |code: JsValue| {
        code.as_string()
            .is_some_and(|code| lang_page.borrow_mut().set_language(&code))
    });

    let bridge = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("state"),
        state.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("setLanguage"),
        set_language.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str(BRIDGE_NAME), &bridge);
    state.forget();
    set_language.forget();
    log::info!("test bridge installed");
}

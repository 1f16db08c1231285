#![cfg(target_arch = "wasm32")]

use folio_core::{Lang, PageConfig, SectionEntry, Translations};
use folio_web::dom;
use folio_web::mount::{self, SharedPage};
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, EventInit, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent,
    KeyboardEventInit, MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r##"
<header>
  <button data-nav-toggle aria-expanded="false">Menu</button>
  <ul data-nav-list>
    <li><a data-nav-link href="#about" data-i18n="nav.about">About</a></li>
    <li><a data-nav-link href="#skills" data-i18n="nav.skills">Skills</a></li>
    <li><a data-nav-link href="#contact" data-i18n="nav.contact">Contact</a></li>
  </ul>
  <button data-lang-toggle data-lang="en" aria-label="Switch language">PT</button>
</header>
<main>
  <section id="about"><h2 data-i18n="about.title">About Me</h2></section>
  <section id="skills"><h2 data-i18n="skills.title">Skills</h2></section>
  <section id="contact">
    <p data-i18n="no.such.key">Keep me</p>
    <form data-contact-form novalidate>
      <input id="name" data-i18n-placeholder="form.namePh" placeholder="Your name">
      <p id="nameError"></p>
      <input id="email" type="email">
      <p id="emailError"></p>
      <textarea id="message"></textarea>
      <p id="messageError"></p>
      <p data-form-status></p>
    </form>
  </section>
</main>
<p id="outside">Elsewhere</p>
"##;

/// A page mounted into its own document, so listeners from one test never
/// see another test's events.
struct Fixture {
    document: Document,
    page: SharedPage,
}

impl Fixture {
    fn new() -> Self {
        if let Ok(storage) = dom::local_storage() {
            storage.clear().unwrap();
        }
        let document = dom::document()
            .unwrap()
            .implementation()
            .unwrap()
            .create_html_document()
            .unwrap();
        document.body().unwrap().set_inner_html(FIXTURE);
        let page = mount::mount(
            &document,
            PageConfig::default(),
            Translations::load().unwrap(),
        );
        Self { document, page }
    }

    fn element(&self, selector: &str) -> Element {
        dom::query(&self.document, selector).unwrap()
    }

    fn text(&self, selector: &str) -> String {
        self.element(selector).text_content().unwrap_or_default()
    }

    fn attr(&self, selector: &str, name: &str) -> Option<String> {
        self.element(selector).get_attribute(name)
    }

    fn press(&self, key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        self.document.dispatch_event(&event).unwrap();
    }

    fn set_value(&self, id: &str, value: &str) {
        let el = self.element(&format!("#{id}"));
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    /// Dispatch a cancelable submit and wait one task for the handler to run.
    async fn submit(&self) {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("submit", &init).unwrap();
        self.element("[data-contact-form]")
            .dispatch_event(&event)
            .unwrap();
        assert!(event.default_prevented());

        let tick = Promise::new(&mut |resolve, _reject| {
            dom::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
                .unwrap();
        });
        JsFuture::from(tick).await.unwrap();
    }
}

fn click(el: &Element) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    el.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn toggle_opens_and_escape_closes() {
    let fx = Fixture::new();
    let toggle = fx.element("[data-nav-toggle]");
    let list = fx.element("[data-nav-list]");

    click(&toggle);
    assert!(fx.page.borrow().state().nav_open);
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(list.class_list().contains("is-open"));

    fx.press("Escape");
    assert!(!fx.page.borrow().state().nav_open);
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!list.class_list().contains("is-open"));
}

#[wasm_bindgen_test]
fn outside_click_closes_but_inside_click_does_not() {
    let fx = Fixture::new();
    click(&fx.element("[data-nav-toggle]"));
    click(&fx.element("[data-nav-list]"));
    assert!(fx.page.borrow().state().nav_open);

    click(&fx.element("#outside"));
    assert!(!fx.page.borrow().state().nav_open);
}

#[wasm_bindgen_test]
fn other_keys_leave_menu_open() {
    let fx = Fixture::new();
    click(&fx.element("[data-nav-toggle]"));
    fx.press("Enter");
    assert!(fx.page.borrow().state().nav_open);
}

#[wasm_bindgen_test]
fn link_click_closes_menu() {
    let fx = Fixture::new();
    click(&fx.element("[data-nav-toggle]"));
    click(&fx.element("[href='#skills']"));
    assert!(!fx.page.borrow().state().nav_open);
}

#[wasm_bindgen_test]
fn fixtures_do_not_share_listeners() {
    let first = Fixture::new();
    let second = Fixture::new();
    click(&second.element("[data-nav-toggle]"));
    assert!(second.page.borrow().state().nav_open);

    second.press("Escape");
    click(&first.element("[data-nav-toggle]"));
    assert!(first.page.borrow().state().nav_open);
    assert!(!second.page.borrow().state().nav_open);
}

#[wasm_bindgen_test]
fn language_toggle_rewrites_and_persists() {
    let fx = Fixture::new();
    assert_eq!(fx.page.borrow().state().lang, Lang::En);
    assert_eq!(
        fx.attr("[data-lang-toggle]", "aria-label").as_deref(),
        Some("Switch to Portuguese")
    );

    click(&fx.element("[data-lang-toggle]"));
    assert_eq!(fx.page.borrow().state().lang, Lang::Pt);
    let root = fx.document.document_element().unwrap();
    assert_eq!(root.get_attribute("lang").as_deref(), Some("pt"));
    assert_eq!(fx.attr("[data-lang-toggle]", "data-lang").as_deref(), Some("pt"));
    assert_eq!(
        fx.attr("[data-lang-toggle]", "aria-label").as_deref(),
        Some("Trocar para inglês")
    );
    assert_eq!(fx.text("[href='#contact']"), "Contato");
    assert_eq!(fx.text("[data-i18n='no.such.key']"), "Keep me");
    assert_eq!(fx.attr("#name", "placeholder").as_deref(), Some("Seu nome"));
    let stored = dom::local_storage().unwrap().get_item("lang").unwrap();
    assert_eq!(stored.as_deref(), Some("pt"));
}

#[wasm_bindgen_test]
fn unsupported_language_is_ignored() {
    let fx = Fixture::new();
    assert!(!fx.page.borrow_mut().set_language("fr"));
    assert_eq!(fx.page.borrow().state().lang, Lang::En);
}

#[wasm_bindgen_test]
fn intersection_batch_marks_single_link() {
    let fx = Fixture::new();
    fx.page.borrow_mut().observe_sections(&[
        SectionEntry::new("about", 0.2, true),
        SectionEntry::new("skills", 0.7, true),
    ]);
    assert_eq!(fx.attr("[href='#skills']", "aria-current").as_deref(), Some("page"));
    assert!(fx.attr("[href='#about']", "aria-current").is_none());
    assert_eq!(
        fx.page.borrow().state().active_section.as_deref(),
        Some("skills")
    );
}

#[wasm_bindgen_test]
async fn invalid_submission_flags_fields() {
    let fx = Fixture::new();
    fx.set_value("name", "J");
    fx.set_value("email", "bad");
    fx.set_value("message", "short");
    fx.submit().await;

    assert_eq!(
        fx.text("#nameError"),
        "Please enter your name (min 2 characters)."
    );
    assert_eq!(fx.attr("#email", "aria-invalid").as_deref(), Some("true"));
    assert_eq!(
        fx.text("[data-form-status]"),
        "Please review the highlighted fields."
    );
}

#[wasm_bindgen_test]
async fn valid_submission_resets_form() {
    let fx = Fixture::new();
    fx.set_value("name", "Jo");
    fx.set_value("email", "a@b.co");
    fx.set_value("message", "0123456789");
    fx.submit().await;

    assert_eq!(fx.text("#nameError"), "");
    assert_eq!(fx.attr("#message", "aria-invalid").as_deref(), Some("false"));
    assert_eq!(
        fx.text("[data-form-status]"),
        "Message ready to send. Wire a backend endpoint to deliver it."
    );
    let name: HtmlInputElement = fx.element("#name").dyn_into().unwrap();
    assert_eq!(name.value(), "");
}

#[wasm_bindgen_test]
fn page_state_reaches_js_as_plain_object() {
    let fx = Fixture::new();
    fx.page.borrow_mut().toggle_menu();
    let value = serde_wasm_bindgen::to_value(fx.page.borrow().state()).unwrap();
    let open = js_sys::Reflect::get(&value, &JsValue::from_str("navOpen")).unwrap();
    assert_eq!(open.as_bool(), Some(true));
}

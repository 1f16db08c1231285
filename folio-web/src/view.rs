//! The portfolio DOM as a [`PageView`].
//!
//! Elements are looked up once when the page mounts; anything missing stays
//! `None` and the operations touching it do nothing.

use crate::dom;
use folio_core::{
    Catalog, ContactForm, Field, FormView, Lang, LinkView, NavView, PageConfig, PageView, TextView,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

struct FieldSlot {
    input: Option<Element>,
    error: Option<Element>,
}

impl FieldSlot {
    fn lookup(document: &Document, config: &PageConfig, field: Field) -> Self {
        Self {
            input: document.get_element_by_id(config.field_id(field)),
            error: document.get_element_by_id(&config.error_id(field)),
        }
    }

    fn value(&self) -> String {
        self.input.as_ref().map(control_value).unwrap_or_default()
    }
}

fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub struct DomPage {
    root: Option<Element>,
    nav_toggle: Option<Element>,
    nav_list: Option<Element>,
    nav_links: Vec<Element>,
    lang_toggle: Option<Element>,
    text_nodes: Vec<Element>,
    placeholder_nodes: Vec<Element>,
    form: Option<HtmlFormElement>,
    status: Option<Element>,
    name: FieldSlot,
    email: FieldSlot,
    message: FieldSlot,
    open_class: String,
    i18n_attr: String,
    placeholder_attr: String,
}

impl DomPage {
    #[must_use]
    pub fn query(document: &Document, config: &PageConfig) -> Self {
        let sel = &config.selectors;
        Self {
            root: document.document_element(),
            nav_toggle: dom::query(document, &sel.nav_toggle),
            nav_list: dom::query(document, &sel.nav_list),
            nav_links: dom::query_all(document, &sel.nav_link),
            lang_toggle: dom::query(document, &sel.lang_toggle),
            text_nodes: dom::query_all(document, &format!("[{}]", config.i18n_attr)),
            placeholder_nodes: dom::query_all(
                document,
                &format!("[{}]", config.placeholder_attr),
            ),
            form: dom::query(document, &sel.form).and_then(|el| el.dyn_into().ok()),
            status: dom::query(document, &sel.status),
            name: FieldSlot::lookup(document, config, Field::Name),
            email: FieldSlot::lookup(document, config, Field::Email),
            message: FieldSlot::lookup(document, config, Field::Message),
            open_class: config.open_class.clone(),
            i18n_attr: config.i18n_attr.clone(),
            placeholder_attr: config.placeholder_attr.clone(),
        }
    }

    #[must_use]
    pub const fn nav_toggle(&self) -> Option<&Element> {
        self.nav_toggle.as_ref()
    }

    #[must_use]
    pub const fn nav_list(&self) -> Option<&Element> {
        self.nav_list.as_ref()
    }

    #[must_use]
    pub fn nav_links(&self) -> &[Element] {
        &self.nav_links
    }

    #[must_use]
    pub const fn lang_toggle(&self) -> Option<&Element> {
        self.lang_toggle.as_ref()
    }

    #[must_use]
    pub const fn form(&self) -> Option<&HtmlFormElement> {
        self.form.as_ref()
    }

    /// Whether `target` sits inside the nav toggle or the nav list.
    #[must_use]
    pub fn contains_nav_target(&self, target: Option<&web_sys::Node>) -> bool {
        [self.nav_list.as_ref(), self.nav_toggle.as_ref()]
            .into_iter()
            .flatten()
            .any(|el| el.contains(target))
    }

    const fn slot(&self, field: Field) -> &FieldSlot {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

fn rewrite_nodes(nodes: &[Element], attr: &str, catalog: &Catalog, apply: impl Fn(&Element, &str)) {
    for node in nodes {
        let Some(key) = node.get_attribute(attr) else {
            continue;
        };
        if let Some(text) = catalog.resolve(&key) {
            apply(node, text);
        }
    }
}

impl NavView for DomPage {
    fn nav_available(&self) -> bool {
        self.nav_toggle.is_some() && self.nav_list.is_some()
    }

    fn render_nav(&mut self, open: bool) {
        let (Some(toggle), Some(list)) = (&self.nav_toggle, &self.nav_list) else {
            return;
        };
        if let Err(err) = list
            .class_list()
            .toggle_with_force(&self.open_class, open)
        {
            log::warn!("could not toggle nav list: {}", dom::js_error_message(&err));
        }
        dom::set_attr(toggle, "aria-expanded", if open { "true" } else { "false" });
    }
}

impl LinkView for DomPage {
    fn clear_current(&mut self) {
        for link in &self.nav_links {
            dom::remove_attr(link, "aria-current");
        }
    }

    fn mark_current(&mut self, link: usize) {
        if let Some(link) = self.nav_links.get(link) {
            dom::set_attr(link, "aria-current", "page");
        }
    }
}

impl TextView for DomPage {
    fn set_document_lang(&mut self, lang: Lang) {
        if let Some(root) = &self.root {
            dom::set_attr(root, "lang", lang.code());
        }
    }

    fn set_lang_toggle(&mut self, lang: Lang, label: &str) {
        if let Some(toggle) = &self.lang_toggle {
            dom::set_attr(toggle, "data-lang", lang.code());
            dom::set_attr(toggle, "aria-label", label);
        }
    }

    fn rewrite_text(&mut self, catalog: &Catalog) {
        rewrite_nodes(&self.text_nodes, &self.i18n_attr, catalog, |node, text| {
            node.set_text_content(Some(text));
        });
    }

    fn rewrite_placeholders(&mut self, catalog: &Catalog) {
        rewrite_nodes(
            &self.placeholder_nodes,
            &self.placeholder_attr,
            catalog,
            |node, text| dom::set_attr(node, "placeholder", text),
        );
    }
}

impl FormView for DomPage {
    fn read_form(&self) -> ContactForm {
        ContactForm::new(self.name.value(), self.email.value(), self.message.value())
    }

    fn set_field_error(&mut self, field: Field, message: Option<&str>) {
        let slot = self.slot(field);
        let (Some(input), Some(error)) = (&slot.input, &slot.error) else {
            return;
        };
        error.set_text_content(Some(message.unwrap_or_default()));
        dom::set_attr(
            input,
            "aria-invalid",
            if message.is_some() { "true" } else { "false" },
        );
    }

    fn set_status(&mut self, message: &str) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(message));
        }
    }

    fn reset_form(&mut self) {
        if let Some(form) = &self.form {
            form.reset();
        }
    }
}

impl PageView for DomPage {
    fn link_hrefs(&self) -> Vec<String> {
        self.nav_links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect()
    }
}

//! In-memory page and store.
//!
//! [`MemoryPage`] models the parts of the portfolio markup the behaviors
//! touch, with the same defaults the HTML ships with. It backs the unit
//! tests and the tester's logic mode.

use crate::catalog::Catalog;
use crate::contact::{ContactForm, Field, FormView};
use crate::highlight::LinkView;
use crate::lang::Lang;
use crate::localize::TextView;
use crate::nav::NavView;
use crate::page::PageView;
use crate::store::PreferenceStore;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLink {
    pub href: String,
    pub current: bool,
}

/// An element with a translation key and its current content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryNode {
    pub key: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    pub value: String,
    pub error: String,
    /// `aria-invalid`; `None` until the first validation.
    pub invalid: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryPage {
    pub has_nav: bool,
    pub nav_expanded: bool,
    pub list_open: bool,
    pub links: Vec<MemoryLink>,
    pub document_lang: Option<String>,
    pub toggle_lang: Option<String>,
    pub toggle_label: Option<String>,
    pub text_nodes: Vec<MemoryNode>,
    pub placeholder_nodes: Vec<MemoryNode>,
    pub name: MemoryField,
    pub email: MemoryField,
    pub message: MemoryField,
    pub status: Option<String>,
}

const SECTION_LINKS: [&str; 4] = ["#about", "#skills", "#projects", "#contact"];

const TEXT_KEYS: &[(&str, &str)] = &[
    ("nav.about", "About"),
    ("nav.skills", "Skills"),
    ("nav.projects", "Projects"),
    ("nav.contact", "Contact"),
    ("hero.kicker", "Software Engineer"),
    ("hero.subtitle", ""),
    ("about.title", "About Me"),
    ("skills.title", "Skills"),
    ("projects.title", "Projects"),
    ("projects.p1.title", "Gym & Trainer App"),
    ("contact.title", "Contact"),
    ("form.name", "Name"),
    ("form.email", "Email"),
    ("form.message", "Message"),
    ("form.send", "Send"),
    ("footer.top", "Back to top"),
];

const PLACEHOLDER_KEYS: &[(&str, &str)] = &[
    ("form.namePh", "Your name"),
    ("form.emailPh", "you@domain.com"),
    ("form.messagePh", ""),
];

fn nodes(table: &[(&str, &str)]) -> Vec<MemoryNode> {
    table
        .iter()
        .map(|(key, content)| MemoryNode {
            key: (*key).to_string(),
            content: (*content).to_string(),
        })
        .collect()
}

fn rewrite(nodes: &mut [MemoryNode], catalog: &Catalog) {
    for node in nodes {
        if let Some(text) = catalog.resolve(&node.key) {
            node.content = text.to_string();
        }
    }
}

impl MemoryPage {
    /// The shipped portfolio layout before any script has run.
    #[must_use]
    pub fn portfolio() -> Self {
        Self {
            has_nav: true,
            nav_expanded: false,
            list_open: false,
            links: SECTION_LINKS
                .iter()
                .map(|href| MemoryLink {
                    href: (*href).to_string(),
                    current: false,
                })
                .collect(),
            document_lang: None,
            toggle_lang: None,
            toggle_label: None,
            text_nodes: nodes(TEXT_KEYS),
            placeholder_nodes: nodes(PLACEHOLDER_KEYS),
            name: MemoryField::default(),
            email: MemoryField::default(),
            message: MemoryField::default(),
            status: None,
        }
    }

    pub fn add_text_node(&mut self, key: &str, content: &str) {
        self.text_nodes.push(MemoryNode {
            key: key.to_string(),
            content: content.to_string(),
        });
    }

    /// Content of the first text node carrying `key`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.text_nodes
            .iter()
            .find(|n| n.key == key)
            .map(|n| n.content.as_str())
    }

    #[must_use]
    pub fn placeholder(&self, key: &str) -> Option<&str> {
        self.placeholder_nodes
            .iter()
            .find(|n| n.key == key)
            .map(|n| n.content.as_str())
    }

    #[must_use]
    pub fn current_link(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.current)
            .map(|l| l.href.as_str())
    }

    pub fn fill_form(&mut self, name: &str, email: &str, message: &str) {
        self.name.value = name.to_string();
        self.email.value = email.to_string();
        self.message.value = message.to_string();
    }

    #[must_use]
    pub const fn field(&self, field: Field) -> &MemoryField {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut MemoryField {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl NavView for MemoryPage {
    fn nav_available(&self) -> bool {
        self.has_nav
    }

    fn render_nav(&mut self, open: bool) {
        self.nav_expanded = open;
        self.list_open = open;
    }
}

impl LinkView for MemoryPage {
    fn clear_current(&mut self) {
        for link in &mut self.links {
            link.current = false;
        }
    }

    fn mark_current(&mut self, link: usize) {
        if let Some(link) = self.links.get_mut(link) {
            link.current = true;
        }
    }
}

impl TextView for MemoryPage {
    fn set_document_lang(&mut self, lang: Lang) {
        self.document_lang = Some(lang.code().to_string());
    }

    fn set_lang_toggle(&mut self, lang: Lang, label: &str) {
        self.toggle_lang = Some(lang.code().to_string());
        self.toggle_label = Some(label.to_string());
    }

    fn rewrite_text(&mut self, catalog: &Catalog) {
        rewrite(&mut self.text_nodes, catalog);
    }

    fn rewrite_placeholders(&mut self, catalog: &Catalog) {
        rewrite(&mut self.placeholder_nodes, catalog);
    }
}

impl FormView for MemoryPage {
    fn read_form(&self) -> ContactForm {
        ContactForm::new(
            self.name.value.clone(),
            self.email.value.clone(),
            self.message.value.clone(),
        )
    }

    fn set_field_error(&mut self, field: Field, message: Option<&str>) {
        let slot = self.field_mut(field);
        slot.error = message.unwrap_or_default().to_string();
        slot.invalid = Some(message.is_some());
    }

    fn set_status(&mut self, message: &str) {
        self.status = Some(message.to_string());
    }

    fn reset_form(&mut self) {
        for field in [&mut self.name, &mut self.email, &mut self.message] {
            field.value.clear();
        }
    }
}

impl PageView for MemoryPage {
    fn link_hrefs(&self) -> Vec<String> {
        self.links.iter().map(|l| l.href.clone()).collect()
    }
}

//! Page state and the facade the platforms drive.

use crate::catalog::Translations;
use crate::config::PageConfig;
use crate::contact::{ContactHandoff, FormView, PendingBackend, Submission, submit_contact};
use crate::highlight::{LinkIndex, LinkView, SectionEntry, SectionHighlighter};
use crate::lang::Lang;
use crate::localize::{Localizer, TextView};
use crate::nav::{self, NavEvent, NavView};
use crate::store::PreferenceStore;
use serde::{Deserialize, Serialize};

/// Everything the page behaviors remember between events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub lang: Lang,
    pub nav_open: bool,
    pub active_section: Option<String>,
}

/// A surface that can host all four behaviors.
pub trait PageView: NavView + LinkView + TextView + FormView {
    /// `href` of every navigation link, in document order.
    fn link_hrefs(&self) -> Vec<String>;
}

/// Owns the state, the view and the store, and routes each interaction to
/// the matching behavior.
pub struct Page<V, S> {
    state: PageState,
    view: V,
    store: S,
    translations: Translations,
    config: PageConfig,
    highlighter: SectionHighlighter,
    handoff: Box<dyn ContactHandoff>,
}

impl<V: PageView, S: PreferenceStore> Page<V, S> {
    /// The link lookup for section highlighting is computed here, once.
    pub fn new(view: V, store: S, translations: Translations, config: PageConfig) -> Self {
        let highlighter = SectionHighlighter::new(LinkIndex::from_hrefs(view.link_hrefs()));
        Self {
            state: PageState::default(),
            view,
            store,
            translations,
            config,
            highlighter,
            handoff: Box::new(PendingBackend),
        }
    }

    #[must_use]
    pub fn with_handoff(mut self, handoff: impl ContactHandoff + 'static) -> Self {
        self.handoff = Box::new(handoff);
        self
    }

    /// Apply the persisted language. Call once after construction.
    pub fn init(&mut self) -> Lang {
        let localizer = Localizer::new(&self.translations, &self.config.storage_key);
        localizer.init(&mut self.state, &mut self.view, &mut self.store)
    }

    pub fn nav_event(&mut self, event: &NavEvent) {
        nav::handle_nav_event(&mut self.state, &mut self.view, event);
    }

    pub fn toggle_menu(&mut self) {
        nav::toggle_menu(&mut self.state, &mut self.view);
    }

    pub fn observe_sections(&mut self, entries: &[SectionEntry]) -> Option<usize> {
        self.highlighter
            .observe(&mut self.state, &mut self.view, entries)
    }

    /// Switch to `code`; unknown codes are ignored and return `false`.
    pub fn set_language(&mut self, code: &str) -> bool {
        let localizer = Localizer::new(&self.translations, &self.config.storage_key);
        localizer.set_language(&mut self.state, &mut self.view, &mut self.store, code)
    }

    pub fn toggle_language(&mut self) -> Lang {
        let localizer = Localizer::new(&self.translations, &self.config.storage_key);
        localizer.toggle(&mut self.state, &mut self.view, &mut self.store)
    }

    pub fn submit_contact(&mut self) -> Submission {
        submit_contact(
            self.translations.catalog(self.state.lang),
            &self.config.contact,
            &mut self.view,
            self.handoff.as_ref(),
        )
    }

    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store, e.g. to simulate a reload.
    pub fn into_store(self) -> S {
        self.store
    }
}

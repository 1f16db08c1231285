//! Two-language text switching.

use crate::catalog::{Catalog, MessageKey, Translations};
use crate::lang::Lang;
use crate::page::PageState;
use crate::store::PreferenceStore;

pub trait TextView {
    /// Write `<html lang>`.
    fn set_document_lang(&mut self, lang: Lang);
    /// Record the active language on the toggle and set its accessible label.
    fn set_lang_toggle(&mut self, lang: Lang, label: &str);
    /// Replace the text of every node carrying a translation key that
    /// resolves in `catalog`. Unresolved nodes keep their content.
    fn rewrite_text(&mut self, catalog: &Catalog);
    /// Same as [`TextView::rewrite_text`] for `placeholder` attributes.
    fn rewrite_placeholders(&mut self, catalog: &Catalog);
}

/// Applies a language to the page and remembers the choice.
#[derive(Debug, Clone, Copy)]
pub struct Localizer<'a> {
    translations: &'a Translations,
    storage_key: &'a str,
}

impl<'a> Localizer<'a> {
    #[must_use]
    pub const fn new(translations: &'a Translations, storage_key: &'a str) -> Self {
        Self {
            translations,
            storage_key,
        }
    }

    /// The persisted language, or English when nothing valid is stored.
    #[must_use]
    pub fn stored(&self, store: &impl PreferenceStore) -> Lang {
        Lang::from_stored(store.load(self.storage_key).as_deref())
    }

    pub fn apply(
        &self,
        state: &mut PageState,
        view: &mut impl TextView,
        store: &mut impl PreferenceStore,
        lang: Lang,
    ) {
        let catalog = self.translations.catalog(lang);
        state.lang = lang;
        view.set_document_lang(lang);
        view.set_lang_toggle(lang, catalog.message(MessageKey::LangToggleLabel));
        store.save(self.storage_key, lang.code());
        view.rewrite_text(catalog);
        view.rewrite_placeholders(catalog);
        log::info!("language set to {lang}");
    }

    /// Switch to `code`. Unknown codes change nothing and return `false`.
    pub fn set_language(
        &self,
        state: &mut PageState,
        view: &mut impl TextView,
        store: &mut impl PreferenceStore,
        code: &str,
    ) -> bool {
        let Some(lang) = Lang::from_code(code) else {
            log::debug!("ignoring unknown language '{code}'");
            return false;
        };
        self.apply(state, view, store, lang);
        true
    }

    /// Apply the persisted language on page load.
    pub fn init(
        &self,
        state: &mut PageState,
        view: &mut impl TextView,
        store: &mut impl PreferenceStore,
    ) -> Lang {
        let lang = self.stored(store);
        self.apply(state, view, store, lang);
        lang
    }

    /// Flip to the other language.
    pub fn toggle(
        &self,
        state: &mut PageState,
        view: &mut impl TextView,
        store: &mut impl PreferenceStore,
    ) -> Lang {
        let next = state.lang.toggled();
        self.apply(state, view, store, next);
        next
    }
}

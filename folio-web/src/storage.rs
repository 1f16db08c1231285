use crate::dom;
use folio_core::PreferenceStore;
use web_sys::Storage;

/// [`PreferenceStore`] over `localStorage`. A blocked or missing storage
/// reads as empty and drops writes.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn open() -> Self {
        let storage = dom::local_storage()
            .map_err(|err| {
                log::warn!(
                    "localStorage unavailable, language will not persist: {}",
                    dom::js_error_message(&err)
                );
            })
            .ok();
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("could not persist {key}: {}", dom::js_error_message(&err));
        }
    }
}

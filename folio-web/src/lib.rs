#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod logger;
pub mod mount;
pub mod observer;
pub mod settings;
pub mod storage;
pub mod test_bridge;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logger::init(log::LevelFilter::Info);
    let config = settings::page_config();
    logger::set_level(config.log_level());

    let Some(document) = dom::document() else {
        return;
    };
    // Without catalogs the page is left unenhanced.
    match folio_core::Translations::load() {
        Ok(translations) => {
            let page = mount::mount(&document, config, translations);
            test_bridge::install(&page);
        }
        Err(err) => log::error!("translation catalogs failed to load: {err}"),
    }
}

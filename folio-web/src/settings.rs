use folio_core::PageConfig;

const PAGE_CONFIG: &str = include_str!("../config/page.json");

/// The embedded page configuration, or defaults if it does not validate.
///
/// Install the logger first: a rejected config is reported as a warning.
#[must_use]
pub fn page_config() -> PageConfig {
    config_or_default(PAGE_CONFIG)
}

fn config_or_default(source: &str) -> PageConfig {
    PageConfig::from_json(source).unwrap_or_else(|err| {
        log::warn!("page config rejected, using defaults: {err}");
        PageConfig::default()
    })
}

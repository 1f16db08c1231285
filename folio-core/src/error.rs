use thiserror::Error;

/// Failures while loading a translation catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {lang} catalog: {source}")]
    Parse {
        lang: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{lang} catalog root must be a JSON object")]
    NotAnObject { lang: &'static str },
    #[error("{lang} catalog is missing message '{key}'")]
    MissingMessage {
        lang: &'static str,
        key: &'static str,
    },
    #[error("{lang} catalog is missing translation '{key}'")]
    MissingTranslation { lang: &'static str, key: String },
}

/// Failures while loading or validating the page configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("observer threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
    #[error("config field '{0}' must not be empty")]
    EmptyField(&'static str),
}

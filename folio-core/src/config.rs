//! Page configuration: where the behaviors find their elements and the
//! tunables they run with. Every field has a default matching the shipped
//! page markup, so a partial JSON document is enough.

use crate::contact::{ContactRules, Field};
use crate::error::ConfigError;
use crate::highlight::DEFAULT_THRESHOLDS;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// CSS selectors for the elements the page script attaches to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_toggle: String,
    pub nav_list: String,
    pub nav_link: String,
    pub sections: String,
    pub lang_toggle: String,
    pub form: String,
    pub status: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_toggle: "[data-nav-toggle]".to_string(),
            nav_list: "[data-nav-list]".to_string(),
            nav_link: "[data-nav-link]".to_string(),
            sections: "main section[id]".to_string(),
            lang_toggle: "[data-lang-toggle]".to_string(),
            form: "[data-contact-form]".to_string(),
            status: "[data-form-status]".to_string(),
        }
    }
}

/// Element ids of the contact inputs. Error elements use the same id plus
/// [`PageConfig::error_suffix`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldIds {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            email: "email".to_string(),
            message: "message".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub fields: FieldIds,
    pub error_suffix: String,
    /// Attribute holding a text translation key.
    pub i18n_attr: String,
    /// Attribute holding a placeholder translation key.
    pub placeholder_attr: String,
    /// Class added to the nav list while the menu is open.
    pub open_class: String,
    pub storage_key: String,
    pub thresholds: Vec<f64>,
    pub contact: ContactRules,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            fields: FieldIds::default(),
            error_suffix: "Error".to_string(),
            i18n_attr: "data-i18n".to_string(),
            placeholder_attr: "data-i18n-placeholder".to_string(),
            open_class: "is-open".to_string(),
            storage_key: "lang".to_string(),
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
            contact: ContactRules::default(),
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails [`PageConfig::validate`].
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if a threshold is outside `[0, 1]` or a required
    /// name is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(bad) = self
            .thresholds
            .iter()
            .copied()
            .find(|t| !(0.0..=1.0).contains(t))
        {
            return Err(ConfigError::ThresholdOutOfRange(bad));
        }

        let required = [
            ("storage_key", &self.storage_key),
            ("i18n_attr", &self.i18n_attr),
            ("placeholder_attr", &self.placeholder_attr),
            ("selectors.nav_toggle", &self.selectors.nav_toggle),
            ("selectors.nav_list", &self.selectors.nav_list),
            ("selectors.nav_link", &self.selectors.nav_link),
            ("selectors.sections", &self.selectors.sections),
            ("selectors.lang_toggle", &self.selectors.lang_toggle),
            ("selectors.form", &self.selectors.form),
            ("selectors.status", &self.selectors.status),
            ("fields.name", &self.fields.name),
            ("fields.email", &self.fields.email),
            ("fields.message", &self.fields.message),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::EmptyField(*name));
        }
        Ok(())
    }

    #[must_use]
    pub fn field_id(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Message => &self.fields.message,
        }
    }

    #[must_use]
    pub fn error_id(&self, field: Field) -> String {
        format!("{}{}", self.field_id(field), self.error_suffix)
    }

    /// Parsed log level, `info` when unrecognized.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.thresholds, vec![0.2, 0.4, 0.6]);
        assert_eq!(config.storage_key, "lang");
        assert_eq!(config.error_id(Field::Email), "emailError");
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn partial_documents_override_selectively() {
        let config = PageConfig::from_json(
            r#"{ "selectors": { "sections": "section[id]" }, "contact": { "min_name_chars": 3 }, "log_level": "debug" }"#,
        )
        .unwrap();
        assert_eq!(config.selectors.sections, "section[id]");
        assert_eq!(config.selectors.nav_toggle, "[data-nav-toggle]");
        assert_eq!(config.contact.min_name_chars, 3);
        assert_eq!(config.contact.min_message_chars, 10);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn thresholds_must_be_ratios() {
        let err = PageConfig::from_json(r#"{ "thresholds": [0.2, 1.5] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdOutOfRange(t) if (t - 1.5).abs() < f64::EPSILON));
    }

    #[test]
    fn blank_names_are_rejected() {
        let err = PageConfig::from_json(r#"{ "storage_key": " " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField("storage_key")));
        let err = PageConfig::from_json(r#"{ "fields": { "email": "" } }"#).unwrap_err();
        assert_eq!(err.to_string(), "config field 'fields.email' must not be empty");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            PageConfig::from_json("{ nope").unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = PageConfig {
            log_level: "chatty".to_string(),
            ..PageConfig::default()
        };
        assert_eq!(config.log_level(), LevelFilter::Info);
    }
}

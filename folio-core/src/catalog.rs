use crate::error::CatalogError;
use crate::lang::Lang;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

const LOCALE_TABLE: &[(Lang, &str)] = &[
    (Lang::En, include_str!("../i18n/en.json")),
    (Lang::Pt, include_str!("../i18n/pt.json")),
];

/// Strings the page logic emits on its own, as opposed to keys authored in
/// `data-i18n` attributes. Every catalog must define all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Accessible label of the language toggle, naming the language it switches to.
    LangToggleLabel,
    NameError,
    EmailError,
    MessageError,
    StatusInvalid,
    StatusReady,
}

impl MessageKey {
    pub const ALL: [Self; 6] = [
        Self::LangToggleLabel,
        Self::NameError,
        Self::EmailError,
        Self::MessageError,
        Self::StatusInvalid,
        Self::StatusReady,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::LangToggleLabel => "a11y.switchLang",
            Self::NameError => "form.errors.name",
            Self::EmailError => "form.errors.email",
            Self::MessageError => "form.errors.message",
            Self::StatusInvalid => "form.status.invalid",
            Self::StatusReady => "form.status.ready",
        }
    }
}

/// One language's dictionary, flattened to dotted key paths.
#[derive(Debug, Clone)]
pub struct Catalog {
    lang: Lang,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parse a nested JSON dictionary. Only string leaves become entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not a JSON object or lacks any
    /// [`MessageKey`].
    pub fn from_json(lang: Lang, source: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(source).map_err(|source| CatalogError::Parse {
            lang: lang.code(),
            source,
        })?;
        if !value.is_object() {
            return Err(CatalogError::NotAnObject { lang: lang.code() });
        }

        let mut entries = HashMap::new();
        flatten("", &value, &mut entries);

        if let Some(missing) = MessageKey::ALL
            .iter()
            .find(|key| !entries.contains_key(key.path()))
        {
            return Err(CatalogError::MissingMessage {
                lang: lang.code(),
                key: missing.path(),
            });
        }

        Ok(Self { lang, entries })
    }

    #[must_use]
    pub const fn lang(&self) -> Lang {
        self.lang
    }

    /// Resolve a dotted key path such as `hero.subtitle`.
    ///
    /// Unknown paths, paths that stop at an intermediate object and paths
    /// that reach a non-string value all resolve to `None`.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Text for a message the page logic emits. Load-time checks guarantee presence.
    #[must_use]
    pub fn message(&self, key: MessageKey) -> &str {
        self.resolve(key.path()).unwrap_or(key.path())
    }

    /// All dotted keys, sorted.
    #[must_use]
    pub fn keys(&self) -> BTreeSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    let Value::Object(map) = value else {
        return;
    };
    for (k, v) in map {
        let path = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{prefix}.{k}")
        };
        match v {
            Value::String(text) => {
                out.insert(path, text.clone());
            }
            Value::Object(_) => flatten(&path, v, out),
            _ => {}
        }
    }
}

/// Both language catalogs, checked against each other.
#[derive(Debug, Clone)]
pub struct Translations {
    en: Catalog,
    pt: Catalog,
}

impl Translations {
    /// Load the dictionaries embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded dictionary is malformed or incomplete.
    pub fn load() -> Result<Self, CatalogError> {
        let source = |lang: Lang| {
            LOCALE_TABLE
                .iter()
                .find_map(|(code, data)| (*code == lang).then_some(*data))
                .unwrap_or(LOCALE_TABLE[0].1)
        };
        Self::from_sources(source(Lang::En), source(Lang::Pt))
    }

    /// Build from explicit sources. English is the reference: every English
    /// key must exist in Portuguese.
    ///
    /// # Errors
    ///
    /// Returns an error if either source fails to load or Portuguese lacks an
    /// English key.
    pub fn from_sources(en: &str, pt: &str) -> Result<Self, CatalogError> {
        let en = Catalog::from_json(Lang::En, en)?;
        let pt = Catalog::from_json(Lang::Pt, pt)?;

        let pt_keys = pt.keys();
        if let Some(missing) = en.keys().into_iter().find(|key| !pt_keys.contains(key)) {
            return Err(CatalogError::MissingTranslation {
                lang: Lang::Pt.code(),
                key: missing.to_string(),
            });
        }

        Ok(Self { en, pt })
    }

    #[must_use]
    pub const fn catalog(&self, lang: Lang) -> &Catalog {
        match lang {
            Lang::En => &self.en,
            Lang::Pt => &self.pt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGES: &str = r#"{
        "a11y": { "switchLang": "Switch" },
        "form": {
            "errors": { "name": "n", "email": "e", "message": "m" },
            "status": { "invalid": "i", "ready": "r" }
        }
    }"#;

    fn with_messages(extra: &str) -> String {
        let mut base: Value = serde_json::from_str(MESSAGES).unwrap();
        let extra: Value = serde_json::from_str(extra).unwrap();
        if let (Value::Object(base_map), Value::Object(extra_map)) = (&mut base, extra) {
            base_map.extend(extra_map);
        }
        base.to_string()
    }

    #[test]
    fn embedded_catalogs_load() {
        let translations = Translations::load().expect("embedded catalogs load");
        let en = translations.catalog(Lang::En);
        let pt = translations.catalog(Lang::Pt);
        assert_eq!(en.lang(), Lang::En);
        assert_eq!(pt.resolve("nav.projects"), Some("Projetos"));
        assert_eq!(en.resolve("hero.kicker"), Some("Software Engineer"));
        assert_eq!(en.message(MessageKey::LangToggleLabel), "Switch to Portuguese");
        assert_eq!(pt.message(MessageKey::LangToggleLabel), "Trocar para inglês");
    }

    #[test]
    fn resolve_walks_nested_levels() {
        let source = with_messages(r#"{ "projects": { "p1": { "title": "Gym" } } }"#);
        let catalog = Catalog::from_json(Lang::En, &source).unwrap();
        assert_eq!(catalog.resolve("projects.p1.title"), Some("Gym"));
        assert_eq!(catalog.resolve("projects.p1"), None);
        assert_eq!(catalog.resolve("projects.p9.title"), None);
        assert_eq!(catalog.resolve("projects.p1.title.length"), None);
        assert_eq!(catalog.resolve(""), None);
    }

    #[test]
    fn non_string_leaves_are_skipped() {
        let source = with_messages(r#"{ "meta": { "count": 3, "flag": true, "list": ["a"] } }"#);
        let catalog = Catalog::from_json(Lang::En, &source).unwrap();
        assert_eq!(catalog.resolve("meta.count"), None);
        assert_eq!(catalog.resolve("meta.flag"), None);
        assert_eq!(catalog.resolve("meta.list"), None);
    }

    #[test]
    fn missing_message_is_reported_at_load() {
        let err = Catalog::from_json(Lang::Pt, r#"{ "a11y": { "switchLang": "x" } }"#)
            .expect_err("incomplete catalog should fail");
        assert!(matches!(
            err,
            CatalogError::MissingMessage {
                lang: "pt",
                key: "form.errors.name"
            }
        ));
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = Catalog::from_json(Lang::En, "[]").expect_err("array root should fail");
        assert!(matches!(err, CatalogError::NotAnObject { lang: "en" }));
        let err = Catalog::from_json(Lang::En, "{").expect_err("broken json should fail");
        assert!(err.to_string().contains("failed to parse en catalog"));
    }

    #[test]
    fn parity_check_names_the_missing_key() {
        let en = with_messages(r#"{ "nav": { "about": "About" } }"#);
        let err = Translations::from_sources(&en, MESSAGES).expect_err("pt lacks nav.about");
        match err {
            CatalogError::MissingTranslation { lang, key } => {
                assert_eq!(lang, "pt");
                assert_eq!(key, "nav.about");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the page can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Pt,
}

impl Lang {
    pub const ALL: [Self; 2] = [Self::En, Self::Pt];

    /// Two-letter code written to `<html lang>` and to storage.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    /// Parse an exact language code. Anything other than `en` or `pt` is unknown.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }

    /// The language the toggle switches to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Pt,
            Self::Pt => Self::En,
        }
    }

    /// Interpret a persisted value, treating absent or unknown values as English.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(Self::from_code).unwrap_or_default()
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_exactly() {
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("pt"), Some(Lang::Pt));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code("PT"), None);
        assert_eq!(Lang::from_code(" en"), None);
    }

    #[test]
    fn stored_values_default_to_english() {
        assert_eq!(Lang::from_stored(None), Lang::En);
        assert_eq!(Lang::from_stored(Some("")), Lang::En);
        assert_eq!(Lang::from_stored(Some("es")), Lang::En);
        assert_eq!(Lang::from_stored(Some("pt")), Lang::Pt);
    }

    #[test]
    fn toggle_flips_between_both_languages() {
        for lang in Lang::ALL {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Lang::Pt).unwrap();
        assert_eq!(json, "\"pt\"");
        let parsed: Lang = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Lang::En);
        assert_eq!(Lang::Pt.to_string(), "pt");
    }
}

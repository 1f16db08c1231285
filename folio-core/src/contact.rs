//! Contact form validation and handoff.

use crate::catalog::{Catalog, MessageKey};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One run of anything but `@` and page whitespace. `\s` here is Unicode
/// `White_Space` plus the BOM, minus NEL.
const PART: &str = r"[^@\x{FEFF}[\s--\x{85}]]+";

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(&format!(r"^{PART}@{PART}\.{PART}$")).ok());

/// Whitespace as the browser's `String.prototype.trim` sees it.
fn is_page_space(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Strip leading and trailing page whitespace, BOM included.
fn trim_field(value: &str) -> &str {
    value.trim_matches(is_page_space)
}

/// Length in UTF-16 code units, the unit form fields report.
fn field_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Structural email check: `local@domain.tld`, no whitespace, one `@`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    (*EMAIL_RE)
        .as_ref()
        .is_some_and(|re| re.is_match(trim_field(value)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    NameTooShort,
    EmailMalformed,
    MessageTooShort,
}

impl FieldIssue {
    #[must_use]
    pub const fn message_key(self) -> MessageKey {
        match self {
            Self::NameTooShort => MessageKey::NameError,
            Self::EmailMalformed => MessageKey::EmailError,
            Self::MessageTooShort => MessageKey::MessageError,
        }
    }
}

/// Minimum trimmed lengths, counted in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRules {
    pub min_name_chars: usize,
    pub min_message_chars: usize,
}

impl Default for ContactRules {
    fn default() -> Self {
        Self {
            min_name_chars: 2,
            min_message_chars: 10,
        }
    }
}

/// Raw field values as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Per-field outcome of one submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validation {
    pub name: Option<FieldIssue>,
    pub email: Option<FieldIssue>,
    pub message: Option<FieldIssue>,
}

impl Validation {
    #[must_use]
    pub const fn issue(&self, field: Field) -> Option<FieldIssue> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

#[must_use]
pub fn validate(form: &ContactForm, rules: &ContactRules) -> Validation {
    let name_ok = field_len(trim_field(&form.name)) >= rules.min_name_chars;
    let message_ok = field_len(trim_field(&form.message)) >= rules.min_message_chars;
    Validation {
        name: (!name_ok).then_some(FieldIssue::NameTooShort),
        email: (!is_valid_email(&form.email)).then_some(FieldIssue::EmailMalformed),
        message: (!message_ok).then_some(FieldIssue::MessageTooShort),
    }
}

/// A validated message, trimmed, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&ContactForm> for ContactMessage {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: trim_field(&form.name).to_string(),
            email: trim_field(&form.email).to_string(),
            message: trim_field(&form.message).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Rejected(Validation),
    Ready(ContactMessage),
}

impl Submission {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

pub trait FormView {
    /// Current field values; missing fields read as empty.
    fn read_form(&self) -> ContactForm;
    /// Show or clear a field's inline error and keep `aria-invalid` in step.
    fn set_field_error(&mut self, field: Field, message: Option<&str>);
    fn set_status(&mut self, message: &str);
    fn reset_form(&mut self);
}

/// Receives messages that passed validation.
pub trait ContactHandoff {
    fn hand_off(&self, message: &ContactMessage);
}

/// Placeholder collaborator until a backend endpoint exists. Logs only.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingBackend;

impl PendingBackend {
    /// Where messages will be posted once a backend is wired.
    pub const ENDPOINT: &'static str = "/api/contact";
}

impl ContactHandoff for PendingBackend {
    fn hand_off(&self, message: &ContactMessage) {
        let body = serde_json::to_string(message).unwrap_or_default();
        log::info!(
            "contact message ready for {} ({} bytes), no backend wired",
            Self::ENDPOINT,
            body.len()
        );
    }
}

/// Validate the form currently shown in `view` and update it.
///
/// Messages come from `catalog`, which should match the page language.
pub fn submit_contact(
    catalog: &Catalog,
    rules: &ContactRules,
    view: &mut impl FormView,
    handoff: &dyn ContactHandoff,
) -> Submission {
    let form = view.read_form();
    let validation = validate(&form, rules);

    for field in Field::ALL {
        let message = validation
            .issue(field)
            .map(|issue| catalog.message(issue.message_key()));
        view.set_field_error(field, message);
    }

    if !validation.is_valid() {
        view.set_status(catalog.message(MessageKey::StatusInvalid));
        log::debug!("contact: rejected {validation:?}");
        return Submission::Rejected(validation);
    }

    let message = ContactMessage::from(&form);
    view.set_status(catalog.message(MessageKey::StatusReady));
    view.reset_form();
    handoff.hand_off(&message);
    Submission::Ready(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Translations;
    use crate::lang::Lang;
    use crate::memory::MemoryPage;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<ContactMessage>>);

    impl ContactHandoff for Recorder {
        fn hand_off(&self, message: &ContactMessage) {
            self.0.borrow_mut().push(message.clone());
        }
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL_RE.is_some());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  jo@x.com "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn lengths_are_measured_after_trimming() {
        let rules = ContactRules::default();
        let v = validate(&ContactForm::new("  J  ", "a@b.co", "   short   "), &rules);
        assert_eq!(v.name, Some(FieldIssue::NameTooShort));
        assert_eq!(v.message, Some(FieldIssue::MessageTooShort));
        assert!(v.email.is_none());

        let v = validate(&ContactForm::new("Jo", "a@b.co", "ten chars!"), &rules);
        assert!(v.is_valid());
    }

    #[test]
    fn lengths_count_utf16_units() {
        let rules = ContactRules::default();
        let v = validate(&ContactForm::new("Zé", "zé@x.com", "olá, tudo?"), &rules);
        assert!(v.is_valid(), "{v:?}");

        // Astral characters count as two units each.
        let v = validate(&ContactForm::new("😀", "a@b.co", "😀".repeat(5)), &rules);
        assert!(v.is_valid(), "{v:?}");
        let v = validate(&ContactForm::new("😀", "a@b.co", "😀".repeat(4)), &rules);
        assert_eq!(v.message, Some(FieldIssue::MessageTooShort));
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        let rules = ContactRules::default();
        let v = validate(
            &ContactForm::new("\u{FEFF}J\u{FEFF}", "a@b.co", "ten chars!"),
            &rules,
        );
        assert_eq!(v.name, Some(FieldIssue::NameTooShort));
        assert!(!is_valid_email("a\u{FEFF}b@c.com"));
        assert!(is_valid_email("\u{FEFF}a@b.co\u{FEFF}"));
        assert_eq!(trim_field("\u{FEFF} Jo \u{A0}"), "Jo");
    }

    #[test]
    fn next_line_is_not_whitespace() {
        assert_eq!(trim_field("\u{85}Jo"), "\u{85}Jo");
        assert!(is_valid_email("a\u{85}b@c.com"));
    }

    #[test]
    fn accepted_submission_clears_fields() {
        let translations = Translations::load().unwrap();
        let mut page = MemoryPage::portfolio();
        page.fill_form("Jo", "jo@x.com", "Hello there friend");
        let recorder = Recorder::default();

        let outcome = submit_contact(
            translations.catalog(Lang::En),
            &ContactRules::default(),
            &mut page,
            &recorder,
        );

        assert!(outcome.is_ready());
        assert_eq!(
            page.status.as_deref(),
            Some("Message ready to send. Wire a backend endpoint to deliver it.")
        );
        assert_eq!(page.read_form(), ContactForm::default());
        for field in Field::ALL {
            assert_eq!(page.field(field).error, "");
            assert_eq!(page.field(field).invalid, Some(false));
        }
        assert_eq!(recorder.0.borrow().len(), 1);
        assert_eq!(recorder.0.borrow()[0].email, "jo@x.com");
    }

    #[test]
    fn rejected_submission_keeps_fields() {
        let translations = Translations::load().unwrap();
        let mut page = MemoryPage::portfolio();
        page.fill_form("J", "bad", "hi");
        let recorder = Recorder::default();

        let outcome = submit_contact(
            translations.catalog(Lang::En),
            &ContactRules::default(),
            &mut page,
            &recorder,
        );

        assert!(!outcome.is_ready());
        assert_eq!(
            page.field(Field::Name).error,
            "Please enter your name (min 2 characters)."
        );
        assert_eq!(page.field(Field::Email).error, "Please enter a valid email.");
        assert_eq!(
            page.field(Field::Message).error,
            "Please write a message (min 10 characters)."
        );
        for field in Field::ALL {
            assert_eq!(page.field(field).invalid, Some(true));
        }
        assert_eq!(page.status.as_deref(), Some("Please review the highlighted fields."));
        assert_eq!(page.read_form(), ContactForm::new("J", "bad", "hi"));
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn errors_follow_the_catalog_language() {
        let translations = Translations::load().unwrap();
        let mut page = MemoryPage::portfolio();
        page.fill_form("Jo", "bad", "Hello there friend");
        submit_contact(
            translations.catalog(Lang::Pt),
            &ContactRules::default(),
            &mut page,
            &PendingBackend,
        );
        assert_eq!(page.field(Field::Email).error, "Informe um email válido.");
        assert_eq!(page.field(Field::Email).invalid, Some(true));
        assert_eq!(page.field(Field::Name).error, "");
        assert_eq!(page.field(Field::Name).invalid, Some(false));
        assert_eq!(page.status.as_deref(), Some("Confira os campos destacados."));
    }

    #[test]
    fn fixing_a_field_clears_its_error() {
        let translations = Translations::load().unwrap();
        let catalog = translations.catalog(Lang::En);
        let rules = ContactRules::default();
        let mut page = MemoryPage::portfolio();
        page.fill_form("J", "jo@x.com", "Hello there friend");
        submit_contact(catalog, &rules, &mut page, &PendingBackend);
        assert!(!page.field(Field::Name).error.is_empty());

        page.fill_form("Jo", "jo@x.com", "Hello there friend");
        assert!(submit_contact(catalog, &rules, &mut page, &PendingBackend).is_ready());
        assert!(page.field(Field::Name).error.is_empty());
    }

    #[test]
    fn ready_message_is_trimmed_and_serializable() {
        let message = ContactMessage::from(&ContactForm::new(" Jo ", " jo@x.com", "Hello there friend "));
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["name"], "Jo");
        assert_eq!(json["email"], "jo@x.com");
        assert_eq!(json["message"], "Hello there friend");
    }
}

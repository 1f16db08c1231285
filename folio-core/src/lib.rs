//! Folio page logic
//!
//! Platform-agnostic behavior for the portfolio page: the mobile navigation
//! fold, active-section selection, two-language text catalogs and contact
//! form validation. Nothing here touches a browser; the page surface is
//! reached through the view traits each module defines, so the same handlers
//! drive the real DOM (`folio-web`) and the in-memory page in [`memory`].

pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod highlight;
pub mod lang;
pub mod localize;
pub mod memory;
pub mod nav;
pub mod page;
pub mod store;

// Re-export commonly used types
pub use catalog::{Catalog, MessageKey, Translations};
pub use config::{FieldIds, PageConfig, Selectors};
pub use contact::{
    ContactForm, ContactHandoff, ContactMessage, ContactRules, Field, FieldIssue, FormView,
    PendingBackend, Submission, Validation, is_valid_email, submit_contact, validate,
};
pub use error::{CatalogError, ConfigError};
pub use highlight::{LinkIndex, LinkView, SectionEntry, SectionHighlighter, pick_visible};
pub use lang::Lang;
pub use localize::{Localizer, TextView};
pub use memory::{MemoryPage, MemoryStore};
pub use nav::{ESCAPE_KEY, NavEvent, NavView, next_open, replay};
pub use page::{Page, PageState, PageView};
pub use store::PreferenceStore;

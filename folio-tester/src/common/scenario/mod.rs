use anyhow::{Context, Result};
use folio_core::{MemoryPage, MemoryStore, Page, PageConfig, Translations};
use thirtyfour::prelude::*;

use crate::browser::TestBridge;

pub mod contact;
pub mod language;
pub mod nav;
pub mod sections;
pub mod smoke;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

/// The in-memory page the logic checks drive.
pub type LogicPage = Page<MemoryPage, MemoryStore>;

pub type LogicCheck = fn(&Translations) -> Result<()>;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// A freshly loaded page over `store`, initialized like a page load.
pub fn load_page(translations: &Translations, store: MemoryStore) -> LogicPage {
    let mut page = Page::new(
        MemoryPage::portfolio(),
        store,
        translations.clone(),
        PageConfig::default(),
    );
    page.init();
    page
}

/// Open the page and wait for the bridge to come up.
pub async fn open_page(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    driver
        .goto(&ctx.base_url)
        .await
        .with_context(|| format!("loading {}", ctx.base_url))?;
    driver.find(By::Css("[data-nav-toggle]")).await?;
    ctx.bridge.ensure_available().await
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "nav-toggle" | "nav" => Some(Box::new(nav::NavToggleScenario)),
        "language-roundtrip" | "language" => Some(Box::new(language::LanguageRoundtripScenario)),
        "language-unsupported" => Some(Box::new(language::UnsupportedLanguageScenario)),
        "contact-accepted" => Some(Box::new(contact::ContactAcceptedScenario)),
        "contact-rejected" => Some(Box::new(contact::ContactRejectedScenario)),
        "section-highlight" | "sections" => Some(Box::new(sections::SectionHighlightScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Smoke Test"),
        ("nav-toggle", "Navigation Menu Toggle"),
        ("language-roundtrip", "Language Switch and Reload"),
        ("language-unsupported", "Unsupported Language Ignored"),
        ("contact-accepted", "Contact Form Accepts Valid Input"),
        ("contact-rejected", "Contact Form Flags Invalid Input"),
        ("section-highlight", "Active Section Highlighting"),
    ]
}

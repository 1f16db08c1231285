use anyhow::Result;
use folio_core::{Lang, MemoryStore, Translations};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, load_page, open_page};

pub struct SmokeScenario;

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        open_page(driver, ctx).await?;
        let state = ctx.bridge.state().await?;
        if ctx.verbose {
            println!("  📊 Initial state: {state:?}");
        }
        anyhow::ensure!(!state.nav_open, "Menu should start closed");

        let root_lang = driver
            .find(By::Css("html"))
            .await?
            .attr("lang")
            .await?
            .unwrap_or_default();
        anyhow::ensure!(
            root_lang == state.lang,
            "Document lang {root_lang} should match page state {}",
            state.lang
        );
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke Test", smoke_check))
    }
}

fn smoke_check(translations: &Translations) -> Result<()> {
    let page = load_page(translations, MemoryStore::default());
    let state = page.state();
    anyhow::ensure!(state.lang == Lang::En, "First visit should be English");
    anyhow::ensure!(!state.nav_open, "Menu should start closed");
    anyhow::ensure!(
        state.active_section.is_none(),
        "No section should be active before any intersection"
    );

    let view = page.view();
    anyhow::ensure!(
        view.document_lang.as_deref() == Some("en"),
        "Document lang should be en, got {:?}",
        view.document_lang
    );
    anyhow::ensure!(
        view.toggle_label.as_deref().is_some_and(|l| !l.is_empty()),
        "Language toggle should carry an accessible label"
    );
    Ok(())
}

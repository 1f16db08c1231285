use anyhow::{Context, Result};
use folio_core::{Lang, MemoryStore, PreferenceStore, Translations};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, load_page, open_page};

const SAMPLE_KEY: &str = "nav.contact";

fn expected(translations: &Translations, lang: Lang) -> Result<String> {
    translations
        .catalog(lang)
        .resolve(SAMPLE_KEY)
        .map(str::to_string)
        .with_context(|| format!("{SAMPLE_KEY} missing from {lang} catalog"))
}

async fn sample_text(driver: &WebDriver) -> Result<String> {
    let node = driver
        .find(By::Css(format!("[data-i18n='{SAMPLE_KEY}']")))
        .await?;
    Ok(node.text().await?)
}

pub struct LanguageRoundtripScenario;

#[async_trait::async_trait]
impl BrowserScenario for LanguageRoundtripScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let translations = Translations::load()?;
        open_page(driver, ctx).await?;
        anyhow::ensure!(
            ctx.bridge.set_language(Lang::En.code()).await?,
            "Page should accept en"
        );

        driver.find(By::Css("[data-lang-toggle]")).await?.click().await?;
        let state = ctx.bridge.state().await?;
        anyhow::ensure!(state.lang == "pt", "Toggle should switch to pt, got {}", state.lang);
        let text = sample_text(driver).await?;
        anyhow::ensure!(
            text == expected(&translations, Lang::Pt)?,
            "Navigation should be translated, got {text}"
        );

        driver.refresh().await?;
        ctx.bridge.ensure_available().await?;
        let state = ctx.bridge.state().await?;
        anyhow::ensure!(state.lang == "pt", "Reload should keep pt, got {}", state.lang);

        ctx.bridge.set_language(Lang::En.code()).await?;
        let text = sample_text(driver).await?;
        anyhow::ensure!(
            text == expected(&translations, Lang::En)?,
            "Navigation should be back in English, got {text}"
        );
        if ctx.verbose {
            println!("  🌍 Switched to pt, survived reload, switched back");
        }
        Ok(())
    }
}

impl CombinedScenario for LanguageRoundtripScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Language Switch and Reload", roundtrip_check))
    }
}

fn roundtrip_check(translations: &Translations) -> Result<()> {
    let mut page = load_page(translations, MemoryStore::default());
    anyhow::ensure!(page.toggle_language() == Lang::Pt, "Toggle should go to pt");
    anyhow::ensure!(
        page.view().text(SAMPLE_KEY) == Some(expected(translations, Lang::Pt)?.as_str()),
        "Text should be rewritten in pt"
    );
    anyhow::ensure!(
        page.view().toggle_lang.as_deref() == Some("pt"),
        "Toggle should report the current language"
    );

    let store = page.into_store();
    anyhow::ensure!(
        store.load("lang").as_deref() == Some("pt"),
        "Choice should be persisted"
    );

    let mut reloaded = load_page(translations, store);
    anyhow::ensure!(reloaded.state().lang == Lang::Pt, "Reload should restore pt");
    anyhow::ensure!(reloaded.toggle_language() == Lang::En, "Second toggle returns to en");
    anyhow::ensure!(
        reloaded.view().text(SAMPLE_KEY) == Some(expected(translations, Lang::En)?.as_str()),
        "Text should be rewritten in en"
    );
    Ok(())
}

pub struct UnsupportedLanguageScenario;

#[async_trait::async_trait]
impl BrowserScenario for UnsupportedLanguageScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        open_page(driver, ctx).await?;
        let before = ctx.bridge.state().await?;
        anyhow::ensure!(
            !ctx.bridge.set_language("fr").await?,
            "Page should reject fr"
        );
        let after = ctx.bridge.state().await?;
        anyhow::ensure!(before == after, "Rejected language must not change state");
        Ok(())
    }
}

impl CombinedScenario for UnsupportedLanguageScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Unsupported Language Ignored", unsupported_check))
    }
}

fn unsupported_check(translations: &Translations) -> Result<()> {
    let mut page = load_page(translations, MemoryStore::default());
    let before = page.view().clone();
    anyhow::ensure!(!page.set_language("fr"), "fr should be rejected");
    anyhow::ensure!(!page.set_language("EN"), "Codes are case sensitive");
    anyhow::ensure!(page.state().lang == Lang::En, "Language should stay en");
    anyhow::ensure!(*page.view() == before, "Rejected language must not touch the page");
    anyhow::ensure!(
        page.store().load("lang").as_deref() == Some("en"),
        "Stored choice should stay en"
    );

    let mut store = MemoryStore::default();
    store.save("lang", "klingon");
    let page = load_page(translations, store);
    anyhow::ensure!(
        page.state().lang == Lang::En,
        "Unknown stored value should fall back to en"
    );
    Ok(())
}

use anyhow::Result;
use folio_core::{ESCAPE_KEY, MemoryStore, NavEvent, Translations};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, load_page, open_page};

pub struct NavToggleScenario;

async fn expanded(driver: &WebDriver) -> Result<bool> {
    let toggle = driver.find(By::Css("[data-nav-toggle]")).await?;
    Ok(toggle.attr("aria-expanded").await?.as_deref() == Some("true"))
}

#[async_trait::async_trait]
impl BrowserScenario for NavToggleScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        open_page(driver, ctx).await?;
        let toggle = driver.find(By::Css("[data-nav-toggle]")).await?;

        toggle.click().await?;
        anyhow::ensure!(ctx.bridge.state().await?.nav_open, "Toggle should open the menu");
        anyhow::ensure!(expanded(driver).await?, "aria-expanded should be true");

        ctx.bridge.key(ESCAPE_KEY).await?;
        anyhow::ensure!(!ctx.bridge.state().await?.nav_open, "Escape should close the menu");
        anyhow::ensure!(!expanded(driver).await?, "aria-expanded should be false");

        toggle.click().await?;
        driver.execute("document.body.click()", vec![]).await?;
        anyhow::ensure!(
            !ctx.bridge.state().await?.nav_open,
            "Clicking outside should close the menu"
        );
        if ctx.verbose {
            println!("  🧭 Menu opened, closed by Escape and by outside click");
        }
        Ok(())
    }
}

impl CombinedScenario for NavToggleScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Navigation Menu Toggle", nav_check))
    }
}

fn nav_check(translations: &Translations) -> Result<()> {
    let mut page = load_page(translations, MemoryStore::default());

    page.nav_event(&NavEvent::ToggleClicked);
    anyhow::ensure!(page.state().nav_open, "Toggle should open the menu");
    anyhow::ensure!(
        page.view().nav_expanded && page.view().list_open,
        "Open menu should be reflected on the toggle and the list"
    );

    page.nav_event(&NavEvent::DocumentClick { inside: true });
    anyhow::ensure!(page.state().nav_open, "Inside click should keep the menu open");

    page.nav_event(&NavEvent::key("Tab"));
    anyhow::ensure!(page.state().nav_open, "Keys other than Escape are ignored");

    page.nav_event(&NavEvent::key(ESCAPE_KEY));
    anyhow::ensure!(!page.state().nav_open, "Escape should close the menu");

    page.nav_event(&NavEvent::ToggleClicked);
    page.nav_event(&NavEvent::LinkClicked);
    anyhow::ensure!(!page.state().nav_open, "Link click should close the menu");

    page.nav_event(&NavEvent::ToggleClicked);
    page.nav_event(&NavEvent::DocumentClick { inside: false });
    anyhow::ensure!(!page.state().nav_open, "Outside click should close the menu");
    anyhow::ensure!(
        !page.view().nav_expanded && !page.view().list_open,
        "Closed menu should be reflected on the toggle and the list"
    );
    Ok(())
}

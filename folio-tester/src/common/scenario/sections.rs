use anyhow::Result;
use folio_core::{MemoryStore, SectionEntry, Translations};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, load_page, open_page};

const TARGET_SECTION: &str = "contact";

pub struct SectionHighlightScenario;

#[async_trait::async_trait]
impl BrowserScenario for SectionHighlightScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        open_page(driver, ctx).await?;
        driver
            .execute(
                "document.getElementById(arguments[0]).scrollIntoView()",
                vec![TARGET_SECTION.into()],
            )
            .await?;
        tokio::time::sleep(Duration::from_millis(500)).await;

        let state = ctx.bridge.state().await?;
        anyhow::ensure!(
            state.active_section.is_some(),
            "Scrolling should activate a section"
        );
        let marked = driver
            .find_all(By::Css("[data-nav-link][aria-current='page']"))
            .await?;
        anyhow::ensure!(
            marked.len() <= 1,
            "At most one link may be current, found {}",
            marked.len()
        );
        if ctx.verbose {
            println!("  📍 Active section: {:?}", state.active_section);
        }
        Ok(())
    }
}

impl CombinedScenario for SectionHighlightScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Active Section Highlighting", highlight_check))
    }
}

fn current_links(page: &super::LogicPage) -> usize {
    page.view().links.iter().filter(|l| l.current).count()
}

fn highlight_check(translations: &Translations) -> Result<()> {
    let mut page = load_page(translations, MemoryStore::default());

    page.observe_sections(&[
        SectionEntry::new("about", 0.3, true),
        SectionEntry::new("skills", 0.6, true),
        SectionEntry::new("projects", 0.9, false),
    ]);
    anyhow::ensure!(
        page.view().current_link() == Some("#skills"),
        "Most visible intersecting section should win, got {:?}",
        page.view().current_link()
    );
    anyhow::ensure!(current_links(&page) == 1, "Exactly one link should be current");

    page.observe_sections(&[
        SectionEntry::new("about", 0.4, true),
        SectionEntry::new("contact", 0.4, true),
    ]);
    anyhow::ensure!(
        page.state().active_section.as_deref() == Some("about"),
        "Ties go to the first entry in the batch"
    );

    page.observe_sections(&[SectionEntry::new("contact", 0.0, false)]);
    anyhow::ensure!(
        page.state().active_section.as_deref() == Some("about"),
        "A batch without visible sections keeps the marker"
    );
    anyhow::ensure!(current_links(&page) == 1, "Marker should stay on one link");
    Ok(())
}

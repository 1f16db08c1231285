use anyhow::Result;
use folio_core::{Field, Lang, MemoryStore, MessageKey, Submission, Translations};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, load_page, open_page};

async fn fill_and_submit(driver: &WebDriver, name: &str, email: &str, message: &str) -> Result<()> {
    for (id, value) in [("name", name), ("email", email), ("message", message)] {
        let input = driver.find(By::Id(id)).await?;
        input.clear().await?;
        input.send_keys(value).await?;
    }
    driver
        .find(By::Css("[data-contact-form] [type='submit']"))
        .await?
        .click()
        .await?;
    // The submit handler runs as a spawned task.
    tokio::time::sleep(Duration::from_millis(250)).await;
    Ok(())
}

async fn status_text(driver: &WebDriver) -> Result<String> {
    Ok(driver.find(By::Css("[data-form-status]")).await?.text().await?)
}

pub struct ContactAcceptedScenario;

#[async_trait::async_trait]
impl BrowserScenario for ContactAcceptedScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let translations = Translations::load()?;
        open_page(driver, ctx).await?;
        ctx.bridge.set_language(Lang::En.code()).await?;

        fill_and_submit(driver, "Ada", "ada@example.com", "Hello there, let's talk.").await?;
        let status = status_text(driver).await?;
        let ready = translations.catalog(Lang::En).message(MessageKey::StatusReady);
        anyhow::ensure!(status == ready, "Expected ready status, got {status}");

        let name = driver.find(By::Id("name")).await?.prop("value").await?;
        anyhow::ensure!(
            name.unwrap_or_default().is_empty(),
            "Form should be reset after a valid submission"
        );
        Ok(())
    }
}

impl CombinedScenario for ContactAcceptedScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Contact Form Accepts Valid Input", accepted_check))
    }
}

fn accepted_check(translations: &Translations) -> Result<()> {
    let mut page = load_page(translations, MemoryStore::default());
    page.view_mut()
        .fill_form("  Jo  ", " a@b.co ", "0123456789");
    let outcome = page.submit_contact();
    let Submission::Ready(message) = outcome else {
        anyhow::bail!("Valid form should be ready, got {outcome:?}");
    };
    anyhow::ensure!(message.name == "Jo", "Name should be trimmed");
    anyhow::ensure!(message.email == "a@b.co", "Email should be trimmed");

    let view = page.view();
    for field in Field::ALL {
        let state = view.field(field);
        anyhow::ensure!(state.error.is_empty(), "{field:?} should have no error");
        anyhow::ensure!(state.invalid == Some(false), "{field:?} should be marked valid");
        anyhow::ensure!(state.value.is_empty(), "{field:?} should be reset");
    }
    anyhow::ensure!(
        view.status.as_deref()
            == Some(translations.catalog(Lang::En).message(MessageKey::StatusReady)),
        "Status should report the message as ready"
    );
    Ok(())
}

pub struct ContactRejectedScenario;

#[async_trait::async_trait]
impl BrowserScenario for ContactRejectedScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let translations = Translations::load()?;
        open_page(driver, ctx).await?;
        ctx.bridge.set_language(Lang::Pt.code()).await?;

        fill_and_submit(driver, "J", "not-an-email", "short").await?;
        let catalog = translations.catalog(Lang::Pt);
        let status = status_text(driver).await?;
        anyhow::ensure!(
            status == catalog.message(MessageKey::StatusInvalid),
            "Expected invalid status in pt, got {status}"
        );

        let email = driver.find(By::Id("email")).await?;
        anyhow::ensure!(
            email.attr("aria-invalid").await?.as_deref() == Some("true"),
            "Email should be flagged invalid"
        );
        let error = driver.find(By::Id("emailError")).await?.text().await?;
        anyhow::ensure!(
            error == catalog.message(MessageKey::EmailError),
            "Unexpected email error: {error}"
        );
        ctx.bridge.set_language(Lang::En.code()).await?;
        Ok(())
    }
}

impl CombinedScenario for ContactRejectedScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Contact Form Flags Invalid Input", rejected_check))
    }
}

fn rejected_check(translations: &Translations) -> Result<()> {
    let mut page = load_page(translations, MemoryStore::default());
    page.view_mut().fill_form("J", "a@b", "  hi  ");
    let outcome = page.submit_contact();
    anyhow::ensure!(!outcome.is_ready(), "Invalid form must not be ready");

    let catalog = translations.catalog(Lang::En);
    let view = page.view();
    let expected = [
        (Field::Name, MessageKey::NameError),
        (Field::Email, MessageKey::EmailError),
        (Field::Message, MessageKey::MessageError),
    ];
    for (field, key) in expected {
        let state = view.field(field);
        anyhow::ensure!(
            state.error == catalog.message(key),
            "{field:?} error should be shown, got {:?}",
            state.error
        );
        anyhow::ensure!(state.invalid == Some(true), "{field:?} should be flagged");
        anyhow::ensure!(!state.value.is_empty(), "{field:?} input should be kept");
    }
    anyhow::ensure!(
        view.status.as_deref() == Some(catalog.message(MessageKey::StatusInvalid)),
        "Status should ask to review the fields"
    );
    Ok(())
}

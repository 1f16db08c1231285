use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use thirtyfour::prelude::*;

/// What `window.__folioTest.state()` reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub lang: String,
    pub nav_open: bool,
    pub active_section: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute("return !!window.__folioTest", vec![])
            .await?;
        if !result.json().as_bool().unwrap_or(false) {
            bail!("__folioTest is not available. Did you pass ?test=1 to the page URL?");
        }
        Ok(())
    }

    pub async fn state(&self) -> Result<PageSnapshot> {
        let result = self
            .driver
            .execute("return window.__folioTest.state()", vec![])
            .await?;
        serde_json::from_value(result.json().clone()).context("parsing page state")
    }

    /// Returns whether the page accepted `code`.
    pub async fn set_language(&self, code: &str) -> Result<bool> {
        let result = self
            .driver
            .execute(
                "return window.__folioTest.setLanguage(arguments[0])",
                vec![code.into()],
            )
            .await?;
        Ok(result.json().as_bool().unwrap_or(false))
    }

    /// Dispatch a `keydown` for `key` on the document.
    pub async fn key(&self, key: &str) -> Result<()> {
        self.driver
            .execute(
                "document.dispatchEvent(new KeyboardEvent('keydown', { key: arguments[0], bubbles: true }))",
                vec![key.into()],
            )
            .await?;
        Ok(())
    }
}

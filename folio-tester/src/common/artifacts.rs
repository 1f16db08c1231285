//! What a failed browser scenario leaves behind: the bridge snapshot, the
//! ARIA markers actually present in the DOM, and a screenshot.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thirtyfour::prelude::*;

use crate::browser::{BrowserKind, PageSnapshot, TestBridge};

const MARKERS_JS: &str = r#"
const toggle = document.querySelector('[data-nav-toggle]');
const status = document.querySelector('[data-form-status]');
return {
  documentLang: document.documentElement.getAttribute('lang'),
  navExpanded: toggle ? toggle.getAttribute('aria-expanded') : null,
  currentLinks: Array.from(document.querySelectorAll('[aria-current="page"]'))
    .map(el => el.getAttribute('href') || ''),
  invalidFields: Array.from(document.querySelectorAll('[aria-invalid="true"]'))
    .map(el => el.id),
  status: status ? status.textContent : null,
};
"#;

/// Markers read from the DOM, independent of what the bridge reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomMarkers {
    pub document_lang: Option<String>,
    pub nav_expanded: Option<String>,
    pub current_links: Vec<String>,
    pub invalid_fields: Vec<String>,
    pub status: Option<String>,
}

pub async fn read_markers(driver: &WebDriver) -> Result<DomMarkers> {
    let ret = driver.execute(MARKERS_JS, vec![]).await?;
    serde_json::from_value(ret.json().clone()).context("parsing DOM markers")
}

/// Written as `failure.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureReport {
    pub scenario: String,
    pub browser: String,
    pub captured_at: String,
    pub error: String,
    pub snapshot: Option<PageSnapshot>,
    pub markers: Option<DomMarkers>,
}

impl FailureReport {
    pub fn new(
        browser: BrowserKind,
        scenario: &str,
        err: &anyhow::Error,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            scenario: scenario.to_string(),
            browser: browser.label().to_string(),
            captured_at: captured_at.to_rfc3339(),
            error: format!("{err:#}"),
            snapshot: None,
            markers: None,
        }
    }

    /// `<base>/<browser>/<scenario>/<timestamp>`
    pub fn dir_under(&self, base: &Path) -> PathBuf {
        let stamp: String = self
            .captured_at
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .take(15)
            .collect();
        base.join(&self.browser).join(&self.scenario).join(stamp)
    }

    /// Bridge state next to the DOM markers, for the console.
    pub fn summary(&self) -> String {
        let bridge = self.snapshot.as_ref().map_or_else(
            || "bridge unavailable".to_string(),
            |s| {
                format!(
                    "lang={} nav_open={} section={}",
                    s.lang,
                    s.nav_open,
                    s.active_section.as_deref().unwrap_or("-")
                )
            },
        );
        let dom = self.markers.as_ref().map_or_else(
            || "dom unavailable".to_string(),
            |m| {
                format!(
                    "lang={} aria-expanded={} current=[{}]",
                    m.document_lang.as_deref().unwrap_or("-"),
                    m.nav_expanded.as_deref().unwrap_or("-"),
                    m.current_links.join(",")
                )
            },
        );
        format!("bridge: {bridge}; dom: {dom}")
    }

    pub fn write(&self, dir: &Path, screenshot: Option<&[u8]>) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        let payload = serde_json::to_vec_pretty(self)?;
        fs::write(dir.join("failure.json"), payload).context("writing failure.json")?;
        if let Some(png) = screenshot {
            fs::write(dir.join("screenshot.png"), png).context("writing screenshot.png")?;
        }
        Ok(())
    }
}

/// Record the page as it stood when `err` surfaced. Returns the directory written.
pub async fn capture_failure(
    driver: &WebDriver,
    base: &Path,
    browser: BrowserKind,
    scenario: &str,
    err: &anyhow::Error,
) -> Result<(PathBuf, FailureReport)> {
    let mut report = FailureReport::new(browser, scenario, err, Utc::now());
    report.snapshot = TestBridge::new(driver).state().await.ok();
    report.markers = read_markers(driver).await.ok();
    let screenshot = driver.screenshot_as_png().await.ok();

    let dir = report.dir_under(base);
    report.write(&dir, screenshot.as_deref())?;
    Ok((dir, report))
}

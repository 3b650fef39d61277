//! Failure artifacts for browser runs
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thirtyfour::prelude::*;
use toolpage_core::PageSnapshot;

use crate::browser::TestBridge;
use crate::common::scenario::{CheckFailed, StepFailed};

/// `<base>/<browser>/<scenario>/<timestamp>`
pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> PathBuf {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    Path::new(base)
        .join(browser)
        .join(scenario)
        .join(ts.to_string())
}

/// What went wrong in a failed scenario, written as `failure.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureReport {
    pub scenario: String,
    pub browser: String,
    /// 1-based step that stopped the run; `None` when opening the page failed.
    pub step: Option<usize>,
    pub action: Option<String>,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub error_chain: String,
    /// Bridge state at capture time, if the bridge still answered.
    pub snapshot: Option<PageSnapshot>,
}

impl FailureReport {
    pub fn from_error(scenario: &str, browser: &str, err: &anyhow::Error) -> Self {
        let step = err.downcast_ref::<StepFailed>();
        let check = err.downcast_ref::<CheckFailed>();
        Self {
            scenario: scenario.to_string(),
            browser: browser.to_string(),
            step: step.map(|failed| failed.number),
            action: step.map(|failed| failed.step.clone()),
            expected: check.map(|failed| failed.expected.clone()),
            actual: check.map(|failed| failed.actual.clone()),
            error_chain: format!("{err:#}"),
            snapshot: None,
        }
    }
}

/// Save the report with the page state, a screenshot and the DOM source.
///
/// # Errors
/// Fails when the directory or `failure.json` cannot be written. A missing
/// screenshot or source is only logged.
pub async fn capture_artifacts(
    driver: &WebDriver,
    dir: &Path,
    mut report: FailureReport,
) -> Result<()> {
    match TestBridge::new(driver).state().await {
        Ok(snapshot) => report.snapshot = Some(snapshot),
        Err(e) => log::warn!("no bridge state for {}: {e:#}", report.scenario),
    }
    let screenshot = driver.screenshot_as_png().await.ok();
    let source = driver.source().await.ok();
    write_artifacts(dir, &report, screenshot.as_deref(), source.as_deref())
}

fn write_artifacts(
    dir: &Path,
    report: &FailureReport,
    screenshot: Option<&[u8]>,
    source: Option<&str>,
) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    let payload = serde_json::to_vec_pretty(report).context("serializing failure report")?;
    fs::write(dir.join("failure.json"), payload).context("writing failure.json")?;

    if let Some(png) = screenshot {
        if let Err(e) = fs::write(dir.join("screenshot.png"), png) {
            log::warn!("could not write screenshot: {e}");
        }
    }
    if let Some(src) = source {
        if let Err(e) = fs::write(dir.join("dom.html"), src) {
            log::warn!("could not write dom source: {e}");
        }
    }
    Ok(())
}

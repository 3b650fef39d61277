use std::fmt;

use anyhow::{Context, Result};
use thiserror::Error;
use toolpage_core::PageSnapshot;

use crate::common::driver::PageDriver;

pub mod catalog;

pub use catalog::{get_scenario, list_scenarios, scenario_names};

/// Which copy button label a check expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Whatever the button showed when the page loaded.
    Original,
    Confirmation,
}

/// One assertion against the observable page.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    Theme(&'static str),
    SidebarCollapsed(bool),
    Accent(&'static str),
    ActiveSection(Option<&'static str>),
    ActiveNav(Vec<usize>),
    CopyLabel(Label),
    PreviewVisible(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Reload,
    ToggleTheme,
    ToggleSidebar,
    Hover(usize),
    ScrollTo(f64),
    TypeText(&'static str),
    ClickCopy,
    SelectFile(usize),
    Wait(u64),
    Expect(Check),
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {actual}")]
pub struct CheckFailed {
    pub expected: String,
    pub actual: String,
}

/// Context attached to the error of the step that stopped a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("step {number}: {step}")]
pub struct StepFailed {
    /// 1-based position in the scenario.
    pub number: usize,
    pub step: String,
}

/// Labels the copy checks compare against.
#[derive(Debug, Clone)]
pub struct LabelSet {
    pub original: Option<String>,
    pub confirmation: String,
}

impl LabelSet {
    fn resolve(&self, label: Label) -> Option<&str> {
        match label {
            Label::Original => self.original.as_deref(),
            Label::Confirmation => Some(&self.confirmation),
        }
    }
}

fn mismatch(expected: impl fmt::Debug, actual: impl fmt::Debug) -> CheckFailed {
    CheckFailed {
        expected: format!("{expected:?}"),
        actual: format!("{actual:?}"),
    }
}

impl Check {
    /// Compare against a snapshot.
    ///
    /// # Errors
    /// Returns the expected and observed values when they differ.
    pub fn verify(&self, snapshot: &PageSnapshot, labels: &LabelSet) -> Result<(), CheckFailed> {
        match self {
            Self::Theme(theme) => {
                if snapshot.theme.as_deref() == Some(*theme) {
                    return Ok(());
                }
                Err(mismatch(theme, &snapshot.theme))
            }
            Self::SidebarCollapsed(collapsed) => {
                if snapshot.sidebar_collapsed == *collapsed {
                    return Ok(());
                }
                Err(mismatch(collapsed, snapshot.sidebar_collapsed))
            }
            Self::Accent(accent) => {
                if snapshot.accent.as_deref().map(str::trim) == Some(*accent) {
                    return Ok(());
                }
                Err(mismatch(accent, &snapshot.accent))
            }
            Self::ActiveSection(section) => {
                if snapshot.active_section.as_deref() == *section {
                    return Ok(());
                }
                Err(mismatch(section, &snapshot.active_section))
            }
            Self::ActiveNav(indices) => {
                if &snapshot.active_nav == indices {
                    return Ok(());
                }
                Err(mismatch(indices, &snapshot.active_nav))
            }
            Self::CopyLabel(label) => {
                let expected = labels.resolve(*label);
                if snapshot.copy_label.as_deref().map(str::trim) == expected.map(str::trim) {
                    return Ok(());
                }
                Err(mismatch(expected, &snapshot.copy_label))
            }
            Self::PreviewVisible(id) => {
                if snapshot.visible_previews.iter().any(|shown| shown == id) {
                    return Ok(());
                }
                Err(mismatch(id, &snapshot.visible_previews))
            }
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theme(theme) => write!(f, "theme is {theme}"),
            Self::SidebarCollapsed(true) => f.write_str("sidebar is collapsed"),
            Self::SidebarCollapsed(false) => f.write_str("sidebar is expanded"),
            Self::Accent(accent) => write!(f, "accent is {accent}"),
            Self::ActiveSection(Some(section)) => write!(f, "current section is {section}"),
            Self::ActiveSection(None) => f.write_str("no current section"),
            Self::ActiveNav(indices) => write!(f, "active nav items are {indices:?}"),
            Self::CopyLabel(Label::Original) => f.write_str("copy label is restored"),
            Self::CopyLabel(Label::Confirmation) => f.write_str("copy label confirms"),
            Self::PreviewVisible(id) => write!(f, "preview {id} is visible"),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reload => f.write_str("reload"),
            Self::ToggleTheme => f.write_str("toggle theme"),
            Self::ToggleSidebar => f.write_str("toggle sidebar"),
            Self::Hover(item) => write!(f, "hover nav item {item}"),
            Self::ScrollTo(y) => write!(f, "scroll to {y}"),
            Self::TypeText(text) => write!(f, "type {text:?}"),
            Self::ClickCopy => f.write_str("click copy"),
            Self::SelectFile(input) => write!(f, "select file in input {input}"),
            Self::Wait(ms) => write!(f, "wait {ms}ms"),
            Self::Expect(check) => write!(f, "expect {check}"),
        }
    }
}

/// Run every step of `scenario` against a freshly opened page.
///
/// # Errors
/// Returns the first failing step with its position and the driver's or
/// check's error as the cause.
pub async fn run_scenario<D>(driver: &mut D, scenario: &Scenario, confirmation: &str) -> Result<()>
where
    D: PageDriver + ?Sized,
{
    driver.open().await.context("opening page")?;
    let labels = LabelSet {
        original: driver.snapshot().await?.copy_label,
        confirmation: confirmation.to_string(),
    };

    for (idx, step) in scenario.steps.iter().enumerate() {
        let number = idx + 1;
        log::debug!("[{}] step {number}: {step}", driver.label());
        let outcome = match step {
            Step::Reload => driver.reload().await,
            Step::ToggleTheme => driver.toggle_theme().await,
            Step::ToggleSidebar => driver.toggle_sidebar().await,
            Step::Hover(item) => driver.hover(*item).await,
            Step::ScrollTo(y) => driver.scroll_to(*y).await,
            Step::TypeText(text) => driver.type_text(text).await,
            Step::ClickCopy => driver.click_copy().await,
            Step::SelectFile(input) => driver.select_file(*input).await,
            Step::Wait(ms) => driver.wait(*ms).await,
            Step::Expect(check) => expect(driver, check, &labels).await,
        };
        outcome.with_context(|| StepFailed {
            number,
            step: step.to_string(),
        })?;
    }
    Ok(())
}

/// Check the page, retrying within the driver's settle window for updates
/// that land asynchronously.
async fn expect<D>(driver: &mut D, check: &Check, labels: &LabelSet) -> Result<()>
where
    D: PageDriver + ?Sized,
{
    const POLL_MS: u64 = 50;
    let mut waited = 0;
    loop {
        let snapshot = driver.snapshot().await?;
        match check.verify(&snapshot, labels) {
            Ok(()) => return Ok(()),
            Err(_) if waited < driver.settle_ms() => {
                driver.settle(POLL_MS).await?;
                waited += POLL_MS;
            }
            Err(failed) => return Err(failed.into()),
        }
    }
}

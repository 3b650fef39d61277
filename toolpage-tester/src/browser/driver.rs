use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use thirtyfour::prelude::*;
use toolpage_core::PageSnapshot;

use super::{BrowserKind, TestBridge};
use crate::common::PageDriver;

/// 1x1 transparent PNG uploaded by file preview steps.
const SAMPLE_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f, 0x15, 0xc4,
    0x89, 0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae,
    0x42, 0x60, 0x82,
];

const BRIDGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Drives the demo page through WebDriver and reads it back through the test bridge.
pub struct BrowserDriver<'a> {
    driver: &'a WebDriver,
    bridge: TestBridge<'a>,
    kind: BrowserKind,
    base_url: String,
    sample_image: PathBuf,
}

impl<'a> BrowserDriver<'a> {
    /// # Errors
    /// Returns an error if the sample upload image cannot be written.
    pub fn new(driver: &'a WebDriver, kind: BrowserKind, base_url: &str) -> Result<Self> {
        let sample_image = std::env::temp_dir().join("toolpage-tester-sample.png");
        std::fs::write(&sample_image, SAMPLE_PNG)
            .with_context(|| format!("writing {}", sample_image.display()))?;
        Ok(Self {
            driver,
            bridge: TestBridge::new(driver),
            kind,
            base_url: base_url.to_string(),
            sample_image,
        })
    }

    async fn click_id(&self, id: &str) -> Result<()> {
        self.driver
            .find(By::Id(id))
            .await
            .with_context(|| format!("finding #{id}"))?
            .click()
            .await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl PageDriver for BrowserDriver<'_> {
    fn label(&self) -> String {
        self.kind.label().to_string()
    }

    async fn open(&mut self) -> Result<()> {
        self.driver.goto(&self.base_url).await?;
        self.bridge.wait_until_available(BRIDGE_TIMEOUT).await?;
        self.bridge.reset().await?;
        self.reload().await
    }

    async fn reload(&mut self) -> Result<()> {
        self.driver.refresh().await?;
        self.bridge.wait_until_available(BRIDGE_TIMEOUT).await
    }

    async fn toggle_theme(&mut self) -> Result<()> {
        self.click_id("themeToggle").await
    }

    async fn toggle_sidebar(&mut self) -> Result<()> {
        self.click_id("collapseBtn").await
    }

    async fn hover(&mut self, item: usize) -> Result<()> {
        let items = self.driver.find_all(By::Css(".tool-item")).await?;
        let target = items
            .get(item)
            .with_context(|| format!("no nav item {item}"))?;
        self.driver
            .action_chain()
            .move_to_element_center(target)
            .perform()
            .await?;
        Ok(())
    }

    async fn scroll_to(&mut self, y: f64) -> Result<()> {
        self.bridge.scroll_to(y).await
    }

    async fn type_text(&mut self, text: &str) -> Result<()> {
        let area = self.driver.find(By::Id("promptText")).await?;
        area.clear().await?;
        area.send_keys(text).await?;
        Ok(())
    }

    async fn click_copy(&mut self) -> Result<()> {
        self.click_id("copyBtn").await
    }

    async fn select_file(&mut self, input: usize) -> Result<()> {
        let inputs = self
            .driver
            .find_all(By::Css("input[type=file][data-preview]"))
            .await?;
        let target = inputs
            .get(input)
            .with_context(|| format!("no file input {input}"))?;
        target
            .send_keys(self.sample_image.display().to_string())
            .await?;
        Ok(())
    }

    async fn wait(&mut self, ms: u64) -> Result<()> {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        Ok(())
    }

    async fn snapshot(&mut self) -> Result<PageSnapshot> {
        self.bridge.state().await
    }

    fn settle_ms(&self) -> u64 {
        500
    }

    async fn settle(&mut self, ms: u64) -> Result<()> {
        self.wait(ms).await
    }
}

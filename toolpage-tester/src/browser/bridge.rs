use anyhow::{Context, Result, bail};
use std::time::Duration;
use thirtyfour::prelude::*;
use toolpage_core::PageSnapshot;

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn is_available(&self) -> Result<bool> {
        let result = self
            .driver
            .execute("return !!window.__toolpageTest", vec![])
            .await?;
        Ok(result.json().as_bool().unwrap_or(false))
    }

    /// Wait for the module script to install the bridge.
    pub async fn wait_until_available(&self, timeout: Duration) -> Result<()> {
        let poll = Duration::from_millis(100);
        let mut waited = Duration::ZERO;
        while !self.is_available().await? {
            if waited >= timeout {
                bail!("__toolpageTest is not available. Did you pass ?test=1 and build the wasm bundle?");
            }
            tokio::time::sleep(poll).await;
            waited += poll;
        }
        Ok(())
    }

    /// Clear the stored theme preference.
    pub async fn reset(&self) -> Result<()> {
        self.driver
            .execute("window.__toolpageTest.reset()", vec![])
            .await?;
        Ok(())
    }

    pub async fn scroll_to(&self, y: f64) -> Result<()> {
        self.driver
            .execute("window.__toolpageTest.scrollTo(arguments[0])", vec![y.into()])
            .await?;
        Ok(())
    }

    pub async fn state(&self) -> Result<PageSnapshot> {
        let result = self
            .driver
            .execute("return window.__toolpageTest.state()", vec![])
            .await?;
        let v = result.json().clone();
        let s: PageSnapshot = serde_json::from_value(v).context("parsing PageSnapshot")?;
        Ok(s)
    }
}

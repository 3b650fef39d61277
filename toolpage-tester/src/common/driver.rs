use anyhow::Result;
use async_trait::async_trait;
use toolpage_core::PageSnapshot;

/// A page that scenarios can act on and observe.
///
/// The logic driver performs actions instantly on a virtual clock; the
/// browser driver goes through WebDriver and needs a settle window for
/// updates that land after the action returns.
#[async_trait(?Send)]
pub trait PageDriver {
    /// Short name for logs and reports, e.g. `logic` or `chrome`.
    fn label(&self) -> String;

    /// Open a fresh page with no stored preference.
    async fn open(&mut self) -> Result<()>;
    async fn reload(&mut self) -> Result<()>;
    async fn toggle_theme(&mut self) -> Result<()>;
    async fn toggle_sidebar(&mut self) -> Result<()>;
    async fn hover(&mut self, item: usize) -> Result<()>;
    async fn scroll_to(&mut self, y: f64) -> Result<()>;
    async fn type_text(&mut self, text: &str) -> Result<()>;
    async fn click_copy(&mut self) -> Result<()>;
    async fn select_file(&mut self, input: usize) -> Result<()>;
    /// Let page time pass.
    async fn wait(&mut self, ms: u64) -> Result<()>;
    async fn snapshot(&mut self) -> Result<PageSnapshot>;

    /// How long a failing check may be retried.
    fn settle_ms(&self) -> u64 {
        0
    }

    /// Pause between check retries without counting as page time.
    async fn settle(&mut self, _ms: u64) -> Result<()> {
        Ok(())
    }
}

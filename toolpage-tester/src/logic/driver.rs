use anyhow::{Context, Result};
use async_trait::async_trait;
use toolpage_core::{HeadlessPage, MemoryStore, PageConfig, PageEvent, PageSnapshot};

use super::fixture;
use crate::common::PageDriver;

/// Runs scenarios against [`HeadlessPage`] on a virtual clock.
#[derive(Debug, Default)]
pub struct LogicDriver {
    config: PageConfig,
    page: Option<HeadlessPage>,
}

impl LogicDriver {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self { config, page: None }
    }

    fn page(&mut self) -> Result<&mut HeadlessPage> {
        self.page.as_mut().context("page is not open")
    }
}

#[async_trait(?Send)]
impl PageDriver for LogicDriver {
    fn label(&self) -> String {
        "logic".to_string()
    }

    async fn open(&mut self) -> Result<()> {
        self.page = Some(HeadlessPage::load(
            MemoryStore::default(),
            self.config.clone(),
            fixture::layout(),
            fixture::COPY_LABEL,
        ));
        Ok(())
    }

    async fn reload(&mut self) -> Result<()> {
        let reloaded = self.page()?.reload();
        self.page = Some(reloaded);
        Ok(())
    }

    async fn toggle_theme(&mut self) -> Result<()> {
        self.page()?.toggle_theme();
        Ok(())
    }

    async fn toggle_sidebar(&mut self) -> Result<()> {
        self.page()?.toggle_sidebar();
        Ok(())
    }

    async fn hover(&mut self, item: usize) -> Result<()> {
        self.page()?.hover(item);
        Ok(())
    }

    async fn scroll_to(&mut self, y: f64) -> Result<()> {
        self.page()?
            .scroll(y, fixture::VIEWPORT_WIDTH, &fixture::sections());
        Ok(())
    }

    async fn type_text(&mut self, text: &str) -> Result<()> {
        self.page()?.type_text(text);
        Ok(())
    }

    async fn click_copy(&mut self) -> Result<()> {
        self.page()?.click_copy();
        Ok(())
    }

    async fn select_file(&mut self, input: usize) -> Result<()> {
        let preview_id = fixture::PREVIEWS
            .get(input)
            .with_context(|| format!("no file input {input}"))?;
        self.page()?.dispatch(PageEvent::FilesSelected {
            input,
            preview_id: (*preview_id).to_string(),
            file_count: 1,
        });
        Ok(())
    }

    async fn wait(&mut self, ms: u64) -> Result<()> {
        self.page()?.advance(ms);
        Ok(())
    }

    async fn snapshot(&mut self) -> Result<PageSnapshot> {
        Ok(self.page()?.snapshot())
    }
}

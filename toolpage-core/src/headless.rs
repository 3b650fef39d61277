//! In-memory page for running behaviors without a browser
//!
//! [`HeadlessPage`] performs [`Effect`]s against a simulated DOM, an
//! in-memory preference store and a virtual clock. The tester's logic mode
//! and the integration tests drive it the same way a user drives the page.
use std::collections::{BTreeMap, VecDeque};

use crate::config::PageConfig;
use crate::copy::CopyMethod;
use crate::highlight::SectionBounds;
use crate::nav::PageLayout;
use crate::snapshot::PageSnapshot;
use crate::state::{Effect, PageEvent, PageState};
use crate::store::{MemoryStore, PreferenceStore};
use crate::theme::{StoredTheme, read_stored_theme};

/// Simulated markup touched by the effects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeadlessDom {
    pub theme_attribute: Option<String>,
    pub sidebar_collapsed: bool,
    pub accent: Option<String>,
    pub nav_active: Vec<bool>,
    pub revealed: Vec<usize>,
    pub copy_label: String,
    pub text_box: String,
    pub clipboard: Option<String>,
    /// Preview image id to its `src`.
    pub previews: BTreeMap<String, String>,
    pub revoked_urls: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingRestore {
    due_ms: u64,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct HeadlessPage {
    state: PageState,
    store: MemoryStore,
    dom: HeadlessDom,
    /// Button label from the markup, before any feedback.
    markup_copy_label: String,
    clock_ms: u64,
    timers: Vec<PendingRestore>,
    clipboard_available: bool,
    next_object_url: u64,
    persist_failures: usize,
}

impl HeadlessPage {
    /// Load the page: read the stored preference and apply the boot effects.
    ///
    /// An unreadable store is treated like an empty slot.
    #[must_use]
    pub fn load(store: MemoryStore, config: PageConfig, layout: PageLayout, copy_label: &str) -> Self {
        let nav_count = layout.nav_items.len();
        let stored = read_stored_theme(&store, &config.storage_key).unwrap_or(StoredTheme::Missing);
        let state = PageState::new(config, layout, stored);
        let mut page = Self {
            state,
            store,
            dom: HeadlessDom {
                nav_active: vec![false; nav_count],
                copy_label: copy_label.to_string(),
                ..HeadlessDom::default()
            },
            markup_copy_label: copy_label.to_string(),
            clock_ms: 0,
            timers: Vec::new(),
            clipboard_available: true,
            next_object_url: 0,
            persist_failures: 0,
        };
        let boot = page.state.boot();
        for effect in boot {
            page.perform(effect, &mut VecDeque::new());
        }
        page
    }

    /// Reload with the same store, markup and settings; in-memory state is lost.
    #[must_use]
    pub fn reload(&self) -> Self {
        let mut page = Self::load(
            self.store.clone(),
            self.state.config().clone(),
            self.state.layout().clone(),
            &self.markup_copy_label,
        );
        page.clipboard_available = self.clipboard_available;
        page
    }

    pub const fn set_clipboard_available(&mut self, available: bool) {
        self.clipboard_available = available;
    }

    pub fn type_text(&mut self, text: &str) {
        self.dom.text_box = text.to_string();
    }

    pub fn toggle_theme(&mut self) {
        self.dispatch(PageEvent::ThemeToggled);
    }

    pub fn toggle_sidebar(&mut self) {
        self.dispatch(PageEvent::SidebarToggled);
    }

    pub fn hover(&mut self, index: usize) {
        self.dispatch(PageEvent::NavHovered { index });
    }

    pub fn scroll(&mut self, scroll_y: f64, viewport_width: f64, sections: &[SectionBounds]) {
        self.dispatch(PageEvent::Scrolled {
            scroll_y,
            viewport_width,
            sections: sections.to_vec(),
        });
    }

    pub fn select_files(&mut self, preview_id: &str, file_count: u32) {
        self.dispatch(PageEvent::FilesSelected {
            input: 0,
            preview_id: preview_id.to_string(),
            file_count,
        });
    }

    pub fn click_copy(&mut self) {
        let text = self.dom.text_box.clone();
        self.dispatch(PageEvent::CopyRequested { text });
    }

    /// Move the virtual clock forward, firing due restores in order.
    pub fn advance(&mut self, ms: u64) {
        let target = self.clock_ms.saturating_add(ms);
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, timer)| timer.due_ms <= target)
                .min_by_key(|(_, timer)| timer.due_ms)
                .map(|(idx, _)| idx);
            let Some(idx) = next else { break };
            let timer = self.timers.remove(idx);
            self.clock_ms = timer.due_ms;
            self.dispatch(PageEvent::FeedbackElapsed {
                generation: timer.generation,
            });
        }
        self.clock_ms = target;
    }

    pub fn dispatch(&mut self, event: PageEvent) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            let effects = self.state.apply(event);
            for effect in effects {
                self.perform(effect, &mut queue);
            }
        }
    }

    fn perform(&mut self, effect: Effect, follow_up: &mut VecDeque<PageEvent>) {
        match effect {
            Effect::ApplyTheme { theme } => {
                self.dom.theme_attribute = Some(theme.as_str().to_string());
            }
            Effect::PersistTheme { theme } => {
                let key = self.state.config().storage_key.clone();
                if self.store.save(&key, theme.as_str()).is_err() {
                    self.persist_failures += 1;
                }
            }
            Effect::SetSidebarCollapsed { collapsed } => self.dom.sidebar_collapsed = collapsed,
            Effect::SetAccent { value } => self.dom.accent = Some(value),
            Effect::SetNavActive { index, active } => {
                if let Some(slot) = self.dom.nav_active.get_mut(index) {
                    *slot = active;
                }
            }
            Effect::RevealNavItem { index } => self.dom.revealed.push(index),
            Effect::ShowPreview { preview_id, .. } => {
                self.next_object_url += 1;
                let url = format!("blob:headless/{}", self.next_object_url);
                self.dom.previews.insert(preview_id.clone(), url.clone());
                follow_up.push_back(PageEvent::PreviewShown { preview_id, url });
            }
            Effect::RevokeObjectUrl { url } => self.dom.revoked_urls.push(url),
            Effect::CopyText { text } => {
                let method = if self.clipboard_available {
                    CopyMethod::Clipboard
                } else {
                    CopyMethod::Legacy
                };
                self.dom.clipboard = Some(text);
                follow_up.push_back(PageEvent::CopySettled {
                    method,
                    label: self.dom.copy_label.clone(),
                });
            }
            Effect::SetCopyLabel { label } => self.dom.copy_label = label,
            Effect::ScheduleFeedbackRestore {
                generation,
                delay_ms,
            } => self.timers.push(PendingRestore {
                due_ms: self.clock_ms + u64::from(delay_ms),
                generation,
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            theme: self.dom.theme_attribute.clone(),
            sidebar_collapsed: self.dom.sidebar_collapsed,
            accent: self.dom.accent.clone(),
            active_section: self.state.active_section().map(str::to_string),
            active_nav: self
                .dom
                .nav_active
                .iter()
                .enumerate()
                .filter_map(|(idx, active)| active.then_some(idx))
                .collect(),
            copy_label: Some(self.dom.copy_label.clone()),
            visible_previews: self.dom.previews.keys().cloned().collect(),
        }
    }

    #[must_use]
    pub const fn dom(&self) -> &HeadlessDom {
        &self.dom
    }

    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    #[must_use]
    pub const fn store(&self) -> &MemoryStore {
        &self.store
    }

    #[must_use]
    pub const fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Number of theme writes the store rejected.
    #[must_use]
    pub const fn persist_failures(&self) -> usize {
        self.persist_failures
    }
}

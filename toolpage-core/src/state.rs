//! Page state aggregate and its event transitions
//!
//! Every user interaction becomes a [`PageEvent`]. [`PageState::apply`] updates
//! the in-memory state and returns the [`Effect`]s an adapter must perform
//! against the DOM, storage, clipboard or timers. Transitions never touch
//! the outside world themselves.
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::accent::AccentState;
use crate::config::PageConfig;
use crate::copy::{CopyFeedback, CopyMethod};
use crate::highlight::{HighlightState, SectionBounds};
use crate::nav::PageLayout;
use crate::preview::PreviewState;
use crate::sidebar::SidebarState;
use crate::theme::{StoredTheme, Theme, ThemeState};

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PageEvent {
    ThemeToggled,
    SidebarToggled,
    NavHovered {
        index: usize,
    },
    Scrolled {
        scroll_y: f64,
        viewport_width: f64,
        sections: Vec<SectionBounds>,
    },
    FilesSelected {
        input: usize,
        preview_id: String,
        file_count: u32,
    },
    PreviewShown {
        preview_id: String,
        url: String,
    },
    CopyRequested {
        text: String,
    },
    CopySettled {
        method: CopyMethod,
        label: String,
    },
    FeedbackElapsed {
        generation: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Effect {
    ApplyTheme { theme: Theme },
    PersistTheme { theme: Theme },
    SetSidebarCollapsed { collapsed: bool },
    SetAccent { value: String },
    SetNavActive { index: usize, active: bool },
    RevealNavItem { index: usize },
    /// Create an object URL for the file selected in `input` and show it in the preview image.
    ShowPreview { input: usize, preview_id: String },
    RevokeObjectUrl { url: String },
    /// Copy through the clipboard API, falling back to the legacy path.
    CopyText { text: String },
    SetCopyLabel { label: String },
    ScheduleFeedbackRestore { generation: u64, delay_ms: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    config: PageConfig,
    layout: PageLayout,
    theme: ThemeState,
    sidebar: SidebarState,
    accent: AccentState,
    highlight: HighlightState,
    preview: PreviewState,
    copy: CopyFeedback,
    last_copy: Option<CopyMethod>,
}

impl PageState {
    #[must_use]
    pub fn new(config: PageConfig, layout: PageLayout, stored_theme: StoredTheme) -> Self {
        Self {
            config,
            layout,
            theme: ThemeState::new(stored_theme.resolve()),
            sidebar: SidebarState::default(),
            accent: AccentState::default(),
            highlight: HighlightState::default(),
            preview: PreviewState::default(),
            copy: CopyFeedback::default(),
            last_copy: None,
        }
    }

    /// Start from the sidebar's collapsed class as found in the markup.
    #[must_use]
    pub const fn with_sidebar_collapsed(mut self, collapsed: bool) -> Self {
        self.sidebar.collapsed = collapsed;
        self
    }

    /// Effects to run once at page load.
    #[must_use]
    pub fn boot(&self) -> Effects {
        smallvec![Effect::ApplyTheme {
            theme: self.theme.current
        }]
    }

    pub fn apply(&mut self, event: PageEvent) -> Effects {
        match event {
            PageEvent::ThemeToggled => {
                let theme = self.theme.toggle();
                smallvec![Effect::ApplyTheme { theme }, Effect::PersistTheme { theme }]
            }
            PageEvent::SidebarToggled => smallvec![Effect::SetSidebarCollapsed {
                collapsed: self.sidebar.toggle()
            }],
            PageEvent::NavHovered { index } => {
                let accent = self
                    .layout
                    .nav_item(index)
                    .and_then(|item| item.accent.as_deref());
                self.accent
                    .hover(accent)
                    .map(|value| Effect::SetAccent { value })
                    .into_iter()
                    .collect()
            }
            PageEvent::Scrolled {
                scroll_y,
                viewport_width,
                sections,
            } => self.on_scroll(scroll_y, viewport_width, &sections),
            PageEvent::FilesSelected {
                input,
                preview_id,
                file_count,
            } => {
                if PreviewState::wants_preview(file_count) {
                    smallvec![Effect::ShowPreview { input, preview_id }]
                } else {
                    Effects::new()
                }
            }
            PageEvent::PreviewShown { preview_id, url } => self
                .preview
                .shown(&preview_id, &url)
                .map(|url| Effect::RevokeObjectUrl { url })
                .into_iter()
                .collect(),
            PageEvent::CopyRequested { text } => CopyFeedback::payload(&text)
                .map(|payload| Effect::CopyText {
                    text: payload.to_string(),
                })
                .into_iter()
                .collect(),
            PageEvent::CopySettled { method, label } => {
                self.last_copy = Some(method);
                let start = self.copy.copied(&label, &self.config.confirmation_label);
                smallvec![
                    Effect::SetCopyLabel { label: start.label },
                    Effect::ScheduleFeedbackRestore {
                        generation: start.generation,
                        delay_ms: self.config.feedback_ms,
                    }
                ]
            }
            PageEvent::FeedbackElapsed { generation } => self
                .copy
                .restore(generation)
                .map(|label| Effect::SetCopyLabel { label })
                .into_iter()
                .collect(),
        }
    }

    fn on_scroll(&mut self, scroll_y: f64, viewport_width: f64, sections: &[SectionBounds]) -> Effects {
        let narrow = self.config.is_narrow(viewport_width);
        let plan = self.highlight.on_scroll(
            &self.layout.nav_items,
            sections,
            scroll_y,
            self.config.scroll_threshold,
            narrow,
        );
        let mut effects: Effects = plan
            .marks
            .iter()
            .enumerate()
            .map(|(index, &active)| Effect::SetNavActive { index, active })
            .collect();
        effects.extend(
            plan.reveal
                .into_iter()
                .map(|index| Effect::RevealNavItem { index }),
        );
        effects
    }

    #[must_use]
    pub const fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub const fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme.current
    }

    #[must_use]
    pub fn accent(&self) -> Option<&str> {
        self.accent.current.as_deref()
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.highlight.active_section.as_deref()
    }

    #[must_use]
    pub const fn last_copy(&self) -> Option<CopyMethod> {
        self.last_copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavItem;

    fn page() -> PageState {
        PageState::new(
            PageConfig::default(),
            PageLayout::new(vec![
                NavItem::new("prompt", "#ff7a00"),
                NavItem {
                    section: Some("style".into()),
                    accent: None,
                },
            ]),
            StoredTheme::Missing,
        )
    }

    #[test]
    fn boot_applies_resolved_theme() {
        let state = PageState::new(
            PageConfig::default(),
            PageLayout::default(),
            StoredTheme::Found(Theme::Dark),
        );
        assert_eq!(
            state.boot().into_vec(),
            vec![Effect::ApplyTheme { theme: Theme::Dark }]
        );
    }

    #[test]
    fn toggle_applies_then_persists() {
        let mut state = page();
        let effects = state.apply(PageEvent::ThemeToggled);
        assert_eq!(
            effects.into_vec(),
            vec![
                Effect::ApplyTheme { theme: Theme::Dark },
                Effect::PersistTheme { theme: Theme::Dark }
            ]
        );
    }

    #[test]
    fn hover_without_accent_emits_nothing() {
        let mut state = page();
        assert!(state.apply(PageEvent::NavHovered { index: 1 }).is_empty());
        assert!(state.apply(PageEvent::NavHovered { index: 9 }).is_empty());
        let effects = state.apply(PageEvent::NavHovered { index: 0 });
        assert_eq!(
            effects.into_vec(),
            vec![Effect::SetAccent {
                value: "#ff7a00".into()
            }]
        );
        assert_eq!(state.accent(), Some("#ff7a00"));
    }

    #[test]
    fn scroll_marks_every_item_then_reveals() {
        let mut state = page();
        let effects = state.apply(PageEvent::Scrolled {
            scroll_y: 700.0,
            viewport_width: 1280.0,
            sections: vec![
                SectionBounds::new("prompt", 0.0),
                SectionBounds::new("style", 800.0),
            ],
        });
        assert_eq!(
            effects.into_vec(),
            vec![
                Effect::SetNavActive {
                    index: 0,
                    active: false
                },
                Effect::SetNavActive {
                    index: 1,
                    active: true
                },
                Effect::RevealNavItem { index: 1 },
            ]
        );
        assert_eq!(state.active_section(), Some("style"));
    }

    #[test]
    fn preview_replacement_revokes_previous_url() {
        let mut state = page();
        assert!(
            state
                .apply(PageEvent::FilesSelected {
                    input: 0,
                    preview_id: "face".into(),
                    file_count: 0
                })
                .is_empty()
        );
        assert!(
            state
                .apply(PageEvent::PreviewShown {
                    preview_id: "face".into(),
                    url: "blob:1".into()
                })
                .is_empty()
        );
        let effects = state.apply(PageEvent::PreviewShown {
            preview_id: "face".into(),
            url: "blob:2".into(),
        });
        assert_eq!(
            effects.into_vec(),
            vec![Effect::RevokeObjectUrl {
                url: "blob:1".into()
            }]
        );
    }

    #[test]
    fn copy_settled_schedules_restore_with_configured_window() {
        let mut state = page();
        let effects = state.apply(PageEvent::CopySettled {
            method: CopyMethod::Legacy,
            label: "Copy".into(),
        });
        assert_eq!(
            effects.into_vec(),
            vec![
                Effect::SetCopyLabel {
                    label: "\u{2705} Copied!".into()
                },
                Effect::ScheduleFeedbackRestore {
                    generation: 1,
                    delay_ms: 1200
                },
            ]
        );
        assert_eq!(state.last_copy(), Some(CopyMethod::Legacy));
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let event: PageEvent =
            serde_json::from_str(r#"{"type":"nav-hovered","index":2}"#).expect("tagged event");
        assert_eq!(event, PageEvent::NavHovered { index: 2 });
    }
}

//! Copy-to-clipboard feedback
//!
//! The button shows the confirmation label for a fixed window after each
//! successful copy. The label to restore is captured when the button leaves
//! `Idle`, so a second click during the window never restores the
//! confirmation text itself. Each copy bumps the generation and only the
//! restore scheduled by the latest copy takes effect.
use serde::{Deserialize, Serialize};

/// How the text reached the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyMethod {
    /// Asynchronous clipboard API.
    Clipboard,
    /// Selection plus `execCommand("copy")`.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "kebab-case")]
pub enum CopyPhase {
    #[default]
    Idle,
    Feedback { original_label: String },
}

/// Label changes produced by a completed copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackStart {
    pub label: String,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CopyFeedback {
    phase: CopyPhase,
    generation: u64,
}

impl CopyFeedback {
    /// Text to copy for the text box contents, or `None` when it is blank.
    #[must_use]
    pub fn payload(text: &str) -> Option<&str> {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Enter (or stay in) the feedback phase after a copy settled.
    ///
    /// `current_label` is the button label at the time the copy completed.
    pub fn copied(&mut self, current_label: &str, confirmation: &str) -> FeedbackStart {
        if matches!(self.phase, CopyPhase::Idle) {
            self.phase = CopyPhase::Feedback {
                original_label: current_label.to_string(),
            };
        }
        self.generation = self.generation.wrapping_add(1);
        FeedbackStart {
            label: confirmation.to_string(),
            generation: self.generation,
        }
    }

    /// Feedback window elapsed; returns the label to restore if `generation` is current.
    pub fn restore(&mut self, generation: u64) -> Option<String> {
        if generation != self.generation {
            return None;
        }
        match std::mem::take(&mut self.phase) {
            CopyPhase::Feedback { original_label } => Some(original_label),
            CopyPhase::Idle => None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &CopyPhase {
        &self.phase
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn is_showing_feedback(&self) -> bool {
        matches!(self.phase, CopyPhase::Feedback { .. })
    }
}

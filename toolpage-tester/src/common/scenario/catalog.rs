//! Built-in scenarios against the demo page markup
use super::{Check, Label, Scenario, Step};

const CATALOG: &[(&str, &str, fn() -> Vec<Step>)] = &[
    (
        "theme-default",
        "First visit with no stored preference loads light",
        theme_default,
    ),
    (
        "theme-toggle-roundtrip",
        "Two toggles return to the starting theme",
        theme_toggle_roundtrip,
    ),
    (
        "theme-persists",
        "Toggled theme survives a reload",
        theme_persists,
    ),
    (
        "sidebar-toggle",
        "Collapse button flips the sidebar and back",
        sidebar_toggle,
    ),
    (
        "accent-hover",
        "Hovering a tool item sets its accent color",
        accent_hover,
    ),
    (
        "scroll-highlight",
        "Scrolling marks exactly the matching nav item",
        scroll_highlight,
    ),
    (
        "scroll-before-first",
        "Above the first section nothing is active",
        scroll_before_first,
    ),
    (
        "copy-empty",
        "Whitespace-only prompt copies nothing",
        copy_empty,
    ),
    (
        "copy-feedback",
        "Copy shows confirmation then restores the label",
        copy_feedback,
    ),
    (
        "copy-double-click",
        "Second copy during feedback still restores the original label",
        copy_double_click,
    ),
    (
        "file-preview",
        "Choosing an image shows it in the linked preview",
        file_preview,
    ),
];

/// Names of every built-in scenario, in catalog order.
#[must_use]
pub fn scenario_names() -> Vec<&'static str> {
    CATALOG.iter().map(|(name, _, _)| *name).collect()
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG
        .iter()
        .map(|(name, description, _)| (*name, *description))
        .collect()
}

#[must_use]
pub fn get_scenario(name: &str) -> Option<Scenario> {
    CATALOG
        .iter()
        .find(|(key, _, _)| *key == name)
        .map(|(name, description, steps)| Scenario {
            name: *name,
            description: *description,
            steps: steps(),
        })
}

fn theme_default() -> Vec<Step> {
    vec![Step::Expect(Check::Theme("light"))]
}

fn theme_toggle_roundtrip() -> Vec<Step> {
    vec![
        Step::ToggleTheme,
        Step::Expect(Check::Theme("dark")),
        Step::ToggleTheme,
        Step::Expect(Check::Theme("light")),
    ]
}

fn theme_persists() -> Vec<Step> {
    vec![
        Step::ToggleTheme,
        Step::Reload,
        Step::Expect(Check::Theme("dark")),
        Step::ToggleTheme,
        Step::Reload,
        Step::Expect(Check::Theme("light")),
    ]
}

fn sidebar_toggle() -> Vec<Step> {
    vec![
        Step::Expect(Check::SidebarCollapsed(false)),
        Step::ToggleSidebar,
        Step::Expect(Check::SidebarCollapsed(true)),
        Step::ToggleSidebar,
        Step::Expect(Check::SidebarCollapsed(false)),
    ]
}

fn accent_hover() -> Vec<Step> {
    vec![
        Step::Hover(1),
        Step::Expect(Check::Accent("#00d9c0")),
        Step::Hover(3),
        Step::Expect(Check::Accent("#e84393")),
    ]
}

fn scroll_highlight() -> Vec<Step> {
    vec![
        Step::ScrollTo(1000.0),
        Step::Expect(Check::ActiveSection(Some("image-to-style"))),
        Step::Expect(Check::ActiveNav(vec![1])),
        Step::ScrollTo(2600.0),
        Step::Expect(Check::ActiveSection(Some("haircut-preview"))),
        Step::Expect(Check::ActiveNav(vec![3])),
    ]
}

fn scroll_before_first() -> Vec<Step> {
    vec![
        Step::ScrollTo(100.0),
        Step::Expect(Check::ActiveSection(None)),
        Step::Expect(Check::ActiveNav(Vec::new())),
        Step::ScrollTo(150.0),
        Step::Expect(Check::ActiveSection(Some("prompt-to-image"))),
        Step::Expect(Check::ActiveNav(vec![0])),
    ]
}

fn copy_empty() -> Vec<Step> {
    vec![
        Step::TypeText("   "),
        Step::ClickCopy,
        Step::Wait(100),
        Step::Expect(Check::CopyLabel(Label::Original)),
    ]
}

fn copy_feedback() -> Vec<Step> {
    vec![
        Step::TypeText("a neon city at dusk"),
        Step::ClickCopy,
        Step::Expect(Check::CopyLabel(Label::Confirmation)),
        Step::Wait(600),
        Step::Expect(Check::CopyLabel(Label::Confirmation)),
        Step::Wait(900),
        Step::Expect(Check::CopyLabel(Label::Original)),
    ]
}

fn copy_double_click() -> Vec<Step> {
    vec![
        Step::TypeText("hello"),
        Step::ClickCopy,
        Step::Wait(300),
        Step::ClickCopy,
        Step::Wait(1000),
        Step::Expect(Check::CopyLabel(Label::Confirmation)),
        Step::Wait(600),
        Step::Expect(Check::CopyLabel(Label::Original)),
    ]
}

fn file_preview() -> Vec<Step> {
    vec![
        Step::SelectFile(0),
        Step::Expect(Check::PreviewVisible("stylePreview")),
        Step::SelectFile(2),
        Step::Expect(Check::PreviewVisible("haircutPreview")),
        Step::Expect(Check::PreviewVisible("stylePreview")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for name in scenario_names() {
            let scenario = get_scenario(name).expect("catalog entry");
            assert_eq!(scenario.name, name);
            assert!(!scenario.steps.is_empty());
        }
        assert!(get_scenario("missing").is_none());
    }

    #[test]
    fn every_scenario_checks_something() {
        for name in scenario_names() {
            let scenario = get_scenario(name).expect("catalog entry");
            assert!(
                scenario
                    .steps
                    .iter()
                    .any(|step| matches!(step, Step::Expect(_))),
                "{name} has no expectations"
            );
        }
    }
}

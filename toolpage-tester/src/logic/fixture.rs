//! The demo page (`toolpage-web/static/index.html`) as the headless page sees it
use toolpage_core::{NavItem, PageLayout, SectionBounds};

pub const COPY_LABEL: &str = "\u{1f4cb} Copy";

/// Desktop width, wide enough to reveal the active nav item.
pub const VIEWPORT_WIDTH: f64 = 1280.0;

const HEADER_HEIGHT: f64 = 300.0;
const SECTION_HEIGHT: f64 = 800.0;

pub const TOOLS: &[(&str, &str)] = &[
    ("prompt-to-image", "#ff7a00"),
    ("image-to-style", "#00d9c0"),
    ("specs-tryon", "#7c5cff"),
    ("haircut-preview", "#e84393"),
    ("enhance-prompt", "#2d98da"),
];

/// `data-preview` targets of the file inputs, in document order.
pub const PREVIEWS: &[&str] = &["stylePreview", "tryonPreview", "haircutPreview"];

#[must_use]
pub fn layout() -> PageLayout {
    PageLayout::new(
        TOOLS
            .iter()
            .map(|(section, accent)| NavItem::new(*section, *accent))
            .collect(),
    )
}

#[must_use]
pub fn sections() -> Vec<SectionBounds> {
    TOOLS
        .iter()
        .zip(0u32..)
        .map(|((id, _), idx)| {
            SectionBounds::new(*id, HEADER_HEIGHT + f64::from(idx) * SECTION_HEIGHT)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_stack_below_header() {
        let tops: Vec<f64> = sections().iter().map(|s| s.top).collect();
        assert_eq!(tops, vec![300.0, 1100.0, 1900.0, 2700.0, 3500.0]);
    }

    #[test]
    fn every_tool_links_its_section() {
        let layout = layout();
        assert_eq!(layout.nav_items.len(), TOOLS.len());
        assert!(layout.nav_items[1].targets("image-to-style"));
    }
}

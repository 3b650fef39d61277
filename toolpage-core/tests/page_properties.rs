use toolpage_core::{
    HeadlessPage, MemoryStore, NavItem, PageConfig, PageLayout, PreferenceStore, SectionBounds,
    Theme,
};

const COPY_LABEL: &str = "\u{1F4CB} Copy";
const CONFIRMED: &str = "\u{2705} Copied!";

fn tools_layout() -> PageLayout {
    PageLayout::new(vec![
        NavItem::new("prompt-to-image", "#ff7a00"),
        NavItem::new("image-to-style", "#00d9c0"),
        NavItem::new("specs-tryon", "#7c5cff"),
    ])
}

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("prompt-to-image", 0.0),
        SectionBounds::new("image-to-style", 800.0),
        SectionBounds::new("specs-tryon", 1600.0),
    ]
}

fn fresh_page() -> HeadlessPage {
    HeadlessPage::load(
        MemoryStore::default(),
        PageConfig::default(),
        tools_layout(),
        COPY_LABEL,
    )
}

#[test]
fn first_load_without_preference_is_light() {
    let page = fresh_page();
    assert_eq!(page.snapshot().theme.as_deref(), Some("light"));
    assert!(page.store().get("theme").is_none());
}

#[test]
fn even_number_of_toggles_restores_theme() {
    let mut page = fresh_page();
    for toggles in 1..=6 {
        page.toggle_theme();
        let expected = if toggles % 2 == 0 { "light" } else { "dark" };
        assert_eq!(page.snapshot().theme.as_deref(), Some(expected));
    }
}

#[test]
fn dark_preference_survives_reload() {
    let mut page = fresh_page();
    page.toggle_theme();
    assert_eq!(page.store().get("theme").as_deref(), Some("dark"));
    let reloaded = page.reload();
    assert_eq!(reloaded.snapshot().theme.as_deref(), Some("dark"));
    assert_eq!(reloaded.state().theme(), Theme::Dark);
}

#[test]
fn unrecognized_stored_value_loads_light() {
    let store = MemoryStore::default();
    store.save("theme", "solarized").expect("memory store write");
    let page = HeadlessPage::load(store, PageConfig::default(), tools_layout(), COPY_LABEL);
    assert_eq!(page.snapshot().theme.as_deref(), Some("light"));
}

#[test]
fn displayed_theme_tracks_last_written_preference() {
    let mut page = fresh_page();
    for _ in 0..3 {
        page.toggle_theme();
        assert_eq!(page.snapshot().theme, page.store().get("theme"));
    }
}

#[test]
fn scroll_at_850_highlights_second_section_only() {
    let mut page = fresh_page();
    page.scroll(850.0, 1280.0, &sections());
    let snapshot = page.snapshot();
    assert_eq!(snapshot.active_section.as_deref(), Some("image-to-style"));
    assert_eq!(snapshot.active_nav, vec![1]);
    assert_eq!(page.dom().revealed, vec![1]);
}

#[test]
fn threshold_boundary_is_inclusive() {
    let mut page = fresh_page();
    page.scroll(1450.0, 1280.0, &sections());
    assert_eq!(page.snapshot().active_section.as_deref(), Some("specs-tryon"));
    page.scroll(1449.5, 1280.0, &sections());
    assert_eq!(page.snapshot().active_section.as_deref(), Some("image-to-style"));
}

#[test]
fn no_item_is_active_before_first_scroll_or_above_all_sections() {
    let mut page = fresh_page();
    assert!(page.snapshot().active_nav.is_empty());
    assert!(page.snapshot().active_section.is_none());

    let below = vec![SectionBounds::new("prompt-to-image", 600.0)];
    page.scroll(10.0, 1280.0, &below);
    assert!(page.snapshot().active_nav.is_empty());
    assert!(page.snapshot().active_section.is_none());
}

#[test]
fn narrow_viewport_highlights_without_revealing() {
    let mut page = fresh_page();
    page.scroll(850.0, 768.0, &sections());
    assert_eq!(page.snapshot().active_nav, vec![1]);
    assert!(page.dom().revealed.is_empty());
}

#[test]
fn sidebar_double_toggle_is_identity() {
    let mut page = fresh_page();
    page.toggle_sidebar();
    assert!(page.snapshot().sidebar_collapsed);
    page.toggle_sidebar();
    assert!(!page.snapshot().sidebar_collapsed);
}

#[test]
fn accent_follows_last_hovered_item() {
    let mut page = fresh_page();
    page.hover(2);
    page.hover(0);
    assert_eq!(page.snapshot().accent.as_deref(), Some("#ff7a00"));
}

#[test]
fn selecting_a_file_shows_preview_with_source() {
    let mut page = fresh_page();
    page.select_files("tryon-preview", 1);
    let src = page.dom().previews.get("tryon-preview").expect("preview shown");
    assert!(!src.is_empty());
    assert_eq!(page.snapshot().visible_previews, vec!["tryon-preview"]);
}

#[test]
fn cancelled_file_dialog_leaves_preview_hidden() {
    let mut page = fresh_page();
    page.select_files("tryon-preview", 0);
    assert!(page.snapshot().visible_previews.is_empty());
}

#[test]
fn reselecting_a_file_revokes_previous_object_url() {
    let mut page = fresh_page();
    page.select_files("tryon-preview", 1);
    let first = page.dom().previews["tryon-preview"].clone();
    page.select_files("tryon-preview", 1);
    assert_ne!(page.dom().previews["tryon-preview"], first);
    assert_eq!(page.dom().revoked_urls, vec![first]);
}

#[test]
fn blank_text_box_copy_changes_nothing() {
    let mut page = fresh_page();
    page.type_text("   \n ");
    page.click_copy();
    assert_eq!(page.dom().copy_label, COPY_LABEL);
    assert!(page.dom().clipboard.is_none());
    page.advance(5_000);
    assert_eq!(page.dom().copy_label, COPY_LABEL);
}

#[test]
fn copy_shows_confirmation_then_restores_after_window() {
    let mut page = fresh_page();
    page.type_text("hello");
    page.click_copy();
    assert_eq!(page.dom().clipboard.as_deref(), Some("hello"));
    assert_eq!(page.dom().copy_label, CONFIRMED);
    page.advance(1_199);
    assert_eq!(page.dom().copy_label, CONFIRMED);
    page.advance(1);
    assert_eq!(page.dom().copy_label, COPY_LABEL);
}

#[test]
fn double_click_restores_the_real_label() {
    let mut page = fresh_page();
    page.type_text("hello");
    page.click_copy();
    page.advance(300);
    page.click_copy();
    page.advance(5_000);
    assert_eq!(page.dom().copy_label, COPY_LABEL);
}

#[test]
fn legacy_fallback_gives_the_same_feedback() {
    let mut page = fresh_page();
    page.set_clipboard_available(false);
    page.type_text("hello");
    page.click_copy();
    assert_eq!(page.dom().copy_label, CONFIRMED);
    page.advance(1_200);
    assert_eq!(page.dom().copy_label, COPY_LABEL);
}

#[test]
fn reload_during_feedback_shows_markup_label() {
    let mut page = fresh_page();
    page.type_text("hello");
    page.click_copy();
    assert_eq!(page.dom().copy_label, CONFIRMED);
    let mut reloaded = page.reload();
    assert_eq!(reloaded.dom().copy_label, COPY_LABEL);
    reloaded.type_text("again");
    reloaded.click_copy();
    reloaded.advance(5_000);
    assert_eq!(reloaded.dom().copy_label, COPY_LABEL);
}

//! Page contract tests
//!
//! The page is pure composition: same viewport in, same rectangles out.
//! These tests pin the shipped strings, the call-to-action destination and
//! the layout behavior under resize.

use kotvpn::{BOT_URL, CAPTION, CTA_LABEL, FOOTER, PageContent};
use kotvpn_renderer::page_layout;

#[test]
fn cta_destination_and_label_are_fixed() {
    assert_eq!(BOT_URL, "https://t.me/KotVPNbot");
    assert_eq!(CTA_LABEL, "Добро пожаловать в бота");
}

#[test]
fn footer_is_the_shipped_line() {
    assert_eq!(FOOTER, "Фром Раша виз лав 👨‍💻🤍");
}

#[test]
fn panel_without_title_shows_the_placeholder() {
    assert_eq!(PageContent::new(None).title(), "Untitled");
}

#[test]
fn panel_with_title_shows_it_verbatim() {
    let content = PageContent::new(Some("Kot vpn bot".to_string()));
    assert_eq!(content.title(), "Kot vpn bot");
    assert_eq!(content.strings().title, "Kot vpn bot");
}

#[test]
fn caption_matches_the_two_line_tagline() {
    assert_eq!(CAPTION, "Безлимитный\nне отслеживаемый vpn!");
}

#[test]
fn layout_is_a_pure_function_of_the_viewport() {
    assert_eq!(page_layout(1280.0, 800.0), page_layout(1280.0, 800.0));
    assert_ne!(page_layout(1280.0, 800.0), page_layout(1920.0, 1080.0));
}

#[test]
fn panel_recenters_when_the_viewport_changes() {
    for (w, h) in [(800.0, 600.0), (1280.0, 800.0), (2560.0, 1440.0)] {
        let layout = page_layout(w, h);
        let (cx, cy) = layout.panel.center();
        assert!((cx - w / 2.0).abs() < 0.5, "panel off-center at {w}x{h}");
        assert!((cy - h / 2.0).abs() < 0.5, "panel off-center at {w}x{h}");
    }
}

#[test]
fn footer_tracks_the_bottom_edge() {
    for h in [600.0, 800.0, 1200.0] {
        let layout = page_layout(1280.0, h);
        let bottom = layout.footer.y + layout.footer.height;
        assert!(h - bottom > 0.0);
        assert!(h - bottom < 40.0);
    }
}

#[test]
fn cta_hit_test_matches_the_pill_rect() {
    let layout = page_layout(1280.0, 800.0);
    let (cx, cy) = layout.cta.center();
    assert!(layout.hits_cta(cx, cy));
    assert!(!layout.hits_cta(cx, cy + layout.cta.height));
    assert!(!layout.hits_cta(0.0, 0.0));
}

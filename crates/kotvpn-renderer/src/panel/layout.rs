//! Page layout
//!
//! Pure rectangle math: given the viewport size in pixels, place the chrome
//! panel (header band, traffic-light buttons, title), the caption block, the
//! call-to-action pill and the footer line. Same input, same output - the
//! renderer and hit-testing both consume this.

/// Panel width before clamping to the viewport.
pub const PANEL_WIDTH: f32 = 440.0;
/// Panel height before clamping to the viewport.
pub const PANEL_HEIGHT: f32 = 280.0;
/// Header band height.
pub const HEADER_HEIGHT: f32 = 34.0;
/// Traffic-light button diameter.
pub const BUTTON_DIAMETER: f32 = 12.0;
const BUTTON_GAP: f32 = 8.0;
const BUTTON_INSET: f32 = 12.0;
/// Call-to-action pill size.
pub const CTA_WIDTH: f32 = 300.0;
pub const CTA_HEIGHT: f32 = 48.0;
const CONTENT_PADDING: f32 = 20.0;
const FOOTER_MARGIN: f32 = 18.0;

/// Text metrics shared with the text renderer.
pub const TITLE_FONT_SIZE: f32 = 13.0;
pub const TITLE_LINE_HEIGHT: f32 = 16.0;
pub const CAPTION_FONT_SIZE: f32 = 24.0;
pub const CAPTION_LINE_HEIGHT: f32 = 30.0;
pub const CTA_FONT_SIZE: f32 = 16.0;
pub const CTA_LINE_HEIGHT: f32 = 20.0;
pub const FOOTER_FONT_SIZE: f32 = 14.0;
pub const FOOTER_LINE_HEIGHT: f32 = 18.0;

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPx {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectPx {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Every rectangle the page draws or hit-tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub panel: RectPx,
    pub header: RectPx,
    pub window_buttons: [RectPx; 3],
    /// Title text block, center-aligned within the header
    pub title: RectPx,
    /// Caption text block below the header
    pub caption: RectPx,
    /// Call-to-action pill
    pub cta: RectPx,
    /// Label text block inside the pill
    pub cta_label: RectPx,
    /// Footer text block pinned to the bottom edge
    pub footer: RectPx,
}

impl PageLayout {
    /// True when the pointer position lands on the call-to-action.
    pub fn hits_cta(&self, px: f32, py: f32) -> bool {
        self.cta.contains(px, py)
    }
}

/// Lay the page out for a viewport of `width` x `height` pixels.
pub fn page_layout(width: f32, height: f32) -> PageLayout {
    let panel_width = PANEL_WIDTH.min((width - 32.0).max(0.0));
    let panel_height = PANEL_HEIGHT.min((height - 64.0).max(0.0));

    let panel = RectPx {
        x: (width - panel_width) / 2.0,
        y: (height - panel_height) / 2.0,
        width: panel_width,
        height: panel_height,
    };

    let header = RectPx {
        x: panel.x,
        y: panel.y,
        width: panel.width,
        height: HEADER_HEIGHT,
    };

    let button_y = header.y + (HEADER_HEIGHT - BUTTON_DIAMETER) / 2.0;
    let window_buttons = std::array::from_fn(|i| RectPx {
        x: header.x + BUTTON_INSET + i as f32 * (BUTTON_DIAMETER + BUTTON_GAP),
        y: button_y,
        width: BUTTON_DIAMETER,
        height: BUTTON_DIAMETER,
    });

    let title = RectPx {
        x: header.x,
        y: header.y + (HEADER_HEIGHT - TITLE_LINE_HEIGHT) / 2.0,
        width: header.width,
        height: TITLE_LINE_HEIGHT,
    };

    let caption = RectPx {
        x: panel.x + CONTENT_PADDING,
        y: header.y + HEADER_HEIGHT + CONTENT_PADDING,
        width: panel.width - 2.0 * CONTENT_PADDING,
        height: 2.0 * CAPTION_LINE_HEIGHT,
    };

    let cta = RectPx {
        x: panel.x + (panel.width - CTA_WIDTH.min(panel.width - 2.0 * CONTENT_PADDING)) / 2.0,
        y: caption.y + caption.height + CONTENT_PADDING,
        width: CTA_WIDTH.min(panel.width - 2.0 * CONTENT_PADDING),
        height: CTA_HEIGHT,
    };

    let cta_label = RectPx {
        x: cta.x,
        y: cta.y + (CTA_HEIGHT - CTA_LINE_HEIGHT) / 2.0,
        width: cta.width,
        height: CTA_LINE_HEIGHT,
    };

    let footer = RectPx {
        x: 0.0,
        y: height - FOOTER_MARGIN - FOOTER_LINE_HEIGHT,
        width,
        height: FOOTER_LINE_HEIGHT,
    };

    PageLayout {
        panel,
        header,
        window_buttons,
        title,
        caption,
        cta,
        cta_label,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_deterministic() {
        assert_eq!(page_layout(1280.0, 800.0), page_layout(1280.0, 800.0));
    }

    #[test]
    fn panel_is_centered() {
        let layout = page_layout(1280.0, 800.0);
        let (cx, cy) = layout.panel.center();
        assert!((cx - 640.0).abs() < 0.5);
        assert!((cy - 400.0).abs() < 0.5);
    }

    #[test]
    fn panel_stays_centered_after_resize() {
        let layout = page_layout(1000.0, 600.0);
        let (cx, cy) = layout.panel.center();
        assert!((cx - 500.0).abs() < 0.5);
        assert!((cy - 300.0).abs() < 0.5);
    }

    #[test]
    fn header_and_buttons_sit_inside_the_panel() {
        let layout = page_layout(1280.0, 800.0);
        assert_eq!(layout.header.y, layout.panel.y);
        assert_eq!(layout.header.width, layout.panel.width);
        for button in layout.window_buttons {
            assert!(button.x >= layout.header.x);
            assert!(button.x + button.width <= layout.header.x + layout.header.width);
            assert!(button.y >= layout.header.y);
            assert!(button.y + button.height <= layout.header.y + layout.header.height);
        }
    }

    #[test]
    fn buttons_do_not_overlap() {
        let layout = page_layout(1280.0, 800.0);
        let [a, b, c] = layout.window_buttons;
        assert!(a.x + a.width <= b.x);
        assert!(b.x + b.width <= c.x);
    }

    #[test]
    fn cta_sits_inside_the_panel() {
        let layout = page_layout(1280.0, 800.0);
        assert!(layout.cta.x >= layout.panel.x);
        assert!(layout.cta.x + layout.cta.width <= layout.panel.x + layout.panel.width);
        assert!(layout.cta.y + layout.cta.height <= layout.panel.y + layout.panel.height);
    }

    #[test]
    fn cta_hit_test() {
        let layout = page_layout(1280.0, 800.0);
        let (cx, cy) = layout.cta.center();
        assert!(layout.hits_cta(cx, cy));
        assert!(!layout.hits_cta(cx, layout.panel.y - 10.0));
        assert!(!layout.hits_cta(10.0, 10.0));
    }

    #[test]
    fn footer_is_pinned_to_the_bottom() {
        let short = page_layout(1280.0, 600.0);
        let tall = page_layout(1280.0, 1000.0);
        assert!((600.0 - (short.footer.y + short.footer.height)) < 40.0);
        assert!((tall.footer.y - short.footer.y - 400.0).abs() < 0.5);
    }

    #[test]
    fn panel_shrinks_on_tiny_viewports() {
        let layout = page_layout(300.0, 200.0);
        assert!(layout.panel.width <= 300.0 - 32.0);
        assert!(layout.panel.height <= 200.0 - 64.0);
        assert!(layout.panel.width >= 0.0);
    }
}

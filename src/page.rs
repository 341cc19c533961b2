//! Page content - the strings the landing page ships with
//!
//! The call-to-action always points at the Telegram bot and opens in the
//! system browser, a separate process that gets no referrer and no handle
//! back to this window.

/// Destination of the call-to-action.
pub const BOT_URL: &str = "https://t.me/KotVPNbot";

/// Label on the call-to-action pill.
pub const CTA_LABEL: &str = "Добро пожаловать в бота";

/// Caption inside the panel, two lines.
pub const CAPTION: &str = "Безлимитный\nне отслеживаемый vpn!";

/// Footer line pinned to the bottom of the page.
pub const FOOTER: &str = "Фром Раша виз лав 👨‍💻🤍";

/// Panel title when the config supplies none.
pub const PLACEHOLDER_TITLE: &str = "Untitled";

/// Resolved page content. Only the panel title varies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    title: String,
}

impl PageContent {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| PLACEHOLDER_TITLE.to_string()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn strings(&self) -> kotvpn_renderer::PageStrings<'_> {
        kotvpn_renderer::PageStrings {
            title: &self.title,
            caption: CAPTION,
            cta_label: CTA_LABEL,
            footer: FOOTER,
        }
    }
}

/// Open the bot link in the default browser.
///
/// A failure leaves the page up; it is logged and otherwise ignored.
pub fn open_bot_link() {
    log::info!("Opening bot link: {}", BOT_URL);
    if let Err(e) = open::that(BOT_URL) {
        log::error!("Failed to open URL '{}': {}", BOT_URL, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_targets_the_bot() {
        assert_eq!(BOT_URL, "https://t.me/KotVPNbot");
        assert_eq!(CTA_LABEL, "Добро пожаловать в бота");
    }

    #[test]
    fn missing_title_falls_back_to_placeholder() {
        let content = PageContent::new(None);
        assert_eq!(content.title(), "Untitled");
    }

    #[test]
    fn supplied_title_is_rendered_verbatim() {
        let content = PageContent::new(Some("Kot vpn bot".to_string()));
        assert_eq!(content.title(), "Kot vpn bot");
    }

    #[test]
    fn caption_spans_two_lines() {
        assert_eq!(CAPTION.lines().count(), 2);
    }

    #[test]
    fn strings_wire_through_to_the_renderer() {
        let content = PageContent::new(Some("Kot vpn bot".to_string()));
        let strings = content.strings();
        assert_eq!(strings.title, "Kot vpn bot");
        assert_eq!(strings.cta_label, CTA_LABEL);
        assert_eq!(strings.footer, FOOTER);
    }
}

//! Kot VPN - pointer-reactive landing page
//!
//! This is the root crate containing the application binary. The actual
//! implementation lives in:
//! - `kotvpn-core` - per-frame scene math
//! - `kotvpn-renderer` - GPU compositing
//! - `kotvpn-config` - configuration

// Page content (side-effect-free strings and title resolution)
#[path = "page.rs"]
mod page;
pub use page::{BOT_URL, CAPTION, CTA_LABEL, FOOTER, PLACEHOLDER_TITLE, PageContent, open_bot_link};

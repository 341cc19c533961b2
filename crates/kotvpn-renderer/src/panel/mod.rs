//! Page chrome - decorative window panel, call-to-action and footer
//!
//! Split the way the tab bar was in earlier iterations: `layout` is pure
//! rectangle math over the viewport size, `renderer` turns a layout into
//! instanced rounded quads.

pub mod layout;
pub mod renderer;

pub use layout::{PageLayout, RectPx, page_layout};
pub use renderer::PanelRenderer;

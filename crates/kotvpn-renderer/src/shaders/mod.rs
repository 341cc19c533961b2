//! Shader module - WGSL shaders for GPU rendering
//!
//! Shaders are stored as external .wgsl files and included at compile time.
//! This enables better IDE support (syntax highlighting, validation) while
//! keeping the binary self-contained.

/// Built-in shaders included at compile time
pub mod builtin {
    /// Layer blur shader - textured scene quad with pointer-driven 9x9 box blur
    pub const LAYER_BLUR: &str = include_str!("layer_blur.wgsl");

    /// Layer image shader - plain textured scene quad (foreground mascot)
    pub const LAYER_IMAGE: &str = include_str!("layer_image.wgsl");

    /// Panel shader - instanced rounded rectangles for the page chrome
    pub const PANEL: &str = include_str!("panel.wgsl");
}

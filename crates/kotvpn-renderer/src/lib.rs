//! Kot VPN Renderer - GPU compositing for the landing page
//!
//! This crate draws the page in three stages, back to front:
//! - Scene: three textured quads (static backdrop, animated backdrop,
//!   mascot) under a shared perspective camera, blurred per-layer by
//!   pointer distance
//! - Panel chrome: instanced rounded rectangles for the decorative window,
//!   its traffic-light buttons and the call-to-action pill
//! - Text: glyphon-backed title, caption, call-to-action label and footer
//!
//! All per-frame math lives in `kotvpn-core`; this crate only owns GPU
//! resources and turns the ticked state into draw calls.

pub mod camera;
pub mod layer;
pub mod panel;
pub mod scene;
pub mod shaders;
pub mod text;
pub mod texture;

pub use camera::Camera;
pub use layer::{LayerMesh, LayerPipeline, LayerShader, LayerUniforms};
pub use panel::{PageLayout, PanelRenderer, RectPx, page_layout};
pub use scene::{SceneComposer, SceneSettings};
pub use text::{PageStrings, PageText};
pub use texture::{LayerTexture, LoadedImage, TextureCache, TextureError};

//! Kot VPN Core - per-frame scene math
//!
//! This crate provides:
//! - Pointer sampling in normalized device coordinates
//! - World-space viewport math for the fixed perspective camera
//! - Low-pass smoothing for snap-free motion
//! - Per-layer tick state (backdrops and parallax mascot)
//!
//! Everything here is plain math on owned state, with no GPU types, so the
//! per-tick behavior of every layer is unit-testable.

pub mod backdrop;
pub mod parallax;
pub mod smoothing;

pub use backdrop::{AnimatedBackdrop, BlurVariant, StaticBackdrop};
pub use parallax::ParallaxLayer;
pub use smoothing::{SMOOTHING, Smoothed};

/// Camera eye distance from the z = 0 plane.
pub const CAMERA_Z: f32 = 5.0;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;

/// Pointer position in normalized device coordinates.
///
/// Both axes span [-1, 1] across the window interior, +y up. There is a
/// single writer (the input layer); every scene consumer receives a copy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the viewport center.
    pub fn distance_from_center(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Visible world extents at the z = 0 plane for the fixed camera.
///
/// Layer sizing and the mascot anchor are expressed in these units so the
/// scene composition is resolution-independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldViewport {
    pub width: f32,
    pub height: f32,
}

impl WorldViewport {
    /// Compute world extents from the window size in pixels.
    pub fn from_pixels(width_px: f32, height_px: f32) -> Self {
        let width_px = width_px.max(1.0);
        let height_px = height_px.max(1.0);
        let aspect = width_px / height_px;

        let height = 2.0 * CAMERA_Z * (CAMERA_FOV_Y_DEG.to_radians() / 2.0).tan();
        Self {
            width: height * aspect,
            height,
        }
    }
}

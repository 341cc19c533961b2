//! Parallax foreground layer state
//!
//! The mascot quad is pinned to the lower-left corner of the viewport and
//! drifts with the pointer in proportion to its `depth`, so deeper layers
//! appear closer to the viewer. Offsets and rotation go through the shared
//! low-pass filter, independently per axis.

use crate::smoothing::{SMOOTHING, Smoothed};
use crate::{Pointer, WorldViewport};

/// Depth of the mascot quad.
pub const MASCOT_LAYER_Z: f32 = -0.5;

/// Pointer-to-offset gain, scaled by layer depth.
pub const OFFSET_GAIN: f32 = 0.3;

/// Pointer-to-rotation gain around Y, scaled by layer depth.
pub const ROTATION_GAIN: f32 = 0.2;

/// Anchor inset from the left viewport edge, world units.
pub const ANCHOR_MARGIN_X: f32 = 1.8;

/// Anchor inset from the bottom viewport edge, world units.
pub const ANCHOR_MARGIN_Y: f32 = 1.5;

/// Per-tick state of a corner-pinned parallax layer.
#[derive(Debug, Clone, Copy)]
pub struct ParallaxLayer {
    depth: f32,
    offset_x: Smoothed,
    offset_y: Smoothed,
    rotation_y: Smoothed,
}

impl ParallaxLayer {
    pub fn new(depth: f32) -> Self {
        Self {
            depth,
            offset_x: Smoothed::default(),
            offset_y: Smoothed::default(),
            rotation_y: Smoothed::default(),
        }
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Fixed anchor in world units for the given viewport.
    ///
    /// Pins the layer at the same relative corner offset across resizes. A
    /// zero-sized viewport yields a finite but meaningless anchor.
    pub fn anchor(viewport: WorldViewport) -> (f32, f32) {
        (
            -viewport.width / 2.0 + ANCHOR_MARGIN_X,
            -viewport.height / 2.0 + ANCHOR_MARGIN_Y,
        )
    }

    pub fn tick(&mut self, pointer: Pointer) {
        let gain = self.depth * OFFSET_GAIN;
        self.offset_x.approach(pointer.x * gain, SMOOTHING);
        self.offset_y.approach(pointer.y * gain, SMOOTHING);
        self.rotation_y
            .approach(pointer.x * ROTATION_GAIN * self.depth, SMOOTHING);
    }

    /// Anchor plus the smoothed parallax offset.
    pub fn position(&self, viewport: WorldViewport) -> (f32, f32) {
        let (ax, ay) = Self::anchor(viewport);
        (ax + self.offset_x.get(), ay + self.offset_y.get())
    }

    /// Smoothed rotation around Y in radians.
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> WorldViewport {
        WorldViewport::from_pixels(1200.0, 800.0)
    }

    #[test]
    fn anchor_sits_in_lower_left_quadrant() {
        let (x, y) = ParallaxLayer::anchor(viewport());
        assert!(x < 0.0);
        assert!(y < 0.0);
    }

    #[test]
    fn anchor_keeps_relative_corner_offset_across_resizes() {
        let small = WorldViewport::from_pixels(800.0, 600.0);
        let large = WorldViewport::from_pixels(1600.0, 1200.0);

        let (sx, sy) = ParallaxLayer::anchor(small);
        let (lx, ly) = ParallaxLayer::anchor(large);

        // Same aspect ratio => same world extents => identical anchor; the
        // inset from the corner is the fixed margin either way.
        assert!((sx - lx).abs() < 1e-5);
        assert!((sy - ly).abs() < 1e-5);
        assert!((sx - (-small.width / 2.0 + ANCHOR_MARGIN_X)).abs() < 1e-6);
        assert!((sy - (-small.height / 2.0 + ANCHOR_MARGIN_Y)).abs() < 1e-6);
    }

    #[test]
    fn anchor_follows_widening_viewport() {
        let narrow = WorldViewport::from_pixels(800.0, 800.0);
        let wide = WorldViewport::from_pixels(1600.0, 800.0);
        let (nx, _) = ParallaxLayer::anchor(narrow);
        let (wx, _) = ParallaxLayer::anchor(wide);
        // Wider viewport pushes the left edge (and the anchor with it) out.
        assert!(wx < nx);
    }

    #[test]
    fn offset_converges_to_pointer_times_depth_gain() {
        let mut layer = ParallaxLayer::new(0.5);
        for _ in 0..300 {
            layer.tick(Pointer::new(1.0, -1.0));
        }
        let (x, y) = layer.position(viewport());
        let (ax, ay) = ParallaxLayer::anchor(viewport());
        assert!((x - ax - 0.5 * OFFSET_GAIN).abs() < 1e-4);
        assert!((y - ay + 0.5 * OFFSET_GAIN).abs() < 1e-4);
    }

    #[test]
    fn deeper_layers_drift_farther() {
        let mut shallow = ParallaxLayer::new(0.2);
        let mut deep = ParallaxLayer::new(0.8);
        for _ in 0..50 {
            shallow.tick(Pointer::new(1.0, 0.0));
            deep.tick(Pointer::new(1.0, 0.0));
        }
        let vp = viewport();
        let (ax, _) = ParallaxLayer::anchor(vp);
        assert!(deep.position(vp).0 - ax > shallow.position(vp).0 - ax);
    }

    #[test]
    fn rotation_scales_with_depth() {
        let mut layer = ParallaxLayer::new(0.5);
        for _ in 0..300 {
            layer.tick(Pointer::new(1.0, 0.0));
        }
        assert!((layer.rotation_y() - ROTATION_GAIN * 0.5).abs() < 1e-4);
    }

    #[test]
    fn centered_pointer_settles_back_to_anchor() {
        let mut layer = ParallaxLayer::new(0.5);
        for _ in 0..50 {
            layer.tick(Pointer::new(1.0, 1.0));
        }
        for _ in 0..400 {
            layer.tick(Pointer::default());
        }
        let vp = viewport();
        let (x, y) = layer.position(vp);
        let (ax, ay) = ParallaxLayer::anchor(vp);
        assert!((x - ax).abs() < 1e-4);
        assert!((y - ay).abs() < 1e-4);
    }
}

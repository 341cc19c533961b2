//! Pointer tracking
//!
//! Winit delivers cursor positions in physical pixels with the origin at the
//! top-left; the scene consumes normalized device coordinates with +y up and
//! the origin at the window center. This module owns that mapping and keeps
//! the last raw position around for pixel-space hit testing.

use kotvpn_core::Pointer;

/// Tracks the cursor in both pixel and normalized coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerTracker {
    position_px: (f32, f32),
    size_px: (f32, f32),
}

impl PointerTracker {
    pub fn new(width_px: f32, height_px: f32) -> Self {
        Self {
            // Center until the first cursor event arrives.
            position_px: (width_px / 2.0, height_px / 2.0),
            size_px: (width_px.max(1.0), height_px.max(1.0)),
        }
    }

    pub fn resize(&mut self, width_px: f32, height_px: f32) {
        self.size_px = (width_px.max(1.0), height_px.max(1.0));
    }

    pub fn move_to(&mut self, x_px: f32, y_px: f32) {
        self.position_px = (x_px, y_px);
    }

    /// Last cursor position in physical pixels, for hit testing.
    pub fn position_px(&self) -> (f32, f32) {
        self.position_px
    }

    /// Current pointer sample in normalized device coordinates.
    pub fn sample(&self) -> Pointer {
        let (x, y) = self.position_px;
        let (w, h) = self.size_px;
        Pointer::new((x / w) * 2.0 - 1.0, -(y / h) * 2.0 + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        let mut tracker = PointerTracker::new(800.0, 600.0);
        tracker.move_to(400.0, 300.0);
        let p = tracker.sample();
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn corners_map_to_unit_extents() {
        let mut tracker = PointerTracker::new(800.0, 600.0);

        tracker.move_to(0.0, 0.0);
        assert_eq!(tracker.sample(), Pointer::new(-1.0, 1.0));

        tracker.move_to(800.0, 600.0);
        assert_eq!(tracker.sample(), Pointer::new(1.0, -1.0));
    }

    #[test]
    fn y_axis_points_up() {
        let mut tracker = PointerTracker::new(1000.0, 1000.0);
        tracker.move_to(500.0, 0.0);
        assert!(tracker.sample().y > 0.0);
        tracker.move_to(500.0, 1000.0);
        assert!(tracker.sample().y < 0.0);
    }

    #[test]
    fn resize_rescales_the_mapping() {
        let mut tracker = PointerTracker::new(800.0, 600.0);
        tracker.move_to(400.0, 300.0);
        tracker.resize(1600.0, 1200.0);
        // Same pixel now sits in the upper-left quadrant.
        let p = tracker.sample();
        assert!(p.x < 0.0);
        assert!(p.y > 0.0);
    }

    #[test]
    fn starts_centered_before_any_cursor_event() {
        let tracker = PointerTracker::new(1280.0, 800.0);
        let p = tracker.sample();
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }
}

//! Fixed perspective camera
//!
//! The scene uses one camera for all three layers: eye on the +Z axis looking
//! at the origin, so quads at different depths pick up the perspective shift
//! that sells the parallax. Only the window size varies at runtime.

use glam::{Mat4, Vec3};
use kotvpn_core::{CAMERA_FOV_Y_DEG, CAMERA_Z, WorldViewport};

pub struct Camera {
    width_px: f32,
    height_px: f32,
}

impl Camera {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px: width_px.max(1) as f32,
            height_px: height_px.max(1) as f32,
        }
    }

    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        self.width_px = width_px.max(1) as f32;
        self.height_px = height_px.max(1) as f32;
    }

    /// Window size in pixels, fed to the `resolution` uniform every frame.
    pub fn resolution(&self) -> [f32; 2] {
        [self.width_px, self.height_px]
    }

    /// Visible world extents at the z = 0 plane.
    pub fn world_viewport(&self) -> WorldViewport {
        WorldViewport::from_pixels(self.width_px, self.height_px)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        let aspect = self.width_px / self.height_px;
        let proj =
            Mat4::perspective_rh(CAMERA_FOV_Y_DEG.to_radians(), aspect, 0.1, 1000.0);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = Camera::new(1200, 800);
        let clip = camera.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
    }

    #[test]
    fn world_viewport_edge_projects_to_ndc_edge() {
        let camera = Camera::new(1200, 800);
        let vp = camera.world_viewport();
        let clip = camera.view_proj() * Vec4::new(vp.width / 2.0, vp.height / 2.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!((ndc.x - 1.0).abs() < 1e-4);
        assert!((ndc.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn deeper_points_project_smaller() {
        let camera = Camera::new(1000, 1000);
        let near = camera.view_proj() * Vec4::new(1.0, 0.0, -0.5, 1.0);
        let far = camera.view_proj() * Vec4::new(1.0, 0.0, -6.0, 1.0);
        assert!((far.x / far.w).abs() < (near.x / near.w).abs());
    }
}

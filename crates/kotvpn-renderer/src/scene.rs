//! Scene composer
//!
//! Owns the three layers of the landing backdrop and drives them once per
//! frame: tick the per-layer state with the current pointer sample, then
//! draw back-to-front at fixed depths under the shared camera. No layer
//! reads another layer's per-frame state.

use std::path::PathBuf;

use glam::{EulerRot, Mat4, Vec3};
use kotvpn_core::backdrop::{
    ANIMATED_LAYER_Z, ANIMATED_TAP_SCALE, STATIC_LAYER_Z, STATIC_TAP_SCALE,
};
use kotvpn_core::parallax::MASCOT_LAYER_Z;
use kotvpn_core::{
    AnimatedBackdrop, BlurVariant, ParallaxLayer, Pointer, StaticBackdrop, WorldViewport,
};

use crate::camera::Camera;
use crate::layer::{LayerMesh, LayerPipeline, LayerShader, LayerUniforms};
use crate::texture::{TextureCache, TextureError};

/// Oversize factor of the static backdrop relative to the world viewport.
const STATIC_OVERSIZE: f32 = 2.5;

/// Width factor of the animated backdrop relative to the world viewport.
const ANIMATED_OVERSIZE: f32 = 2.0;

/// Mascot quad edge length in world units.
const MASCOT_SIZE: f32 = 5.0;

/// Everything the scene needs from configuration.
#[derive(Debug, Clone)]
pub struct SceneSettings {
    pub variant: BlurVariant,
    pub static_image: PathBuf,
    pub animated_image: PathBuf,
    pub mascot_image: PathBuf,
    pub mascot_depth: f32,
}

struct StaticLayer {
    pipeline: LayerPipeline,
    mesh: LayerMesh,
    state: StaticBackdrop,
}

struct AnimatedLayer {
    pipeline: LayerPipeline,
    mesh: LayerMesh,
    state: AnimatedBackdrop,
}

struct MascotLayer {
    pipeline: LayerPipeline,
    mesh: LayerMesh,
    state: ParallaxLayer,
}

pub struct SceneComposer {
    camera: Camera,
    static_layer: StaticLayer,
    animated_layer: AnimatedLayer,
    mascot_layer: MascotLayer,
}

impl SceneComposer {
    /// Layer names and depths, back to front.
    pub const LAYER_STACK: [(&'static str, f32); 3] = [
        ("static-backdrop", STATIC_LAYER_Z),
        ("animated-backdrop", ANIMATED_LAYER_Z),
        ("mascot", MASCOT_LAYER_Z),
    ];

    /// Load all layer textures and build the three pipelines.
    ///
    /// Texture decoding happens here, once; an unreadable asset fails the
    /// whole mount and propagates to the caller.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        textures: &mut TextureCache,
        settings: &SceneSettings,
        target_format: wgpu::TextureFormat,
        width_px: u32,
        height_px: u32,
    ) -> Result<Self, TextureError> {
        let static_texture = textures.load(device, queue, &settings.static_image)?;
        let animated_texture = textures.load(device, queue, &settings.animated_image)?;
        let mascot_texture = textures.load(device, queue, &settings.mascot_image)?;

        let static_pipeline = LayerPipeline::new(device, target_format, LayerShader::Blur);
        let static_mesh = static_pipeline.create_mesh(device, static_texture);

        // Second, independent instance of the blur program for the animated
        // backdrop; only the shader source is shared.
        let animated_pipeline = LayerPipeline::new(device, target_format, LayerShader::Blur);
        let animated_mesh = animated_pipeline.create_mesh(device, animated_texture);

        let mascot_pipeline = LayerPipeline::new(device, target_format, LayerShader::Image);
        let mascot_mesh = mascot_pipeline.create_mesh(device, mascot_texture);

        Ok(Self {
            camera: Camera::new(width_px, height_px),
            static_layer: StaticLayer {
                pipeline: static_pipeline,
                mesh: static_mesh,
                state: StaticBackdrop::new(settings.variant),
            },
            animated_layer: AnimatedLayer {
                pipeline: animated_pipeline,
                mesh: animated_mesh,
                state: AnimatedBackdrop::new(settings.variant),
            },
            mascot_layer: MascotLayer {
                pipeline: mascot_pipeline,
                mesh: mascot_mesh,
                state: ParallaxLayer::new(settings.mascot_depth),
            },
        })
    }

    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        self.camera.resize(width_px, height_px);
    }

    /// Advance all per-layer state one frame.
    pub fn tick(&mut self, pointer: Pointer) {
        self.static_layer.state.tick(pointer);
        self.animated_layer.state.tick(pointer);
        self.mascot_layer.state.tick(pointer);
    }

    /// Draw the three layers back-to-front.
    pub fn render<'a>(&'a self, queue: &wgpu::Queue, pass: &mut wgpu::RenderPass<'a>) {
        let view_proj = self.camera.view_proj();
        let world = self.camera.world_viewport();
        let resolution = self.camera.resolution();

        let static_model = Mat4::from_translation(Vec3::new(0.0, 0.0, STATIC_LAYER_Z));
        let static_uniforms = LayerUniforms::new(
            view_proj * static_model,
            static_half_size(world),
            resolution,
            self.static_layer.state.blur(),
            STATIC_TAP_SCALE,
            1.0,
        );
        self.static_layer
            .pipeline
            .render(pass, queue, &self.static_layer.mesh, &static_uniforms);

        let animated_model = Mat4::from_translation(Vec3::new(0.0, 0.0, ANIMATED_LAYER_Z))
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.animated_layer.state.rotation_x(),
                self.animated_layer.state.rotation_y(),
                0.0,
            );
        let animated_uniforms = LayerUniforms::new(
            view_proj * animated_model,
            animated_half_size(world, self.animated_layer.mesh.texture().aspect_ratio()),
            resolution,
            self.animated_layer.state.blur(),
            ANIMATED_TAP_SCALE,
            1.0,
        );
        self.animated_layer
            .pipeline
            .render(pass, queue, &self.animated_layer.mesh, &animated_uniforms);

        let (mascot_x, mascot_y) = self.mascot_layer.state.position(world);
        let mascot_model = Mat4::from_translation(Vec3::new(mascot_x, mascot_y, MASCOT_LAYER_Z))
            * Mat4::from_rotation_y(self.mascot_layer.state.rotation_y());
        let mascot_uniforms = LayerUniforms::new(
            view_proj * mascot_model,
            [MASCOT_SIZE / 2.0, MASCOT_SIZE / 2.0],
            resolution,
            0.0,
            0.0,
            1.0,
        );
        self.mascot_layer
            .pipeline
            .render(pass, queue, &self.mascot_layer.mesh, &mascot_uniforms);
    }
}

/// Half extents of the static backdrop quad.
fn static_half_size(world: WorldViewport) -> [f32; 2] {
    [
        world.width * STATIC_OVERSIZE / 2.0,
        world.height * STATIC_OVERSIZE / 2.0,
    ]
}

/// Half extents of the animated backdrop quad; height follows the texture
/// aspect ratio.
fn animated_half_size(world: WorldViewport, texture_aspect: f32) -> [f32; 2] {
    let half_width = world.width * ANIMATED_OVERSIZE / 2.0;
    [half_width, half_width / texture_aspect]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_stack_is_back_to_front() {
        let stack = SceneComposer::LAYER_STACK;
        assert_eq!(stack.len(), 3);
        assert_eq!(stack[0], ("static-backdrop", -6.0));
        assert_eq!(stack[1], ("animated-backdrop", -3.0));
        assert_eq!(stack[2], ("mascot", -0.5));
        assert!(stack.windows(2).all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn static_quad_oversizes_the_viewport() {
        let world = WorldViewport::from_pixels(1200.0, 800.0);
        let [hw, hh] = static_half_size(world);
        assert!(hw * 2.0 > world.width);
        assert!(hh * 2.0 > world.height);
        assert!((hw * 2.0 - world.width * 2.5).abs() < 1e-4);
    }

    #[test]
    fn animated_quad_preserves_texture_aspect() {
        let world = WorldViewport::from_pixels(1200.0, 800.0);
        let [hw, hh] = animated_half_size(world, 2.0);
        assert!((hw / hh - 2.0).abs() < 1e-5);
        assert!((hw * 2.0 - world.width * 2.0).abs() < 1e-4);
    }
}

//! Scene layer pipelines
//!
//! One `LayerPipeline` per scene layer wraps a render pipeline compiled from
//! a shared WGSL source; every quad gets its own `LayerMesh` holding a
//! private uniform buffer and bind group. Shader source is shared, GPU
//! uniform state never is.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::shaders::builtin;
use crate::texture::LayerTexture;

/// Which fragment stage a layer pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerShader {
    /// Pointer-driven 9x9 box blur (background layers)
    Blur,
    /// Plain textured sample (foreground mascot)
    Image,
}

impl LayerShader {
    fn source(self) -> &'static str {
        match self {
            LayerShader::Blur => builtin::LAYER_BLUR,
            LayerShader::Image => builtin::LAYER_IMAGE,
        }
    }

    fn label(self) -> &'static str {
        match self {
            LayerShader::Blur => "Layer Blur",
            LayerShader::Image => "Layer Image",
        }
    }
}

/// Uniform block shared by both layer shaders.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct LayerUniforms {
    /// Combined camera and model transform
    pub mvp: [[f32; 4]; 4],
    /// Quad half extents in world units
    pub half_size: [f32; 2],
    /// Viewport size in pixels, rewritten every frame
    pub resolution: [f32; 2],
    /// Blur drive from the active distance policy
    pub mouse_distance: f32,
    /// Blur tap spacing for this shader instance
    pub tap_scale: f32,
    /// Layer opacity
    pub opacity: f32,
    pub _pad: f32,
}

impl LayerUniforms {
    pub fn new(
        mvp: Mat4,
        half_size: [f32; 2],
        resolution: [f32; 2],
        mouse_distance: f32,
        tap_scale: f32,
        opacity: f32,
    ) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            half_size,
            resolution,
            mouse_distance,
            tap_scale,
            opacity,
            _pad: 0.0,
        }
    }
}

/// Pipeline for one scene layer.
pub struct LayerPipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
}

impl LayerPipeline {
    pub fn new(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        shader: LayerShader,
    ) -> Self {
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{} Shader", shader.label())),
            source: wgpu::ShaderSource::Wgsl(shader.source().into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!("{} Bind Group Layout", shader.label())),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{} Pipeline Layout", shader.label())),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{} Pipeline", shader.label())),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_group_layout,
        }
    }

    /// Build a quad for this pipeline with its own uniform container.
    pub fn create_mesh(&self, device: &wgpu::Device, texture: Arc<LayerTexture>) -> LayerMesh {
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Layer Uniform Buffer"),
            size: std::mem::size_of::<LayerUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Layer Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });

        LayerMesh {
            uniform_buffer,
            bind_group,
            texture,
        }
    }

    /// Draw one mesh with the uniforms for this frame.
    pub fn render<'a>(
        &'a self,
        pass: &mut wgpu::RenderPass<'a>,
        queue: &wgpu::Queue,
        mesh: &'a LayerMesh,
        uniforms: &LayerUniforms,
    ) {
        queue.write_buffer(&mesh.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &mesh.bind_group, &[]);
        pass.draw(0..4, 0..1);
    }
}

/// A textured quad with privately-owned GPU uniform state.
pub struct LayerMesh {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    texture: Arc<LayerTexture>,
}

impl LayerMesh {
    pub fn texture(&self) -> &LayerTexture {
        &self.texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_block_is_tightly_packed() {
        // Must match the WGSL struct layout: mat4 + 2*vec2 + 4 floats.
        assert_eq!(std::mem::size_of::<LayerUniforms>(), 96);
        assert_eq!(std::mem::size_of::<LayerUniforms>() % 16, 0);
    }

    #[test]
    fn shader_sources_declare_the_same_uniform_block() {
        for src in [builtin::LAYER_BLUR, builtin::LAYER_IMAGE] {
            assert!(src.contains("mouse_distance: f32"));
            assert!(src.contains("resolution: vec2<f32>"));
            assert!(src.contains("tap_scale: f32"));
        }
    }

    #[test]
    fn blur_shader_uses_a_nine_by_nine_grid() {
        assert!(builtin::LAYER_BLUR.contains("let taps = 4i;"));
    }
}

//! Panel renderer - instanced rounded rectangles
//!
//! Draws the page chrome in a single instanced draw call: panel body, header
//! band, traffic-light buttons (radius = half size makes them circles) and
//! the call-to-action pill. Edges are antialiased in the fragment shader.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::layout::PageLayout;
use crate::shaders::builtin;

/// Per-instance data for a rounded rectangle
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RectInstance {
    /// Screen position (top-left)
    pub pos: [f32; 2],
    /// Size in pixels
    pub size: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
    /// Corner radius in pixels
    pub radius: f32,
    pub _pad: [f32; 3],
}

/// Global uniforms for the panel shader
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct Globals {
    screen_size: [f32; 2],
    _pad: [f32; 2],
}

fn rgba(r: u8, g: u8, b: u8, a: f32) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a,
    ]
}

/// Panel renderer using instanced quads
pub struct PanelRenderer {
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instances: Vec<RectInstance>,
}

impl PanelRenderer {
    const MAX_INSTANCES: usize = 64;

    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Panel Shader"),
            source: wgpu::ShaderSource::Wgsl(builtin::PANEL.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Panel Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Panel Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Instance buffer layout
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // pos
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // size
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // color
                wgpu::VertexAttribute {
                    offset: 16,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // radius
                wgpu::VertexAttribute {
                    offset: 32,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Panel Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[instance_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let globals = Globals {
            screen_size: [1.0, 1.0],
            _pad: [0.0, 0.0],
        };

        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Panel Globals Buffer"),
            contents: bytemuck::cast_slice(&[globals]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Panel Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let instance_capacity = Self::MAX_INSTANCES;
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Panel Instance Buffer"),
            size: (instance_capacity * std::mem::size_of::<RectInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            globals_buffer,
            bind_group,
            instance_buffer,
            instance_capacity,
            instances: Vec::with_capacity(Self::MAX_INSTANCES),
        }
    }

    /// Clear pending instances
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Add a rounded rectangle
    pub fn push_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: [f32; 4], radius: f32) {
        if self.instances.len() < self.instance_capacity {
            self.instances.push(RectInstance {
                pos: [x, y],
                size: [width, height],
                color,
                radius,
                _pad: [0.0; 3],
            });
        }
    }

    /// Queue the whole page chrome for one frame.
    pub fn push_page(&mut self, layout: &PageLayout) {
        let body = rgba(24, 24, 34, 0.88);
        let header = rgba(38, 38, 50, 0.94);
        let telegram_blue = rgba(42, 171, 238, 1.0);
        let button_colors = [
            rgba(255, 95, 87, 1.0),  // close
            rgba(254, 188, 46, 1.0), // minimize
            rgba(40, 200, 64, 1.0),  // maximize
        ];

        let p = layout.panel;
        self.push_rect(p.x, p.y, p.width, p.height, body, 12.0);

        let h = layout.header;
        self.push_rect(h.x, h.y, h.width, h.height, header, 12.0);
        // Square off the header's lower corners where it meets the content.
        self.push_rect(h.x, h.y + h.height / 2.0, h.width, h.height / 2.0, header, 0.0);

        for (button, color) in layout.window_buttons.iter().zip(button_colors) {
            self.push_rect(
                button.x,
                button.y,
                button.width,
                button.height,
                color,
                button.width / 2.0,
            );
        }

        let cta = layout.cta;
        self.push_rect(cta.x, cta.y, cta.width, cta.height, telegram_blue, cta.height / 2.0);
    }

    /// Update screen size uniform
    pub fn update_screen_size(&self, queue: &wgpu::Queue, width: f32, height: f32) {
        let globals = Globals {
            screen_size: [width, height],
            _pad: [0.0, 0.0],
        };
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::cast_slice(&[globals]));
    }

    /// Upload instances and render
    pub fn render<'a>(&'a self, queue: &wgpu::Queue, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.instances.is_empty() {
            return;
        }

        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&self.instances),
        );

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.instance_buffer.slice(..));

        // Draw 4 vertices per instance (triangle strip quad)
        render_pass.draw(0..4, 0..self.instances.len() as u32);
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_layout_matches_vertex_attributes() {
        assert_eq!(std::mem::size_of::<RectInstance>(), 48);
        assert_eq!(std::mem::size_of::<RectInstance>() % 16, 0);
    }

    #[test]
    fn rgba_maps_bytes_to_unit_floats() {
        assert_eq!(rgba(255, 0, 0, 1.0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgba(0, 255, 0, 0.5)[1], 1.0);
    }
}

//! Application shell
//!
//! Winit event loop driving the page: one window, one wgpu surface, and a
//! continuous redraw cycle under `ControlFlow::Poll`. Every frame ticks the
//! scene with the current pointer sample and then composites scene, panel
//! chrome and text in a single render pass.

use std::sync::Arc;

use kotvpn_config::Config;
use kotvpn_renderer::{
    PageLayout, PageText, PanelRenderer, SceneComposer, SceneSettings, TextureCache, page_layout,
};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::input::PointerTracker;
use crate::page::{self, PageContent};

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: SceneComposer,
    panel: PanelRenderer,
    text: PageText,
    layout: PageLayout,
}

pub struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    config: Config,
    content: PageContent,
    pointer: PointerTracker,
}

impl App {
    pub fn new(config: Config) -> Self {
        let content = PageContent::new(config.page.title.clone());
        let pointer = PointerTracker::new(
            config.window.width as f32,
            config.window.height as f32,
        );
        Self {
            window: None,
            gpu: None,
            config,
            content,
            pointer,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.pointer.resize(width as f32, height as f32);
        if let Some(gpu) = &mut self.gpu {
            gpu.config.width = width.max(1);
            gpu.config.height = height.max(1);
            gpu.surface.configure(&gpu.device, &gpu.config);
            gpu.scene.resize(gpu.config.width, gpu.config.height);
            gpu.layout = page_layout(gpu.config.width as f32, gpu.config.height as f32);
            gpu.text.set_layout(&gpu.layout);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        gpu.scene.tick(self.pointer.sample());

        let frame = match gpu.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure and pick the frame up on the next redraw.
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Surface out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };
        let view = frame.texture.create_view(&Default::default());

        gpu.panel.clear();
        gpu.panel.push_page(&gpu.layout);
        gpu.panel
            .update_screen_size(&gpu.queue, gpu.config.width as f32, gpu.config.height as f32);

        if let Err(e) = gpu.text.prepare(
            &gpu.device,
            &gpu.queue,
            gpu.config.width,
            gpu.config.height,
            &gpu.layout,
        ) {
            log::warn!("Text prepare failed: {:?}", e);
        }

        let mut encoder = gpu.device.create_command_encoder(&Default::default());
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Page Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            gpu.scene.render(&gpu.queue, &mut pass);
            gpu.panel.render(&gpu.queue, &mut pass);
            if let Err(e) = gpu.text.render(&mut pass) {
                log::warn!("Text render failed: {:?}", e);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        gpu.text.trim();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("Kot VPN")
                        .with_inner_size(winit::dpi::LogicalSize::new(
                            self.config.window.width,
                            self.config.window.height,
                        )),
                )
                .expect("Failed to create window"),
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let (adapter, device, queue) = pollster::block_on(async {
            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    compatible_surface: Some(&surface),
                    ..Default::default()
                })
                .await
                .expect("Failed to find suitable GPU adapter");
            let (device, queue) = adapter
                .request_device(&wgpu::DeviceDescriptor::default())
                .await
                .expect("Failed to create device");
            (adapter, device, queue)
        });
        log::debug!("GPU adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let caps = surface.get_capabilities(&adapter);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: caps.formats[0],
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let settings = SceneSettings {
            variant: self.config.scene.variant,
            static_image: self.config.scene.static_image.clone(),
            animated_image: self.config.scene.animated_image.clone(),
            mascot_image: self.config.scene.mascot_image.clone(),
            mascot_depth: self.config.scene.mascot_depth,
        };
        let mut textures = TextureCache::new();
        let scene = match SceneComposer::new(
            &device,
            &queue,
            &mut textures,
            &settings,
            config.format,
            config.width,
            config.height,
        ) {
            Ok(scene) => scene,
            Err(e) => {
                log::error!("Failed to build scene: {}", e);
                event_loop.exit();
                return;
            }
        };

        let panel = PanelRenderer::new(&device, config.format);
        let mut text = PageText::new(&device, &queue, config.format, &self.content.strings());
        let layout = page_layout(config.width as f32, config.height as f32);
        text.set_layout(&layout);

        self.pointer
            .resize(config.width as f32, config.height as f32);

        self.window = Some(window);
        self.gpu = Some(GpuState {
            surface,
            device,
            queue,
            config,
            scene,
            panel,
            text,
            layout,
        });

        log::info!("Window ready, scene mounted");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                use winit::keyboard::{Key, NamedKey};
                if event.state.is_pressed()
                    && event.logical_key == Key::Named(NamedKey::Escape)
                {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.move_to(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.pointer.position_px();
                if let Some(gpu) = &self.gpu
                    && gpu.layout.hits_cta(x, y)
                {
                    page::open_bot_link();
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}

//! Page text rendering via glyphon (cosmic-text + wgpu)
//!
//! Four independent buffers: panel title, caption, call-to-action label and
//! footer. Blocks are center-aligned within the rectangles the page layout
//! hands out; shaping only reruns when the layout changes.

use glyphon::cosmic_text::Align;
use glyphon::{
    Attrs, Buffer, Cache, Color, Family, FontSystem, Metrics, PrepareError, RenderError,
    Resolution, Shaping, SwashCache, TextArea, TextAtlas, TextBounds, TextRenderer, Viewport,
    Weight,
};
use wgpu::MultisampleState;

use crate::panel::layout::{
    CAPTION_FONT_SIZE, CAPTION_LINE_HEIGHT, CTA_FONT_SIZE, CTA_LINE_HEIGHT, FOOTER_FONT_SIZE,
    FOOTER_LINE_HEIGHT, PageLayout, RectPx, TITLE_FONT_SIZE, TITLE_LINE_HEIGHT,
};

/// The four strings the page renders.
#[derive(Debug, Clone, Copy)]
pub struct PageStrings<'a> {
    pub title: &'a str,
    pub caption: &'a str,
    pub cta_label: &'a str,
    pub footer: &'a str,
}

pub struct PageText {
    font_system: FontSystem,
    swash_cache: SwashCache,
    viewport: Viewport,
    atlas: TextAtlas,
    renderer: TextRenderer,
    title: Buffer,
    caption: Buffer,
    cta_label: Buffer,
    footer: Buffer,
}

impl PageText {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target_format: wgpu::TextureFormat,
        strings: &PageStrings<'_>,
    ) -> Self {
        let mut font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let viewport = Viewport::new(device, &Cache::new(device));
        let mut atlas = TextAtlas::new(device, queue, &Cache::new(device), target_format);
        let renderer = TextRenderer::new(&mut atlas, device, MultisampleState::default(), None);

        let regular = Attrs::new().family(Family::SansSerif);
        let bold = Attrs::new().family(Family::SansSerif).weight(Weight::BOLD);

        let title = make_buffer(
            &mut font_system,
            Metrics::new(TITLE_FONT_SIZE, TITLE_LINE_HEIGHT),
            strings.title,
            &regular,
        );
        let caption = make_buffer(
            &mut font_system,
            Metrics::new(CAPTION_FONT_SIZE, CAPTION_LINE_HEIGHT),
            strings.caption,
            &bold,
        );
        let cta_label = make_buffer(
            &mut font_system,
            Metrics::new(CTA_FONT_SIZE, CTA_LINE_HEIGHT),
            strings.cta_label,
            &bold,
        );
        let footer = make_buffer(
            &mut font_system,
            Metrics::new(FOOTER_FONT_SIZE, FOOTER_LINE_HEIGHT),
            strings.footer,
            &regular,
        );

        Self {
            font_system,
            swash_cache,
            viewport,
            atlas,
            renderer,
            title,
            caption,
            cta_label,
            footer,
        }
    }

    /// Resize each text block to its layout rectangle and reshape.
    pub fn set_layout(&mut self, layout: &PageLayout) {
        for (buffer, rect) in [
            (&mut self.title, layout.title),
            (&mut self.caption, layout.caption),
            (&mut self.cta_label, layout.cta_label),
            (&mut self.footer, layout.footer),
        ] {
            buffer.set_size(&mut self.font_system, Some(rect.width), None);
            for line in buffer.lines.iter_mut() {
                line.set_align(Some(Align::Center));
            }
            buffer.shape_until_scroll(&mut self.font_system, false);
        }
    }

    /// Shape and upload glyphs for this frame.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        layout: &PageLayout,
    ) -> Result<(), PrepareError> {
        self.viewport.update(queue, Resolution { width, height });

        let areas = [
            text_area(&self.title, layout.title, Color::rgb(190, 190, 200)),
            text_area(&self.caption, layout.caption, Color::rgb(255, 255, 255)),
            text_area(&self.cta_label, layout.cta_label, Color::rgb(255, 255, 255)),
            text_area(&self.footer, layout.footer, Color::rgb(225, 225, 230)),
        ];

        self.renderer.prepare(
            device,
            queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            areas,
            &mut self.swash_cache,
        )
    }

    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) -> Result<(), RenderError> {
        self.renderer.render(&self.atlas, &self.viewport, pass)
    }

    /// Release unused atlas space after presenting.
    pub fn trim(&mut self) {
        self.atlas.trim();
    }
}

fn make_buffer(
    font_system: &mut FontSystem,
    metrics: Metrics,
    text: &str,
    attrs: &Attrs<'_>,
) -> Buffer {
    let mut buffer = Buffer::new(font_system, metrics);
    buffer.set_text(font_system, text, attrs, Shaping::Advanced);
    buffer
}

fn text_area<'a>(buffer: &'a Buffer, rect: RectPx, color: Color) -> TextArea<'a> {
    TextArea {
        buffer,
        left: rect.x,
        top: rect.y,
        scale: 1.0,
        bounds: TextBounds {
            left: rect.x as i32,
            top: rect.y as i32,
            right: (rect.x + rect.width).ceil() as i32,
            bottom: (rect.y + rect.height).ceil() as i32,
        },
        default_color: color,
        custom_glyphs: &[],
    }
}

//! Layer image loading and GPU upload
//!
//! Decodes image assets (PNG, JPEG) into RGBA and uploads them as sampled
//! textures. Loads are cached by source path for the life of the process, so
//! remounting a layer never decodes twice.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use wgpu::util::DeviceExt;

/// Errors raised while turning an asset path into a GPU texture.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to load image {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decoded RGBA image data, not yet uploaded.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl LoadedImage {
    /// Decode an image from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();

        let img = image::open(path).map_err(|source| TextureError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Width over height of the source image.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// GPU texture for one scene layer.
pub struct LayerTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub width: u32,
    pub height: u32,
}

impl LayerTexture {
    /// Upload decoded image data as a sampled texture.
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, image: &LoadedImage) -> Self {
        let (width, height) = image.dimensions();

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some("Layer Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &image.data,
        );

        let view = texture.create_view(&Default::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Layer Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
            width,
            height,
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Process-lifetime texture cache keyed by source path.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<PathBuf, Arc<LayerTexture>>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load (or fetch from cache) the texture backing `path`.
    pub fn load(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: impl AsRef<Path>,
    ) -> Result<Arc<LayerTexture>, TextureError> {
        let path = path.as_ref();

        if let Some(texture) = self.entries.get(path) {
            return Ok(texture.clone());
        }

        let image = LoadedImage::from_path(path)?;
        let texture = Arc::new(LayerTexture::new(device, queue, &image));
        log::info!(
            "Loaded layer texture {:?} ({}x{})",
            path,
            texture.width,
            texture.height
        );

        self.entries.insert(path.to_path_buf(), texture.clone());
        Ok(texture)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_load_error() {
        let err = LoadedImage::from_path("does/not/exist.png").unwrap_err();
        let TextureError::Load { path, .. } = err;
        assert_eq!(path, PathBuf::from("does/not/exist.png"));
    }

    #[test]
    fn decodes_a_png_from_disk() {
        // Smallest valid 1x1 opaque PNG.
        let bytes: &[u8] = &[
            0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48,
            0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00,
            0x00, 0x90, 0x77, 0x53, 0xde, 0x00, 0x00, 0x00, 0x0c, 0x49, 0x44, 0x41, 0x54, 0x78,
            0x9c, 0x63, 0xf8, 0xcf, 0xc0, 0x00, 0x00, 0x03, 0x01, 0x01, 0x00, 0xc9, 0xfe, 0x92,
            0xef, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
        ];
        let dir = std::env::temp_dir().join("kotvpn-texture-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pixel.png");
        std::fs::write(&path, bytes).unwrap();

        let image = LoadedImage::from_path(&path).unwrap();
        assert_eq!(image.dimensions(), (1, 1));
        assert_eq!(image.aspect_ratio(), 1.0);
    }
}

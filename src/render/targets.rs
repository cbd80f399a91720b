use super::helpers;
use crate::constants::{BLOOM_DOWNSCALE, HDR_FORMAT};

/// Offscreen color targets for the render pipeline.
///
/// Contains a full-resolution HDR scene color and two reduced-resolution bloom
/// ping-pong textures. The textures are kept alive alongside their views.
///
/// - `hdr_*` hold the point sprites in Rgba16Float for post-processing.
/// - `bloom_*` are buffers used for bright-pass and blur.
pub(crate) struct RenderTargets {
    pub(crate) _hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) _bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) _bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
    pub(crate) bloom_size: [u32; 2],
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (hdr_tex, hdr_view) =
            helpers::create_color_texture(device, "hdr_tex", width, height, HDR_FORMAT, usage);
        let bw = (width.max(1) / BLOOM_DOWNSCALE).max(1);
        let bh = (height.max(1) / BLOOM_DOWNSCALE).max(1);
        let (bloom_a, bloom_a_view) =
            helpers::create_color_texture(device, "bloom_a", bw, bh, HDR_FORMAT, usage);
        let (bloom_b, bloom_b_view) =
            helpers::create_color_texture(device, "bloom_b", bw, bh, HDR_FORMAT, usage);
        Self {
            _hdr_tex: hdr_tex,
            hdr_view,
            _bloom_a: bloom_a,
            bloom_a_view,
            _bloom_b: bloom_b,
            bloom_b_view,
            bloom_size: [bw, bh],
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}

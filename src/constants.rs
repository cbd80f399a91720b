// Browser host constants.

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const HINT_ID: &str = "hint";
pub const DATA_ATTR_PREFIX: &str = "data-";

// Render targets
pub const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub const BLOOM_DOWNSCALE: u32 = 2;

// Per-shape uniform slots are bound with dynamic offsets; WebGPU's default
// minUniformBufferOffsetAlignment is 256.
pub const SHAPE_UNIFORM_STRIDE: u64 = 256;

// Keyboard shape-count step
pub use crate::core::SHAPE_COUNT_STEP;

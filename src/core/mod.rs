pub use shapefield_core::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");

pub mod animator;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod field;
pub mod geometry;
pub mod hover;
pub mod pointer;
pub mod scene;
pub mod shape;

pub use animator::*;
pub use camera::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use field::*;
pub use hover::*;
pub use pointer::*;
pub use scene::*;
pub use shape::*;

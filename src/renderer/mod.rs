//! WebGPU rendering module
//!
//! The scene is rebuilt every frame as a plain triangle list; only
//! `pipeline` touches the GPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_frame;
pub use vertex::Vertex;

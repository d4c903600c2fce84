//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position and straight-alpha color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Fixed colors that are not part of an entity
pub mod colors {
    /// #0a0a1f
    pub const BACKGROUND: [f32; 4] = [10.0 / 255.0, 10.0 / 255.0, 31.0 / 255.0, 1.0];
    /// Faint cyan background grid
    pub const GRID: [f32; 4] = [5.0 / 255.0, 217.0 / 255.0, 232.0 / 255.0, 0.1];
    pub const EYES: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLATFORM_EDGE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const COIN_CORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Alpha of the soft halo drawn behind glowing shapes
    pub const GLOW_ALPHA: f32 = 0.25;
}

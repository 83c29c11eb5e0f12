//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::Arena;

/// Simple 2D vertex with position and color
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

    pub fn at(pos: Vec2, color: [f32; 4]) -> Self {
        Self::new(pos.x, pos.y, color)
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

    /// Map from arena pixels (y down) to normalized device coordinates (y up)
    pub fn to_ndc(self, arena: &Arena) -> Self {
        let w = arena.width.max(1.0);
        let h = arena.height.max(1.0);
        Self::new(
            self.position[0] / w * 2.0 - 1.0,
            1.0 - self.position[1] / h * 2.0,
            self.color,
        )
    }
}

/// Colors for game elements
pub mod colors {
    pub const PLAYER: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const AIM_LINE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const PROJECTILE: [f32; 4] = [0.0, 0.4, 0.0, 1.0];
    pub const ENEMY: [f32; 4] = [0.55, 0.1, 0.6, 1.0];
    /// Enemy tint once it has taken damage
    pub const ENEMY_HURT: [f32; 4] = [0.9, 0.35, 0.2, 1.0];
}

//! Vertex type shared by every render backend

use bytemuck::{Pod, Zeroable};

/// Mesh vertex: model-space position plus RGBA color
///
/// `#[repr(C)]` and `Pod` so a backend can hand a vertex slice straight to a
/// GPU buffer as bytes.
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

    /// Bytes per vertex in an uploaded buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// View a vertex list as the raw bytes a backend uploads
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Default entity colors
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BRICK: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

//! Rendering seam
//!
//! The simulation never talks to a graphics API. A [`RenderBackend`] owns
//! uploaded geometry and hands back opaque [`MeshHandle`]s; each frame the
//! game submits one [`DrawCommand`] per live entity.

pub mod headless;
pub mod shapes;
pub mod vertex;

pub use headless::HeadlessRenderer;
pub use vertex::{Vertex, colors};

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::platform::Viewport;
use crate::sim::Entity;

/// Opaque handle to geometry owned by a render backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeshHandle(pub u32);

/// Everything a backend needs to draw one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub mesh: MeshHandle,
    /// Model transform (translation to the entity's position)
    pub transform: Mat4,
    pub color: [f32; 4],
    pub triangle_count: u32,
}

impl DrawCommand {
    /// Build the draw for `entity`, or `None` if it has no uploaded mesh
    pub fn for_entity(entity: &Entity, triangle_count: u32) -> Option<Self> {
        let mesh = entity.mesh?;
        Some(Self {
            mesh,
            transform: Mat4::from_translation(Vec3::new(entity.position.x, entity.position.y, 0.0)),
            color: entity.color,
            triangle_count,
        })
    }

    /// Translation part of the transform
    pub fn translation(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }
}

/// A graphics backend driven once per frame by the game
pub trait RenderBackend {
    /// Upload geometry; the handle stays valid until [`RenderBackend::release_mesh`]
    fn create_mesh(&mut self, vertices: &[Vertex]) -> MeshHandle;

    /// Triangle count of an uploaded mesh
    fn triangle_count(&self, mesh: MeshHandle) -> u32;

    /// Window size changed
    fn resize(&mut self, viewport: Viewport);

    /// Whether `present` waits for vertical sync
    fn set_vsync(&mut self, enabled: bool);

    fn begin_frame(&mut self, clear_color: [f32; 4]);

    fn draw(&mut self, command: &DrawCommand);

    /// Finish the frame (swap buffers / wait for vsync)
    fn present(&mut self);

    /// Free geometry; each handle is released exactly once
    fn release_mesh(&mut self, mesh: MeshHandle);
}

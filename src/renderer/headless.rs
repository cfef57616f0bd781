//! Headless render backend
//!
//! Keeps uploaded meshes in memory and records what each frame drew. Used by
//! the native binary (no window) and by tests.

use std::collections::BTreeMap;

use super::{DrawCommand, MeshHandle, RenderBackend, Vertex, shapes};
use crate::platform::Viewport;

#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    meshes: BTreeMap<MeshHandle, Vec<Vertex>>,
    next_mesh: u32,
    /// Draws submitted since the last `begin_frame`
    pub current: Vec<DrawCommand>,
    /// Draws of the last presented frame
    pub last_frame: Vec<DrawCommand>,
    pub frames_presented: u64,
    pub clear_color: [f32; 4],
    pub viewport: Option<Viewport>,
    /// Last value passed to `set_vsync`
    pub vsync: bool,
    /// Bytes currently held by uploaded meshes
    pub uploaded_bytes: usize,
    /// Every handle passed to `release_mesh`, in call order
    pub released: Vec<MeshHandle>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Meshes uploaded and not yet released
    pub fn live_meshes(&self) -> usize {
        self.meshes.len()
    }

    pub fn mesh(&self, handle: MeshHandle) -> Option<&[Vertex]> {
        self.meshes.get(&handle).map(Vec::as_slice)
    }
}

impl RenderBackend for HeadlessRenderer {
    fn create_mesh(&mut self, vertices: &[Vertex]) -> MeshHandle {
        let handle = MeshHandle(self.next_mesh);
        self.next_mesh += 1;
        self.uploaded_bytes += Vertex::as_bytes(vertices).len();
        self.meshes.insert(handle, vertices.to_vec());
        handle
    }

    fn triangle_count(&self, mesh: MeshHandle) -> u32 {
        self.meshes
            .get(&mesh)
            .map(|v| shapes::triangle_count(v))
            .unwrap_or(0)
    }

    fn resize(&mut self, viewport: Viewport) {
        log::debug!("Headless viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = Some(viewport);
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.vsync = enabled;
    }

    fn begin_frame(&mut self, clear_color: [f32; 4]) {
        self.clear_color = clear_color;
        self.current.clear();
    }

    fn draw(&mut self, command: &DrawCommand) {
        if !self.meshes.contains_key(&command.mesh) {
            log::warn!("Draw with unknown mesh {:?}", command.mesh);
            return;
        }
        self.current.push(*command);
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.current);
        self.frames_presented += 1;
    }

    fn release_mesh(&mut self, mesh: MeshHandle) {
        match self.meshes.remove(&mesh) {
            Some(vertices) => self.uploaded_bytes -= Vertex::as_bytes(&vertices).len(),
            None => log::warn!("Release of unknown mesh {:?}", mesh),
        }
        self.released.push(mesh);
    }
}

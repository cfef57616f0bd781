//! Shape generation for entity geometry
//!
//! Meshes are built around the origin; the entity's position is applied
//! per draw as a translation.

use glam::Vec2;

use super::vertex::Vertex;

/// Two triangles covering a `dimensions`-sized box centered on the origin
pub fn quad(dimensions: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let h = dimensions / 2.0;

    let pos_pos = Vertex::new(h.x, h.y, color);
    let pos_neg = Vertex::new(h.x, -h.y, color);
    let neg_neg = Vertex::new(-h.x, -h.y, color);
    let neg_pos = Vertex::new(-h.x, h.y, color);

    vec![pos_pos, pos_neg, neg_neg, pos_pos, neg_pos, neg_neg]
}

/// Number of whole triangles in a vertex list
#[inline]
pub fn triangle_count(vertices: &[Vertex]) -> u32 {
    (vertices.len() / 3) as u32
}

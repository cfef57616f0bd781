//! Axis-aligned collision detection and response
//!
//! One entity is treated as static for the duration of a test (a brick, or
//! the paddle when the ball reaches it) and the other as dynamic. Overlap is
//! decided on the dynamic entity's *predicted* box, but the side it came from
//! is decided on its *current* box, so the rebound lands before the move.

use super::state::Entity;

/// Edges of an axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Aabb {
    pub fn around(center: glam::Vec2, dimensions: glam::Vec2) -> Self {
        let half = dimensions / 2.0;
        Self {
            left: center.x - half.x,
            right: center.x + half.x,
            bottom: center.y - half.y,
            top: center.y + half.y,
        }
    }

    /// Box at the entity's current position
    pub fn current(entity: &Entity) -> Self {
        Self::around(entity.position, entity.dimensions)
    }

    /// Box after one more frame of the entity's motion
    pub fn predicted(entity: &Entity) -> Self {
        Self::around(entity.predicted_position(), entity.dimensions)
    }

    /// Either horizontal edge of `self` lies within the span of `other` (inclusive)
    pub fn edge_within_x(&self, other: &Aabb) -> bool {
        let inside = |x: f32| x >= other.left && x <= other.right;
        inside(self.right) || inside(self.left)
    }

    /// Either vertical edge of `self` lies within the span of `other` (inclusive)
    pub fn edge_within_y(&self, other: &Aabb) -> bool {
        let inside = |y: f32| y >= other.bottom && y <= other.top;
        inside(self.top) || inside(self.bottom)
    }
}

/// Result of a collision check
///
/// The two sides are independent; a corner approach reports both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Dynamic entity came from above or below; its Y direction reverses
    pub vertical: bool,
    /// Dynamic entity came from the left or right; its X direction reverses
    pub horizontal: bool,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }

    pub fn hit(&self) -> bool {
        self.vertical || self.horizontal
    }

    /// How many sides were struck (0, 1 or 2)
    pub fn hit_count(&self) -> usize {
        usize::from(self.vertical) + usize::from(self.horizontal)
    }
}

/// Decide whether `dynamic` strikes `obstacle` on its next move, without mutating either
pub fn detect_collision(obstacle: &Entity, dynamic: &Entity) -> CollisionResult {
    let next = Aabb::predicted(dynamic);
    let target = Aabb::current(obstacle);

    if !(next.edge_within_x(&target) && next.edge_within_y(&target)) {
        return CollisionResult::miss();
    }

    let now = Aabb::current(dynamic);
    CollisionResult {
        vertical: now.bottom >= target.top || now.top <= target.bottom,
        horizontal: now.right <= target.left || now.left >= target.right,
    }
}

/// Reverse the dynamic entity's direction on every struck side
pub fn reflect(dynamic: &mut Entity, result: CollisionResult) {
    if result.vertical {
        dynamic.velocity_scalar.y = -dynamic.velocity_scalar.y;
    }
    if result.horizontal {
        dynamic.velocity_scalar.x = -dynamic.velocity_scalar.x;
    }
}

/// Test `dynamic` against `obstacle`, reflect it, and run `on_hit` once per struck side
///
/// `on_hit` receives the static entity; it is the only way the test changes
/// anything besides the dynamic entity's velocity scalar.
pub fn test_collision<F>(obstacle: &mut Entity, dynamic: &mut Entity, mut on_hit: F) -> CollisionResult
where
    F: FnMut(&mut Entity),
{
    let result = detect_collision(obstacle, dynamic);
    reflect(dynamic, result);
    for _ in 0..result.hit_count() {
        on_hit(obstacle);
    }
    result
}

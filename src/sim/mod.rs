//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call is one frame, no wall-clock time
//! - Stable iteration order (grid order for bricks)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionResult, detect_collision, reflect, test_collision};
pub use motion::{Axis, Blocked, advance};
pub use state::{Entity, EntityKind, EntityRef, GameEvent, GameState};
pub use tick::{Frame, tick};

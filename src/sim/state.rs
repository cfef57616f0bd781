//! Game state and core simulation types
//!
//! The paddle, the ball and the brick grid live together in [`GameState`],
//! which is passed explicitly into every simulation step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::brick_position;
use crate::consts::*;
use crate::renderer::MeshHandle;
use crate::settings::Settings;

/// What an entity is; decides its boundary and collision policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Paddle,
    Ball,
    Brick,
}

impl EntityKind {
    /// Whether hitting a playfield bound reflects the entity instead of clamping it
    pub fn bounces_off_walls(&self) -> bool {
        matches!(self, EntityKind::Ball)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Paddle => "paddle",
            EntityKind::Ball => "ball",
            EntityKind::Brick => "brick",
        }
    }
}

/// One simulated object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Center, in normalized device coordinates
    pub position: Vec2,
    /// Width and height
    pub dimensions: Vec2,
    /// Displacement per frame at scalar 1
    pub base_velocity: Vec2,
    /// Per-axis direction multiplier applied to `base_velocity`
    pub velocity_scalar: Vec2,
    pub kind: EntityKind,
    /// Soft-delete marker; dead entities are never tested or drawn again
    pub live: bool,
    pub color: [f32; 4],
    /// Geometry uploaded by the render backend
    #[serde(skip)]
    pub mesh: Option<MeshHandle>,
}

impl Entity {
    pub fn new(kind: EntityKind, position: Vec2, dimensions: Vec2, base_velocity: Vec2) -> Self {
        Self {
            position,
            dimensions,
            base_velocity,
            velocity_scalar: Vec2::ZERO,
            kind,
            live: true,
            color: [1.0, 1.0, 1.0, 1.0],
            mesh: None,
        }
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Displacement this entity would apply on its next frame
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.velocity_scalar * self.base_velocity
    }

    /// Where the center would be after one more frame of unobstructed motion
    #[inline]
    pub fn predicted_position(&self) -> Vec2 {
        self.position + self.displacement()
    }
}

/// Stable reference to an entity inside a [`GameState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRef {
    Paddle,
    Ball,
    /// Index into the brick grid (row-major, top row first)
    Brick(usize),
}

/// Gameplay events produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball struck a live brick, which is now dead
    BrickDestroyed { index: usize },
    /// Ball rebounded off the paddle
    PaddleHit,
    /// Ball reflected off a playfield bound
    WallBounce { horizontal: bool, vertical: bool },
    /// The last live brick was destroyed this frame
    BoardCleared,
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub paddle: Entity,
    pub ball: Entity,
    /// Fixed 7x4 grid, never resized
    pub bricks: Vec<Entity>,
    /// Frames simulated so far
    pub frame: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl GameState {
    /// Build the paddle, the ball and the full brick grid
    pub fn new(settings: &Settings) -> Self {
        let paddle = Entity::new(
            EntityKind::Paddle,
            PADDLE_START,
            PADDLE_DIMENSIONS,
            Vec2::new(settings.paddle_speed, 0.0),
        )
        .with_color(settings.paddle_color);

        let mut ball = Entity::new(
            EntityKind::Ball,
            BALL_START,
            BALL_DIMENSIONS,
            Vec2::from_array(settings.ball_velocity),
        )
        .with_color(settings.ball_color);
        ball.velocity_scalar = Vec2::ONE;

        Self {
            paddle,
            ball,
            bricks: build_bricks(settings.brick_color),
            frame: 0,
        }
    }

    pub fn entity(&self, which: EntityRef) -> Option<&Entity> {
        match which {
            EntityRef::Paddle => Some(&self.paddle),
            EntityRef::Ball => Some(&self.ball),
            EntityRef::Brick(i) => self.bricks.get(i),
        }
    }

    /// Every entity in teardown order: bricks in grid order, then paddle, then ball
    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.bricks
            .iter_mut()
            .chain(std::iter::once(&mut self.paddle))
            .chain(std::iter::once(&mut self.ball))
    }

    /// Number of bricks still standing
    pub fn live_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.live).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.live_bricks() == 0
    }
}

/// Lay out the brick grid, top row first, left to right
fn build_bricks(color: [f32; 4]) -> Vec<Entity> {
    let mut bricks = Vec::with_capacity(BRICK_COLUMNS * BRICK_ROWS);
    for j in 0..BRICK_ROWS {
        for i in 0..BRICK_COLUMNS {
            let brick = Entity::new(
                EntityKind::Brick,
                brick_position(i, j),
                BRICK_DIMENSIONS,
                Vec2::ZERO,
            )
            .with_color(color);
            bricks.push(brick);
        }
    }
    bricks
}

//! Brick Breaker - A fixed-layout paddle, ball and brick arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (motion, collisions, entity state)
//! - `renderer`: Render backend seam, geometry and a headless backend
//! - `platform`: Window events, viewport mapping and keyboard input
//! - `settings`: JSON-backed runtime configuration
//! - `app`: The game session that drives all of the above

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::Game;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
///
/// All lengths are in normalized device coordinates; velocities are
/// displacement per frame.
pub mod consts {
    use glam::Vec2;

    /// Playfield bounds (both axes)
    pub const PLAYFIELD_MIN: f32 = -1.0;
    pub const PLAYFIELD_MAX: f32 = 1.0;

    /// Paddle defaults
    pub const PADDLE_DIMENSIONS: Vec2 = Vec2::new(0.3, 0.05);
    pub const PADDLE_START: Vec2 = Vec2::new(0.0, -0.75);
    pub const PADDLE_SPEED: f32 = 0.015;

    /// Ball defaults
    pub const BALL_DIMENSIONS: Vec2 = Vec2::new(0.025, 0.025);
    pub const BALL_START: Vec2 = Vec2::new(0.0, -0.55);
    pub const BALL_VELOCITY: Vec2 = Vec2::new(0.01, 0.01);

    /// Brick grid layout
    pub const BRICK_DIMENSIONS: Vec2 = Vec2::new(0.2, 0.1);
    pub const BRICK_COLUMNS: usize = 7;
    pub const BRICK_ROWS: usize = 4;
    /// Center of the top-left brick
    pub const BRICK_ORIGIN: Vec2 = Vec2::new(-0.75, 0.8);
    /// Column step (x grows right) and row step (y shrinks downward)
    pub const BRICK_SPACING: Vec2 = Vec2::new(0.25, 0.15);

    /// Default window size in pixels
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 800;
}

/// Center of the brick at grid column `i`, row `j`
#[inline]
pub fn brick_position(i: usize, j: usize) -> Vec2 {
    Vec2::new(
        consts::BRICK_ORIGIN.x + i as f32 * consts::BRICK_SPACING.x,
        consts::BRICK_ORIGIN.y - j as f32 * consts::BRICK_SPACING.y,
    )
}

/// Lowest and highest center coordinate an entity of `extent` can occupy on one axis
#[inline]
pub fn axis_bounds(extent: f32) -> (f32, f32) {
    let half = extent / 2.0;
    (consts::PLAYFIELD_MIN + half, consts::PLAYFIELD_MAX - half)
}

//! Per-frame position integration
//!
//! One call to [`advance`] is one rendered frame; there is no time step.
//! Each axis is integrated on its own, and what happens at a playfield bound
//! depends on the entity kind: balls reflect, everything else stops.

use super::state::Entity;
use crate::axis_bounds;

/// A playfield axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// Whether `candidate` is an acceptable center coordinate on this axis.
    ///
    /// X accepts the bound itself, Y does not.
    #[inline]
    pub fn accepts(self, candidate: f32, min: f32, max: f32) -> bool {
        match self {
            Axis::X => candidate >= min && candidate <= max,
            Axis::Y => candidate > min && candidate < max,
        }
    }
}

/// Axes on which the last [`advance`] refused to move the entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blocked {
    pub x: bool,
    pub y: bool,
}

impl Blocked {
    pub fn any(&self) -> bool {
        self.x || self.y
    }

    fn set(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.x = true,
            Axis::Y => self.y = true,
        }
    }
}

/// Move `entity` by one frame of its effective velocity
pub fn advance(entity: &mut Entity) -> Blocked {
    let mut blocked = Blocked::default();

    for axis in Axis::ALL {
        let a = axis.index();
        let candidate = entity.position[a] + entity.velocity_scalar[a] * entity.base_velocity[a];
        let (min, max) = axis_bounds(entity.dimensions[a]);

        if axis.accepts(candidate, min, max) {
            entity.position[a] = candidate;
        } else {
            if entity.kind.bounces_off_walls() {
                entity.velocity_scalar[a] = -entity.velocity_scalar[a];
            }
            blocked.set(axis);
        }
    }

    blocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::EntityKind;
    use glam::Vec2;
    use proptest::prelude::*;

    fn paddle_at(x: f32) -> Entity {
        Entity::new(
            EntityKind::Paddle,
            Vec2::new(x, PADDLE_START.y),
            PADDLE_DIMENSIONS,
            Vec2::new(PADDLE_SPEED, 0.0),
        )
    }

    fn ball_at(pos: Vec2, scalar: Vec2) -> Entity {
        let mut ball = Entity::new(EntityKind::Ball, pos, BALL_DIMENSIONS, BALL_VELOCITY);
        ball.velocity_scalar = scalar;
        ball
    }

    #[test]
    fn test_free_motion() {
        let mut ball = ball_at(Vec2::ZERO, Vec2::new(1.0, -1.0));
        let blocked = advance(&mut ball);

        assert!(!blocked.any());
        assert!((ball.position.x - 0.01).abs() < 1e-6);
        assert!((ball.position.y + 0.01).abs() < 1e-6);
        assert_eq!(ball.velocity_scalar, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_ball_bounces_at_x_bound() {
        let (_, max_x) = axis_bounds(BALL_DIMENSIONS.x);
        let mut ball = ball_at(Vec2::new(max_x, 0.0), Vec2::new(1.0, 1.0));

        let blocked = advance(&mut ball);

        assert!(blocked.x);
        assert_eq!(ball.velocity_scalar.x, -1.0);
        assert_eq!(ball.position.x, max_x);
        // Y still moves freely
        assert!(!blocked.y);
        assert!(ball.position.y > 0.0);
    }

    #[test]
    fn test_ball_bounces_at_y_bound() {
        let (min_y, _) = axis_bounds(BALL_DIMENSIONS.y);
        let start = Vec2::new(0.0, min_y + 0.005);
        let mut ball = ball_at(start, Vec2::new(1.0, -1.0));

        let blocked = advance(&mut ball);

        assert!(blocked.y);
        assert_eq!(ball.velocity_scalar.y, 1.0);
        assert_eq!(ball.position.y, start.y);
    }

    #[test]
    fn test_x_bound_is_inclusive() {
        // A candidate landing exactly on the X bound is accepted
        let mut brick = Entity::new(EntityKind::Brick, Vec2::ZERO, Vec2::new(0.5, 0.5), Vec2::new(0.75, 0.0));
        brick.velocity_scalar = Vec2::new(1.0, 0.0);
        let blocked = advance(&mut brick);
        assert!(!blocked.x);
        assert_eq!(brick.position.x, 0.75);
    }

    #[test]
    fn test_y_bound_is_exclusive() {
        // The same displacement on Y is refused
        let mut brick = Entity::new(EntityKind::Brick, Vec2::ZERO, Vec2::new(0.5, 0.5), Vec2::new(0.0, 0.75));
        brick.velocity_scalar = Vec2::new(0.0, 1.0);
        let blocked = advance(&mut brick);
        assert!(blocked.y);
        assert_eq!(brick.position.y, 0.0);
        assert_eq!(brick.velocity_scalar.y, 1.0);
    }

    #[test]
    fn test_paddle_stops_at_wall() {
        let (_, max_x) = axis_bounds(PADDLE_DIMENSIONS.x);
        let mut paddle = paddle_at(max_x);
        paddle.velocity_scalar.x = 1.0;

        let blocked = advance(&mut paddle);

        assert!(blocked.x);
        assert_eq!(paddle.position.x, max_x);
        assert_eq!(paddle.velocity_scalar.x, 1.0);
    }

    #[test]
    fn test_stationary_paddle_never_blocked() {
        let mut paddle = paddle_at(0.0);
        let blocked = advance(&mut paddle);
        assert!(!blocked.any());
        assert_eq!(paddle.position, Vec2::new(0.0, PADDLE_START.y));
    }

    proptest! {
        #[test]
        fn prop_paddle_clamps_without_bounce(
            offset in 0.0f32..0.05,
            scalar in 0.0f32..4.0,
            leftward in any::<bool>(),
        ) {
            let (min_x, max_x) = axis_bounds(PADDLE_DIMENSIONS.x);
            let (x, s) = if leftward {
                (min_x + offset, -scalar)
            } else {
                (max_x - offset, scalar)
            };
            let mut paddle = paddle_at(x);
            paddle.velocity_scalar.x = s;

            let candidate = paddle.position.x + paddle.velocity_scalar.x * paddle.base_velocity.x;
            prop_assume!(!Axis::X.accepts(candidate, min_x, max_x));

            advance(&mut paddle);

            prop_assert_eq!(paddle.position.x, x);
            prop_assert_eq!(paddle.velocity_scalar.x, s);
        }

        #[test]
        fn prop_paddle_stays_in_bounds(
            start in -0.85f32..0.85,
            moves in proptest::collection::vec(-1i8..=1, 0..200),
        ) {
            let (min_x, max_x) = axis_bounds(PADDLE_DIMENSIONS.x);
            let mut paddle = paddle_at(start.clamp(min_x, max_x));
            for m in moves {
                paddle.velocity_scalar.x = f32::from(m);
                advance(&mut paddle);
                prop_assert!(paddle.position.x >= min_x && paddle.position.x <= max_x);
            }
        }
    }
}

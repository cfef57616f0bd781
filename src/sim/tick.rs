//! Frame-locked simulation tick
//!
//! Core game loop step. Collisions are resolved against this frame's
//! positions before anything moves, so a rebound takes effect on the same
//! frame the ball would otherwise pass into its target.

use super::collision::test_collision;
use super::motion::advance;
use super::state::{EntityRef, GameEvent, GameState};

/// Output of one tick
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Entities to draw this frame, in draw order
    pub draws: Vec<EntityRef>,
    /// Gameplay events, in the order they happened
    pub events: Vec<GameEvent>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) -> Frame {
    let mut frame = Frame::default();
    let had_bricks = !state.is_cleared();

    // Bricks first; dead ones are neither drawn nor tested
    let ball = &mut state.ball;
    for (index, brick) in state.bricks.iter_mut().enumerate() {
        if !brick.live {
            continue;
        }
        frame.draws.push(EntityRef::Brick(index));

        let result = test_collision(brick, ball, |b| b.live = false);
        if result.hit() {
            log::debug!(
                "Brick {} destroyed at frame {} ({} side(s))",
                index,
                state.frame,
                result.hit_count()
            );
            frame.events.push(GameEvent::BrickDestroyed { index });
        }
    }

    // Paddle only deflects; it never changes liveness
    let result = test_collision(&mut state.paddle, &mut state.ball, |_| {});
    if result.hit() {
        log::debug!("Paddle hit at frame {}", state.frame);
        frame.events.push(GameEvent::PaddleHit);
    }

    advance(&mut state.paddle);
    let blocked = advance(&mut state.ball);
    if blocked.any() {
        log::trace!("Wall bounce (x: {}, y: {})", blocked.x, blocked.y);
        frame.events.push(GameEvent::WallBounce {
            horizontal: blocked.x,
            vertical: blocked.y,
        });
    }

    frame.draws.push(EntityRef::Paddle);
    frame.draws.push(EntityRef::Ball);

    if had_bricks && state.is_cleared() {
        log::info!("Board cleared at frame {}", state.frame);
        frame.events.push(GameEvent::BoardCleared);
    }

    state.frame += 1;
    frame
}

//! Keyboard input
//!
//! Arrow keys nudge the paddle's X velocity scalar up or down instead of
//! assigning it, so holding both arrows cancels to a standstill.

use serde::{Deserialize, Serialize};

use super::WindowState;
use crate::sim::Entity;

/// Keys the game reacts to; everything else arrives as `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Escape,
    Q,
    Other(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    Press,
    Release,
    Repeat,
}

/// Maps key events onto the paddle and the window close flag
#[derive(Debug, Clone, Copy, Default)]
pub struct InputController;

impl InputController {
    pub fn new() -> Self {
        Self
    }

    /// X velocity-scalar contribution of a held key
    fn steer(key: Key) -> Option<f32> {
        match key {
            Key::Left => Some(-1.0),
            Key::Right => Some(1.0),
            _ => None,
        }
    }

    fn is_quit(key: Key) -> bool {
        matches!(key, Key::Escape | Key::Q)
    }

    pub fn handle_key(&self, key: Key, action: KeyAction, paddle: &mut Entity, window: &mut WindowState) {
        match action {
            KeyAction::Press if Self::is_quit(key) => {
                log::info!("Quit requested ({:?})", key);
                window.request_close();
            }
            KeyAction::Press => {
                if let Some(delta) = Self::steer(key) {
                    paddle.velocity_scalar.x += delta;
                }
            }
            KeyAction::Release => {
                if let Some(delta) = Self::steer(key) {
                    paddle.velocity_scalar.x -= delta;
                }
            }
            KeyAction::Repeat => {}
        }

        if let Key::Other(code) = key {
            log::trace!("Ignoring key {} ({:?})", code, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    fn setup() -> (InputController, GameState, WindowState) {
        (InputController::new(), GameState::default(), WindowState::default())
    }

    #[test]
    fn test_press_and_release() {
        let (input, mut state, mut window) = setup();

        input.handle_key(Key::Left, KeyAction::Press, &mut state.paddle, &mut window);
        assert_eq!(state.paddle.velocity_scalar.x, -1.0);

        input.handle_key(Key::Left, KeyAction::Release, &mut state.paddle, &mut window);
        assert_eq!(state.paddle.velocity_scalar.x, 0.0);

        input.handle_key(Key::Right, KeyAction::Press, &mut state.paddle, &mut window);
        assert_eq!(state.paddle.velocity_scalar.x, 1.0);
        assert!(!window.close_requested());
    }

    #[test]
    fn test_both_keys_cancel() {
        let (input, mut state, mut window) = setup();

        input.handle_key(Key::Left, KeyAction::Press, &mut state.paddle, &mut window);
        input.handle_key(Key::Right, KeyAction::Press, &mut state.paddle, &mut window);
        assert_eq!(state.paddle.velocity_scalar.x, 0.0);

        input.handle_key(Key::Left, KeyAction::Release, &mut state.paddle, &mut window);
        assert_eq!(state.paddle.velocity_scalar.x, 1.0);
    }

    #[test]
    fn test_repeat_ignored() {
        let (input, mut state, mut window) = setup();
        input.handle_key(Key::Right, KeyAction::Press, &mut state.paddle, &mut window);
        input.handle_key(Key::Right, KeyAction::Repeat, &mut state.paddle, &mut window);
        input.handle_key(Key::Right, KeyAction::Repeat, &mut state.paddle, &mut window);
        assert_eq!(state.paddle.velocity_scalar.x, 1.0);
    }

    #[test]
    fn test_quit_keys() {
        let (input, mut state, mut window) = setup();
        input.handle_key(Key::Q, KeyAction::Release, &mut state.paddle, &mut window);
        assert!(!window.close_requested());

        input.handle_key(Key::Escape, KeyAction::Press, &mut state.paddle, &mut window);
        assert!(window.close_requested());

        let mut window = WindowState::default();
        input.handle_key(Key::Q, KeyAction::Press, &mut state.paddle, &mut window);
        assert!(window.close_requested());
        assert_eq!(state.paddle.velocity_scalar.x, 0.0);
    }

    #[test]
    fn test_other_keys_ignored() {
        let (input, mut state, mut window) = setup();
        input.handle_key(Key::Other(32), KeyAction::Press, &mut state.paddle, &mut window);
        assert_eq!(state.paddle.velocity_scalar.x, 0.0);
        assert!(!window.close_requested());
    }
}

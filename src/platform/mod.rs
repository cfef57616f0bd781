//! Platform abstraction layer
//!
//! Handles the window side of the game:
//! - Window events (resize, keys, close)
//! - Viewport mapping between normalized and pixel coordinates
//! - Keyboard input

pub mod input;

pub use input::{InputController, Key, KeyAction};

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_MAX, PLAYFIELD_MIN, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Events delivered by the window before each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WindowEvent {
    Resized { width: u32, height: u32 },
    Key { key: Key, action: KeyAction },
    CloseRequested,
}

/// Window size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Normalized device coordinates to pixels (origin top-left, Y down)
    pub fn ndc_to_pixels(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc.y) * 0.5 * self.height as f32,
        )
    }
}

/// What the game knows about its window
#[derive(Debug, Clone, Default)]
pub struct WindowState {
    pub viewport: Viewport,
    pub title: String,
    close_requested: bool,
}

impl WindowState {
    pub fn new(viewport: Viewport, title: impl Into<String>) -> Self {
        Self {
            viewport,
            title: title.into(),
            close_requested: false,
        }
    }

    /// Pixel rectangle covered by the playfield: top-left and bottom-right corners
    pub fn playfield_pixels(&self) -> (Vec2, Vec2) {
        (
            self.viewport.ndc_to_pixels(Vec2::new(PLAYFIELD_MIN, PLAYFIELD_MAX)),
            self.viewport.ndc_to_pixels(Vec2::new(PLAYFIELD_MAX, PLAYFIELD_MIN)),
        )
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

/// Source of window events, polled once per frame
pub trait EventSource {
    fn poll_events(&mut self) -> Vec<WindowEvent>;
}

/// Replays a fixed, frame-indexed event script
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    script: BTreeMap<u64, Vec<WindowEvent>>,
    polls: u64,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` on the `poll`-th call to `poll_events` (0-based)
    pub fn at(mut self, poll: u64, event: WindowEvent) -> Self {
        self.script.entry(poll).or_default().push(event);
        self
    }

    pub fn key(self, poll: u64, key: Key, action: KeyAction) -> Self {
        self.at(poll, WindowEvent::Key { key, action })
    }

    /// Sweep the paddle right, then left, then quit after `frames` polls
    pub fn demo(frames: u64) -> Self {
        let leg = (frames / 4).max(1);
        Self::new()
            .key(0, Key::Right, KeyAction::Press)
            .key(leg, Key::Right, KeyAction::Release)
            .key(leg, Key::Left, KeyAction::Press)
            .key(3 * leg, Key::Left, KeyAction::Release)
            .key(frames, Key::Escape, KeyAction::Press)
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl EventSource for ScriptedEvents {
    fn poll_events(&mut self) -> Vec<WindowEvent> {
        let events = self.script.remove(&self.polls).unwrap_or_default();
        self.polls += 1;
        events
    }
}

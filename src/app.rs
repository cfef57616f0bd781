//! Game session
//!
//! Owns the simulation state, the render backend and the window state, and
//! runs the frame loop: poll events, tick, draw, present.

use crate::platform::{EventSource, InputController, Viewport, WindowEvent, WindowState};
use crate::renderer::{DrawCommand, RenderBackend, shapes};
use crate::settings::Settings;
use crate::sim::{Frame, GameState, tick};

/// Game instance holding all state
pub struct Game<R: RenderBackend> {
    pub state: GameState,
    renderer: R,
    input: InputController,
    window: WindowState,
    clear_color: [f32; 4],
}

impl<R: RenderBackend> Game<R> {
    /// Build the entities and upload one quad mesh per entity
    pub fn new(settings: &Settings, mut renderer: R) -> Self {
        let mut state = GameState::new(settings);
        for entity in state.entities_mut() {
            let vertices = shapes::quad(entity.dimensions, entity.color);
            let mesh = renderer.create_mesh(&vertices);
            log::trace!("Uploaded {} mesh {:?}", entity.kind.as_str(), mesh);
            entity.mesh = Some(mesh);
        }

        let viewport = Viewport::new(settings.window_width, settings.window_height);
        renderer.resize(viewport);
        renderer.set_vsync(settings.vsync);

        log::info!(
            "{}: {} bricks, {}x{} window, vsync {}",
            settings.title,
            state.bricks.len(),
            viewport.width,
            viewport.height,
            if settings.vsync { "on" } else { "off" }
        );

        Self {
            state,
            renderer,
            input: InputController::new(),
            window: WindowState::new(viewport, settings.title.as_str()),
            clear_color: settings.clear_color,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn window(&self) -> &WindowState {
        &self.window
    }

    pub fn handle_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Resized { width, height } => {
                let viewport = Viewport::new(width, height);
                self.window.viewport = viewport;
                let (top_left, bottom_right) = self.window.playfield_pixels();
                log::debug!(
                    "Resized to {}x{} (aspect {:.2}), playfield {:?} to {:?}",
                    width,
                    height,
                    viewport.aspect(),
                    top_left,
                    bottom_right
                );
                self.renderer.resize(viewport);
            }
            WindowEvent::Key { key, action } => {
                self.input
                    .handle_key(key, action, &mut self.state.paddle, &mut self.window);
            }
            WindowEvent::CloseRequested => {
                log::info!("Window close requested");
                self.window.request_close();
            }
        }
    }

    /// Simulate and draw one frame
    pub fn frame(&mut self) -> Frame {
        let frame = tick(&mut self.state);

        self.renderer.begin_frame(self.clear_color);
        for which in &frame.draws {
            let Some(entity) = self.state.entity(*which) else {
                continue;
            };
            let Some(mesh) = entity.mesh else {
                continue;
            };
            let triangles = self.renderer.triangle_count(mesh);
            if let Some(command) = DrawCommand::for_entity(entity, triangles) {
                self.renderer.draw(&command);
            }
        }
        self.renderer.present();

        frame
    }

    /// Run frames until the window asks to close; returns the number of frames run
    pub fn run<E: EventSource>(&mut self, events: &mut E) -> u64 {
        let mut frames = 0;
        loop {
            for event in events.poll_events() {
                self.handle_event(event);
            }
            if self.window.close_requested() {
                break;
            }
            self.frame();
            frames += 1;
        }
        log::info!(
            "Session ended after {} frames, {} bricks left",
            frames,
            self.state.live_bricks()
        );
        frames
    }

    /// Release every entity's mesh once, in teardown order, and hand back the backend
    pub fn shutdown(mut self) -> R {
        for entity in self.state.entities_mut() {
            if let Some(mesh) = entity.mesh.take() {
                self.renderer.release_mesh(mesh);
            }
        }
        self.renderer
    }
}

//! Brick Breaker entry point
//!
//! Native builds have no window backend yet, so the binary runs a scripted
//! headless session and reports how it went.

use brick_breaker::platform::ScriptedEvents;
use brick_breaker::renderer::HeadlessRenderer;
use brick_breaker::{Game, Settings};

fn main() {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let settings = Settings::load();
    log::info!("Window title: {}", settings.title);
    let mut game = Game::new(&settings, HeadlessRenderer::new());
    let mut events = ScriptedEvents::demo(settings.demo_frames);

    let frames = game.run(&mut events);
    let bricks_left = game.state.live_bricks();
    let renderer = game.shutdown();

    println!(
        "Ran {} frames: {} of {} bricks destroyed, {} meshes released",
        frames,
        brick_breaker::consts::BRICK_COLUMNS * brick_breaker::consts::BRICK_ROWS - bricks_left,
        brick_breaker::consts::BRICK_COLUMNS * brick_breaker::consts::BRICK_ROWS,
        renderer.released.len()
    );
}

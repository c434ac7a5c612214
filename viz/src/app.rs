//! The frame loop: sample input, mutate the simulation, draw.

use log::info;
use macroquad::window::next_frame;
use sim::World;

use crate::input::InputManager;
use crate::rendering::Renderer;

/// Runs the visualizer until the user quits. One frame handles all pending
/// input edges before the renderer reads the world, so rendering never
/// observes a half-applied gesture.
pub async fn run() {
    let mut world = World::new();
    let mut input = InputManager::new();
    let renderer = Renderer::new();

    loop {
        let frame = input.update();

        if frame.quit {
            info!("Quit requested");
            break;
        }

        for command in frame.commands {
            world.apply(command);
        }

        renderer.render(&world);

        next_frame().await;
    }
}

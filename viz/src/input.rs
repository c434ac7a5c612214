//! Per-frame input sampling and translation into simulation commands.

use macroquad::prelude::*;
use sim::{screen_to_ndc, Command, Point};

/// Everything the user asked for during one frame.
#[derive(Debug, Default)]
pub struct FrameInput {
    pub quit: bool,
    pub commands: Vec<Command>,
}

/// Samples device state once per frame and emits commands on edges: button
/// press and release, motion while the button is held, and the discrete
/// key commands.
pub struct InputManager {
    // Previous frame cursor position, for motion detection
    last_point: Point,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            last_point: Point::default(),
        }
    }

    pub fn update(&mut self) -> FrameInput {
        let mut frame = FrameInput {
            quit: is_key_pressed(KeyCode::Escape),
            ..Default::default()
        };

        if is_key_pressed(KeyCode::C) {
            frame.commands.push(Command::SpawnClient);
        }

        let (px, py) = mouse_position();
        let point = screen_to_ndc(px, py, screen_width(), screen_height());

        if is_mouse_button_pressed(MouseButton::Left) {
            frame.commands.push(Command::DragStart(point));
        } else if is_mouse_button_released(MouseButton::Left) {
            frame.commands.push(Command::DragEnd(point));
        } else if is_mouse_button_down(MouseButton::Left) && point != self.last_point {
            frame.commands.push(Command::DragMove(point));
        }

        self.last_point = point;
        frame
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

pub mod client;
pub mod drag;
pub mod server;
pub mod world;

pub use client::Client;
pub use drag::DragState;
pub use server::{LoadTier, Server};
pub use world::{Command, World};

/// Load added to a server by one completed drag gesture.
pub const LOAD_INCREMENT: f32 = 0.1;
/// Capacity of every server created by this program.
pub const INITIAL_MAX_CAPACITY: f32 = 1.0;
/// Bar height a server starts with, before its first load bump.
pub const INITIAL_HEIGHT: f32 = 0.1;
/// The fleet never grows beyond this many servers.
pub const MAX_SERVERS: usize = 5;
/// Horizontal spacing between neighbouring server bars.
pub const SERVER_SPACING: f32 = 0.2;
/// Placement of the first server; the fleet grows rightward from here.
pub const FIRST_SERVER_X: f32 = -0.5;
/// Load fraction up to which a server counts as lightly loaded.
pub const LOW_LOAD_THRESHOLD: f32 = 0.33;
/// Load fraction up to which a server counts as moderately loaded.
pub const MEDIUM_LOAD_THRESHOLD: f32 = 0.66;
/// Left edge of the band clients spawn into.
pub const CLIENT_MIN_X: f32 = -0.75;
/// Right edge of the band clients spawn into.
pub const CLIENT_MAX_X: f32 = 0.75;
/// Vertical position of every client.
pub const CLIENT_Y: f32 = -0.5;
/// Nominal load carried by a client; display value only.
pub const CLIENT_LOAD: f32 = 0.1;

/// A point in normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Positive direction is to the right.
    pub x: f32,
    /// Positive direction is up.
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Maps a pixel position to normalized device coordinates, flipping y so
/// that up is positive.
pub fn screen_to_ndc(px: f32, py: f32, width: f32, height: f32) -> Point {
    Point {
        x: (px / width) * 2.0 - 1.0,
        y: -((py / height) * 2.0 - 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_point_creation() {
        let point = Point::new(0.25, -0.75);
        assert_eq!(point.x, 0.25);
        assert_eq!(point.y, -0.75);
    }

    #[test]
    fn test_screen_to_ndc_corners() {
        let top_left = screen_to_ndc(0.0, 0.0, 800.0, 600.0);
        assert_eq!(top_left, Point::new(-1.0, 1.0));

        let bottom_right = screen_to_ndc(800.0, 600.0, 800.0, 600.0);
        assert_eq!(bottom_right, Point::new(1.0, -1.0));
    }

    #[test]
    fn test_screen_to_ndc_center() {
        let center = screen_to_ndc(400.0, 300.0, 800.0, 600.0);
        assert_approx_eq!(center.x, 0.0, 1e-6);
        assert_approx_eq!(center.y, 0.0, 1e-6);
    }

    #[test]
    fn test_screen_to_ndc_flips_y() {
        let above_center = screen_to_ndc(400.0, 150.0, 800.0, 600.0);
        assert!(above_center.y > 0.0);

        let below_center = screen_to_ndc(400.0, 450.0, 800.0, 600.0);
        assert!(below_center.y < 0.0);
    }
}

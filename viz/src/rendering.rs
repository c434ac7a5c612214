//! Scene and HUD drawing.

use macroquad::prelude::*;
use sim::{LoadTier, Point, World};

/// Edge length of the unit box a server bar is drawn from; its vertical
/// edge is scaled by the server's height.
const SERVER_BOX_SIZE: f32 = 0.1;
/// Radius of a client marker.
const CLIENT_RADIUS: f32 = 0.05;
/// Length of the arrowhead flanks.
const ARROW_HEAD_LENGTH: f32 = 0.05;
/// Angle between each arrowhead flank and the shaft.
const ARROW_HEAD_ANGLE: f32 = std::f32::consts::PI / 6.0;

const BACKGROUND: Color = Color::new(0.1, 0.1, 0.1, 1.0);
const SERVER_LOW: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const SERVER_MEDIUM: Color = Color::new(1.0, 0.65, 0.0, 1.0);
const SERVER_HIGH: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const CLIENT_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
const ARROW_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Minimal drawing surface the scene is described through. Keeps the scene
/// logic independent of the graphics backend.
pub trait Surface {
    /// Axis-aligned filled box centered at `center`.
    fn draw_box(&mut self, center: Vec3, size: Vec3, color: Color);
    /// Sphere marker centered at `center`.
    fn draw_marker(&mut self, center: Vec3, radius: f32, color: Color);
    /// Line segment in the z = 0 plane.
    fn draw_line(&mut self, from: Point, to: Point, color: Color);
    /// Filled triangle in the z = 0 plane.
    fn draw_triangle(&mut self, a: Point, b: Point, c: Point, color: Color);
}

/// Surface backed by the live macroquad frame.
pub struct ScreenSurface;

impl Surface for ScreenSurface {
    fn draw_box(&mut self, center: Vec3, size: Vec3, color: Color) {
        draw_cube(center, size, None, color);
    }

    fn draw_marker(&mut self, center: Vec3, radius: f32, color: Color) {
        draw_sphere(center, radius, None, color);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        draw_line_3d(vec3(from.x, from.y, 0.0), vec3(to.x, to.y, 0.0), color);
    }

    fn draw_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) {
        draw_triangle(vec2(a.x, a.y), vec2(b.x, b.y), vec2(c.x, c.y), color);
    }
}

/// Draws the simulation onto a surface: one scaled bar per server, one
/// marker per client, and the assignment arrow while a drag is active.
pub fn draw_scene(surface: &mut impl Surface, world: &World) {
    for server in &world.servers {
        let size = vec3(
            SERVER_BOX_SIZE,
            SERVER_BOX_SIZE * server.height,
            SERVER_BOX_SIZE,
        );
        surface.draw_box(vec3(server.x, 0.0, 0.0), size, tier_color(server.tier()));
    }

    for client in &world.clients {
        surface.draw_marker(vec3(client.x, client.y, 0.0), CLIENT_RADIUS, CLIENT_COLOR);
    }

    if world.drag.active() {
        draw_arrow(surface, world.drag.start(), world.drag.end());
    }
}

fn tier_color(tier: LoadTier) -> Color {
    match tier {
        LoadTier::Low => SERVER_LOW,
        LoadTier::Medium => SERVER_MEDIUM,
        LoadTier::High => SERVER_HIGH,
    }
}

fn draw_arrow(surface: &mut impl Surface, start: Point, end: Point) {
    surface.draw_line(start, end, ARROW_COLOR);

    let [left, right] = arrow_head_flanks(start, end);
    surface.draw_triangle(end, left, right, ARROW_COLOR);
}

/// The two base corners of the arrowhead triangle at `end`, each one flank
/// length back from the tip at a fixed angle off the shaft.
fn arrow_head_flanks(start: Point, end: Point) -> [Point; 2] {
    let angle = (end.y - start.y).atan2(end.x - start.x);

    let flank = |offset: f32| {
        Point::new(
            end.x - ARROW_HEAD_LENGTH * (angle + offset).cos(),
            end.y - ARROW_HEAD_LENGTH * (angle + offset).sin(),
        )
    };

    [flank(ARROW_HEAD_ANGLE), flank(-ARROW_HEAD_ANGLE)]
}

/// Owns the camera and draws one frame: the 3D scene through the live
/// surface, then the screen-space HUD.
pub struct Renderer {
    camera: Camera3D,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            camera: Camera3D {
                position: vec3(0.0, 0.0, 3.0),
                target: vec3(0.0, 0.0, 0.0),
                up: vec3(0.0, 1.0, 0.0),
                ..Default::default()
            },
        }
    }

    pub fn render(&self, world: &World) {
        clear_background(BACKGROUND);

        set_camera(&self.camera);
        draw_scene(&mut ScreenSurface, world);

        set_default_camera();
        self.draw_hud(world);
    }

    fn draw_hud(&self, world: &World) {
        let summary = format!(
            "{} servers  {} clients",
            world.servers.len(),
            world.clients.len()
        );
        draw_text(&summary, 10.0, 20.0, 20.0, WHITE);

        draw_text(
            "c: spawn client   drag: assign load   esc: quit",
            10.0,
            40.0,
            16.0,
            GRAY,
        );
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

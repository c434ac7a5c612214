//! Press-move-release gesture state for the load-assignment arrow.

use crate::Point;

/// Tracks an in-progress drag. Idle until a press, back to idle on release;
/// the last endpoints stick around for inspection until the next press.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    active: bool,
    start: Point,
    end: Point,
}

impl DragState {
    /// Begins a drag at `point`. Both endpoints start there, so the first
    /// frame of a fresh drag never shows a stale arrow.
    pub fn press(&mut self, point: Point) {
        self.active = true;
        self.start = point;
        self.end = point;
    }

    /// Updates the endpoint of an active drag; ignored when idle.
    pub fn motion(&mut self, point: Point) {
        if self.active {
            self.end = point;
        }
    }

    /// Ends an active drag and returns the release point. A release with no
    /// prior press is a no-op and returns None.
    pub fn release(&mut self, point: Point) -> Option<Point> {
        if !self.active {
            return None;
        }

        self.active = false;
        self.end = point;
        Some(point)
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }
}

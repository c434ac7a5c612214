use crate::{INITIAL_HEIGHT, INITIAL_MAX_CAPACITY, LOW_LOAD_THRESHOLD, MEDIUM_LOAD_THRESHOLD};

/// Visual classification of a server's current load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTier {
    Low,
    Medium,
    High,
}

/// A simulated compute node, drawn as a bar whose height and color track
/// its load.
#[derive(Debug, Clone, Copy)]
pub struct Server {
    /// Normalized utilization in [0, 1].
    pub load: f32,
    /// Bar height; `load * max_capacity` after every load change.
    pub height: f32,
    pub max_capacity: f32,
    /// Fixed horizontal placement, assigned at creation.
    pub x: f32,
}

impl Server {
    pub fn new(x: f32) -> Self {
        Server {
            load: 0.0,
            height: INITIAL_HEIGHT,
            max_capacity: INITIAL_MAX_CAPACITY,
            x,
        }
    }

    /// Adds `amount` to the load, clamping at 1.0, and recomputes the bar
    /// height. Returns true if the server is saturated afterwards.
    pub fn apply_load(&mut self, amount: f32) -> bool {
        self.load = (self.load + amount).min(1.0);
        self.height = self.load * self.max_capacity;

        self.height >= self.max_capacity
    }

    pub fn tier(&self) -> LoadTier {
        if self.load <= LOW_LOAD_THRESHOLD {
            LoadTier::Low
        } else if self.load <= MEDIUM_LOAD_THRESHOLD {
            LoadTier::Medium
        } else {
            LoadTier::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_server_creation() {
        let server = Server::new(-0.5);
        assert_eq!(server.load, 0.0);
        assert_eq!(server.height, INITIAL_HEIGHT);
        assert_eq!(server.max_capacity, INITIAL_MAX_CAPACITY);
        assert_eq!(server.x, -0.5);
    }

    #[test]
    fn test_apply_load_recomputes_height() {
        let mut server = Server::new(0.0);
        server.apply_load(0.4);

        assert_approx_eq!(server.load, 0.4, 1e-6);
        assert_approx_eq!(server.height, server.load * server.max_capacity, 1e-6);
    }

    #[test]
    fn test_apply_load_clamps_at_one() {
        let mut server = Server::new(0.0);

        for _ in 0..25 {
            server.apply_load(0.1);
            assert!(server.load >= 0.0);
            assert!(server.load <= 1.0);
            assert_approx_eq!(server.height, server.load * server.max_capacity, 1e-6);
        }

        assert_eq!(server.load, 1.0);
    }

    #[test]
    fn test_apply_load_reports_saturation() {
        let mut server = Server::new(0.0);
        assert!(!server.apply_load(0.5));
        assert!(server.apply_load(0.6));
        // Still saturated on further bumps
        assert!(server.apply_load(0.1));
    }

    #[test]
    fn test_tier_thresholds() {
        let mut server = Server::new(0.0);
        assert_eq!(server.tier(), LoadTier::Low);

        server.load = LOW_LOAD_THRESHOLD;
        assert_eq!(server.tier(), LoadTier::Low);

        server.load = 0.5;
        assert_eq!(server.tier(), LoadTier::Medium);

        server.load = MEDIUM_LOAD_THRESHOLD;
        assert_eq!(server.tier(), LoadTier::Medium);

        server.load = 0.67;
        assert_eq!(server.tier(), LoadTier::High);

        server.load = 1.0;
        assert_eq!(server.tier(), LoadTier::High);
    }
}

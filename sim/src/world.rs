use log::{debug, info};
use rand::Rng;

use crate::{
    Client, DragState, Point, Server, CLIENT_MAX_X, CLIENT_MIN_X, FIRST_SERVER_X, LOAD_INCREMENT,
    MAX_SERVERS, SERVER_SPACING,
};

/// Seed distance for the nearest-server scan; any real server beats it.
const NO_MATCH_DISTANCE: f32 = 100.0;

/// A discrete mutation of the simulation, produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SpawnClient,
    DragStart(Point),
    DragMove(Point),
    DragEnd(Point),
}

/// The whole simulation: the server fleet, the spawned clients and the
/// transient drag gesture. The frame loop is the sole mutator; the renderer
/// reads it once per frame.
#[derive(Debug)]
pub struct World {
    pub servers: Vec<Server>,
    pub clients: Vec<Client>,
    pub drag: DragState,
}

impl World {
    /// Starts with a single idle server on the left of the row.
    pub fn new() -> Self {
        World {
            servers: vec![Server::new(FIRST_SERVER_X)],
            clients: Vec::new(),
            drag: DragState::default(),
        }
    }

    /// Applies one input command to the simulation. Ending a drag runs the
    /// nearest-server search against the release point and bumps the match,
    /// if any, by the fixed increment.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SpawnClient => self.spawn_client(),
            Command::DragStart(point) => self.drag.press(point),
            Command::DragMove(point) => self.drag.motion(point),
            Command::DragEnd(point) => {
                if let Some(target) = self.drag.release(point) {
                    if let Some(index) = self.nearest_server(target) {
                        self.increase_load(index, LOAD_INCREMENT);
                    }
                }
            }
        }
    }

    /// Adds one client at a random position within the spawn band.
    pub fn spawn_client(&mut self) {
        let x = rand::thread_rng().gen_range(CLIENT_MIN_X..CLIENT_MAX_X);

        info!("Added client at x={:.2}", x);
        self.clients.push(Client::new(x));
    }

    /// Bumps a server's load and grows the fleet when it saturates. The cap
    /// silently refuses a sixth server.
    pub fn increase_load(&mut self, index: usize, amount: f32) {
        let saturated = self.servers[index].apply_load(amount);
        debug!("Server {} load now {:.2}", index, self.servers[index].load);

        if saturated && self.servers.len() < MAX_SERVERS {
            let x = FIRST_SERVER_X + self.servers.len() as f32 * SERVER_SPACING;

            info!("Server {} saturated, adding server at x={:.2}", index, x);
            self.servers.push(Server::new(x));
        }
    }

    /// Returns the index of the server closest to `point`. Servers sit on
    /// the x axis, so the distance runs to `(server.x, 0)` and the query's
    /// own y contributes in full. Ties resolve to the first server scanned;
    /// None only when the fleet is empty.
    pub fn nearest_server(&self, point: Point) -> Option<usize> {
        let mut min_distance = NO_MATCH_DISTANCE;
        let mut nearest = None;

        for (index, server) in self.servers.iter().enumerate() {
            let dx = point.x - server.x;
            let dy = point.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance < min_distance {
                min_distance = distance;
                nearest = Some(index);
            }
        }

        nearest
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

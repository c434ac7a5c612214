use crate::{CLIENT_LOAD, CLIENT_Y};

/// A simulated request source, drawn as a fixed point below the fleet.
/// Clients never move and their nominal load is never applied to a server.
#[derive(Debug, Clone, Copy)]
pub struct Client {
    pub x: f32,
    pub y: f32,
    pub load: f32,
}

impl Client {
    pub fn new(x: f32) -> Self {
        Client {
            x,
            y: CLIENT_Y,
            load: CLIENT_LOAD,
        }
    }
}

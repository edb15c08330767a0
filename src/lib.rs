pub mod coverage;
pub mod graph;
pub mod input;

use serde::{Deserialize, Serialize};

/// Inclusive bound accepted on every coordinate axis.
pub const COORD_LIMIT: f64 = 10_000.0;

/// Maximum number of relay stations in one route computation (Earth and
/// Zearth come on top of this).
pub const MAX_STATIONS: usize = 500;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Station {
    /// Position in 3D space, each axis within [-10000.00, 10000.00]
    pub pos: [f64; 3],
}

impl Station {
    pub fn new(pos: [f64; 3]) -> Self {
        Station { pos }
    }

    pub fn distance(&self, other: &Station) -> f64 {
        let dx = self.pos[0] - other.pos[0];
        let dy = self.pos[1] - other.pos[1];
        let dz = self.pos[2] - other.pos[2];
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

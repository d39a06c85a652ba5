use glam::Vec2;

use crate::config::Config;

/// The square playing surface with a pocket in each corner
#[derive(Debug, Clone)]
pub struct Board {
    pub size: f32,
    pub pocket_radius: f32,
    pub pockets: [Vec2; 4],
}

impl Board {
    pub fn new(size: f32, pocket_radius: f32) -> Self {
        Self {
            size,
            pocket_radius,
            pockets: [
                Vec2::new(0.0, 0.0),
                Vec2::new(size, 0.0),
                Vec2::new(0.0, size),
                Vec2::new(size, size),
            ],
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.board_size, config.pocket_radius)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.size / 2.0)
    }

    /// Index of the pocket whose capture zone contains `pos`, if any
    pub fn pocket_at(&self, pos: Vec2) -> Option<usize> {
        self.pockets
            .iter()
            .position(|pocket| pos.distance(*pocket) < self.pocket_radius)
    }

    /// Whether a disc of `radius` at `pos` lies fully on the board
    pub fn contains_disc(&self, pos: Vec2, radius: f32) -> bool {
        let lo = radius;
        let hi = self.size - radius;
        pos.x >= lo && pos.x <= hi && pos.y >= lo && pos.y <= hi
    }
}

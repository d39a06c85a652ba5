use game_core::{step, Command, Config, ConfigError, SimulationState};

/// Values per disc in [`LocalGame::disc_buffer`]: x, y, radius, kind code, active
pub const DISC_STRIDE: usize = 5;

/// Local hot-seat game driven once per display frame
pub struct LocalGame {
    pub state: SimulationState,
}

impl LocalGame {
    pub fn new() -> Self {
        Self {
            state: SimulationState::new(),
        }
    }

    /// Start a game from a JSON config override
    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        let config = Config::from_json(json)?;
        Ok(Self {
            state: SimulationState::with_config(config)?,
        })
    }

    pub fn push(&mut self, command: Command) {
        self.state.push_command(command);
    }

    /// Advance one tick at the frame timestamp in milliseconds
    pub fn frame(&mut self, timestamp_ms: f64) {
        step(&mut self.state, timestamp_ms / 1000.0);

        let events = &self.state.events;
        for pocketed in &events.pocketed {
            log::info!(
                "player {}: {:?} in pocket {} ({:+})",
                pocketed.player,
                pocketed.kind,
                pocketed.pocket,
                pocketed.delta
            );
        }
        if events.turn_changed {
            log::info!("player {} to play", self.state.current_player());
        }
    }

    /// Flattened render feed, [`DISC_STRIDE`] floats per disc
    pub fn disc_buffer(&self) -> Vec<f32> {
        let feed = self.state.render_feed();
        let mut buffer = Vec::with_capacity(feed.len() * DISC_STRIDE);
        for view in feed {
            buffer.extend_from_slice(&[
                view.pos.x,
                view.pos.y,
                view.radius,
                view.kind.code() as f32,
                if view.active { 1.0 } else { 0.0 },
            ]);
        }
        buffer
    }

    /// `[from_x, from_y, to_x, to_y]` while aiming, empty otherwise
    pub fn aim_buffer(&self) -> Vec<f32> {
        match self.state.aim_line() {
            Some((from, to)) => vec![from.x, from.y, to.x, to.y],
            None => Vec::new(),
        }
    }

    pub fn scores(&self) -> Vec<u32> {
        self.state.scores.as_array().to_vec()
    }
}

impl Default for LocalGame {
    fn default() -> Self {
        Self::new()
    }
}

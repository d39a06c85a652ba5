use serde::Deserialize;
use thiserror::Error;

use crate::params::Params;

/// What happens to a pending turn change when the striker is launched again
/// before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlePolicy {
    /// The pending advance fires on schedule even if the striker is moving.
    #[default]
    AlwaysAdvance,
    /// A successful launch clears the pending advance.
    CancelOnLaunch,
}

/// Errors raised while building a session configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("nudge inset {inset} leaves no room on a board of size {board}")]
    InsetTooLarge { inset: f32, board: f32 },

    #[error("striker start pose lies outside the board")]
    StrikerOutsideBoard,

    #[error("ring radius {ring_radius} puts pieces off the board, limit is {limit}")]
    RingOffBoard { ring_radius: f32, limit: f32 },

    #[error("nudge inset {inset} lets a striker of radius {striker_radius} leave the board")]
    NudgeOffBoard { inset: f32, striker_radius: f32 },
}

/// Game configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board_size: f32,
    pub pocket_radius: f32,
    pub piece_radius: f32,
    pub queen_radius: f32,
    pub striker_radius: f32,
    pub ring_radius: f32,
    pub ring_pieces: usize,
    pub striker_baseline_offset: f32,
    pub friction: f32,
    pub rest_speed: f32,
    pub launch_scale: f32,
    pub nudge_step: f32,
    pub nudge_inset: f32,
    pub piece_points: u32,
    pub queen_points: u32,
    pub foul_penalty: u32,
    pub settle_delay: f64,
    pub settle_policy: SettlePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: Params::BOARD_SIZE,
            pocket_radius: Params::POCKET_RADIUS,
            piece_radius: Params::PIECE_RADIUS,
            queen_radius: Params::QUEEN_RADIUS,
            striker_radius: Params::STRIKER_RADIUS,
            ring_radius: Params::RING_RADIUS,
            ring_pieces: Params::RING_PIECES,
            striker_baseline_offset: Params::STRIKER_BASELINE_OFFSET,
            friction: Params::FRICTION,
            rest_speed: Params::REST_SPEED,
            launch_scale: Params::LAUNCH_SCALE,
            nudge_step: Params::NUDGE_STEP,
            nudge_inset: Params::NUDGE_INSET,
            piece_points: Params::PIECE_POINTS,
            queen_points: Params::QUEEN_POINTS,
            foul_penalty: Params::FOUL_PENALTY,
            settle_delay: Params::SETTLE_DELAY,
            settle_policy: SettlePolicy::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override on top of the defaults and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("board_size", self.board_size),
            ("pocket_radius", self.pocket_radius),
            ("piece_radius", self.piece_radius),
            ("queen_radius", self.queen_radius),
            ("striker_radius", self.striker_radius),
            ("launch_scale", self.launch_scale),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive {
                    field,
                    value: value as f64,
                });
            }
        }
        let radii = [
            ("piece_radius", self.piece_radius),
            ("queen_radius", self.queen_radius),
            ("striker_radius", self.striker_radius),
        ];
        for (field, radius) in radii {
            if radius * 2.0 > self.board_size {
                return Err(ConfigError::OutOfRange {
                    field,
                    value: radius as f64,
                    min: 0.0,
                    max: self.board_size as f64 / 2.0,
                });
            }
        }
        if !(self.settle_delay >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "settle_delay",
                value: self.settle_delay,
                min: 0.0,
                max: f64::INFINITY,
            });
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "friction",
                value: self.friction as f64,
                min: 0.0,
                max: 1.0,
            });
        }
        if !(self.rest_speed >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "rest_speed",
                value: self.rest_speed as f64,
                min: 0.0,
                max: f64::INFINITY,
            });
        }
        if !(self.nudge_inset >= 0.0 && self.nudge_inset * 2.0 <= self.board_size) {
            return Err(ConfigError::InsetTooLarge {
                inset: self.nudge_inset,
                board: self.board_size,
            });
        }

        if !(self.nudge_inset >= self.striker_radius) {
            return Err(ConfigError::NudgeOffBoard {
                inset: self.nudge_inset,
                striker_radius: self.striker_radius,
            });
        }

        // Ring pieces sit ring_radius from the center
        let limit = self.board_size / 2.0 - self.piece_radius;
        if !(self.ring_radius >= 0.0 && self.ring_radius <= limit) {
            return Err(ConfigError::RingOffBoard {
                ring_radius: self.ring_radius,
                limit,
            });
        }

        let start = self.striker_start();
        let r = self.striker_radius;
        let inside = |v: f32| v >= r && v <= self.board_size - r;
        if !inside(start.x) || !inside(start.y) {
            return Err(ConfigError::StrikerOutsideBoard);
        }
        Ok(())
    }

    /// Board center
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::splat(self.board_size / 2.0)
    }

    /// Pose the striker returns to at every turn change and after a foul
    pub fn striker_start(&self) -> glam::Vec2 {
        glam::Vec2::new(
            self.board_size / 2.0,
            self.board_size - self.striker_baseline_offset,
        )
    }

    /// Clamp a striker X coordinate to the nudge range
    pub fn clamp_striker_x(&self, x: f32) -> f32 {
        x.clamp(self.nudge_inset, self.board_size - self.nudge_inset)
    }
}

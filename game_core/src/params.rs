/// Game tuning parameters for carrom
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const BOARD_SIZE: f32 = 600.0;
    pub const POCKET_RADIUS: f32 = 22.0;

    // Discs
    pub const PIECE_RADIUS: f32 = 12.0;
    pub const QUEEN_RADIUS: f32 = 12.0;
    pub const STRIKER_RADIUS: f32 = 14.0;
    pub const RING_RADIUS: f32 = 40.0;
    pub const RING_PIECES: usize = 12;
    pub const STRIKER_BASELINE_OFFSET: f32 = 40.0; // distance of start pose from bottom edge

    // Motion
    pub const FRICTION: f32 = 0.98; // velocity multiplier per tick
    pub const REST_SPEED: f32 = 0.05; // below this speed a disc snaps to rest

    // Aim
    pub const LAUNCH_SCALE: f32 = 0.1;
    pub const NUDGE_STEP: f32 = 20.0;
    pub const NUDGE_INSET: f32 = 60.0;

    // Scoring
    pub const PIECE_POINTS: u32 = 1;
    pub const QUEEN_POINTS: u32 = 5;
    pub const FOUL_PENALTY: u32 = 1;

    // Turns
    pub const PLAYER_COUNT: u8 = 4;
    pub const SETTLE_DELAY: f64 = 1.0; // seconds of wall-clock time
}

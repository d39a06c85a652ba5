use glam::Vec2;

/// What a disc is, which decides the rule applied when it drops into a pocket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscKind {
    White,
    Black,
    Queen,
    Striker,
}

impl DiscKind {
    /// Stable numeric code used by the host render feed
    pub fn code(self) -> u8 {
        match self {
            DiscKind::White => 0,
            DiscKind::Black => 1,
            DiscKind::Queen => 2,
            DiscKind::Striker => 3,
        }
    }
}

/// Disc component - a carrom piece or the striker
#[derive(Debug, Clone, Copy)]
pub struct Disc {
    pub pos: Vec2,
    pub vel: Vec2, // units per tick
    radius: f32,
    kind: DiscKind,
    active: bool,
}

impl Disc {
    pub fn new(pos: Vec2, radius: f32, kind: DiscKind) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            kind,
            active: true,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn kind(&self) -> DiscKind {
        self.kind
    }

    /// False once the disc has been pocketed
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Velocity is exactly zero (the integrator snaps slow discs to rest)
    pub fn is_at_rest(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// Take the disc out of play for good
    pub fn capture(&mut self) {
        self.active = false;
        self.vel = Vec2::ZERO;
    }

    /// Put the disc back on a pose with no motion
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }
}

use glam::Vec2;

use crate::components::DiscKind;
use crate::params::Params;

/// Host clock as seen by the simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now: f64, // Seconds, supplied by the host each tick
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_to(&mut self, now: f64) {
        self.now = now;
    }
}

/// Per-player scores for players 1..=4
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    points: [u32; Params::PLAYER_COUNT as usize],
}

impl Scores {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(player: u8) -> Option<usize> {
        if (1..=Params::PLAYER_COUNT).contains(&player) {
            Some(player as usize - 1)
        } else {
            None
        }
    }

    pub fn get(&self, player: u8) -> u32 {
        Self::slot(player).map_or(0, |i| self.points[i])
    }

    /// Scores ordered by player id, starting at player 1
    pub fn as_array(&self) -> [u32; Params::PLAYER_COUNT as usize] {
        self.points
    }

    pub fn award(&mut self, player: u8, points: u32) {
        if let Some(i) = Self::slot(player) {
            self.points[i] = self.points[i].saturating_add(points);
        }
    }

    /// Subtract a penalty, never going below zero. Returns the amount actually removed.
    pub fn deduct(&mut self, player: u8, points: u32) -> u32 {
        match Self::slot(player) {
            Some(i) => {
                let before = self.points[i];
                self.points[i] = before.saturating_sub(points);
                before - self.points[i]
            }
            None => 0,
        }
    }
}

/// A disc that dropped into a pocket this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PocketEvent {
    pub kind: DiscKind,
    pub pocket: usize,
    pub player: u8,
    pub delta: i64, // Score change actually applied to `player`
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub pocketed: Vec<PocketEvent>,
    pub striker_fouled: bool,
    pub collisions: u32,
    pub wall_hits: u32,
    pub launched: bool,
    pub settle_scheduled: bool,
    pub scores_changed: bool,
    pub turn_changed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.pocketed.clear();
        self.striker_fouled = false;
        self.collisions = 0;
        self.wall_hits = 0;
        self.launched = false;
        self.settle_scheduled = false;
        self.scores_changed = false;
        self.turn_changed = false;
    }
}

/// Horizontal striker nudge direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Left,
    Right,
}

impl NudgeDirection {
    pub fn sign(self) -> f32 {
        match self {
            NudgeDirection::Left => -1.0,
            NudgeDirection::Right => 1.0,
        }
    }
}

/// Commands the input adapter hands to the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    BeginAim(Vec2),
    UpdateAim(Vec2),
    ReleaseAim(Vec2),
    Nudge(NudgeDirection),
}

impl Command {
    /// Board point carried by an aim command
    pub fn point(&self) -> Option<Vec2> {
        match *self {
            Command::BeginAim(p) | Command::UpdateAim(p) | Command::ReleaseAim(p) => Some(p),
            Command::Nudge(_) => None,
        }
    }
}

/// Commands waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pub commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

/// Next player in rotation 1 -> 2 -> 3 -> 4 -> 1
pub fn next_player(player: u8) -> u8 {
    (player % Params::PLAYER_COUNT) + 1
}

/// Phase of the turn state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnPhase {
    ActiveTurn,
    /// Striker came to rest; the turn passes once the clock reaches `due_at`
    SettlingToNextTurn { due_at: f64 },
}

/// Whose turn it is and whether a turn change is pending
#[derive(Debug, Clone)]
pub struct TurnState {
    current_player: u8,
    phase: TurnPhase,
    striker_start: Vec2,
}

impl TurnState {
    pub fn new(striker_start: Vec2) -> Self {
        Self {
            current_player: 1,
            phase: TurnPhase::ActiveTurn,
            striker_start,
        }
    }

    pub fn current_player(&self) -> u8 {
        self.current_player
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn striker_start(&self) -> Vec2 {
        self.striker_start
    }

    /// True while a turn change is pending
    pub fn is_settling(&self) -> bool {
        matches!(self.phase, TurnPhase::SettlingToNextTurn { .. })
    }

    /// Schedule the turn change. Returns false if one is already pending.
    pub fn schedule(&mut self, now: f64, delay: f64) -> bool {
        if self.is_settling() {
            return false;
        }
        self.phase = TurnPhase::SettlingToNextTurn {
            due_at: now + delay,
        };
        true
    }

    pub fn is_due(&self, now: f64) -> bool {
        match self.phase {
            TurnPhase::SettlingToNextTurn { due_at } => now >= due_at,
            TurnPhase::ActiveTurn => false,
        }
    }

    /// Drop a pending turn change. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_settling = self.is_settling();
        self.phase = TurnPhase::ActiveTurn;
        was_settling
    }

    /// Rotate to the next player and reopen the latch
    pub fn advance(&mut self) -> u8 {
        self.current_player = next_player(self.current_player);
        self.phase = TurnPhase::ActiveTurn;
        self.current_player
    }

    #[cfg(test)]
    pub(crate) fn set_current_player(&mut self, player: u8) {
        self.current_player = player;
    }
}

/// Aim gesture in progress, if any
#[derive(Debug, Clone, Copy, Default)]
pub struct AimState {
    anchor: Option<Vec2>,
}

impl AimState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_aiming(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<Vec2> {
        self.anchor
    }

    pub fn begin(&mut self, point: Vec2) {
        self.anchor = Some(point);
    }

    /// Move the anchor while a gesture is held. Ignored otherwise.
    pub fn update(&mut self, point: Vec2) {
        if let Some(anchor) = self.anchor.as_mut() {
            *anchor = point;
        }
    }

    /// End the gesture. Returns true if one was in progress.
    pub fn end(&mut self) -> bool {
        self.anchor.take().is_some()
    }
}

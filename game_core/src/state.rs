use glam::Vec2;
use hecs::{Entity, World};

use crate::config::ConfigError;
use crate::{
    create_disc, AimState, Board, Command, CommandQueue, Config, Disc, DiscKind, Events, Scores,
    Time, TurnState,
};

/// What the renderer needs to draw one disc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscView {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: DiscKind,
    pub active: bool,
}

impl From<&Disc> for DiscView {
    fn from(disc: &Disc) -> Self {
        Self {
            pos: disc.pos,
            radius: disc.radius(),
            kind: disc.kind(),
            active: disc.is_active(),
        }
    }
}

/// Everything one game session owns, threaded through [`crate::step`]
pub struct SimulationState {
    pub world: World,
    pub striker: Entity,
    pub pieces: Vec<Entity>, // setup order, used for collision ordering
    pub board: Board,
    pub config: Config,
    pub scores: Scores,
    pub turn: TurnState,
    pub aim: AimState,
    pub time: Time,
    pub events: Events,
    pub commands: CommandQueue,
}

impl SimulationState {
    /// New session with the default configuration
    pub fn new() -> Self {
        Self::build(Config::new())
    }

    /// New session with a custom configuration
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let board = Board::from_config(&config);
        let mut world = World::new();
        let center = board.center();

        // Ring of alternating white and black pieces around the queen
        let mut pieces = Vec::with_capacity(config.ring_pieces + 1);
        let step = std::f32::consts::TAU / config.ring_pieces.max(1) as f32;
        for i in 0..config.ring_pieces {
            let angle = i as f32 * step;
            let pos = center + Vec2::new(angle.cos(), angle.sin()) * config.ring_radius;
            let kind = if i % 2 == 0 {
                DiscKind::White
            } else {
                DiscKind::Black
            };
            pieces.push(create_disc(&mut world, pos, config.piece_radius, kind));
        }
        pieces.push(create_disc(
            &mut world,
            center,
            config.queen_radius,
            DiscKind::Queen,
        ));

        let start = config.striker_start();
        let striker = create_disc(&mut world, start, config.striker_radius, DiscKind::Striker);

        log::info!(
            "carrom session ready: {} pieces on a {}x{} board",
            pieces.len(),
            board.size,
            board.size
        );

        Self {
            world,
            striker,
            pieces,
            board,
            turn: TurnState::new(start),
            config,
            scores: Scores::new(),
            aim: AimState::new(),
            time: Time::new(),
            events: Events::new(),
            commands: CommandQueue::new(),
        }
    }

    /// Queue an input command for the next tick
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn disc(&self, entity: Entity) -> Option<Disc> {
        self.world.get::<&Disc>(entity).ok().map(|disc| *disc)
    }

    pub fn striker(&self) -> Option<Disc> {
        self.disc(self.striker)
    }

    pub fn current_player(&self) -> u8 {
        self.turn.current_player()
    }

    /// Pieces still in play
    pub fn active_pieces(&self) -> usize {
        self.pieces
            .iter()
            .filter_map(|&entity| self.disc(entity))
            .filter(Disc::is_active)
            .count()
    }

    /// True when no disc on the board is moving
    pub fn all_at_rest(&self) -> bool {
        self.world
            .query::<&Disc>()
            .iter()
            .all(|(_entity, disc)| !disc.is_active() || disc.is_at_rest())
    }

    /// Every disc in draw order: pieces as set up, then the striker
    pub fn render_feed(&self) -> Vec<DiscView> {
        self.pieces
            .iter()
            .chain(std::iter::once(&self.striker))
            .filter_map(|&entity| self.disc(entity))
            .map(|disc| DiscView::from(&disc))
            .collect()
    }

    /// Aim guide from the striker to the current drag anchor, while aiming
    pub fn aim_line(&self) -> Option<(Vec2, Vec2)> {
        let anchor = self.aim.anchor()?;
        let striker = self.striker()?;
        Some((striker.pos, anchor))
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_layout() {
        let state = SimulationState::new();
        let feed = state.render_feed();

        assert_eq!(feed.len(), 14, "12 ring pieces, the queen and the striker");
        let whites = feed.iter().filter(|d| d.kind == DiscKind::White).count();
        let blacks = feed.iter().filter(|d| d.kind == DiscKind::Black).count();
        assert_eq!((whites, blacks), (6, 6));

        assert_eq!(feed[0].kind, DiscKind::White);
        assert!((feed[0].pos - Vec2::new(340.0, 300.0)).length() < 1e-3);
        assert_eq!(feed[1].kind, DiscKind::Black);
        assert_eq!(feed[12].kind, DiscKind::Queen);
        assert_eq!(feed[12].pos, Vec2::new(300.0, 300.0));
        assert_eq!(feed[13].kind, DiscKind::Striker);
        assert_eq!(feed[13].pos, Vec2::new(300.0, 560.0));
        assert_eq!(feed[13].radius, 14.0);
        assert!(feed.iter().all(|d| d.active));
    }

    #[test]
    fn test_ring_pieces_are_evenly_spaced() {
        let state = SimulationState::new();
        let center = state.board.center();
        for view in state.render_feed().iter().take(12) {
            assert!(((view.pos - center).length() - 40.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = SimulationState::new();
        assert_eq!(state.current_player(), 1);
        assert_eq!(state.scores.as_array(), [0, 0, 0, 0]);
        assert!(!state.turn.is_settling());
        assert!(state.all_at_rest());
        assert_eq!(state.active_pieces(), 13);
        assert_eq!(state.aim_line(), None);
    }

    #[test]
    fn test_aim_line_follows_anchor() {
        let mut state = SimulationState::new();
        state.aim.begin(Vec2::new(310.0, 590.0));
        assert_eq!(
            state.aim_line(),
            Some((Vec2::new(300.0, 560.0), Vec2::new(310.0, 590.0)))
        );
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let mut config = Config::new();
        config.board_size = -5.0;
        assert!(SimulationState::with_config(config).is_err());
    }

    #[test]
    fn test_with_config_uses_custom_layout() {
        let mut config = Config::new();
        config.board_size = 800.0;
        config.ring_pieces = 8;
        let state = SimulationState::with_config(config).unwrap();

        assert_eq!(state.pieces.len(), 9);
        assert_eq!(state.striker().unwrap().pos, Vec2::new(400.0, 760.0));
    }
}

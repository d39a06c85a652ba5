pub mod board;
pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use board::*;
pub use components::*;
pub use config::{Config, ConfigError, SettlePolicy};
pub use params::*;
pub use resources::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Run one deterministic carrom tick.
///
/// `now` is the host clock in seconds. Physics advance by one fixed step per
/// call regardless of `now`; the clock only drives the settle delay between turns.
pub fn step(state: &mut SimulationState, now: f64) {
    // Clear events at start of tick
    state.events.clear();
    state.time.advance_to(now);

    // 1. Fire a turn change whose settle delay has elapsed
    settle_turn(
        &mut state.world,
        state.striker,
        &mut state.turn,
        &state.time,
        &mut state.events,
    );

    // 2. Apply input commands (aim, launch, nudge)
    ingest_commands(
        &mut state.world,
        state.striker,
        &mut state.commands,
        &mut state.aim,
        &mut state.turn,
        &state.config,
        &mut state.events,
    );

    // 3. Move discs, apply friction, bounce off walls
    integrate_motion(
        &mut state.world,
        &state.board,
        &state.config,
        &mut state.events,
    );

    // 4. Pockets: capture, score, fouls
    check_pockets(
        &mut state.world,
        &state.board,
        &state.turn,
        &mut state.scores,
        &state.config,
        &mut state.events,
    );

    // 5. Disc-disc collisions
    resolve_collisions(
        &mut state.world,
        state.striker,
        &state.pieces,
        &mut state.events,
    );

    // 6. Striker at rest: schedule the next turn
    evaluate_rest(
        &state.world,
        state.striker,
        &mut state.turn,
        &state.time,
        &state.config,
        &mut state.events,
    );
}

/// Helper to create a disc entity
pub fn create_disc(
    world: &mut World,
    pos: glam::Vec2,
    radius: f32,
    kind: DiscKind,
) -> hecs::Entity {
    world.spawn((Disc::new(pos, radius, kind),))
}

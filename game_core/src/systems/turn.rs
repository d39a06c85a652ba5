use crate::{Config, Disc, Events, Time, TurnState};
use hecs::{Entity, World};

/// Fire a pending turn change once its settle delay has elapsed
pub fn settle_turn(
    world: &mut World,
    striker: Entity,
    turn: &mut TurnState,
    time: &Time,
    events: &mut Events,
) {
    if !turn.is_due(time.now) {
        return;
    }

    let player = turn.advance();
    if let Ok(disc) = world.query_one_mut::<&mut Disc>(striker) {
        disc.place(turn.striker_start());
    }
    events.turn_changed = true;
    log::debug!("turn passes to player {}", player);
}

/// Schedule the next turn as soon as the striker is at rest
pub fn evaluate_rest(
    world: &World,
    striker: Entity,
    turn: &mut TurnState,
    time: &Time,
    config: &Config,
    events: &mut Events,
) {
    let at_rest = world
        .get::<&Disc>(striker)
        .map(|disc| disc.is_at_rest())
        .unwrap_or(false);

    if at_rest && turn.schedule(time.now, config.settle_delay) {
        events.settle_scheduled = true;
        log::trace!(
            "striker at rest, turn change due at {:.3}s",
            time.now + config.settle_delay
        );
    }
}

use glam::Vec2;
use hecs::{Entity, World};

use crate::config::SettlePolicy;
use crate::{AimState, Command, CommandQueue, Config, Disc, Events, TurnState};

/// Apply queued input commands to the aim gesture and the striker.
///
/// Every command that would move the striker is ignored unless it is at rest.
pub fn ingest_commands(
    world: &mut World,
    striker: Entity,
    commands: &mut CommandQueue,
    aim: &mut AimState,
    turn: &mut TurnState,
    config: &Config,
    events: &mut Events,
) {
    let pending = commands.take();
    let Ok(disc) = world.query_one_mut::<&mut Disc>(striker) else {
        return;
    };

    for command in pending {
        if command.point().is_some_and(|point| !point.is_finite()) {
            log::trace!("dropping {:?} with a non-finite point", command);
            continue;
        }
        match command {
            Command::BeginAim(point) => {
                if disc.is_at_rest() {
                    aim.begin(point);
                }
            }
            Command::UpdateAim(point) => aim.update(point),
            Command::ReleaseAim(point) => {
                if !aim.end() || !disc.is_at_rest() {
                    continue;
                }
                let vel = launch_velocity(disc.pos, point, config.launch_scale);
                if vel == Vec2::ZERO || !vel.is_finite() {
                    continue;
                }
                disc.vel = vel;
                events.launched = true;
                log::debug!("player {} launched striker at {:?}", turn.current_player(), vel);

                if config.settle_policy == SettlePolicy::CancelOnLaunch && turn.cancel() {
                    log::trace!("launch cancelled pending turn change");
                }
            }
            Command::Nudge(direction) => {
                if disc.is_at_rest() {
                    disc.pos.x =
                        config.clamp_striker_x(disc.pos.x + direction.sign() * config.nudge_step);
                }
            }
        }
    }
}

/// Launch velocity for a drag released at `release`: pull back from the striker to shoot forward
pub fn launch_velocity(striker_pos: Vec2, release: Vec2, scale: f32) -> Vec2 {
    (striker_pos - release) * scale
}

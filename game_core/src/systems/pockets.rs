use crate::{Board, Config, Disc, DiscKind, Events, PocketEvent, Scores, TurnState};
use hecs::World;

/// Check every active disc against the four pockets and apply scoring and fouls
pub fn check_pockets(
    world: &mut World,
    board: &Board,
    turn: &TurnState,
    scores: &mut Scores,
    config: &Config,
    events: &mut Events,
) {
    let player = turn.current_player();

    for (_entity, disc) in world.query_mut::<&mut Disc>() {
        if !disc.is_active() {
            continue;
        }
        let Some(pocket) = board.pocket_at(disc.pos) else {
            continue;
        };

        let delta = match disc.kind() {
            DiscKind::Striker => {
                // Foul: the striker goes back to its start pose instead of leaving play
                disc.place(turn.striker_start());
                events.striker_fouled = true;
                let removed = scores.deduct(player, config.foul_penalty);
                log::debug!("player {} pocketed the striker, -{}", player, removed);
                -(removed as i64)
            }
            kind => {
                disc.capture();
                let points = points_for(kind, player, config);
                scores.award(player, points);
                log::debug!("player {} pocketed {:?} for {}", player, kind, points);
                points as i64
            }
        };

        events.pocketed.push(PocketEvent {
            kind: disc.kind(),
            pocket,
            player,
            delta,
        });
        events.scores_changed = true;
    }
}

/// Points `player` earns for pocketing a piece of `kind`.
///
/// Players 1 and 3 play white, players 2 and 4 play black; the queen counts for anyone.
pub fn points_for(kind: DiscKind, player: u8, config: &Config) -> u32 {
    match kind {
        DiscKind::Queen => config.queen_points,
        DiscKind::White if player % 2 == 1 => config.piece_points,
        DiscKind::Black if player % 2 == 0 => config.piece_points,
        _ => 0,
    }
}

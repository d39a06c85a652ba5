use crate::{Disc, Events};
use hecs::{Entity, World};

/// Resolve disc-disc contacts for this tick.
///
/// The striker is tested against every piece first, then each pair of pieces
/// in setup order. Velocities are updated in place, so a later pair sees the
/// result of an earlier one within the same tick.
pub fn resolve_collisions(world: &mut World, striker: Entity, pieces: &[Entity], events: &mut Events) {
    // Collect disc data in resolution order without holding borrows
    let mut bodies: Vec<(Entity, Disc)> = std::iter::once(striker)
        .chain(pieces.iter().copied())
        .filter_map(|entity| world.get::<&Disc>(entity).ok().map(|disc| (entity, *disc)))
        .collect();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            if collide(&mut head[i].1, &mut tail[0].1) {
                events.collisions += 1;
            }
        }
    }

    for (entity, body) in bodies {
        if let Ok(disc) = world.query_one_mut::<&mut Disc>(entity) {
            disc.vel = body.vel;
        }
    }
}

/// Equal-mass elastic collision: swap the velocity components along the line
/// between centers and keep the tangential ones. Positions are not separated.
///
/// Returns true if the pair was in contact and resolved.
pub fn collide(a: &mut Disc, b: &mut Disc) -> bool {
    if !a.is_active() || !b.is_active() {
        return false;
    }

    let delta = a.pos - b.pos;
    let dist = delta.length();
    if dist >= a.radius() + b.radius() {
        return false;
    }

    // Coincident centers have no contact normal; leave the pair alone this tick
    if !(dist > 0.0 && dist.is_finite()) {
        log::trace!("skipping degenerate contact at {:?}", a.pos);
        return false;
    }

    let normal = delta / dist;
    let va = a.vel.dot(normal);
    let vb = b.vel.dot(normal);
    a.vel += (vb - va) * normal;
    b.vel += (va - vb) * normal;
    true
}

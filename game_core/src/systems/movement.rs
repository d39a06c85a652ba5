use crate::{Board, Config, Disc, Events};
use hecs::World;

/// Advance every active disc by one tick: move, apply friction, snap to rest, bounce off walls
pub fn integrate_motion(world: &mut World, board: &Board, config: &Config, events: &mut Events) {
    for (_entity, disc) in world.query_mut::<&mut Disc>() {
        if !disc.is_active() {
            continue;
        }
        if integrate_disc(disc, board.size, config.friction, config.rest_speed) {
            events.wall_hits += 1;
        }
    }
}

/// One explicit Euler step for a single disc. Returns true if it hit a wall.
pub fn integrate_disc(disc: &mut Disc, board_size: f32, friction: f32, rest_speed: f32) -> bool {
    disc.pos += disc.vel;
    disc.vel *= friction;

    if disc.vel.length() < rest_speed {
        disc.vel = glam::Vec2::ZERO;
    }

    let radius = disc.radius();
    let hit_x = reflect_axis(&mut disc.pos.x, &mut disc.vel.x, radius, board_size);
    let hit_y = reflect_axis(&mut disc.pos.y, &mut disc.vel.y, radius, board_size);
    hit_x || hit_y
}

/// Lossless reflection on one axis, clamping the disc back inside `[radius, size - radius]`
fn reflect_axis(pos: &mut f32, vel: &mut f32, radius: f32, size: f32) -> bool {
    if *pos - radius < 0.0 || *pos + radius > size {
        *vel = -*vel;
        *pos = pos.clamp(radius, size - radius);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_disc, DiscKind};
    use glam::Vec2;
    use proptest::prelude::*;

    fn setup_world() -> (World, Board, Config, Events) {
        let config = Config::new();
        (World::new(), Board::from_config(&config), config, Events::new())
    }

    #[test]
    fn test_disc_moves_then_slows() {
        let (mut world, board, config, mut events) = setup_world();
        let e = create_disc(&mut world, Vec2::new(300.0, 300.0), 12.0, DiscKind::White);
        world.query_one_mut::<&mut Disc>(e).unwrap().vel = Vec2::new(10.0, 0.0);

        integrate_motion(&mut world, &board, &config, &mut events);

        let disc = *world.get::<&Disc>(e).unwrap();
        assert_eq!(disc.pos, Vec2::new(310.0, 300.0), "Position uses the pre-friction velocity");
        assert!((disc.vel.x - 9.8).abs() < 1e-5, "Friction scales velocity by 0.98");
        assert_eq!(events.wall_hits, 0);
    }

    #[test]
    fn test_slow_disc_snaps_to_rest() {
        let mut disc = Disc::new(Vec2::new(300.0, 300.0), 12.0, DiscKind::Black);
        disc.vel = Vec2::new(0.03, 0.03);

        integrate_disc(&mut disc, 600.0, 0.98, 0.05);

        assert_eq!(disc.vel, Vec2::ZERO, "Speeds under 0.05 are forced to exactly zero");
        assert!(disc.is_at_rest());
    }

    #[test]
    fn test_disc_bounces_off_left_wall() {
        let mut disc = Disc::new(Vec2::new(14.0, 300.0), 12.0, DiscKind::White);
        disc.vel = Vec2::new(-5.0, 1.0);

        let hit = integrate_disc(&mut disc, 600.0, 0.98, 0.05);

        assert!(hit);
        assert_eq!(disc.pos.x, 12.0, "Clamped to radius");
        assert!(disc.vel.x > 0.0, "X velocity reversed");
        assert!(disc.vel.y > 0.0, "Y velocity untouched by the X wall");
    }

    #[test]
    fn test_disc_bounces_off_bottom_wall() {
        let mut disc = Disc::new(Vec2::new(300.0, 580.0), 14.0, DiscKind::Striker);
        disc.vel = Vec2::new(0.0, 20.0);

        integrate_disc(&mut disc, 600.0, 0.98, 0.05);

        assert_eq!(disc.pos.y, 586.0);
        assert!((disc.vel.y + 19.6).abs() < 1e-4, "Wall bounce is lossless");
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let mut disc = Disc::new(Vec2::new(590.0, 590.0), 12.0, DiscKind::White);
        disc.vel = Vec2::new(5.0, 5.0);

        integrate_disc(&mut disc, 600.0, 1.0, 0.0);

        assert_eq!(disc.pos, Vec2::new(588.0, 588.0));
        assert_eq!(disc.vel, Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn test_inactive_disc_is_skipped() {
        let (mut world, board, config, mut events) = setup_world();
        let e = create_disc(&mut world, Vec2::new(100.0, 100.0), 12.0, DiscKind::White);
        {
            let disc = world.query_one_mut::<&mut Disc>(e).unwrap();
            disc.capture();
            disc.vel = Vec2::new(4.0, 4.0);
        }

        integrate_motion(&mut world, &board, &config, &mut events);

        let disc = *world.get::<&Disc>(e).unwrap();
        assert_eq!(disc.pos, Vec2::new(100.0, 100.0));
        assert_eq!(disc.vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_friction_converges_to_exact_rest() {
        let mut disc = Disc::new(Vec2::new(300.0, 300.0), 12.0, DiscKind::White);
        disc.vel = Vec2::new(30.0, -20.0);

        let mut ticks = 0;
        while !disc.is_at_rest() {
            integrate_disc(&mut disc, 600.0, 0.98, 0.05);
            ticks += 1;
            assert!(ticks < 10_000, "Disc never came to rest");
        }
        assert_eq!(disc.vel, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_friction_never_speeds_up(
            x in 12.0f32..588.0,
            y in 12.0f32..588.0,
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
        ) {
            let mut disc = Disc::new(Vec2::new(x, y), 12.0, DiscKind::White);
            disc.vel = Vec2::new(vx, vy);
            let before = disc.vel.length();

            integrate_disc(&mut disc, 600.0, 0.98, 0.05);

            prop_assert!(disc.vel.length() <= before + 1e-4);
        }

        #[test]
        fn prop_disc_stays_on_board(
            x in -100.0f32..700.0,
            y in -100.0f32..700.0,
            vx in -80.0f32..80.0,
            vy in -80.0f32..80.0,
            ticks in 1usize..200,
        ) {
            let board = Board::new(600.0, 22.0);
            let mut disc = Disc::new(Vec2::new(x, y), 12.0, DiscKind::Black);
            disc.vel = Vec2::new(vx, vy);

            for _ in 0..ticks {
                integrate_disc(&mut disc, board.size, 0.98, 0.05);
                prop_assert!(board.contains_disc(disc.pos, disc.radius()));
            }
        }
    }
}

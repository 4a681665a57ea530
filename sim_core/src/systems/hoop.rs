use hecs::World;

use crate::components::Ball;
use crate::config::Config;
use crate::geometry::Hoop;
use crate::resources::{Events, Score};

/// Deflect falling balls off the two solid ends of the rim band.
///
/// The band's middle is open; only a ball whose center lands on the
/// left or right lip, with its lower edge inside the band and moving
/// downward, strikes the rim.
pub fn deflect_rim(world: &mut World, hoop: &Hoop, config: &Config, events: &mut Events) {
    let rim = hoop.rim;
    let hole_left = rim.min.x + config.rim_lip;
    let hole_right = rim.max.x - config.rim_lip;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let center_x = ball.center().x;
        let bottom = ball.bottom_y();

        let in_band = bottom >= rim.min.y && bottom <= rim.max.y;
        let falling = ball.vel.y > 0.0;
        let on_left = center_x > rim.min.x && center_x < hole_left;
        let on_right = center_x > hole_right && center_x < rim.max.x;

        if in_band && falling && (on_left || on_right) {
            // Snap just above the rim and shove away from the struck lip
            ball.pos.y = rim.min.y - ball.radius * 2.0;
            ball.vel.y *= -config.rim_restitution;
            ball.vel.x += if on_left {
                -config.rim_kick
            } else {
                config.rim_kick
            };
            events.rim_hit = true;
        }
    }
}

/// Register a score for unlocked balls dropping through the basket band.
///
/// The lock guarantees at most one score per flight; only a floor
/// landing clears it.
pub fn check_baskets(
    world: &mut World,
    hoop: &Hoop,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    if !config.scoring {
        return;
    }

    let zone = hoop.basket;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let center_x = ball.center().x;
        let top = ball.pos.y;

        let inside_x = center_x > zone.min.x + config.basket_inset
            && center_x < zone.max.x - config.basket_inset;
        let inside_y = top >= zone.min.y && top <= zone.max.y;

        if inside_x && inside_y && ball.vel.y > 0.0 && !ball.score_locked {
            ball.score_locked = true;
            score.increment();
            // Keep the ball falling through instead of hovering
            ball.vel.y += config.basket_drop;
            events.scored = true;
            log::debug!("basket: score is now {}", score.get());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use crate::geometry::Rect;
    use glam::Vec2;

    // Rim band 100..200 at y 300..308, basket 95..205 at y 300..330
    fn test_hoop() -> Hoop {
        Hoop::new(
            Rect::from_pos_size(Vec2::new(100.0, 300.0), Vec2::new(100.0, 8.0)),
            Rect::from_pos_size(Vec2::new(95.0, 300.0), Vec2::new(110.0, 30.0)),
        )
    }

    fn setup() -> (hecs::World, Hoop, Config, Score, Events) {
        (
            hecs::World::new(),
            test_hoop(),
            Config::new(),
            Score::new(),
            Events::new(),
        )
    }

    /// A ball whose center sits at `center_x`, lower edge inside the rim band
    fn falling_ball_at(world: &mut hecs::World, center_x: f32) -> hecs::Entity {
        let radius = 10.0;
        let pos = Vec2::new(center_x - radius, 302.0 - radius * 2.0);
        create_ball(world, pos, Vec2::new(0.0, 3.0), radius, 0.0)
    }

    #[test]
    fn test_left_lip_deflects_and_kicks_left() {
        let (mut world, hoop, config, _score, mut events) = setup();
        let entity = falling_ball_at(&mut world, 105.0); // on the left lip

        deflect_rim(&mut world, &hoop, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert!(ball.vel.y < 0.0, "Rim should reflect the fall");
        assert!(
            ball.vel.y.abs() <= config.rim_restitution * 3.0 + 1e-6,
            "Rim bounce should lose energy, got {}",
            ball.vel.y
        );
        assert!(ball.vel.x < 0.0, "Left lip should shove the ball left");
        assert_eq!(
            ball.bottom_y(),
            hoop.rim.min.y,
            "Ball should snap just above the rim"
        );
        assert!(events.rim_hit, "Should flag the rim hit");
    }

    #[test]
    fn test_right_lip_kicks_right() {
        let (mut world, hoop, config, _score, mut events) = setup();
        let entity = falling_ball_at(&mut world, 195.0); // on the right lip

        deflect_rim(&mut world, &hoop, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert!(ball.vel.x > 0.0, "Right lip should shove the ball right");
    }

    #[test]
    fn test_center_hole_is_open() {
        let (mut world, hoop, config, _score, mut events) = setup();
        let entity = falling_ball_at(&mut world, 150.0); // over the hole

        deflect_rim(&mut world, &hoop, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert!(
            ball.vel.y > 0.0,
            "A ball over the opening should keep falling"
        );
        assert!(!events.rim_hit);
    }

    #[test]
    fn test_rising_ball_passes_the_rim() {
        let (mut world, hoop, config, _score, mut events) = setup();
        let entity = falling_ball_at(&mut world, 105.0);
        world.get::<&mut Ball>(entity).unwrap().vel.y = -3.0;

        deflect_rim(&mut world, &hoop, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.vel.y, -3.0, "Rim only stops falling balls");
        assert!(!events.rim_hit);
    }

    /// A ball dropping through the middle of the basket band
    fn scoring_ball(world: &mut hecs::World) -> hecs::Entity {
        let radius = 10.0;
        // Center x 150, top edge y 310: inside the band on both axes
        create_ball(
            world,
            Vec2::new(140.0, 310.0),
            Vec2::new(0.0, 2.0),
            radius,
            0.0,
        )
    }

    #[test]
    fn test_basket_scores_exactly_once_per_pass() {
        let (mut world, hoop, config, mut score, mut events) = setup();
        let entity = scoring_ball(&mut world);

        check_baskets(&mut world, &hoop, &config, &mut score, &mut events);

        assert_eq!(score.get(), 1, "First pass should score");
        assert!(events.scored, "Should flag the score");
        {
            let ball = world.get::<&Ball>(entity).unwrap();
            assert!(ball.score_locked, "Scoring should lock the ball");
            assert!(
                ball.vel.y > 2.0,
                "Score should add fall speed, got {}",
                ball.vel.y
            );
        }

        // Unchanged state: the lock must hold the score at 1
        check_baskets(&mut world, &hoop, &config, &mut score, &mut events);
        assert_eq!(score.get(), 1, "Locked ball must not score again");
    }

    #[test]
    fn test_basket_ignores_rising_balls() {
        let (mut world, hoop, config, mut score, mut events) = setup();
        let entity = scoring_ball(&mut world);
        world.get::<&mut Ball>(entity).unwrap().vel.y = -2.0;

        check_baskets(&mut world, &hoop, &config, &mut score, &mut events);

        assert_eq!(score.get(), 0, "Rising balls must not score");
    }

    #[test]
    fn test_basket_inset_narrows_the_trigger() {
        let (mut world, hoop, config, mut score, mut events) = setup();
        // Center x 98: inside the band but within the inset margin
        let radius = 10.0;
        create_ball(
            &mut world,
            Vec2::new(88.0, 310.0),
            Vec2::new(0.0, 2.0),
            radius,
            0.0,
        );

        check_baskets(&mut world, &hoop, &config, &mut score, &mut events);

        assert_eq!(score.get(), 0, "Edge entries must not score");
    }

    #[test]
    fn test_scoring_toggle_disables_baskets() {
        let (mut world, hoop, _config, mut score, mut events) = setup();
        let config = Config::without_scoring();
        scoring_ball(&mut world);

        check_baskets(&mut world, &hoop, &config, &mut score, &mut events);

        assert_eq!(score.get(), 0, "Disabled scoring must not count");
        assert!(!events.scored);
    }
}

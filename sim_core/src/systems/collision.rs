use hecs::{Entity, World};

use crate::components::Ball;
use crate::config::Config;
use crate::geometry::Playfield;
use crate::resources::Events;

/// Separate overlapping ball pairs and exchange their damped velocities.
///
/// Every unordered pair is checked once per frame, in ascending entity
/// id order; there is no relaxation pass, so clusters of three or more
/// may keep a little residual overlap. Each ball is clamped back into
/// the playfield after separation.
pub fn resolve_ball_collisions(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    events: &mut Events,
) {
    let mut balls: Vec<(Entity, Ball)> = world
        .query::<&Ball>()
        .iter()
        .map(|(entity, ball)| (entity, *ball))
        .collect();
    balls.sort_by_key(|(entity, _)| entity.id());

    for i in 0..balls.len() {
        for j in (i + 1)..balls.len() {
            let delta = balls[j].1.center() - balls[i].1.center();
            let dist = delta.length();
            let min_dist = balls[i].1.radius + balls[j].1.radius;

            if dist >= min_dist {
                continue;
            }
            // Coincident centers have no separation direction; leave
            // the pair for next frame's drift to break the tie
            if dist <= f32::EPSILON {
                continue;
            }

            let push = delta / dist * (min_dist - dist) * 0.5;
            balls[i].1.pos -= push;
            balls[j].1.pos += push;

            let (vel_i, vel_j) = (balls[i].1.vel, balls[j].1.vel);
            balls[i].1.vel = vel_j * config.restitution;
            balls[j].1.vel = vel_i * config.restitution;

            events.ball_contact = true;
        }
    }

    // Write back, keeping every ball inside the field
    for (entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some((_, resolved)) = balls.iter().find(|(e, _)| *e == entity) {
            *ball = *resolved;
            let max_x = field.max_x(ball.radius).max(0.0);
            let max_y = field.max_y(ball.radius).max(0.0);
            ball.pos.x = ball.pos.x.clamp(0.0, max_x);
            ball.pos.y = ball.pos.y.clamp(0.0, max_y);
        }
    }
}

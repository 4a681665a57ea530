use hecs::{Entity, World};

use crate::components::{Ball, Grab};
use crate::config::Config;
use crate::geometry::Playfield;
use crate::resources::{Events, Time};

/// Apply forces, integrate and reflect off the playfield bounds for
/// every ball not under manual control.
///
/// Order is fixed: forces, integrate, reflect, friction. Reflection
/// uses the already-integrated position against the current frame's
/// bounds; friction runs last so a bounce is damped exactly once.
pub fn move_balls(
    world: &mut World,
    time: &Time,
    field: &Playfield,
    config: &Config,
    events: &mut Events,
) {
    // Grabbed balls follow the pointer, not the physics
    let held: Vec<Entity> = world.query::<&Grab>().iter().map(|(e, _)| e).collect();

    for (entity, ball) in world.query_mut::<&mut Ball>() {
        if held.contains(&entity) {
            continue;
        }

        // Gravity/buoyancy bias plus the per-ball horizontal sway
        ball.vel.y += config.gravity + config.buoyancy;
        ball.vel.x += (time.now + ball.drift_phase).sin() * config.drift_strength;

        ball.pos += ball.vel;

        let max_x = field.max_x(ball.radius).max(0.0);
        let max_y = field.max_y(ball.radius).max(0.0);

        if ball.pos.x <= 0.0 || ball.pos.x >= max_x {
            ball.vel.x *= -config.bounce;
            ball.pos.x = ball.pos.x.clamp(0.0, max_x);
            events.wall_bounce = true;
        }

        if ball.pos.y <= config.ceiling_offset {
            ball.vel.y *= -config.bounce;
            ball.pos.y = config.ceiling_offset;
            events.wall_bounce = true;
        }

        if ball.pos.y >= max_y {
            ball.vel.y *= -config.bounce * config.floor_damping;
            ball.pos.y = max_y;
            // Landing re-arms scoring for the next flight
            ball.score_locked = false;
            events.floor_bounce = true;
        }

        // Air resistance
        ball.vel *= config.friction;
    }
}

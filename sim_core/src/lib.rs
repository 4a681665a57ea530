pub mod components;
pub mod config;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the balloon-ball simulation by one display frame
pub fn step(
    world: &mut World,
    time: &Time,
    geometry: &Geometry,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Forces, integration, boundary reflection
    move_balls(world, time, &geometry.field, config, events);

    // 2. Hoop interaction: rim deflection, then the basket check.
    //    Missing hoop geometry just skips both.
    if let Some(hoop) = &geometry.hoop {
        deflect_rim(world, hoop, config, events);
        check_baskets(world, hoop, config, score, events);
    }

    // 3. Ball-ball overlap resolution
    resolve_ball_collisions(world, &geometry.field, config, events);
}

/// Helper to create a ball entity
pub fn create_ball(
    world: &mut World,
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    drift_phase: f32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius, drift_phase),))
}

/// Seed one ball per radius: random x across the field, y a fixed
/// offset above the floor, a small random starting velocity and a
/// random drift phase. Returns the spawned entities; empty when the
/// field is degenerate or there is nothing to spawn.
pub fn seed_balls(
    world: &mut World,
    field: &Playfield,
    radii: &[f32],
    rng: &mut SimRng,
) -> Vec<hecs::Entity> {
    use rand::Rng;

    if radii.is_empty() || field.is_degenerate() {
        return Vec::new();
    }

    let span = (field.width - Params::SPAWN_MARGIN).max(1.0);
    let floor_y = (field.height - Params::SPAWN_FLOOR_OFFSET).max(0.0);

    radii
        .iter()
        .map(|&radius| {
            let pos = Vec2::new(rng.0.gen_range(0.0..span), floor_y);
            let vel = Vec2::new(
                rng.0.gen_range(-0.5..0.5) * Params::SPAWN_SPEED,
                rng.0.gen_range(-0.5..0.5) * Params::SPAWN_SPEED,
            );
            let drift_phase = rng.0.gen_range(0.0..Params::DRIFT_PHASE_MAX);
            create_ball(world, pos, vel, radius, drift_phase)
        })
        .collect()
}

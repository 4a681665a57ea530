use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Ball, Grab};

/// Hit-test a pointer position against the balls.
///
/// Returns the lowest-id ball whose circle contains the point, so a
/// crowded tap resolves the same way every frame. Input adapters key
/// their control sessions on the returned entity.
pub fn ball_at(world: &World, point: Vec2) -> Option<Entity> {
    let mut hits: Vec<Entity> = world
        .query::<&Ball>()
        .iter()
        .filter(|(_entity, ball)| ball.center().distance(point) <= ball.radius)
        .map(|(entity, _ball)| entity)
        .collect();
    hits.sort_by_key(|entity| entity.id());
    hits.first().copied()
}

/// Begin a control session: zero the ball's velocity and record the
/// pointer as the reference point. A repeat grab on the same ball just
/// moves the reference point. Unknown entities are ignored.
pub fn start_grab(world: &mut World, entity: Entity, pointer: Vec2) {
    let is_ball = {
        if let Ok(mut ball) = world.get::<&mut Ball>(entity) {
            ball.vel = Vec2::ZERO;
            true
        } else {
            false
        }
    };
    if is_ball {
        let _ = world.insert_one(entity, Grab::new(pointer));
    }
}

/// Follow the pointer: the delta from the reference point becomes the
/// ball's velocity and is added to its position, so velocity mirrors
/// the instantaneous pointer speed. No-op unless the ball is grabbed.
pub fn drag_to(world: &mut World, entity: Entity, pointer: Vec2) {
    let delta = {
        if let Ok(mut grab) = world.get::<&mut Grab>(entity) {
            let delta = pointer - grab.last_pointer;
            grab.last_pointer = pointer;
            Some(delta)
        } else {
            None
        }
    };

    if let Some(delta) = delta {
        if let Ok(mut ball) = world.get::<&mut Ball>(entity) {
            ball.vel = delta;
            ball.pos += delta;
        }
    }
}

/// End the control session. The ball keeps the velocity of its last
/// drag movement, which is what turns a release into a throw.
pub fn end_grab(world: &mut World, entity: Entity) {
    let _ = world.remove_one::<Grab>(entity);
}

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::Ball;
use crate::config::Config;
use crate::geometry::{Geometry, Playfield};
use crate::resources::{Events, Score, SimRng, Time};
use crate::systems::{ball_at, drag_to, end_grab, start_grab};
use crate::{seed_balls, step};

/// One simulation run: the ball world, the score and the per-frame
/// resources, behind the entry points an input/render adapter needs.
///
/// The session is single-threaded; the host calls `step` once per
/// display frame and the pointer methods between frames.
pub struct Session {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    rng: SimRng,
    started: bool,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            world: World::new(),
            config,
            score: Score::new(),
            events: Events::new(),
            rng: SimRng::new(seed),
            started: false,
        }
    }

    /// Seed the balls and arm the frame loop.
    ///
    /// Refuses when there is nothing to simulate - no radii, or a
    /// degenerate playfield - and returns whether the session is
    /// running. Calling again on a running session is a no-op.
    pub fn start(&mut self, field: &Playfield, radii: &[f32]) -> bool {
        if self.started {
            return true;
        }
        let spawned = seed_balls(&mut self.world, field, radii, &mut self.rng);
        if spawned.is_empty() {
            log::warn!(
                "start refused: {} balls, {}x{} field",
                radii.len(),
                field.width,
                field.height
            );
            return false;
        }
        self.started = true;
        true
    }

    /// Advance one display frame. Does nothing before `start`.
    ///
    /// `now` is wall-clock seconds from any monotonic epoch; the
    /// geometry snapshot is re-read from the boundary every frame.
    pub fn step(&mut self, geometry: &Geometry, now: f32) {
        if !self.started {
            return;
        }
        let time = Time::new(now);
        step(
            &mut self.world,
            &time,
            geometry,
            &self.config,
            &mut self.score,
            &mut self.events,
        );
    }

    /// Begin a control session on the ball under the pointer, if any.
    /// The returned entity keys the follow-up `pointer_move` and
    /// `pointer_up` calls, so several balls can be held at once.
    pub fn pointer_down(&mut self, point: Vec2) -> Option<Entity> {
        let entity = ball_at(&self.world, point)?;
        start_grab(&mut self.world, entity, point);
        Some(entity)
    }

    pub fn pointer_move(&mut self, entity: Entity, point: Vec2) {
        drag_to(&mut self.world, entity, point);
    }

    pub fn pointer_up(&mut self, entity: Entity) {
        end_grab(&mut self.world, entity);
    }

    /// Current ball positions for the rendering boundary
    pub fn positions(&self) -> Vec<(Entity, Vec2)> {
        self.world
            .query::<&Ball>()
            .iter()
            .map(|(entity, ball)| (entity, ball.pos))
            .collect()
    }

    pub fn score(&self) -> u32 {
        self.score.get()
    }

    /// Event flags from the latest frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ball_count(&self) -> usize {
        self.world.query::<&Ball>().iter().count()
    }
}

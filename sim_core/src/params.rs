/// Tuning parameters for the balloon-ball simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Forces, per frame
    pub const GRAVITY: f32 = 0.12;
    pub const BUOYANCY: f32 = -0.08; // lifts against gravity for the balloon feel
    pub const DRIFT_STRENGTH: f32 = 0.03;
    pub const FRICTION: f32 = 0.995;

    // Boundary response
    pub const BOUNCE: f32 = 0.9;
    pub const FLOOR_DAMPING: f32 = 0.6; // floor absorbs more than the walls
    pub const CEILING_OFFSET: f32 = 20.0; // soft ceiling below the top edge

    // Ball-ball response
    pub const RESTITUTION: f32 = 0.85;

    // Hoop
    pub const RIM_LIP: f32 = 10.0; // solid width at each end of the rim band
    pub const RIM_RESTITUTION: f32 = 0.75;
    pub const RIM_KICK: f32 = 0.6; // horizontal shove away from the struck side
    pub const BASKET_INSET: f32 = 5.0;
    pub const BASKET_DROP: f32 = 2.0; // extra fall speed after a score

    // Spawning
    pub const SPAWN_MARGIN: f32 = 60.0;
    pub const SPAWN_FLOOR_OFFSET: f32 = 80.0;
    pub const SPAWN_SPEED: f32 = 1.2; // width of the random starting velocity range
    pub const DRIFT_PHASE_MAX: f32 = 1000.0;
}

/// Wall-clock time snapshot for the current frame
///
/// `now` is seconds since an arbitrary monotonic epoch, read directly
/// by the drift oscillation so sway speed tracks real time rather than
/// frame count.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now: f32,
}

impl Time {
    pub fn new(now: f32) -> Self {
        Self { now }
    }
}

/// Session score: a single monotonically increasing counter
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u32 {
        self.points
    }

    pub fn increment(&mut self) {
        self.points += 1;
    }
}

/// Random number generator
pub struct SimRng(pub rand::rngs::StdRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::new(54321)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub wall_bounce: bool,
    pub floor_bounce: bool,
    pub rim_hit: bool,
    pub scored: bool,
    pub ball_contact: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_bounce = false;
        self.floor_bounce = false;
        self.rim_hit = false;
        self.scored = false;
        self.ball_contact = false;
    }
}

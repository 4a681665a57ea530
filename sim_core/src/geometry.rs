use glam::Vec2;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Rectangular bounds the balls are confined to. Re-read from the
/// rendering boundary each frame; the host may resize it at any time.
#[derive(Debug, Clone, Copy)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest x the top-left corner of a ball of this radius may take
    pub fn max_x(&self, radius: f32) -> f32 {
        self.width - radius * 2.0
    }

    /// Largest y the top-left corner may take (the floor line)
    pub fn max_y(&self, radius: f32) -> f32 {
        self.height - radius * 2.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Hoop obstacle: a narrow rim band balls deflect off, and a wider
/// basket band whose entry registers a score.
#[derive(Debug, Clone, Copy)]
pub struct Hoop {
    pub rim: Rect,
    pub basket: Rect,
}

impl Hoop {
    pub fn new(rim: Rect, basket: Rect) -> Self {
        Self { rim, basket }
    }
}

/// Per-frame geometry snapshot supplied by the rendering boundary.
/// A missing hoop disables rim and basket checks for the frame.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub field: Playfield,
    pub hoop: Option<Hoop>,
}

impl Geometry {
    pub fn new(field: Playfield) -> Self {
        Self { field, hoop: None }
    }

    pub fn with_hoop(field: Playfield, hoop: Hoop) -> Self {
        Self {
            field,
            hoop: Some(hoop),
        }
    }
}

use crate::params::Params;

/// Runtime simulation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gravity: f32,
    pub buoyancy: f32,
    pub drift_strength: f32,
    pub friction: f32,
    pub bounce: f32,
    pub floor_damping: f32,
    pub ceiling_offset: f32,
    pub restitution: f32,
    pub rim_lip: f32,
    pub rim_restitution: f32,
    pub rim_kick: f32,
    pub basket_inset: f32,
    pub basket_drop: f32,
    /// Basket checks run only when set; the rim still deflects.
    pub scoring: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: Params::GRAVITY,
            buoyancy: Params::BUOYANCY,
            drift_strength: Params::DRIFT_STRENGTH,
            friction: Params::FRICTION,
            bounce: Params::BOUNCE,
            floor_damping: Params::FLOOR_DAMPING,
            ceiling_offset: Params::CEILING_OFFSET,
            restitution: Params::RESTITUTION,
            rim_lip: Params::RIM_LIP,
            rim_restitution: Params::RIM_RESTITUTION,
            rim_kick: Params::RIM_KICK,
            basket_inset: Params::BASKET_INSET,
            basket_drop: Params::BASKET_DROP,
            scoring: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain bouncing balls, no basket checks
    pub fn without_scoring() -> Self {
        Self {
            scoring: false,
            ..Self::default()
        }
    }

    /// Net vertical acceleration applied every frame
    pub fn net_gravity(&self) -> f32 {
        self.gravity + self.buoyancy
    }
}

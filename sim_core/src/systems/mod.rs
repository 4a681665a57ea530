pub mod collision;
pub mod grab;
pub mod hoop;
pub mod physics;

pub use collision::*;
pub use grab::*;
pub use hoop::*;
pub use physics::*;

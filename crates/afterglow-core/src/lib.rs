pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod fireworks;
pub mod mode;
pub mod particle;
pub mod spotlight;
pub mod stars;
pub mod surface;
pub mod timer;
pub mod trail;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use fireworks::Fireworks;
pub use mode::*;
pub use particle::*;
pub use spotlight::Spotlight;
pub use stars::StarField;
pub use surface::*;
pub use timer::*;
pub use trail::{Trail, TrailPoint};

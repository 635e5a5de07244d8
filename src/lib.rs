//! ReetKikker - a frog with a segmented tongue
//!
//! Core modules:
//! - `sim`: Frame-stepped model (creature, tongue chain, collision group)
//! - `renderer`: Drawing surface capability, render strategies, vertex batching
//! - `platform`: Input providers for drivers
//! - `settings`: Creature configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{CreatureConfig, Settings};
pub use sim::{Creature, Entity};

/// Game configuration constants
pub mod consts {
    /// Default screen dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Frame step used by the headless driver (60 FPS)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Creature defaults
    pub const CREATURE_SIZE: f32 = 40.0;
    pub const CREATURE_SPEED: f32 = 300.0;
    pub const TONGUE_SIZE: f32 = 10.0;
}

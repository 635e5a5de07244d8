//! Frame-stepped simulation module
//!
//! Everything that decides where things are lives here:
//! - Single-threaded, one `update` per creature per frame
//! - Elapsed time is trusted as given
//! - No platform or windowing dependencies

pub mod collision;
pub mod controls;
pub mod creature;
pub mod entity;
pub mod geometry;
pub mod tongue;

pub use collision::{CollisionGroup, SegmentId};
pub use controls::{Action, Direction, HeldKeys, InputState, KeyBindings, KeyCode};
pub use creature::Creature;
pub use entity::{Body, Entity};
pub use geometry::Bounds;
pub use tongue::{ChainOutcome, SegmentState, TongueChain, TongueSegment};

//! Platform abstraction layer
//!
//! Input providers that feed `sim::InputState` snapshots to a driver.
//! Window and keyboard polling live outside this crate.

pub mod autopilot;

pub use autopilot::Autopilot;

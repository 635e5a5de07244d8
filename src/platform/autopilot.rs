//! Scripted input for demo/idle mode
//!
//! Wanders in one direction for a while, then another, and now and then
//! holds the extend key for a short lick. Seeded, so a run is reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Action, Direction, HeldKeys, KeyBindings};

/// Frames a direction is held for
const WANDER_FRAMES: std::ops::Range<u32> = 5..40;
/// Frames the extend key is held for
const LICK_FRAMES: std::ops::Range<u32> = 3..25;
/// Chance per frame to start a lick
const LICK_CHANCE: f64 = 0.03;
/// Chance that a new wander leg stands still
const IDLE_CHANCE: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    bindings: KeyBindings,
    direction: Option<Direction>,
    wander_left: u32,
    lick_left: u32,
}

impl Autopilot {
    pub fn new(bindings: KeyBindings, seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            bindings,
            direction: None,
            wander_left: 0,
            lick_left: 0,
        }
    }

    /// Keys held during the next frame
    pub fn next_frame(&mut self) -> HeldKeys {
        if self.wander_left == 0 {
            self.direction = if self.rng.random_bool(IDLE_CHANCE) {
                None
            } else {
                let index = self.rng.random_range(0..Direction::ALL.len());
                Direction::ALL.get(index).copied()
            };
            self.wander_left = self.rng.random_range(WANDER_FRAMES);
        }
        self.wander_left -= 1;

        if self.lick_left == 0 && self.rng.random_bool(LICK_CHANCE) {
            self.lick_left = self.rng.random_range(LICK_FRAMES);
        }

        let mut keys = HeldKeys::new();
        if let Some(direction) = self.direction {
            keys.press(self.bindings.code(Action::Move(direction)));
        }
        if self.lick_left > 0 {
            self.lick_left -= 1;
            keys.press(self.bindings.code(Action::Extend));
        }
        keys
    }
}

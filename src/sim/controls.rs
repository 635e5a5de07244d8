//! Directions, key bindings and the input snapshot capability

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Cardinal facing of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Scan order used when the current direction is no longer held
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step in screen space (y grows downward)
    pub fn step(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    /// Clockwise rotation from `Up` in radians (for sprite blits)
    pub fn rotation(self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Direction::Up => 0.0,
            Direction::Right => FRAC_PI_2,
            Direction::Down => PI,
            Direction::Left => PI + FRAC_PI_2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Logical actions a creature reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Move(Direction),
    Extend,
}

/// Input-device key code (SDL keycode values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const SPACE: KeyCode = KeyCode(32);
    pub const A: KeyCode = KeyCode(97);
    pub const D: KeyCode = KeyCode(100);
    pub const P: KeyCode = KeyCode(112);
    pub const S: KeyCode = KeyCode(115);
    pub const W: KeyCode = KeyCode(119);
    pub const RIGHT: KeyCode = KeyCode(1_073_741_903);
    pub const LEFT: KeyCode = KeyCode(1_073_741_904);
    pub const DOWN: KeyCode = KeyCode(1_073_741_905);
    pub const UP: KeyCode = KeyCode(1_073_741_906);
}

/// Capability to ask whether a key is currently held
pub trait InputState {
    fn is_held(&self, code: KeyCode) -> bool;
}

/// Plain snapshot of held keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    held: HashSet<KeyCode>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, code: KeyCode) {
        self.held.insert(code);
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

impl FromIterator<KeyCode> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

impl InputState for HeldKeys {
    fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }
}

/// Mapping from the five logical actions to key codes
///
/// Shared by a creature and every tongue segment it spawns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: KeyCode,
    pub right: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    /// Stick the tongue out ("lick")
    #[serde(alias = "lick")]
    pub extend: KeyCode,
}

impl KeyBindings {
    /// W/D/S/A + Space
    pub fn wasd() -> Self {
        Self {
            up: KeyCode::W,
            right: KeyCode::D,
            down: KeyCode::S,
            left: KeyCode::A,
            extend: KeyCode::SPACE,
        }
    }

    /// Arrow keys + P
    pub fn arrows() -> Self {
        Self {
            up: KeyCode::UP,
            right: KeyCode::RIGHT,
            down: KeyCode::DOWN,
            left: KeyCode::LEFT,
            extend: KeyCode::P,
        }
    }

    pub fn code(&self, action: Action) -> KeyCode {
        match action {
            Action::Move(Direction::Up) => self.up,
            Action::Move(Direction::Right) => self.right,
            Action::Move(Direction::Down) => self.down,
            Action::Move(Direction::Left) => self.left,
            Action::Extend => self.extend,
        }
    }

    pub fn is_held(&self, action: Action, input: &dyn InputState) -> bool {
        input.is_held(self.code(action))
    }

    pub fn extend_held(&self, input: &dyn InputState) -> bool {
        self.is_held(Action::Extend, input)
    }

    /// All five codes in action order
    pub fn codes(&self) -> [KeyCode; 5] {
        [self.up, self.right, self.down, self.left, self.extend]
    }

    /// First code bound to more than one action, if any
    pub fn duplicate_code(&self) -> Option<KeyCode> {
        let codes = self.codes();
        codes
            .iter()
            .enumerate()
            .find(|(i, code)| codes[i + 1..].contains(*code))
            .map(|(_, code)| *code)
    }

    /// Pick the direction to travel this frame.
    ///
    /// Keeps `current` while its key is held, so holding a second direction
    /// does not cause a switch. Otherwise the first held direction in
    /// `Direction::ALL` order wins. `None` when no direction key is held.
    pub fn resolve_direction(
        &self,
        current: Direction,
        input: &dyn InputState,
    ) -> Option<Direction> {
        if self.is_held(Action::Move(current), input) {
            return Some(current);
        }
        Direction::ALL
            .into_iter()
            .filter(|dir| *dir != current)
            .find(|dir| self.is_held(Action::Move(*dir), input))
    }
}

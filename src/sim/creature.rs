//! The ReetKikker: a player-controlled frog with a tongue
//!
//! While no tongue is out the frog walks. Pressing the extend key shoots a
//! tongue out of the side it is facing; from then on every frame goes to
//! the tongue until it has fully retracted.

use std::rc::Rc;

use glam::Vec2;
use log::debug;

use super::collision::CollisionGroup;
use super::controls::InputState;
use super::entity::{Body, Entity};
use super::tongue::{ChainOutcome, TongueChain};
use crate::renderer::{Color, RenderStrategy, SolidRect, Surface, colors};

#[derive(Debug, Clone)]
pub struct Creature {
    body: Body,
    /// Size of each tongue segment
    tongue_size: Vec2,
    tongue_color: Color,
    tongue_appearance: Rc<dyn RenderStrategy>,
    tongue: Option<TongueChain>,
    /// Every live segment of the current tongue
    group: CollisionGroup,
    /// Extend key state last frame, for edge detection
    extend_was_held: bool,
}

impl Creature {
    /// Tongue segments default to pink `SolidRect`s
    pub fn new(body: Body, tongue_size: Vec2) -> Self {
        Self {
            body,
            tongue_size,
            tongue_color: colors::PINK,
            tongue_appearance: Rc::new(SolidRect),
            tongue: None,
            group: CollisionGroup::new(),
            extend_was_held: false,
        }
    }

    /// How tongue segments are drawn. Applies to tongues launched afterwards.
    pub fn with_tongue_look(mut self, color: Color, appearance: Rc<dyn RenderStrategy>) -> Self {
        self.tongue_color = color;
        self.tongue_appearance = appearance;
        self
    }

    /// Advance one frame. `dt` is in seconds and used as given.
    pub fn update(&mut self, dt: f32, input: &dyn InputState) {
        let extend_held = self.body.key_bindings.extend_held(input);

        if let Some(tongue) = self.tongue.as_mut() {
            if tongue.update(input, &mut self.group) == ChainOutcome::Inactive {
                debug!("Tongue fully retracted");
                self.tongue = None;
                self.group = CollisionGroup::new();
            }
        } else {
            self.walk(dt, input);
            // Edge-triggered: holding extend through a collapse does not relaunch
            if extend_held && !self.extend_was_held {
                self.launch_tongue();
            }
        }

        self.extend_was_held = extend_held;
    }

    /// Move at most one direction, preferring the one already held
    fn walk(&mut self, dt: f32, input: &dyn InputState) {
        let Some(direction) = self
            .body
            .key_bindings
            .resolve_direction(self.body.direction, input)
        else {
            return;
        };
        self.body.direction = direction;
        self.body.position += direction.step() * self.body.movement_speed * dt;
    }

    fn launch_tongue(&mut self) {
        let mut head = self
            .body
            .clone()
            .with_color(self.tongue_color)
            .with_appearance(Rc::clone(&self.tongue_appearance));
        head.size = self.tongue_size;
        head.position = self
            .body
            .bounds()
            .beside(self.body.direction, self.tongue_size)
            .position;
        debug!(
            "Tongue out facing {} from ({:.1}, {:.1})",
            self.body.direction.as_str(),
            self.body.position.x,
            self.body.position.y
        );
        self.tongue = Some(TongueChain::launch(head, &mut self.group));
    }

    pub fn tongue(&self) -> Option<&TongueChain> {
        self.tongue.as_ref()
    }

    /// Number of live tongue segments (0 when retracted)
    pub fn tongue_len(&self) -> usize {
        self.tongue.as_ref().map_or(0, TongueChain::len)
    }

    pub fn is_licking(&self) -> bool {
        self.tongue.is_some()
    }

    pub fn collision_group(&self) -> &CollisionGroup {
        &self.group
    }

    pub fn tongue_size(&self) -> Vec2 {
        self.tongue_size
    }

    pub fn tongue_color(&self) -> Color {
        self.tongue_color
    }
}

impl Entity for Creature {
    fn body(&self) -> &Body {
        &self.body
    }

    /// Tongue first, then the frog on top
    fn render(&self, surface: &mut dyn Surface) {
        if let Some(tongue) = &self.tongue {
            tongue.render(surface);
        }
        self.body.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Settings;
    use crate::consts::FRAME_DT;
    use crate::renderer::{DirectionalSprite, DrawCall, RecordingSurface, SpriteId};
    use crate::sim::{Direction, HeldKeys, KeyBindings, KeyCode};

    fn frog(speed: f32) -> Creature {
        let body = Body::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(10.0, 10.0),
            speed,
            Rc::new(KeyBindings::wasd()),
        );
        Creature::new(body, Vec2::new(10.0, 10.0))
    }

    fn keys(codes: &[KeyCode]) -> HeldKeys {
        codes.iter().copied().collect()
    }

    #[test]
    fn test_walk_right() {
        let mut creature = frog(300.0);
        creature.update(0.1, &keys(&[KeyCode::D]));
        assert!((creature.position() - Vec2::new(130.0, 100.0)).length() < 1e-3);
        assert_eq!(creature.direction(), Direction::Right);
    }

    #[test]
    fn test_no_keys_no_movement() {
        let mut creature = frog(300.0);
        creature.update(0.5, &HeldKeys::new());
        assert_eq!(creature.position(), Vec2::new(100.0, 100.0));
        assert_eq!(creature.direction(), Direction::Up);
    }

    #[test]
    fn test_sticky_direction_while_walking() {
        let mut creature = frog(100.0);
        creature.update(0.1, &keys(&[KeyCode::W]));
        creature.update(0.1, &keys(&[KeyCode::W, KeyCode::D]));
        assert_eq!(creature.direction(), Direction::Up);
        assert!((creature.position() - Vec2::new(100.0, 80.0)).length() < 1e-3);

        creature.update(0.1, &keys(&[KeyCode::D]));
        assert_eq!(creature.direction(), Direction::Right);
        assert!((creature.position() - Vec2::new(110.0, 80.0)).length() < 1e-3);
    }

    #[test]
    fn test_release_without_tongue_never_launches() {
        let mut creature = frog(300.0);
        for _ in 0..10 {
            creature.update(0.016, &HeldKeys::new());
            assert!(!creature.is_licking());
        }
    }

    #[test]
    fn test_extend_then_release_timeline() {
        let mut creature = frog(300.0);
        let extend = keys(&[KeyCode::SPACE]);
        let none = HeldKeys::new();

        // Frames 1-3: one segment per frame
        for expected in 1..=3 {
            creature.update(0.016, &extend);
            assert_eq!(creature.tongue_len(), expected);
            assert_eq!(creature.collision_group().len(), expected);
        }
        let head = creature.tongue().and_then(TongueChain::head).map(Entity::position);
        assert_eq!(head, Some(Vec2::new(100.0, 90.0)));

        // Frame 4: tip removed, new tip flagged
        creature.update(0.016, &none);
        assert_eq!(creature.tongue_len(), 2);
        assert!(creature.tongue().is_some_and(TongueChain::is_retracting));

        // Frames 5 and 6
        creature.update(0.016, &none);
        assert_eq!(creature.tongue_len(), 1);
        creature.update(0.016, &none);
        assert!(!creature.is_licking());
        assert!(creature.collision_group().is_empty());

        // Frame 7: walking again, frog never moved while licking
        assert_eq!(creature.position(), Vec2::new(100.0, 100.0));
        creature.update(0.1, &keys(&[KeyCode::D]));
        assert!((creature.position() - Vec2::new(130.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn test_holding_extend_through_collapse_needs_release() {
        let mut creature = frog(300.0);
        let extend = keys(&[KeyCode::SPACE]);

        // Fold back onto the head: up, right, down, left, up
        creature.update(0.016, &extend);
        creature.update(0.016, &keys(&[KeyCode::SPACE, KeyCode::D]));
        creature.update(0.016, &keys(&[KeyCode::SPACE, KeyCode::S]));
        creature.update(0.016, &keys(&[KeyCode::SPACE, KeyCode::A]));
        creature.update(0.016, &keys(&[KeyCode::SPACE, KeyCode::W]));
        assert_eq!(creature.tongue_len(), 5);

        let mut frames = 0;
        while creature.is_licking() {
            creature.update(0.016, &extend);
            frames += 1;
            assert!(frames <= 5, "tongue should collapse within five frames");
        }
        assert_eq!(frames, 5);

        // Still held: no relaunch
        creature.update(0.016, &extend);
        assert!(!creature.is_licking());

        // Release then press again
        creature.update(0.016, &HeldKeys::new());
        creature.update(0.016, &extend);
        assert_eq!(creature.tongue_len(), 1);
    }

    #[test]
    fn test_tongue_launches_in_facing_direction() {
        let mut creature = frog(0.0);
        creature.update(0.016, &keys(&[KeyCode::A]));
        creature.update(0.016, &keys(&[KeyCode::A, KeyCode::SPACE]));
        let head = creature.tongue().and_then(TongueChain::head).map(Entity::position);
        assert_eq!(head, Some(Vec2::new(90.0, 100.0)));
    }

    #[test]
    fn test_smaller_tongue_is_centered_on_mouth() {
        let body = Body::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(40.0, 40.0),
            300.0,
            Rc::new(KeyBindings::wasd()),
        );
        let mut creature = Creature::new(body, Vec2::new(10.0, 10.0));
        creature.update(0.016, &keys(&[KeyCode::SPACE]));
        let head = creature.tongue().and_then(TongueChain::head);
        assert_eq!(head.map(Entity::position), Some(Vec2::new(15.0, -10.0)));
        assert_eq!(head.map(Entity::size), Some(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_render_order_tip_to_root_then_creature() {
        let mut creature = frog(300.0);
        let extend = keys(&[KeyCode::SPACE]);
        for _ in 0..4 {
            creature.update(0.016, &extend);
        }

        let mut surface = RecordingSurface::new();
        creature.render(&mut surface);
        let ys: Vec<f32> = surface.calls.iter().map(|c| c.bounds().position.y).collect();
        assert_eq!(ys, vec![60.0, 70.0, 80.0, 90.0, 100.0]);
        assert!(matches!(surface.calls.last(), Some(DrawCall::Rect { .. })));
    }

    #[test]
    fn test_default_frog_licks_after_walking_up_at_frame_rate() {
        let walk = keys(&[KeyCode::W]);
        let extend = keys(&[KeyCode::SPACE]);
        // Walking up at 300 px/s for 30..45 frames passes y = 5 off the 10 px lattice
        for walk_frames in 30..45 {
            let mut creature = Settings::default().creatures[0].build().expect("default config");
            for _ in 0..walk_frames {
                creature.update(FRAME_DT, &walk);
            }
            for expected in 1..=8 {
                creature.update(FRAME_DT, &extend);
                assert_eq!(
                    creature.tongue_len(),
                    expected,
                    "after {walk_frames} walking frames at y = {}",
                    creature.position().y
                );
            }
        }
    }

    #[test]
    fn test_tongue_has_its_own_look() {
        let body = Body::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(40.0, 40.0),
            300.0,
            Rc::new(KeyBindings::wasd()),
        )
        .with_appearance(Rc::new(DirectionalSprite::new(SpriteId(1))));
        let mut creature = Creature::new(body, Vec2::new(10.0, 10.0));
        assert_eq!(creature.tongue_color(), colors::PINK);

        let extend = keys(&[KeyCode::SPACE]);
        creature.update(0.016, &extend);
        creature.update(0.016, &extend);

        let mut surface = RecordingSurface::new();
        creature.render(&mut surface);
        assert_eq!(surface.calls.len(), 3);
        for call in &surface.calls[..2] {
            assert!(matches!(call, DrawCall::Rect { color, .. } if *color == colors::PINK));
        }
        assert!(matches!(surface.calls[2], DrawCall::Sprite { sprite: SpriteId(1), .. }));

        // Custom look
        let mut creature = creature.with_tongue_look(
            colors::RED,
            Rc::new(DirectionalSprite::new(SpriteId(2))),
        );
        creature.update(0.016, &HeldKeys::new());
        creature.update(0.016, &HeldKeys::new());
        creature.update(0.016, &HeldKeys::new());
        creature.update(0.016, &extend);
        let mut surface = RecordingSurface::new();
        creature.render(&mut surface);
        assert!(matches!(surface.calls[0], DrawCall::Sprite { sprite: SpriteId(2), .. }));
    }

    fn frame_input() -> impl Strategy<Value = Vec<KeyCode>> {
        prop::collection::vec(
            prop::sample::select(vec![
                KeyCode::W,
                KeyCode::D,
                KeyCode::S,
                KeyCode::A,
                KeyCode::SPACE,
                KeyCode::UP,
            ]),
            0..4,
        )
    }

    proptest! {
        #[test]
        fn prop_tongue_grows_and_collapses_one_per_frame(frames in prop::collection::vec(frame_input(), 1..80)) {
            let mut creature = frog(120.0);
            let mut prev_len = 0usize;
            let mut was_retracting = false;

            for codes in &frames {
                let input: HeldKeys = codes.iter().copied().collect();
                creature.update(1.0 / 60.0, &input);
                let len = creature.tongue_len();

                // Group membership mirrors the live chain
                prop_assert_eq!(creature.collision_group().len(), len);

                if was_retracting {
                    // Collapse is one segment per frame, never regrows
                    prop_assert_eq!(len + 1, prev_len);
                } else {
                    prop_assert!(len <= prev_len + 1);
                }

                if let Some(tongue) = creature.tongue() {
                    let segments = tongue.segments();
                    // Only the tip may be retracting
                    let (tip, rest) = segments.split_last().expect("live tongue has a tip");
                    prop_assert!(rest.iter().all(|s| !s.is_retracting()));
                    was_retracting = tip.is_retracting();
                } else {
                    was_retracting = false;
                }
                prev_len = len;
            }
        }

        #[test]
        fn prop_straight_tongue_grows_from_any_start(
            x in -500.0f32..1500.0,
            y in -500.0f32..1000.0,
            dir in prop::sample::select(vec![KeyCode::W, KeyCode::D, KeyCode::S, KeyCode::A]),
        ) {
            let body = Body::new(
                Vec2::new(x, y),
                Vec2::new(40.0, 40.0),
                300.0,
                Rc::new(KeyBindings::wasd()),
            );
            let mut creature = Creature::new(body, Vec2::new(10.0, 10.0));
            // Turn to face the direction without moving far
            creature.update(1e-4, &keys(&[dir]));
            let held = keys(&[KeyCode::SPACE, dir]);
            for expected in 1..=15 {
                creature.update(1.0 / 60.0, &held);
                prop_assert_eq!(creature.tongue_len(), expected);
            }
        }

        #[test]
        fn prop_render_tip_first(n in 1usize..40) {
            let mut creature = frog(120.0);
            let extend = keys(&[KeyCode::SPACE]);
            for _ in 0..n {
                creature.update(1.0 / 60.0, &extend);
            }
            prop_assert_eq!(creature.tongue_len(), n);

            let mut surface = RecordingSurface::new();
            creature.render(&mut surface);
            prop_assert_eq!(surface.calls.len(), n + 1);

            let segments = creature.tongue().map(TongueChain::segments).unwrap_or_default();
            for (call, segment) in surface.calls.iter().zip(segments.iter().rev()) {
                prop_assert_eq!(call.bounds(), segment.bounds());
            }
            prop_assert_eq!(surface.calls[n].bounds(), creature.bounds());
        }
    }
}

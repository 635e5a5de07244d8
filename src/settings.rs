//! Creature and driver configuration
//!
//! Stored as JSON. Missing top-level fields fall back to the defaults, which
//! reproduce the classic two-frog setup.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::{DirectionalSprite, RenderStrategy, SolidRect, SpriteId, colors};
use crate::sim::{Body, Creature, KeyBindings};

/// Everything needed to build one creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureConfig {
    pub name: String,
    /// Color name or `#rrggbb`
    #[serde(default = "default_color")]
    pub color: String,
    /// Top-left corner at session start
    pub start_position: Vec2,
    #[serde(default = "default_size")]
    pub size: Vec2,
    #[serde(default = "default_tongue_size")]
    pub tongue_size: Vec2,
    /// Pixels per second
    #[serde(default = "default_speed")]
    pub movement_speed: f32,
    pub key_bindings: KeyBindings,
    /// Draw with this sprite instead of a flat rectangle
    #[serde(default)]
    pub sprite: Option<SpriteId>,
    /// Color name or `#rrggbb` for tongue segments
    #[serde(default = "default_tongue_color")]
    pub tongue_color: String,
    /// Draw tongue segments with this sprite instead of a flat rectangle
    #[serde(default)]
    pub tongue_sprite: Option<SpriteId>,
}

fn default_color() -> String {
    "green".to_owned()
}

fn default_tongue_color() -> String {
    "pink".to_owned()
}

fn default_size() -> Vec2 {
    Vec2::splat(CREATURE_SIZE)
}

fn default_tongue_size() -> Vec2 {
    Vec2::splat(TONGUE_SIZE)
}

fn default_speed() -> f32 {
    CREATURE_SPEED
}

impl CreatureConfig {
    pub fn new(name: &str, start_position: Vec2, key_bindings: KeyBindings) -> Self {
        Self {
            name: name.to_owned(),
            color: default_color(),
            start_position,
            size: default_size(),
            tongue_size: default_tongue_size(),
            movement_speed: default_speed(),
            key_bindings,
            sprite: None,
            tongue_color: default_tongue_color(),
            tongue_sprite: None,
        }
    }

    /// Check sizes, speed, color and key bindings
    pub fn validate(&self) -> Result<()> {
        ensure!(
            is_positive(self.size),
            "creature '{}': size must be positive, got {:?}",
            self.name,
            self.size
        );
        ensure!(
            is_positive(self.tongue_size),
            "creature '{}': tongue_size must be positive, got {:?}",
            self.name,
            self.tongue_size
        );
        ensure!(
            self.movement_speed.is_finite() && self.movement_speed > 0.0,
            "creature '{}': movement_speed must be positive, got {}",
            self.name,
            self.movement_speed
        );
        ensure!(
            self.start_position.is_finite(),
            "creature '{}': start_position must be finite",
            self.name
        );
        for color in [&self.color, &self.tongue_color] {
            if colors::parse(color).is_none() {
                bail!("creature '{}': unknown color '{}'", self.name, color);
            }
        }
        if let Some(code) = self.key_bindings.duplicate_code() {
            bail!(
                "creature '{}': key code {} is bound to more than one action",
                self.name,
                code.0
            );
        }
        Ok(())
    }

    /// Build the creature described by this config
    pub fn build(&self) -> Result<Creature> {
        self.validate()?;
        let color = colors::parse(&self.color)
            .with_context(|| format!("creature '{}': unknown color", self.name))?;
        let tongue_color = colors::parse(&self.tongue_color)
            .with_context(|| format!("creature '{}': unknown tongue color", self.name))?;

        let mut body = Body::new(
            self.start_position,
            self.size,
            self.movement_speed,
            Rc::new(self.key_bindings.clone()),
        )
        .with_color(color);
        if let Some(sprite) = self.sprite {
            body = body.with_appearance(Rc::new(DirectionalSprite::new(sprite)));
        }
        let tongue_appearance: Rc<dyn RenderStrategy> = match self.tongue_sprite {
            Some(sprite) => Rc::new(DirectionalSprite::new(sprite)),
            None => Rc::new(SolidRect),
        };
        Ok(Creature::new(body, self.tongue_size)
            .with_tongue_look(tongue_color, tongue_appearance))
    }
}

fn is_positive(v: Vec2) -> bool {
    v.is_finite() && v.x > 0.0 && v.y > 0.0
}

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_size: Vec2,
    /// Seconds per frame for the headless driver
    pub frame_dt: f32,
    pub creatures: Vec<CreatureConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        let screen = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        Self {
            screen_size: screen,
            frame_dt: FRAME_DT,
            creatures: vec![
                CreatureConfig::new("player one", screen / 4.0, KeyBindings::wasd()),
                CreatureConfig::new("player two", screen / 8.0, KeyBindings::arrows()),
            ],
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&json)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Read settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {e:#}");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, json).with_context(|| format!("writing settings to {}", path.display()))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.frame_dt.is_finite() && self.frame_dt > 0.0,
            "frame_dt must be positive, got {}",
            self.frame_dt
        );
        for creature in &self.creatures {
            creature.validate()?;
        }
        Ok(())
    }

    /// One creature per configured player
    pub fn build_creatures(&self) -> Result<Vec<Creature>> {
        self.creatures.iter().map(CreatureConfig::build).collect()
    }
}

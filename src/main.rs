//! ReetKikker entry point
//!
//! Headless driver: builds the configured frogs, feeds them autopilot
//! input and runs update-then-render once per frame.
//!
//! Usage: `reetkikker [settings.json] [frames]`

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;

use reetkikker::platform::Autopilot;
use reetkikker::renderer::VertexSurface;
use reetkikker::sim::Bounds;
use reetkikker::{Creature, Entity, Settings};

const DEFAULT_FRAMES: u32 = 600;

/// What happened during a run, per creature
#[derive(Debug, Default)]
struct RunStats {
    longest_tongue: usize,
    licks: u32,
    /// Tongues that retracted all the way back into the frog
    collapses: u32,
    screen_exits: u32,
    offscreen: bool,
}

impl RunStats {
    /// Fold one creature update into the counters
    fn record(&mut self, name: &str, was_licking: bool, creature: &Creature, screen: &Bounds) {
        let licking = creature.is_licking();
        if licking && !was_licking {
            self.licks += 1;
        }
        if was_licking && !licking {
            self.collapses += 1;
            log::debug!("{}: tongue fully retracted", name);
        }
        self.longest_tongue = self.longest_tongue.max(creature.tongue_len());

        let offscreen = !screen.contains_point(creature.bounds().center());
        if offscreen != self.offscreen {
            self.offscreen = offscreen;
            if offscreen {
                self.screen_exits += 1;
                let pos = creature.position();
                log::info!("{} left the screen at ({:.1}, {:.1})", name, pos.x, pos.y);
            } else {
                log::debug!("{} is back on screen", name);
            }
        }
    }
}

fn run(settings: &Settings, frames: u32) -> Result<Vec<RunStats>> {
    let mut creatures = settings.build_creatures()?;
    let mut pilots: Vec<Autopilot> = settings
        .creatures
        .iter()
        .zip(0u64..)
        .map(|(config, seed)| Autopilot::new(config.key_bindings.clone(), seed))
        .collect();
    let mut stats: Vec<RunStats> = creatures.iter().map(|_| RunStats::default()).collect();
    let screen = Bounds::new(Vec2::ZERO, settings.screen_size);
    let mut surface = VertexSurface::new();
    let mut peak_vertices = 0;

    for frame in 0..frames {
        for (((config, creature), pilot), stat) in settings
            .creatures
            .iter()
            .zip(creatures.iter_mut())
            .zip(&mut pilots)
            .zip(&mut stats)
        {
            let was_licking = creature.is_licking();
            creature.update(settings.frame_dt, &pilot.next_frame());
            stat.record(&config.name, was_licking, creature, &screen);
        }

        surface.clear();
        for creature in &creatures {
            creature.render(&mut surface);
        }
        peak_vertices = peak_vertices.max(surface.vertex_count());
        log::trace!(
            "Frame {}: {} batches, {} vertices",
            frame,
            surface.batches().len(),
            surface.vertex_count()
        );
    }

    for ((config, creature), stat) in settings.creatures.iter().zip(&creatures).zip(&stats) {
        let pos = creature.position();
        log::info!(
            "{}: {} licks, {} collapses, longest tongue {} segments, left the screen {} times, ended at ({:.1}, {:.1})",
            config.name,
            stat.licks,
            stat.collapses,
            stat.longest_tongue,
            stat.screen_exits,
            pos.x,
            pos.y
        );
    }
    log::info!("Peak vertex count per frame: {}", peak_vertices);
    Ok(stats)
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("ReetKikker (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(Path::new(&path)),
        None => Settings::default(),
    };
    let frames = match args.next() {
        Some(n) => n
            .parse::<u32>()
            .with_context(|| format!("frame count must be a number, got '{n}'"))?,
        None => DEFAULT_FRAMES,
    };

    log::info!(
        "Running {} frames for {} creatures on a {}x{} screen",
        frames,
        settings.creatures.len(),
        settings.screen_size.x,
        settings.screen_size.y
    );
    run(&settings, frames)?;
    Ok(())
}

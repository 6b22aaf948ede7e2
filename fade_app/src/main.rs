//! Crossfade demo application
//!
//! Drives one full scene transition against a simulated content loader at
//! roughly 60 Hz, logging phase changes and overlay opacity. Run with
//! `RUST_LOG=debug` to see the per-tick detail.

use crossfade::prelude::*;
use std::thread;
use std::time::{Duration, Instant};

/// How long the simulated backend takes to fully load a scene
const SIM_LOAD_SECS: f32 = 0.4;

struct SimHandle {
    scene: String,
    started: Instant,
}

impl LoadHandle for SimHandle {
    fn progress(&self) -> f32 {
        (self.started.elapsed().as_secs_f32() / SIM_LOAD_SECS).min(1.0)
    }

    fn commit(&mut self) {
        log::info!("scene {:?} is now live", self.scene);
    }
}

/// Loader whose loads complete over wall-clock time
struct SimLoader;

impl ContentLoader for SimLoader {
    type Handle = SimHandle;

    fn start_load(&mut self, id: &str) -> Result<SimHandle, LoadError> {
        if id.is_empty() {
            return Err(LoadError::UnknownScene(id.to_string()));
        }
        Ok(SimHandle {
            scene: id.to_string(),
            started: Instant::now(),
        })
    }
}

/// Overlay surface that reports state changes through the log
struct LogOverlay {
    visible: bool,
}

impl OverlaySurface for LogOverlay {
    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            log::info!("overlay {}", if visible { "shown" } else { "hidden" });
        }
    }

    fn set_opacity(&mut self, opacity: f32) {
        log::debug!("overlay opacity {opacity:.2}");
    }
}

fn main() {
    crossfade::foundation::logging::init();
    log::info!("Starting crossfade demo...");

    let config = TransitionConfig::default();
    let mut controller =
        TransitionController::new(config, SimLoader, Some(LogOverlay { visible: false }));
    controller.begin("hangar_bay");

    let mut timer = TickTimer::new();
    let mut last_phase = controller.phase();

    while !controller.is_complete() {
        thread::sleep(Duration::from_millis(16));
        controller.tick(timer.tick());

        let phase = controller.phase();
        if phase != last_phase {
            log::info!("phase: {last_phase:?} -> {phase:?}");
            last_phase = phase;
        }
        if controller.is_loading() && controller.load_progress() >= 0.0 {
            log::debug!("load progress {:.0}%", controller.load_progress() * 100.0);
        }
    }

    log::info!(
        "Transition finished after {} ticks ({:.2}s)",
        timer.tick_count(),
        timer.total_secs()
    );
}

//! Transition orchestration
//!
//! `TransitionController` owns the configuration, the re-entrancy guard,
//! and the phase sequence for exactly one scene swap. One controller
//! instance serves one transition: the host observes
//! [`is_complete`](TransitionController::is_complete) and drops the
//! controller, building a fresh one for the next swap.

use crate::config::TransitionConfig;
use crate::host::{ContentLoader, DiagnosticsSink, LogDiagnostics, OverlaySurface};
use crate::transition::fade::FadeAnimator;
use crate::transition::load::LoadWatcher;

/// Lifecycle phase of one scene transition
///
/// Phases only ever move forward through the listed order; `Complete` is
/// terminal and no phase is revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Created; waiting for `begin`
    Idle,
    /// Overlay fading from transparent to opaque
    FadingIn,
    /// Next scene loading behind the opaque overlay
    Loading,
    /// Overlay fading from opaque back to transparent
    FadingOut,
    /// Transition finished; the controller is spent
    Complete,
}

/// Orchestrates one crossfade scene transition
///
/// Drive it by calling [`tick`](Self::tick) once per host frame with the
/// wall-clock delta. Nothing here blocks, and nothing here panics: misuse
/// and degraded paths are routed to the diagnostics sink while the
/// transition still runs to `Complete`.
pub struct TransitionController<L: ContentLoader, O: OverlaySurface> {
    config: TransitionConfig,
    loader: L,
    overlay: Option<O>,
    diagnostics: Box<dyn DiagnosticsSink>,
    phase: TransitionPhase,
    is_loading: bool,
    overlay_opacity: f32,
    fade: Option<FadeAnimator>,
    watcher: LoadWatcher<L::Handle>,
    target: String,
}

impl<L: ContentLoader, O: OverlaySurface> TransitionController<L, O> {
    /// Create a controller reporting through the `log` facade
    pub fn new(config: TransitionConfig, loader: L, overlay: Option<O>) -> Self {
        Self::with_diagnostics(config, loader, overlay, Box::new(LogDiagnostics))
    }

    /// Create a controller with an explicit diagnostics sink
    ///
    /// A missing overlay surface is a configuration error, reported once
    /// here; the transition still runs, just without a visible fade. A
    /// present surface is reset to hidden and fully transparent.
    pub fn with_diagnostics(
        config: TransitionConfig,
        loader: L,
        mut overlay: Option<O>,
        mut diagnostics: Box<dyn DiagnosticsSink>,
    ) -> Self {
        match overlay.as_mut() {
            Some(surface) => {
                surface.set_opacity(0.0);
                surface.set_visible(false);
            }
            None => diagnostics
                .error("overlay surface missing; transition will run without a visible fade"),
        }

        Self {
            config,
            loader,
            overlay,
            diagnostics,
            phase: TransitionPhase::Idle,
            is_loading: false,
            overlay_opacity: 0.0,
            fade: None,
            watcher: LoadWatcher::new(),
            target: String::new(),
        }
    }

    /// Start the transition to the scene named by `target`
    ///
    /// Rejected with a warning if a transition is already running or this
    /// controller has already completed one; the caller builds a new
    /// controller per swap. Completion is observed through
    /// [`phase`](Self::phase), not a return value.
    pub fn begin(&mut self, target: &str) {
        if self.is_loading || self.watcher.has_handle() {
            self.diagnostics
                .warn("scene transition already in progress; begin ignored");
            return;
        }
        if self.phase != TransitionPhase::Idle {
            self.diagnostics
                .warn("transition controller already spent; create a new one");
            return;
        }

        log::info!("scene transition started: {target:?}");
        self.target = target.to_string();
        self.is_loading = true;
        self.phase = TransitionPhase::FadingIn;
        self.arm_fade(0.0, 1.0, self.config.fade_in_secs);
    }

    /// Advance the transition by one tick of `dt` wall-clock seconds
    ///
    /// No-op while `Idle` or after `Complete`. Each wait state yields
    /// exactly once per tick; phases never overlap.
    pub fn tick(&mut self, dt: f32) {
        match self.phase {
            TransitionPhase::Idle | TransitionPhase::Complete => {}
            TransitionPhase::FadingIn => {
                if self.advance_fade(dt) {
                    self.fade = None;
                    self.phase = TransitionPhase::Loading;
                    self.watcher.begin(
                        &self.target,
                        self.config.activation_threshold,
                        self.config.post_load_delay_secs,
                    );
                }
            }
            TransitionPhase::Loading => {
                let done = self
                    .watcher
                    .advance(dt, &mut self.loader, &mut *self.diagnostics);
                if done {
                    self.phase = TransitionPhase::FadingOut;
                    self.arm_fade(1.0, 0.0, self.config.fade_out_secs);
                }
            }
            TransitionPhase::FadingOut => {
                if self.advance_fade(dt) {
                    self.fade = None;
                    self.complete();
                }
            }
        }
    }

    /// Current phase
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// True from an accepted `begin` until `Complete`
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// True once the transition has finished and the controller is spent
    pub fn is_complete(&self) -> bool {
        self.phase == TransitionPhase::Complete
    }

    /// Live load progress in `[0, 1]`, or `-1.0` while no load is in flight
    pub fn load_progress(&self) -> f32 {
        self.watcher.progress()
    }

    /// Most recent overlay opacity sample, in `[0, 1]`
    pub fn overlay_opacity(&self) -> f32 {
        self.overlay_opacity
    }

    /// Start a fade; shows the surface and seeds its opacity first
    fn arm_fade(&mut self, from: f32, to: f32, duration_secs: f32) {
        if let Some(surface) = self.overlay.as_mut() {
            surface.set_visible(true);
            surface.set_opacity(from);
        }
        self.overlay_opacity = from;
        self.fade = Some(FadeAnimator::new(from, to, duration_secs));
    }

    /// Advance the active fade one tick; returns true when it finished
    ///
    /// With no overlay surface the fade is instantaneous and no surface
    /// call is made — the sequence proceeds regardless.
    fn advance_fade(&mut self, dt: f32) -> bool {
        match self.fade.as_mut() {
            None => true,
            Some(fade) => {
                if let Some(surface) = self.overlay.as_mut() {
                    let status = fade.advance(dt);
                    self.overlay_opacity = status.opacity;
                    surface.set_opacity(status.opacity);
                    status.done
                } else {
                    self.overlay_opacity = fade.target();
                    true
                }
            }
        }
    }

    fn complete(&mut self) {
        self.phase = TransitionPhase::Complete;
        self.is_loading = false;
        if let Some(surface) = self.overlay.as_mut() {
            surface.set_visible(false);
        }
        log::info!("scene transition complete: {:?}", self.target);
    }
}

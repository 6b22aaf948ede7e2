//! Load watching and deferred activation
//!
//! Starts the asynchronous content load, polls its progress each tick, and
//! withholds activation until progress crosses the threshold and a grace
//! delay elapses. A load that cannot start fails open: the watcher reports
//! it and finishes so the controller can proceed to the fade-out instead of
//! freezing on an opaque overlay.

use crate::host::{ContentLoader, DiagnosticsSink, LoadHandle};

/// Progress value reported while no load is in flight
pub const NO_ACTIVE_LOAD: f32 = -1.0;

/// Lifecycle of one watched load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load requested yet
    Idle,
    /// Start the load on the next tick
    Requesting,
    /// Polling progress until it crosses the activation threshold
    Polling,
    /// Threshold crossed; accumulating the grace delay
    Delaying,
    /// Delay elapsed; activating the loaded content
    Committing,
    /// Load finished (committed or failed open); handle released
    Done,
}

/// Watches one asynchronous load and commits it once ready
///
/// Owns the load handle for the duration of the load. Advanced once per
/// tick by the controller; the threshold crossing and a zero grace delay
/// resolve within a single tick, every other wait yields between ticks.
#[derive(Debug)]
pub struct LoadWatcher<H: LoadHandle> {
    state: LoadState,
    target: String,
    activation_threshold: f32,
    delay_secs: f32,
    delay_elapsed: f32,
    handle: Option<H>,
}

impl<H: LoadHandle> Default for LoadWatcher<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: LoadHandle> LoadWatcher<H> {
    /// Create an idle watcher
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            target: String::new(),
            activation_threshold: 0.0,
            delay_secs: 0.0,
            delay_elapsed: 0.0,
            handle: None,
        }
    }

    /// Arm the watcher for one load
    ///
    /// The load itself starts on the next [`advance`](Self::advance) tick.
    /// An empty `target` is reported there but still attempted; whether it
    /// is loadable is the loader's call.
    pub fn begin(&mut self, target: &str, activation_threshold: f32, delay_secs: f32) {
        self.state = LoadState::Requesting;
        self.target = target.to_string();
        self.activation_threshold = activation_threshold;
        self.delay_secs = delay_secs;
        self.delay_elapsed = 0.0;
        self.handle = None;
    }

    /// Current watcher state
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Whether a load handle is currently held
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether the watched load has finished, by commit or by failing open
    pub fn is_done(&self) -> bool {
        self.state == LoadState::Done
    }

    /// Live load progress in `[0, 1]`, or [`NO_ACTIVE_LOAD`] without a handle
    pub fn progress(&self) -> f32 {
        self.handle
            .as_ref()
            .map_or(NO_ACTIVE_LOAD, |handle| handle.progress().clamp(0.0, 1.0))
    }

    /// Advance the watcher by one tick; returns true once the load is done
    pub fn advance<L>(
        &mut self,
        dt: f32,
        loader: &mut L,
        diagnostics: &mut dyn DiagnosticsSink,
    ) -> bool
    where
        L: ContentLoader<Handle = H>,
    {
        match self.state {
            LoadState::Idle | LoadState::Done => {}
            LoadState::Requesting => self.request(loader, diagnostics),
            LoadState::Polling => {
                if self.progress() >= self.activation_threshold {
                    // Fall straight into the delay: the crossing tick counts
                    // toward the grace period, and a zero delay commits now.
                    self.state = LoadState::Delaying;
                    self.delay_elapsed += dt;
                    self.maybe_commit();
                }
            }
            LoadState::Delaying => {
                self.delay_elapsed += dt;
                self.maybe_commit();
            }
            LoadState::Committing => self.commit(),
        }

        self.is_done()
    }

    fn request<L>(&mut self, loader: &mut L, diagnostics: &mut dyn DiagnosticsSink)
    where
        L: ContentLoader<Handle = H>,
    {
        if self.target.is_empty() {
            // Advisory only; the loader still gets the call
            diagnostics.error("empty scene identifier passed to scene load");
        }

        match loader.start_load(&self.target) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.state = LoadState::Polling;
                log::debug!("scene load started: {:?}", self.target);
            }
            Err(err) => {
                // Fail open: finish so the overlay fades back out
                diagnostics.error(&format!(
                    "scene load could not start ({err}); skipping to fade-out"
                ));
                self.state = LoadState::Done;
            }
        }
    }

    fn maybe_commit(&mut self) {
        if self.delay_elapsed >= self.delay_secs {
            self.state = LoadState::Committing;
            self.commit();
        }
    }

    fn commit(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.commit();
            log::debug!("scene activated: {:?}", self.target);
        }
        self.state = LoadState::Done;
    }
}

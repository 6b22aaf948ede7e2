//! End-to-end transition scenarios driven at a fixed 60 Hz tick rate.

use crossfade::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const TICK: f32 = 1.0 / 60.0;

struct SimHandle {
    progress: Rc<Cell<f32>>,
    committed: Rc<Cell<bool>>,
}

impl LoadHandle for SimHandle {
    fn progress(&self) -> f32 {
        self.progress.get()
    }

    fn commit(&mut self) {
        self.committed.set(true);
    }
}

/// Loader whose progress ramps by a fixed step each poll.
struct SimLoader {
    progress: Rc<Cell<f32>>,
    committed: Rc<Cell<bool>>,
    step_per_poll: f32,
    fail: bool,
}

impl SimLoader {
    fn new(step_per_poll: f32) -> Self {
        Self {
            progress: Rc::new(Cell::new(0.0)),
            committed: Rc::new(Cell::new(false)),
            step_per_poll,
            fail: false,
        }
    }

    fn observers(&self) -> (Rc<Cell<f32>>, Rc<Cell<bool>>) {
        (Rc::clone(&self.progress), Rc::clone(&self.committed))
    }
}

impl ContentLoader for SimLoader {
    type Handle = SimHandle;

    fn start_load(&mut self, id: &str) -> Result<SimHandle, LoadError> {
        if self.fail || id.is_empty() {
            return Err(LoadError::UnknownScene(id.to_string()));
        }
        Ok(SimHandle {
            progress: Rc::clone(&self.progress),
            committed: Rc::clone(&self.committed),
        })
    }
}

#[derive(Default)]
struct RecordingOverlay {
    visible: Rc<Cell<bool>>,
    opacity: Rc<Cell<f32>>,
    samples: Rc<RefCell<Vec<f32>>>,
}

impl OverlaySurface for RecordingOverlay {
    fn set_visible(&mut self, visible: bool) {
        self.visible.set(visible);
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity.set(opacity);
        self.samples.borrow_mut().push(opacity);
    }
}

#[derive(Default)]
struct SharedSink {
    warnings: Rc<RefCell<Vec<String>>>,
    errors: Rc<RefCell<Vec<String>>>,
}

impl DiagnosticsSink for SharedSink {
    fn warn(&mut self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

fn standard_config() -> TransitionConfig {
    TransitionConfig {
        fade_in_secs: 0.25,
        fade_out_secs: 0.25,
        post_load_delay_secs: 0.5,
        activation_threshold: 0.9,
    }
}

#[test]
fn full_transition_at_sixty_hertz() {
    // Progress advances while the load is polled; ramp chosen so the
    // threshold is crossed a few ticks into the loading phase.
    let loader = SimLoader::new(0.2);
    let (progress, committed) = loader.observers();
    let step = loader.step_per_poll;

    let mut controller =
        TransitionController::new(standard_config(), loader, Some(RecordingOverlay::default()));
    controller.begin("hangar");

    let mut fade_in_ticks = 0;
    let mut loading_ticks = 0;
    let mut fade_out_ticks = 0;
    let mut delay_ticks_after_threshold = 0;
    let mut commit_tick_progress = -1.0;

    for _ in 0..600 {
        if controller.is_complete() {
            break;
        }

        match controller.phase() {
            TransitionPhase::FadingIn => fade_in_ticks += 1,
            TransitionPhase::Loading => {
                loading_ticks += 1;
                // Simulated backend makes progress between polls
                progress.set((progress.get() + step).min(1.0));
                if controller.load_progress() >= 0.9 && !committed.get() {
                    delay_ticks_after_threshold += 1;
                }
            }
            TransitionPhase::FadingOut => fade_out_ticks += 1,
            TransitionPhase::Idle | TransitionPhase::Complete => {}
        }

        if committed.get() && commit_tick_progress < 0.0 {
            commit_tick_progress = progress.get();
        }

        controller.tick(TICK);
    }

    assert_eq!(controller.phase(), TransitionPhase::Complete);
    assert!(committed.get(), "loaded scene was never activated");

    // 0.25s fades at 60 Hz: at least 15 ticks each
    assert!(fade_in_ticks >= 15, "fade-in took {fade_in_ticks} ticks");
    assert!(fade_out_ticks >= 15, "fade-out took {fade_out_ticks} ticks");

    // Commit only after progress crossed the threshold and the 0.5s grace
    // delay (30 ticks at 60 Hz) elapsed
    assert!(commit_tick_progress >= 0.9);
    assert!(
        delay_ticks_after_threshold >= 30,
        "committed after only {delay_ticks_after_threshold} delay ticks"
    );
    assert!(loading_ticks > delay_ticks_after_threshold);
}

#[test]
fn zero_config_reaches_complete_at_any_tick_rate() {
    for dt in [1.0 / 30.0, 1.0 / 60.0, 1.0 / 144.0] {
        let loader = SimLoader::new(1.0);
        let mut controller = TransitionController::new(
            TransitionConfig::instant(),
            loader,
            Some(RecordingOverlay::default()),
        );
        controller.begin("hangar");

        let mut ticks = 0;
        while !controller.is_complete() {
            controller.tick(dt);
            ticks += 1;
            assert!(ticks <= 8, "not bounded: {ticks} ticks at dt {dt}");
        }
    }
}

#[test]
fn opacity_traces_up_then_down() {
    let loader = SimLoader::new(1.0);
    let (progress, _) = loader.observers();
    let overlay = RecordingOverlay::default();
    let samples = Rc::clone(&overlay.samples);

    let mut controller = TransitionController::new(standard_config(), loader, Some(overlay));
    controller.begin("hangar");
    assert_eq!(controller.load_progress(), -1.0);

    // Backend finishes immediately; only threshold, delay, and fades remain
    progress.set(1.0);

    for _ in 0..600 {
        if controller.is_complete() {
            break;
        }
        controller.tick(TICK);
    }

    let samples = samples.borrow();
    // Construction reset + fade-in seed + samples + fade-out seed + samples
    let peak = samples.iter().copied().fold(0.0_f32, f32::max);
    assert_eq!(peak, 1.0, "fade-in never reached full opacity");
    assert_eq!(*samples.last().unwrap(), 0.0, "fade-out did not end at zero");
    for sample in samples.iter() {
        assert!((0.0..=1.0).contains(sample), "opacity {sample} out of range");
    }

    // Monotonic toward the target on each side of the peak
    let peak_index = samples.iter().position(|s| *s == 1.0).unwrap();
    for pair in samples[..=peak_index].windows(2) {
        assert!(pair[1] >= pair[0], "fade-in not monotonic");
    }
    for pair in samples[peak_index..].windows(2) {
        assert!(pair[1] <= pair[0], "fade-out not monotonic");
    }
}

#[test]
fn progress_never_leaves_reported_range() {
    let loader = SimLoader::new(0.4);
    let (progress, _) = loader.observers();

    let mut controller =
        TransitionController::new(standard_config(), loader, Some(RecordingOverlay::default()));
    assert_eq!(controller.load_progress(), -1.0);

    controller.begin("hangar");
    for _ in 0..600 {
        if controller.is_complete() {
            break;
        }
        progress.set(progress.get() + 0.05);
        controller.tick(TICK);
        let reported = controller.load_progress();
        assert!((-1.0..=1.0).contains(&reported));
    }
    assert_eq!(controller.load_progress(), -1.0);
}

#[test]
fn empty_target_fails_open_but_completes() {
    let loader = SimLoader::new(1.0);
    let (_, committed) = loader.observers();
    let sink = SharedSink::default();
    let errors = Rc::clone(&sink.errors);

    let mut controller = TransitionController::with_diagnostics(
        standard_config(),
        loader,
        Some(RecordingOverlay::default()),
        Box::new(sink),
    );

    controller.begin("");
    for _ in 0..600 {
        if controller.is_complete() {
            break;
        }
        controller.tick(TICK);
    }

    assert_eq!(controller.phase(), TransitionPhase::Complete);
    assert!(!committed.get(), "nothing should activate on a failed load");
    // Empty-identifier advisory plus the fail-open report
    assert_eq!(errors.borrow().len(), 2);
}

#[test]
fn absent_overlay_still_completes_without_surface_calls() {
    let loader = SimLoader::new(1.0);
    let (progress, _) = loader.observers();
    let overlay: Option<RecordingOverlay> = None;

    let mut controller = TransitionController::new(standard_config(), loader, overlay);
    controller.begin("hangar");
    progress.set(1.0);

    for _ in 0..600 {
        if controller.is_complete() {
            break;
        }
        controller.tick(TICK);
    }
    assert_eq!(controller.phase(), TransitionPhase::Complete);
}

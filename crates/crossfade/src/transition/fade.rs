//! Time-based opacity fade
//!
//! Linear interpolation of an opacity value over a wall-clock duration,
//! advanced once per tick. Duration is independent of tick rate: the fade
//! finishes within one tick of its nominal length at any frame rate.

/// Result of advancing a fade by one tick
#[derive(Debug, Clone, Copy)]
pub struct FadeStatus {
    /// Opacity sample for this tick, in `[0, 1]`
    pub opacity: f32,
    /// True once the fade has reached its end value exactly
    pub done: bool,
}

/// Drives one opacity fade from a start value to an end value
///
/// A non-positive duration completes on the first tick, jumping straight to
/// the end value. Otherwise each tick accumulates the real elapsed time,
/// interpolates at the clamped normalized progress, and forces the exact
/// end value once the accumulator crosses the duration so no floating-point
/// drift survives the final tick.
#[derive(Debug)]
pub struct FadeAnimator {
    from: f32,
    to: f32,
    duration_secs: f32,
    elapsed_secs: f32,
}

impl FadeAnimator {
    /// Create a fade from `from` to `to` over `duration_secs` wall-clock seconds
    pub fn new(from: f32, to: f32, duration_secs: f32) -> Self {
        Self {
            from,
            to,
            duration_secs,
            elapsed_secs: 0.0,
        }
    }

    /// The opacity this fade ends on
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advance the fade by one tick of `dt` seconds
    pub fn advance(&mut self, dt: f32) -> FadeStatus {
        if self.duration_secs <= 0.0 {
            return FadeStatus {
                opacity: self.to,
                done: true,
            };
        }

        self.elapsed_secs += dt;
        let t = self.elapsed_secs / self.duration_secs;
        if t >= 1.0 {
            FadeStatus {
                opacity: self.to,
                done: true,
            }
        } else {
            FadeStatus {
                opacity: lerp(self.from, self.to, t),
                done: false,
            }
        }
    }
}

/// Linear interpolation with the progress clamped to `[0, 1]`
///
/// Clamping here keeps a single oversized tick delta from overshooting the
/// endpoint.
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

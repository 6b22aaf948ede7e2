//! Scene transition state machine
//!
//! Orchestrates the swap between two scenes behind an opacity fade:
//!
//! ```text
//! begin(target)
//!      ↓
//! FadingIn   (overlay 0 → 1)
//!      ↓
//! Loading    (async load, threshold + grace delay, deferred commit)
//!      ↓
//! FadingOut  (overlay 1 → 0)
//!      ↓
//! Complete   (overlay hidden, controller spent)
//! ```
//!
//! The machine is cooperative and single-threaded: the host calls
//! [`TransitionController::tick`] once per frame with the wall-clock delta,
//! and every wait — fade duration, load threshold, grace delay — is a
//! yield-and-recheck across ticks, never a blocking sleep.

mod controller;
mod fade;
mod load;

pub use controller::{TransitionController, TransitionPhase};
pub use fade::{FadeAnimator, FadeStatus};
pub use load::{LoadState, LoadWatcher, NO_ACTIVE_LOAD};

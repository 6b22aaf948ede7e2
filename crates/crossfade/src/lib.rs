//! # Crossfade
//!
//! Scene crossfade transitions for tick-driven game hosts.
//!
//! ## Features
//!
//! - **Transition State Machine**: Fade-in, asynchronous load, fade-out,
//!   completion — strictly ordered, one tick per host frame
//! - **Deferred Activation**: Loaded content stays inactive until load
//!   progress crosses a threshold and a grace delay elapses
//! - **Fail-Open**: A load that cannot start never leaves the player stuck
//!   behind an opaque overlay
//! - **Host Agnostic**: The content loader and the overlay surface are
//!   traits; the machine runs headless in tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crossfade::prelude::*;
//!
//! # struct MyLoader;
//! # struct MyHandle;
//! # impl LoadHandle for MyHandle {
//! #     fn progress(&self) -> f32 { 1.0 }
//! #     fn commit(&mut self) {}
//! # }
//! # impl ContentLoader for MyLoader {
//! #     type Handle = MyHandle;
//! #     fn start_load(&mut self, _id: &str) -> Result<MyHandle, LoadError> { Ok(MyHandle) }
//! # }
//! # struct MyOverlay;
//! # impl OverlaySurface for MyOverlay {
//! #     fn set_visible(&mut self, _visible: bool) {}
//! #     fn set_opacity(&mut self, _opacity: f32) {}
//! # }
//! fn main() {
//!     let config = TransitionConfig::default();
//!     let mut controller = TransitionController::new(config, MyLoader, Some(MyOverlay));
//!     controller.begin("level_two");
//!
//!     let mut timer = TickTimer::new();
//!     while !controller.is_complete() {
//!         // once per host frame
//!         controller.tick(timer.tick());
//!     }
//!     // controller is spent; drop it and build a new one for the next swap
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod host;
pub mod transition;

pub use config::TransitionConfig;
pub use transition::{TransitionController, TransitionPhase};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, TransitionConfig},
        foundation::time::TickTimer,
        host::{
            ContentLoader, DiagnosticsSink, LoadError, LoadHandle, LogDiagnostics,
            OverlaySurface,
        },
        transition::{TransitionController, TransitionPhase},
    };
}

//! Host integration traits
//!
//! The transition machine never touches engine internals directly. The host
//! supplies three collaborators: a content loader that can defer activation
//! of what it loads, an optional overlay surface whose opacity the fade
//! drives, and a diagnostics sink for non-fatal reporting. All three are
//! small traits so the machine runs headless under test.

use thiserror::Error;

/// Errors from starting a content load
#[derive(Debug, Error)]
pub enum LoadError {
    /// The identifier does not name loadable content
    #[error("unknown scene: {0:?}")]
    UnknownScene(String),

    /// The loader backend rejected the request
    #[error("load backend error: {0}")]
    Backend(String),
}

/// An in-flight asynchronous content load
///
/// Loaded content must stay inactive until [`commit`](Self::commit) is
/// called, regardless of how far the load has progressed.
pub trait LoadHandle {
    /// Current load progress in `[0, 1]`
    fn progress(&self) -> f32;

    /// Make the loaded content live
    fn commit(&mut self);
}

/// Starts asynchronous content loads on behalf of the transition machine
pub trait ContentLoader {
    /// Handle type for loads started by this loader
    type Handle: LoadHandle;

    /// Begin loading the content named by `id`, with activation deferred
    fn start_load(&mut self, id: &str) -> Result<Self::Handle, LoadError>;
}

/// The visual element faded over the screen during a transition
///
/// May be absent; the machine degrades to an instant, invisible swap
/// rather than failing.
pub trait OverlaySurface {
    /// Show or hide the surface
    fn set_visible(&mut self, visible: bool);

    /// Set the surface opacity in `[0, 1]`
    fn set_opacity(&mut self, opacity: f32);
}

/// Non-fatal reporting channel
///
/// Nothing the transition machine reports is fatal to the host; the sink
/// exists so misuse and degraded paths are visible.
pub trait DiagnosticsSink {
    /// Report a recoverable misuse, e.g. a rejected re-entrant `begin`
    fn warn(&mut self, message: &str);

    /// Report a degraded path, e.g. a load that could not start
    fn error(&mut self, message: &str);
}

/// Default sink: forwards to the `log` facade
pub struct LogDiagnostics;

impl DiagnosticsSink for LogDiagnostics {
    fn warn(&mut self, message: &str) {
        log::warn!("{message}");
    }

    fn error(&mut self, message: &str) {
        log::error!("{message}");
    }
}

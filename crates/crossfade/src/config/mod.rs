//! Configuration system
//!
//! Transition timing is data-driven: hosts tune fade durations, the grace
//! delay, and the activation threshold from a TOML or RON file, or build a
//! [`TransitionConfig`] in code and rely on the defaults.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
///
/// Provides file loading and saving for any serializable config type,
/// dispatching on the file extension.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Semantically invalid value
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Timing parameters for one scene transition
///
/// All durations are wall-clock seconds. A duration of zero skips the
/// corresponding wait entirely: a zero fade jumps straight to its end
/// opacity, a zero delay commits on the tick the threshold is crossed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Length of the fade from transparent to opaque
    pub fade_in_secs: f32,

    /// Length of the fade from opaque back to transparent
    pub fade_out_secs: f32,

    /// Grace delay between the load crossing the threshold and activation
    pub post_load_delay_secs: f32,

    /// Load progress fraction required before the grace delay starts
    pub activation_threshold: f32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            fade_in_secs: 0.25,
            fade_out_secs: 0.25,
            post_load_delay_secs: 0.5,
            activation_threshold: 0.9,
        }
    }
}

impl Config for TransitionConfig {}

impl TransitionConfig {
    /// Check that all durations are non-negative and the threshold is a
    /// valid progress fraction
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fade_in_secs < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fade_in_secs must be non-negative, got {}",
                self.fade_in_secs
            )));
        }
        if self.fade_out_secs < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fade_out_secs must be non-negative, got {}",
                self.fade_out_secs
            )));
        }
        if self.post_load_delay_secs < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "post_load_delay_secs must be non-negative, got {}",
                self.post_load_delay_secs
            )));
        }
        if !(0.0..=1.0).contains(&self.activation_threshold) {
            return Err(ConfigError::Invalid(format!(
                "activation_threshold must be in [0, 1], got {}",
                self.activation_threshold
            )));
        }
        Ok(())
    }

    /// Config with every wait zeroed: instant fades, immediate activation
    pub fn instant() -> Self {
        Self {
            fade_in_secs: 0.0,
            fade_out_secs: 0.0,
            post_load_delay_secs: 0.0,
            activation_threshold: 0.0,
        }
    }
}

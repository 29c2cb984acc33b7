//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`RND_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use rustnd_core::{ControlInputs, Direction, Projection, StepMultiplier, DEFAULT_ANGULAR_SPEED};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Figure source
    #[serde(default)]
    pub figure: FigureConfig,
    /// Rotation rate and frame timing
    #[serde(default)]
    pub rotation: RotationConfig,
    /// Headless session settings
    #[serde(default)]
    pub session: SessionConfig,
    /// Reduction to 3D for output
    #[serde(default)]
    pub projection: Projection,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`RND_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // RND_ROTATION__ANGULAR_SPEED=3.0 -> rotation.angular_speed = 3.0
        figment = figment.merge(Env::prefixed("RND_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Figure source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// Figure JSON file
    pub path: PathBuf,
    /// Generate a tesseract if the file cannot be loaded
    pub fallback_hypercube: bool,
    /// Edge length of the fallback hypercube
    pub hypercube_size: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("figures/tesseract4.json"),
            fallback_hypercube: true,
            hypercube_size: 2.0,
        }
    }
}

/// Rotation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Radians per second at step 1
    pub angular_speed: f64,
    /// Longest frame time fed to a tick, in seconds
    pub max_frame_time: f64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            angular_speed: DEFAULT_ANGULAR_SPEED,
            max_frame_time: 0.25,
        }
    }
}

/// Headless session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Ticks per second
    pub tick_rate: u32,
    /// Simulated seconds
    pub duration: f64,
    /// Starting plane index
    pub active_plane: usize,
    pub direction_reversed: bool,
    pub double_step: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            duration: 4.0,
            active_plane: 0,
            direction_reversed: false,
            double_step: false,
        }
    }
}

impl SessionConfig {
    /// Controls for a session that rotates the whole time
    pub fn controls(&self) -> ControlInputs {
        ControlInputs::new()
            .with_active_plane(self.active_plane)
            .with_direction(if self.direction_reversed {
                Direction::Reverse
            } else {
                Direction::Forward
            })
            .with_step(if self.double_step {
                StepMultiplier::Double
            } else {
                StepMultiplier::Single
            })
            .with_velocity(true)
    }

    /// Number of ticks covering `duration`
    pub fn tick_count(&self) -> u64 {
        if self.tick_rate == 0 || !self.duration.is_finite() || self.duration <= 0.0 {
            return 0;
        }
        (self.duration * self.tick_rate as f64).round() as u64
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log the angle table when the session ends
    pub print_diagnostics: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            print_diagnostics: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

//! Configuration for the glowing Game of Life.
//!
//! Everything has a default, so an absent or partial YAML file is fine.
//! Values that would stall the visual loop (a zero cell size, a zero step
//! interval) are clamped by [`LifeConfig::sanitized`] instead of rejected.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::clock::{MAX_STEP_INTERVAL, MIN_STEP_INTERVAL};

pub const MIN_CELL_SIZE: f32 = 1.0;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        #[from]
        source: serde_yml::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LifeConfig {
    /// Pixels per cell edge; sets the grid resolution for a given window.
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,

    /// Milliseconds between generations.
    #[serde(default = "default_step_interval_ms")]
    pub step_interval_ms: u64,

    /// Initial window size.
    #[serde(default)]
    pub window: WindowConfig,

    /// Seed for a reproducible run. Random each launch when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Show the generation/population overlay at startup.
    #[serde(default = "default_true")]
    pub show_hud: bool,

    /// Fallback log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            step_interval_ms: default_step_interval_ms(),
            window: WindowConfig::default(),
            seed: None,
            show_hud: true,
            log_level: default_log_level(),
        }
    }
}

impl LifeConfig {
    /// Load configuration from a YAML file, then apply environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment overrides.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override values with environment variables when set:
    /// - `GLOW_LIFE_CELL_SIZE` overrides `cell_size`
    /// - `GLOW_LIFE_STEP_INTERVAL_MS` overrides `step_interval_ms`
    /// - `GLOW_LIFE_SEED` overrides `seed`
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("GLOW_LIFE_CELL_SIZE") {
            match val.trim().parse() {
                Ok(size) => self.cell_size = size,
                Err(_) => warn!(value = %val, "ignoring unparseable GLOW_LIFE_CELL_SIZE"),
            }
        }
        if let Some(val) = lookup("GLOW_LIFE_STEP_INTERVAL_MS") {
            match val.trim().parse() {
                Ok(ms) => self.step_interval_ms = ms,
                Err(_) => warn!(value = %val, "ignoring unparseable GLOW_LIFE_STEP_INTERVAL_MS"),
            }
        }
        if let Some(val) = lookup("GLOW_LIFE_SEED") {
            match val.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => warn!(value = %val, "ignoring unparseable GLOW_LIFE_SEED"),
            }
        }
    }

    /// Copy with out-of-range values clamped to the nearest usable ones.
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();

        if !config.cell_size.is_finite() || config.cell_size < MIN_CELL_SIZE {
            warn!(cell_size = config.cell_size, min = MIN_CELL_SIZE, "cell_size clamped");
            config.cell_size = MIN_CELL_SIZE;
        }

        let interval = Duration::from_millis(config.step_interval_ms);
        let clamped = interval.clamp(MIN_STEP_INTERVAL, MAX_STEP_INTERVAL);
        if clamped != interval {
            warn!(step_interval_ms = config.step_interval_ms, "step_interval_ms clamped");
            config.step_interval_ms = clamped.as_millis() as u64;
        }

        config.window = config.window.sanitized();
        config
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}

/// Initial window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: f32,

    #[serde(default = "default_window_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: default_window_width(), height: default_window_height() }
    }
}

impl WindowConfig {
    fn sanitized(self) -> Self {
        let fix = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        Self {
            width: fix(self.width, default_window_width()),
            height: fix(self.height, default_window_height()),
        }
    }
}

fn default_cell_size() -> f32 {
    10.0
}

fn default_step_interval_ms() -> u64 {
    50
}

fn default_window_width() -> f32 {
    800.0
}

fn default_window_height() -> f32 {
    600.0
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_without_env(yaml: &str) -> LifeConfig {
        serde_yml::from_str(yaml).unwrap_or_default()
    }

    #[test]
    fn empty_document_gives_defaults() {
        let config = LifeConfig::parse("").unwrap_or_default();
        assert_eq!(config.window, WindowConfig::default());
        assert!(config.show_hud);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = parse_without_env("cell_size: 6\nwindow:\n  width: 1024\n");
        assert!((config.cell_size - 6.0).abs() < f32::EPSILON);
        assert_eq!(config.step_interval_ms, 50);
        assert!((config.window.width - 1024.0).abs() < f32::EPSILON);
        assert!((config.window.height - 600.0).abs() < f32::EPSILON);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = LifeConfig::parse("cell_size: [1, 2");
        assert!(matches!(err, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = LifeConfig::from_file(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(err, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn non_positive_values_are_clamped() {
        let config = LifeConfig {
            cell_size: -3.0,
            step_interval_ms: 0,
            window: WindowConfig { width: 0.0, height: f32::NAN },
            ..LifeConfig::default()
        }
        .sanitized();
        assert!((config.cell_size - MIN_CELL_SIZE).abs() < f32::EPSILON);
        assert_eq!(config.step_interval(), MIN_STEP_INTERVAL);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn overrides_replace_parseable_values_only() {
        let mut config = LifeConfig::default();
        config.apply_overrides(|key| match key {
            "GLOW_LIFE_CELL_SIZE" => Some("4.5".to_owned()),
            "GLOW_LIFE_STEP_INTERVAL_MS" => Some("fast".to_owned()),
            "GLOW_LIFE_SEED" => Some(" 1234 ".to_owned()),
            _ => None,
        });
        assert!((config.cell_size - 4.5).abs() < f32::EPSILON);
        assert_eq!(config.step_interval_ms, 50);
        assert_eq!(config.seed, Some(1234));
    }
}

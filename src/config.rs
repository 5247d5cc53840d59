//! Editor geometry configuration, with defaults and environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{CANVAS_WIDTH, DEFAULT_LANE_HEIGHT, MIN_CANVAS_HEIGHT};

pub const ENV_LANE_HEIGHT: &str = "SWIMLANE_LANE_HEIGHT";
pub const ENV_MIN_CANVAS_HEIGHT: &str = "SWIMLANE_MIN_CANVAS_HEIGHT";
pub const ENV_CANVAS_WIDTH: &str = "SWIMLANE_CANVAS_WIDTH";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// The value is not a number.
    #[error("{var}: cannot parse '{value}' as a number")]
    Parse { var: String, value: String },

    /// The value parsed but is zero, negative, or not finite.
    #[error("{var}: expected a finite positive number, got {value}")]
    OutOfRange { var: String, value: f64 },
}

/// Fixed geometry used by layout, hit-testing, and scene building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Height of every lane band.
    pub lane_height: f64,
    /// Lower bound on the reported canvas height.
    pub min_canvas_height: f64,
    /// Width of the canvas and of every lane band.
    pub canvas_width: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            lane_height: DEFAULT_LANE_HEIGHT,
            min_canvas_height: MIN_CANVAS_HEIGHT,
            canvas_width: CANVAS_WIDTH,
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SWIMLANE_LANE_HEIGHT`: default 180
    /// - `SWIMLANE_MIN_CANVAS_HEIGHT`: default 600
    /// - `SWIMLANE_CANVAS_WIDTH`: default 2000
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to anything other than a finite
    /// positive number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`EditorConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            lane_height: parse_positive(ENV_LANE_HEIGHT, lookup(ENV_LANE_HEIGHT), defaults.lane_height)?,
            min_canvas_height: parse_positive(
                ENV_MIN_CANVAS_HEIGHT,
                lookup(ENV_MIN_CANVAS_HEIGHT),
                defaults.min_canvas_height,
            )?,
            canvas_width: parse_positive(ENV_CANVAS_WIDTH, lookup(ENV_CANVAS_WIDTH), defaults.canvas_width)?,
        })
    }

    /// Check every field is a finite positive number.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` naming the first offending field.
    pub fn validate(self) -> Result<Self, ConfigError> {
        check_positive(ENV_LANE_HEIGHT, self.lane_height)?;
        check_positive(ENV_MIN_CANVAS_HEIGHT, self.min_canvas_height)?;
        check_positive(ENV_CANVAS_WIDTH, self.canvas_width)?;
        Ok(self)
    }
}

fn parse_positive(var: &str, raw: Option<String>, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::Parse { var: var.to_owned(), value: raw.clone() })?;
    check_positive(var, value)
}

fn check_positive(var: &str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange { var: var.to_owned(), value })
    }
}

//! Tunable parameters for the control layer.
//!
//! Every section falls back to the defaults in `constants`, so a host can
//! override a single value from JSON and keep the rest.

use crate::constants::*;
use crate::timer::Millis;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid tuning JSON: {0}")]
    Parse(String),

    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("hysteresis bands inverted: recover above {recover_above} must exceed degrade below {degrade_below}")]
    InvertedBands {
        recover_above: f64,
        degrade_below: f64,
    },

    #[error("text fade ({fade_ms}ms) must be shorter than the cycle ({cycle_ms}ms)")]
    FadeTooLong { fade_ms: Millis, cycle_ms: Millis },

    #[error("low battery level must be within 0..=1 (got {0})")]
    BatteryLevel(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerfParams {
    pub window_len: usize,
    pub eval_interval_frames: u32,
    pub recover_above_fps: f64,
    pub recover_prior_below_fps: f64,
    pub degrade_below_fps: f64,
    pub degrade_prior_at_least_fps: f64,
    pub initial_prior_fps: f64,
    pub min_frame_delta_ms: Millis,
}

impl Default for PerfParams {
    fn default() -> Self {
        Self {
            window_len: FPS_WINDOW_LEN,
            eval_interval_frames: TIER_EVAL_INTERVAL_FRAMES,
            recover_above_fps: RECOVER_ABOVE_FPS,
            recover_prior_below_fps: RECOVER_PRIOR_BELOW_FPS,
            degrade_below_fps: DEGRADE_BELOW_FPS,
            degrade_prior_at_least_fps: DEGRADE_PRIOR_AT_LEAST_FPS,
            initial_prior_fps: INITIAL_PRIOR_FPS,
            min_frame_delta_ms: MIN_FRAME_DELTA_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceParams {
    pub mobile_max_width_px: f64,
    pub low_battery_level: f64,
    pub viewport_debounce_ms: Millis,
    pub power_debounce_ms: Millis,
}

impl Default for DeviceParams {
    fn default() -> Self {
        Self {
            mobile_max_width_px: MOBILE_MAX_WIDTH_PX,
            low_battery_level: LOW_BATTERY_LEVEL,
            viewport_debounce_ms: VIEWPORT_DEBOUNCE_MS,
            power_debounce_ms: POWER_DEBOUNCE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureParams {
    pub long_press_ms: Millis,
    pub double_tap_window_ms: Millis,
}

impl Default for GestureParams {
    fn default() -> Self {
        Self {
            long_press_ms: LONG_PRESS_MS,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextParams {
    pub cycle_ms: Millis,
    pub fade_ms: Millis,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            cycle_ms: TEXT_CYCLE_MS,
            fade_ms: TEXT_FADE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub performance: PerfParams,
    pub device: DeviceParams,
    pub gesture: GestureParams,
    pub text: TextParams,
    pub auto_downgrade_after_ms: Millis,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            performance: PerfParams::default(),
            device: DeviceParams::default(),
            gesture: GestureParams::default(),
            text: TextParams::default(),
            auto_downgrade_after_ms: AUTO_DOWNGRADE_AFTER_MS,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails this check too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

impl Tuning {
    /// Parse overrides; missing fields keep their defaults. The result is validated.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.performance;
        positive("performance.window_len", p.window_len as f64)?;
        positive("performance.min_frame_delta_ms", p.min_frame_delta_ms)?;
        positive(
            "performance.eval_interval_frames",
            p.eval_interval_frames as f64,
        )?;
        if p.recover_above_fps <= p.degrade_below_fps {
            return Err(ConfigError::InvertedBands {
                recover_above: p.recover_above_fps,
                degrade_below: p.degrade_below_fps,
            });
        }

        let d = &self.device;
        positive(
            "device.mobile_max_width_px",
            d.mobile_max_width_px,
        )?;
        if !(0.0..=1.0).contains(&d.low_battery_level) {
            return Err(ConfigError::BatteryLevel(d.low_battery_level));
        }
        positive("device.viewport_debounce_ms", d.viewport_debounce_ms)?;
        positive("device.power_debounce_ms", d.power_debounce_ms)?;

        positive("gesture.long_press_ms", self.gesture.long_press_ms)?;
        positive(
            "gesture.double_tap_window_ms",
            self.gesture.double_tap_window_ms,
        )?;

        positive("text.cycle_ms", self.text.cycle_ms)?;
        positive("text.fade_ms", self.text.fade_ms)?;
        if self.text.fade_ms >= self.text.cycle_ms {
            return Err(ConfigError::FadeTooLong {
                fade_ms: self.text.fade_ms,
                cycle_ms: self.text.cycle_ms,
            });
        }

        positive("auto_downgrade_after_ms", self.auto_downgrade_after_ms)
    }
}

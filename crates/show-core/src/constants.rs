// Default tuning for the adaptive control layer. `config::Tuning` takes its
// defaults from here; hosts may override them at startup.

// Performance sampling
pub const FPS_WINDOW_LEN: usize = 60; // rolling window of instantaneous fps samples
pub const TIER_EVAL_INTERVAL_FRAMES: u32 = 120; // frames between tier evaluations

// Hysteresis bands (fps)
pub const RECOVER_ABOVE_FPS: f64 = 50.0; // LOW -> NORMAL needs avg above this...
pub const RECOVER_PRIOR_BELOW_FPS: f64 = 45.0; // ...while the prior check was below this
pub const DEGRADE_BELOW_FPS: f64 = 25.0; // NORMAL -> LOW needs avg below this...
pub const DEGRADE_PRIOR_AT_LEAST_FPS: f64 = 35.0; // ...while the prior check was at least this
pub const INITIAL_PRIOR_FPS: f64 = 60.0; // prior value before the first evaluation
pub const MIN_FRAME_DELTA_MS: f64 = 1.0; // shorter deltas are duplicate ticks, not frames

// Device detection
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0; // viewport width below this is mobile
pub const LOW_BATTERY_LEVEL: f64 = 0.20;
pub const VIEWPORT_DEBOUNCE_MS: f64 = 200.0;
pub const POWER_DEBOUNCE_MS: f64 = 1000.0;

// Gestures
pub const LONG_PRESS_MS: f64 = 500.0;
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

// Overlay text rotation
pub const TEXT_CYCLE_MS: f64 = 4000.0;
pub const TEXT_FADE_MS: f64 = 500.0;

// Settings policy
pub const AUTO_DOWNGRADE_AFTER_MS: f64 = 15_000.0; // sustained LOW before high-performance is switched off

// Render config table
pub const LOW_PARTICLES: [u32; 2] = [15, 30]; // [mobile, desktop]
pub const LOW_TRACE: [u32; 2] = [1, 2];
pub const LOW_EXPLOSION: u32 = 3;
pub const LOW_INTENSITY: u32 = 20;
pub const LOW_FLICKER: u32 = 30;

pub const NORMAL_PARTICLES: [u32; 2] = [50, 100];
pub const NORMAL_TRACE: [u32; 2] = [2, 4];
pub const NORMAL_EXPLOSION: u32 = 6;
pub const NORMAL_INTENSITY_LANDSCAPE: u32 = 55;
pub const NORMAL_INTENSITY_PORTRAIT: u32 = 40;
pub const NORMAL_FLICKER: u32 = 50;

pub const SOUND_VOLUME_MIN: u32 = 5;
pub const SOUND_VOLUME_MAX: u32 = 25;

pub const MAX_CLICKS_MOBILE: u32 = 3;
pub const MAX_CLICKS_DESKTOP: u32 = 5;

/// Overlay lines shown by the text rotation. The first one is shown at start.
pub const DEFAULT_MESSAGES: [&str; 7] = [
    "✨ Tap Anywhere! ✨",
    "新年快乐！Happy New Year! 🎆",
    "代码无 Bug，上线一次过！ 🐛🚫",
    "身体健康，万事如意！ ❤️",
    "前程似锦，未来可期！ 🚀",
    "保持热爱，奔赴山海 🌊",
    "愿你眼里有光，心中有爱 ✨",
];

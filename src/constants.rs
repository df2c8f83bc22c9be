// Page wiring shared by the web frontend: element ids, storage keys and the
// names of the external engine bridge.

// DOM
pub const TEXT_OVERLAY_ID: &str = "celebration-text";
pub const TUNING_SCRIPT_ID: &str = "show-tuning"; // optional <script type="application/json">
pub const HIDDEN_CLASS: &str = "hidden";
pub const MOBILE_CLASS: &str = "is-mobile";
pub const LANDSCAPE_CLASS: &str = "is-landscape";
pub const TIER_ATTRIBUTE: &str = "data-tier";

// Persistence
pub const SETTINGS_STORAGE_KEY: &str = "show.settings";

// External rendering engine bridge on `window`
pub const ENGINE_BRIDGE_GLOBAL: &str = "showEngine";
pub const ENGINE_APPLY_CONFIG: &str = "applyConfig";
pub const ENGINE_TRIGGER_EFFECT: &str = "triggerEffect";

// Browser events
pub const VIEWPORT_EVENTS: [&str; 2] = ["resize", "orientationchange"];
pub const BATTERY_EVENTS: [&str; 2] = ["levelchange", "chargingchange"];
pub const TEARDOWN_EVENT: &str = "pagehide";

// Wake timer never asks for a negative timeout
pub const MIN_WAKE_DELAY_MS: f64 = 0.0;

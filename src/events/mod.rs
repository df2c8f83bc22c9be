pub mod power;
pub mod touch;
pub mod viewport;

pub use power::wire_battery;
pub use touch::wire_touch_handlers;
pub use viewport::{wire_teardown, wire_viewport_handlers};

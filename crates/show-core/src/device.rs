//! Device capability detection with debounced updates.
//!
//! The profile is an immutable snapshot rebuilt from the latest viewport and
//! power readings. Bursts of resize/orientation or battery events are
//! coalesced: each reading restarts a trailing debounce timer and only the
//! last reading is applied when it fires.

use crate::config::DeviceParams;
use crate::notify::Listeners;
use crate::timer::{Millis, TimerSet};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceProfile {
    pub is_mobile: bool,
    pub is_low_power: bool,
    pub is_landscape: bool,
    pub pixel_density: f64,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            is_mobile: false,
            is_low_power: false,
            is_landscape: true,
            pixel_density: 1.0,
        }
    }
}

/// Viewport reading in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSignal {
    pub width: f64,
    pub height: f64,
    pub pixel_density: f64,
}

impl ViewportSignal {
    pub fn new(width: f64, height: f64, pixel_density: f64) -> Self {
        Self {
            width,
            height,
            pixel_density,
        }
    }
}

/// Battery reading; `level` is 0.0..=1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerStatus {
    pub level: f64,
    pub charging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum DeviceTimer {
    Viewport,
    Power,
}

impl DeviceProfile {
    /// Build a profile from raw readings. `power` is `None` when the battery
    /// API is unavailable, which leaves `is_low_power` false.
    pub fn detect(
        viewport: &ViewportSignal,
        power: Option<&PowerStatus>,
        params: &DeviceParams,
    ) -> Self {
        let pixel_density = if viewport.pixel_density.is_finite() && viewport.pixel_density > 0.0
        {
            viewport.pixel_density
        } else {
            1.0
        };
        Self {
            is_mobile: viewport.width < params.mobile_max_width_px,
            is_low_power: power
                .map(|p| p.level < params.low_battery_level && !p.charging)
                .unwrap_or(false),
            is_landscape: viewport.width > viewport.height,
            pixel_density,
        }
    }
}

#[derive(Debug)]
pub struct DeviceMonitor {
    params: DeviceParams,
    current: DeviceProfile,
    viewport: ViewportSignal,
    power: Option<PowerStatus>,
    pending_viewport: Option<ViewportSignal>,
    pending_power: Option<PowerStatus>,
    timers: TimerSet<DeviceTimer>,
    recomputations: u64,
    listeners: Listeners<DeviceProfile>,
}

impl DeviceMonitor {
    /// Compute the initial profile right away; battery state starts unknown.
    pub fn new(params: DeviceParams, initial: ViewportSignal) -> Self {
        let current = DeviceProfile::detect(&initial, None, &params);
        log::info!("[device] initial profile {:?}", current);
        Self {
            params,
            current,
            viewport: initial,
            power: None,
            pending_viewport: None,
            pending_power: None,
            timers: TimerSet::new(),
            recomputations: 0,
            listeners: Listeners::default(),
        }
    }

    pub fn current(&self) -> DeviceProfile {
        self.current
    }

    pub fn on_change(&mut self, handler: impl FnMut(&DeviceProfile) + 'static) {
        self.listeners.add(handler);
    }

    /// How many debounced recomputations have run.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn observe_viewport(&mut self, signal: ViewportSignal, now: Millis) {
        self.pending_viewport = Some(signal);
        self.timers.schedule(
            DeviceTimer::Viewport,
            now + self.params.viewport_debounce_ms,
        );
    }

    pub fn observe_power(&mut self, status: PowerStatus, now: Millis) {
        self.pending_power = Some(status);
        self.timers
            .schedule(DeviceTimer::Power, now + self.params.power_debounce_ms);
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// Apply debounced readings whose timers are due. Returns the new profile
    /// only when it differs from the previous snapshot.
    pub fn poll(&mut self, now: Millis) -> Option<DeviceProfile> {
        let mut fired = false;
        while let Some((timer, _)) = self.timers.pop_due(now) {
            match timer {
                DeviceTimer::Viewport => {
                    if let Some(v) = self.pending_viewport.take() {
                        self.viewport = v;
                    }
                }
                DeviceTimer::Power => {
                    if let Some(p) = self.pending_power.take() {
                        self.power = Some(p);
                    }
                }
            }
            fired = true;
        }
        if fired {
            self.recompute()
        } else {
            None
        }
    }

    pub fn cancel_all(&mut self) {
        self.timers.cancel_all();
        self.pending_viewport = None;
        self.pending_power = None;
    }

    fn recompute(&mut self) -> Option<DeviceProfile> {
        self.recomputations += 1;
        let next = DeviceProfile::detect(&self.viewport, self.power.as_ref(), &self.params);
        if next == self.current {
            log::debug!("[device] recomputed, unchanged");
            return None;
        }
        log::info!("[device] profile {:?} -> {:?}", self.current, next);
        self.current = next;
        self.listeners.notify(&next);
        Some(next)
    }
}

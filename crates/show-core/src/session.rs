//! Process-wide show state.
//!
//! `ShowSession` owns every control component and the current render config.
//! Hosts call one entry point per platform trigger, then drain the commands
//! it produced and execute them. Each entry point finishes all state updates
//! before returning, so triggers never observe a half-updated session.

use crate::config::{ConfigError, Tuning};
use crate::device::{DeviceMonitor, DeviceProfile, PowerStatus, ViewportSignal};
use crate::feedback::{feedback_for, EffectKind, HapticPattern};
use crate::gesture::{GestureEvent, GestureRecognizer};
use crate::performance::{PerformanceMonitor, PerformanceTier, TierCheck};
use crate::settings::{AutoDowngrade, UserSettings};
use crate::synth::{synthesize, RenderConfig};
use crate::text::{OverlayUpdate, TextRotation};
use crate::timer::Millis;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    ApplyRenderConfig(RenderConfig),
    Haptic(HapticPattern),
    Effect { kind: EffectKind, at: Vec2 },
    Overlay(OverlayUpdate),
    SaveSettings(UserSettings),
}

#[derive(Debug)]
pub struct ShowSession {
    device: DeviceMonitor,
    performance: PerformanceMonitor,
    gestures: GestureRecognizer,
    text: TextRotation,
    auto_downgrade: AutoDowngrade,
    settings: UserSettings,
    render: RenderConfig,
    commands: Vec<Command>,
    torn_down: bool,
}

impl ShowSession {
    /// Validate the tuning, build all components and queue the first render
    /// config and overlay message.
    pub fn new(
        tuning: Tuning,
        settings: UserSettings,
        initial_viewport: ViewportSignal,
        seed: u64,
        now: Millis,
    ) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let device = DeviceMonitor::new(tuning.device.clone(), initial_viewport);
        let performance = PerformanceMonitor::new(tuning.performance.clone());
        let render = synthesize(&device.current(), performance.tier(), &settings);
        let mut session = Self {
            device,
            performance,
            gestures: GestureRecognizer::new(tuning.gesture.clone()),
            text: TextRotation::new(tuning.text.clone(), Vec::new(), seed),
            auto_downgrade: AutoDowngrade::new(tuning.auto_downgrade_after_ms),
            settings,
            render,
            commands: Vec::new(),
            torn_down: false,
        };
        log::info!("[session] initial render config {:?}", render);
        session.commands.push(Command::ApplyRenderConfig(render));
        let first = session.text.start(now);
        session.commands.push(Command::Overlay(first));
        Ok(session)
    }

    pub fn profile(&self) -> DeviceProfile {
        self.device.current()
    }

    pub fn tier(&self) -> PerformanceTier {
        self.performance.tier()
    }

    pub fn settings(&self) -> UserSettings {
        self.settings
    }

    pub fn render_config(&self) -> RenderConfig {
        self.render
    }

    pub fn device_mut(&mut self) -> &mut DeviceMonitor {
        &mut self.device
    }

    pub fn performance_mut(&mut self) -> &mut PerformanceMonitor {
        &mut self.performance
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn drain_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn on_frame(&mut self, timestamp: Millis) {
        if self.torn_down {
            return;
        }
        if let Some(check) = self.performance.record_frame(timestamp) {
            self.after_tier_check(check, timestamp);
        }
    }

    pub fn on_viewport(&mut self, signal: ViewportSignal, now: Millis) {
        if !self.torn_down {
            self.device.observe_viewport(signal, now);
        }
    }

    pub fn on_power(&mut self, status: PowerStatus, now: Millis) {
        if !self.torn_down {
            self.device.observe_power(status, now);
        }
    }

    pub fn on_touch_start(&mut self, now: Millis, at: Vec2) {
        if self.torn_down {
            return;
        }
        // a long-press that came due before this touch belongs to the old session
        if let Some(ev) = self.gestures.poll(now) {
            self.dispatch_gesture(ev);
        }
        self.gestures.touch_start(now, at);
    }

    pub fn on_touch_end(&mut self, now: Millis, at: Vec2) {
        if self.torn_down {
            return;
        }
        if let Some(ev) = self.gestures.touch_end(now, at) {
            self.dispatch_gesture(ev);
        }
    }

    pub fn on_touch_cancel(&mut self) {
        if !self.torn_down {
            self.gestures.touch_cancel();
        }
    }

    /// Replace user settings and recompute the render config.
    pub fn set_settings(&mut self, settings: UserSettings) {
        if settings == self.settings {
            return;
        }
        self.settings = settings;
        self.recompute("settings");
    }

    /// Fire every timer due at `now`.
    pub fn poll(&mut self, now: Millis) {
        if self.torn_down {
            return;
        }
        if self.device.poll(now).is_some() {
            self.recompute("device");
        }
        if let Some(ev) = self.gestures.poll(now) {
            self.dispatch_gesture(ev);
        }
        for update in self.text.poll(now) {
            self.commands.push(Command::Overlay(update));
        }
    }

    /// Earliest pending timer across all components.
    pub fn next_deadline(&self) -> Option<Millis> {
        [
            self.device.next_deadline(),
            self.gestures.next_deadline(),
            self.text.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .reduce(Millis::min)
    }

    /// Cancel every timer. Later triggers are ignored.
    pub fn teardown(&mut self) {
        self.device.cancel_all();
        self.gestures.cancel_all();
        self.text.teardown();
        self.torn_down = true;
        log::info!("[session] torn down");
    }

    fn after_tier_check(&mut self, check: TierCheck, now: Millis) {
        if check.changed() {
            self.recompute("tier");
        }
        if let Some(adjusted) = self
            .auto_downgrade
            .observe(check.tier, now, &self.settings)
        {
            self.commands.push(Command::SaveSettings(adjusted));
            self.set_settings(adjusted);
        }
    }

    fn dispatch_gesture(&mut self, ev: GestureEvent) {
        log::debug!("[session] gesture {:?}", ev.kind);
        let fb = feedback_for(ev.kind, &self.device.current(), &self.settings);
        if let Some(pattern) = fb.haptic {
            self.commands.push(Command::Haptic(pattern));
        }
        if let Some(kind) = fb.effect {
            self.commands.push(Command::Effect { kind, at: ev.at });
        }
    }

    fn recompute(&mut self, cause: &str) {
        let next = synthesize(&self.device.current(), self.performance.tier(), &self.settings);
        log::info!("[session] render config recomputed ({}) {:?}", cause, next);
        self.render = next;
        self.commands.push(Command::ApplyRenderConfig(next));
    }
}

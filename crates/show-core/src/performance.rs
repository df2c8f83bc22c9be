//! Rolling frame-rate estimation and tier switching with hysteresis.
//!
//! Each frame tick contributes an instantaneous fps sample (1000 / delta ms)
//! to a bounded window. The tier is re-evaluated once per
//! `eval_interval_frames` accepted samples, comparing the window average with
//! the average recorded at the previous evaluation:
//!
//! - LOW -> NORMAL when avg > `recover_above_fps` and prior < `recover_prior_below_fps`
//! - NORMAL -> LOW when avg < `degrade_below_fps` and prior >= `degrade_prior_at_least_fps`

use crate::config::PerfParams;
use crate::notify::Listeners;
use crate::timer::Millis;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    Low,
    #[default]
    Normal,
}

/// Bounded sliding window of fps samples; the oldest sample is evicted when full.
#[derive(Clone, Debug)]
pub struct FpsWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl FpsWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, fps: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(fps);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Arithmetic mean of the window, `None` while empty.
    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }
}

/// Result of one periodic tier evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierCheck {
    pub avg_fps: f64,
    pub prior_fps: f64,
    pub previous: PerformanceTier,
    pub tier: PerformanceTier,
}

impl TierCheck {
    pub fn changed(&self) -> bool {
        self.previous != self.tier
    }
}

#[derive(Debug)]
pub struct PerformanceMonitor {
    params: PerfParams,
    window: FpsWindow,
    last_tick: Option<Millis>,
    frames_since_eval: u32,
    prior_fps: f64,
    tier: PerformanceTier,
    discarded: u64,
    listeners: Listeners<TierCheck>,
}

impl PerformanceMonitor {
    pub fn new(params: PerfParams) -> Self {
        Self {
            window: FpsWindow::new(params.window_len),
            last_tick: None,
            frames_since_eval: 0,
            prior_fps: params.initial_prior_fps,
            tier: PerformanceTier::Normal,
            discarded: 0,
            listeners: Listeners::default(),
            params,
        }
    }

    pub fn tier(&self) -> PerformanceTier {
        self.tier
    }

    pub fn avg_fps(&self) -> Option<f64> {
        self.window.mean()
    }

    pub fn window(&self) -> &FpsWindow {
        &self.window
    }

    /// Number of ticks whose delta was below `min_frame_delta_ms` or not finite.
    pub fn discarded_samples(&self) -> u64 {
        self.discarded
    }

    /// Register a handler called on every tier transition.
    pub fn on_tier_change(&mut self, handler: impl FnMut(&TierCheck) + 'static) {
        self.listeners.add(handler);
    }

    /// Record one frame tick. Returns the evaluation result on the ticks where
    /// the tier was re-evaluated, whether or not it changed.
    pub fn record_frame(&mut self, timestamp: Millis) -> Option<TierCheck> {
        if !timestamp.is_finite() {
            self.discarded += 1;
            return None;
        }
        let Some(prev) = self.last_tick.replace(timestamp) else {
            return None;
        };
        let delta = timestamp - prev;
        if delta < self.params.min_frame_delta_ms {
            self.discarded += 1;
            log::debug!("[perf] discarded frame delta {:.3}ms", delta);
            return None;
        }
        self.window.push(1000.0 / delta);
        self.frames_since_eval += 1;
        if self.frames_since_eval < self.params.eval_interval_frames {
            return None;
        }
        self.frames_since_eval = 0;
        self.window.mean().map(|avg| self.evaluate(avg))
    }

    fn evaluate(&mut self, avg_fps: f64) -> TierCheck {
        let p = &self.params;
        let prior = self.prior_fps;
        let previous = self.tier;
        let next = match previous {
            PerformanceTier::Low
                if avg_fps > p.recover_above_fps && prior < p.recover_prior_below_fps =>
            {
                PerformanceTier::Normal
            }
            PerformanceTier::Normal
                if avg_fps < p.degrade_below_fps && prior >= p.degrade_prior_at_least_fps =>
            {
                PerformanceTier::Low
            }
            t => t,
        };
        self.prior_fps = avg_fps;
        self.tier = next;
        let check = TierCheck {
            avg_fps,
            prior_fps: prior,
            previous,
            tier: next,
        };
        if check.changed() {
            log::info!(
                "[perf] tier {:?} -> {:?} (avg={:.1} prior={:.1})",
                previous,
                next,
                avg_fps,
                prior
            );
            self.listeners.notify(&check);
        } else {
            log::debug!("[perf] tier {:?} held (avg={:.1})", next, avg_fps);
        }
        check
    }
}

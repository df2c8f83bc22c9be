//! Rotating overlay text.
//!
//! Every `cycle_ms` the overlay is hidden, and `fade_ms` later a message drawn
//! uniformly at random (with replacement, so repeats are allowed) is shown.
//! A poll that arrives after several missed cycles yields at most one hide
//! and one show, anchored to the latest cycle boundary.

use crate::config::TextParams;
use crate::constants::DEFAULT_MESSAGES;
use crate::timer::{Millis, TimerSet};
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayUpdate {
    Hide,
    Show { index: usize, text: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum TextTimer {
    Cycle,
    Reveal,
}

pub struct TextRotation {
    params: TextParams,
    messages: Vec<String>,
    rng: StdRng,
    timers: TimerSet<TextTimer>,
    running: bool,
    visible: bool,
    current: usize,
}

impl TextRotation {
    /// An empty message list falls back to the built-in lines.
    pub fn new(params: TextParams, messages: Vec<String>, seed: u64) -> Self {
        let messages = if messages.is_empty() {
            DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect()
        } else {
            messages
        };
        Self {
            params,
            messages,
            rng: StdRng::seed_from_u64(seed),
            timers: TimerSet::new(),
            running: false,
            visible: false,
            current: 0,
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn current_text(&self) -> &str {
        &self.messages[self.current]
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// Show the first message and arm the periodic cycle.
    pub fn start(&mut self, now: Millis) -> OverlayUpdate {
        self.timers.schedule(TextTimer::Cycle, now + self.params.cycle_ms);
        self.timers.cancel(TextTimer::Reveal);
        self.running = true;
        self.current = 0;
        self.show()
    }

    pub fn poll(&mut self, now: Millis) -> SmallVec<[OverlayUpdate; 2]> {
        let mut out = SmallVec::new();
        while let Some((timer, at)) = self.timers.pop_due(now) {
            match timer {
                TextTimer::Cycle => {
                    // skip missed cycles: jump to the latest boundary at or before `now`
                    let cycle = self.params.cycle_ms;
                    let boundary = at + ((now - at) / cycle).floor() * cycle;
                    if boundary > at {
                        log::debug!(
                            "[text] skipped {:.0} missed cycles",
                            (boundary - at) / cycle
                        );
                    }
                    self.timers.schedule(TextTimer::Cycle, boundary + cycle);
                    self.timers
                        .schedule(TextTimer::Reveal, boundary + self.params.fade_ms);
                    self.visible = false;
                    out.push(OverlayUpdate::Hide);
                }
                TextTimer::Reveal
                    if self
                        .timers
                        .deadline(TextTimer::Cycle)
                        .is_some_and(|c| c <= now) =>
                {
                    // a later cycle is also due and will hide again
                }
                TextTimer::Reveal => {
                    self.current = self.rng.gen_range(0..self.messages.len());
                    log::debug!("[text] showing message {}", self.current);
                    out.push(self.show());
                }
            }
        }
        out
    }

    /// Cancel both timers; nothing fires afterwards until `start` is called again.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.running = false;
    }

    fn show(&mut self) -> OverlayUpdate {
        self.visible = true;
        OverlayUpdate::Show {
            index: self.current,
            text: self.messages[self.current].clone(),
        }
    }
}

impl std::fmt::Debug for TextRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRotation")
            .field("messages", &self.messages.len())
            .field("running", &self.running)
            .field("visible", &self.visible)
            .field("current", &self.current)
            .finish()
    }
}

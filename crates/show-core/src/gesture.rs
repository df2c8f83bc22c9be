//! Touch gesture recognition: tap, double-tap and long-press.
//!
//! A tap fires on every short touch; a second short touch starting within the
//! double-tap window of the previous tap additionally fires a double-tap on
//! its release. A long-press fires from its timer while the finger is still
//! down, and the release that follows produces nothing.

use crate::config::GestureParams;
use crate::timer::{Millis, TimerSet};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Tap,
    DoubleTap,
    LongPress,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub at: Vec2,
    pub timestamp: Millis,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Touching,
}

/// Ephemeral state for the gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchSession {
    pub last_tap_at: Option<Millis>,
    pub tap_count: u32,
    pub touch_start_at: Option<Millis>,
    pub touch_point: Vec2,
    pub is_long_press: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct LongPressTimer;

#[derive(Debug)]
pub struct GestureRecognizer {
    params: GestureParams,
    session: TouchSession,
    phase: GesturePhase,
    timers: TimerSet<LongPressTimer>,
}

impl GestureRecognizer {
    pub fn new(params: GestureParams) -> Self {
        Self {
            params,
            session: TouchSession::default(),
            phase: GesturePhase::Idle,
            timers: TimerSet::new(),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn session(&self) -> &TouchSession {
        &self.session
    }

    pub fn long_press_pending(&self) -> bool {
        self.timers.is_pending(LongPressTimer)
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    pub fn touch_start(&mut self, now: Millis, at: Vec2) {
        if self.timers.cancel(LongPressTimer) {
            log::debug!("[gesture] superseded pending long-press");
        }
        self.timers
            .schedule(LongPressTimer, now + self.params.long_press_ms);

        let s = &mut self.session;
        let within_window = s
            .last_tap_at
            .is_some_and(|t| now - t < self.params.double_tap_window_ms);
        s.tap_count = if within_window { s.tap_count + 1 } else { 1 };
        s.touch_start_at = Some(now);
        s.touch_point = at;
        s.is_long_press = false;
        self.phase = GesturePhase::Touching;
    }

    /// Fire the long-press timer if it is due.
    pub fn poll(&mut self, now: Millis) -> Option<GestureEvent> {
        let (_, fired_at) = self.timers.pop_due(now)?;
        if self.phase != GesturePhase::Touching {
            return None;
        }
        self.session.is_long_press = true;
        log::debug!("[gesture] long-press at {:.0}ms", fired_at);
        Some(GestureEvent {
            kind: GestureKind::LongPress,
            at: self.session.touch_point,
            timestamp: fired_at,
        })
    }

    /// Resolve the touch. The long-press timer is always cancelled here; if it
    /// was already overdue it is fired first so a held touch still reports a
    /// single long-press even when the host polled late.
    pub fn touch_end(&mut self, now: Millis, at: Vec2) -> Option<GestureEvent> {
        let overdue = self.poll(now);
        self.timers.cancel(LongPressTimer);
        if self.phase != GesturePhase::Touching {
            return overdue;
        }
        self.phase = GesturePhase::Idle;

        if self.session.is_long_press {
            self.session = TouchSession::default();
            return overdue;
        }

        let started = self.session.touch_start_at.unwrap_or(now);
        if now - started >= self.params.long_press_ms {
            self.session = TouchSession::default();
            return None;
        }

        let kind = if self.session.tap_count == 2 {
            self.session.tap_count = 0;
            self.session.last_tap_at = None;
            GestureKind::DoubleTap
        } else {
            self.session.last_tap_at = Some(now);
            GestureKind::Tap
        };
        log::debug!("[gesture] {:?}", kind);
        Some(GestureEvent {
            kind,
            at,
            timestamp: now,
        })
    }

    /// The platform aborted the touch: drop the gesture without emitting anything.
    pub fn touch_cancel(&mut self) {
        self.timers.cancel(LongPressTimer);
        self.session = TouchSession::default();
        self.phase = GesturePhase::Idle;
    }

    pub fn cancel_all(&mut self) {
        self.timers.cancel_all();
        self.touch_cancel();
    }
}
